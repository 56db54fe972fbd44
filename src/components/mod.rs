//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod layout;
mod notice_banner;
mod modal;
mod form_field;
mod stat_card;
mod search_box;
mod status_badge;
mod delete_confirm_button;

pub use layout::Layout;
pub use notice_banner::NoticeBanner;
pub use modal::Modal;
pub use form_field::{SelectField, TextAreaField, TextField};
pub use stat_card::StatCard;
pub use search_box::SearchBox;
pub use status_badge::StatusBadge;
pub use delete_confirm_button::DeleteConfirmButton;
