//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod rest;
mod memory;
mod source;

#[cfg(test)]
mod tests;

pub use traits::{list_for_bike, Repository, Resource};
pub use rest::RestRepository;
pub use memory::MemoryRepository;
pub use source::DataSource;
