//! Indoor Core
//!
//! Platform-neutral layer of the indoor cycling admin:
//! - domain: records mirrored from the REST API
//! - repository: data access trait with REST and in-memory implementations
//! - collection / crud: optimistic list state used by every page
//! - auth, forms, pos, metrics: page logic that does not touch the DOM

pub mod auth;
pub mod collection;
pub mod config;
pub mod crud;
pub mod domain;
pub mod error;
pub mod export;
pub mod forms;
pub mod http;
pub mod metrics;
pub mod money;
pub mod nav;
pub mod pos;
pub mod repository;
pub mod search;
pub mod seed;

pub use collection::{Collection, Pending};
pub use config::{ApiConfig, DataSourceKind};
pub use error::{ApiError, ApiResult, AuthError};
