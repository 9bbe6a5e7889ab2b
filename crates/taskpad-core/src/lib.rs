//! taskpad-core: Persisted task list store and service.
//!
//! The whole task list lives as one serialized JSON record under a single
//! storage key. [`PersistedStore`] gives typed per-key access to that record
//! with per-key default fallback; [`TaskService`] layers task CRUD and
//! queries on top. View layers consume only the service surface.

pub mod backend;
pub mod file_backend;
pub mod record;
pub mod service;
pub mod store;
pub mod task;

pub use backend::*;
pub use file_backend::*;
pub use record::*;
pub use service::*;
pub use store::*;
pub use task::*;
