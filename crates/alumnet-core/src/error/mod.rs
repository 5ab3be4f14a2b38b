//! Error types for Alumnet
//!
//! A single error enum is shared by the config layer, the HTTP backend and the
//! search controller. History persistence has its own [`StorageError`] in
//! [`crate::history`].
//!
//! [`StorageError`]: crate::history::StorageError

mod classifiers;
mod constructors;
mod conversions;
mod types;

pub use types::{AlumnetError, AlumnetResult};
