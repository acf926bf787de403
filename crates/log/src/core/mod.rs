//! Core types shared by every stage of the logger.
//!
//! ### [`error`] - Error handling
//! [`LogError`] covers configuration, level parsing, writer IO and subscriber
//! installation failures. All fallible operations return [`LogResult<T>`].

pub mod error;

pub use error::{LogError, LogResult};
