//! A `PromiseOut` is a write-once handoff between one producer and any number
//! of consumers. The same handle is both the write end and the read end, so it
//! can be cloned into every thread or task that needs it.
//!
//! The first call to [`PromiseOut::resolve`] or [`PromiseOut::reject`] wins.
//! Later calls are dropped silently. Readers block (or `.await`) until that
//! first call lands and then all observe the same [`Settled`] outcome.
//!
//! # Examples
//!
//! ```
//! use promise_out::PromiseOut;
//! use std::thread;
//!
//! let op = PromiseOut::<String>::new();
//! let producer = op.clone();
//! let task = thread::spawn(move || producer.resolve(String::from("🍓")));
//!
//! let (value, err) = op.get();
//! assert_eq!(value.as_deref(), Some("🍓"));
//! assert!(err.is_none());
//! task.join().expect("The task thread has panicked");
//! ```
//!
//! [`all()`] fans a fixed set of promises back in, keeping input order:
//!
//! ```
//! use promise_out::{all, PromiseOut};
//!
//! let promises: Vec<PromiseOut<i32>> = (0..4).map(|_| PromiseOut::new()).collect();
//! for (i, op) in promises.iter().enumerate().rev() {
//!     op.resolve(i as i32 + 1);
//! }
//! let (values, errors) = all(&promises);
//! assert_eq!(values, vec![Some(1), Some(2), Some(3), Some(4)]);
//! assert!(errors.iter().all(Option::is_none));
//! ```
use std::sync::Arc;

use thiserror::Error;

pub mod all;
pub mod promise_out;
pub mod settled;

pub use all::{all, all_async};
pub use promise_out::{PromiseOut, Wait};
pub use settled::Settled;

/// Default failure descriptor carried by a rejected [`PromiseOut`].
///
/// The promise never produces one of these itself; it only stores what the
/// producer handed to [`PromiseOut::reject`].
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Rejection reason from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Error::Rejected(message.into())
    }

    /// Wraps any error so it can be shared by every reader.
    pub fn from_source<S>(source: S) -> Self
    where
        S: std::error::Error + Send + Sync + 'static,
    {
        Error::Source(Arc::new(source))
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Rejected(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Rejected(message.to_owned())
    }
}
