//! # Configuration Loader
//!
//! One-shot fetch of the remote JSON configuration. A session issues
//! exactly one fetch at startup; there is no retry, no timeout, and no
//! cancellation — the request runs to completion or failure and the
//! session transitions accordingly.
//!
//! The [`ConfigSource`] trait is the seam: the shell talks to a source,
//! the production source is [`HttpConfigSource`], and tests substitute
//! in-memory sources.

mod http;
mod source;

pub use http::HttpConfigSource;
pub use source::{ConfigSource, FetchError};
