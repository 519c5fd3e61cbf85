//! Core components shared by the provsign crates.
//!
//! This crate carries no provider logic. It defines:
//!
//! - [`Error`] and [`ErrorKind`]: the error taxonomy used across the workspace
//! - [`Context`]: the seam for side effects, see [`HttpSend`], [`Env`] and [`FileWrite`]
//! - [`ProvideCredential`] and [`SigningCredential`]: credential loading
//!
//! ## Example
//!
//! ```
//! use provsign_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from_iter([("PROVSIGN_S3_REGION".to_string(), "nyc3".to_string())]),
//! });
//! assert_eq!(ctx.env_var("PROVSIGN_S3_REGION").as_deref(), Some("nyc3"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileWrite;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopFileWrite;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::{ProvideCredential, SigningCredential};
