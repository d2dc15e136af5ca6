//! Core components for signing Showcase API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! showcase crates.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending, environment access and time
//! - **Traits**: Abstract interfaces for request signing (`SignRequest`) and credential validation (`SigningCredential`)
//! - **Signer**: Couples a validated credential with a request signer
//!
//! ## Example
//!
//! ```no_run
//! use showcase_core::{Context, Result, SignRequest, Signer, SigningCredential, SigningRequest};
//! use async_trait::async_trait;
//! use http::request::Parts;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let cred = cred.expect("credential must be set");
//!         let mut signing = SigningRequest::build(req)?;
//!         signing.query_push("key", &cred.key);
//!         signing.apply(req)
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let cred = MyCredential {
//!     key: "my-api-key".to_string(),
//!     secret: "my-api-secret".to_string(),
//! };
//! let signer = Signer::new(Context::new(), cred, MySigner)?;
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("http://showcase.doyoubuzz.com/api/v1/users")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Clock`]: For reading the signing time
//! - [`SignRequest`]: For service-specific request signing
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: Signature hashing
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{
    Clock, Context, Env, FixedClock, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv,
    SystemClock,
};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
