//! Client for the DoYouBuzz Showcase API.
//!
//! - [`Showcase`] sends signed `GET`, `POST`, `PUT` and `DELETE` calls and
//!   returns the parsed JSON as a [`Response`].
//! - [`sso_redirect_url`] builds signed single sign-on URLs for the hosted
//!   Showcase site.
//!
//! Non-2xx answers surface as [`showcase_core::Error`] with
//! [`ErrorKind::Api`](showcase_core::ErrorKind::Api) and the HTTP status.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod params;
pub use params::Params;

mod sign_request;
pub use sign_request::RequestSigner;

mod response;
pub use response::Response;

mod client;
pub use client::{parse_response, Builder, Showcase};

mod sso;
pub use sso::sso_redirect_url;

#[allow(missing_docs)]
pub mod constants;
