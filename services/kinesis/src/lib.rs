//! AWS SigV4 signer for Amazon Kinesis requests.
//!
//! Signs the JSON protocol requests sent to Kinesis, or to any endpoint speaking the same
//! protocol, by adding an `Authorization` header to them.
//!
//! The signing time comes from the request's own `Date` header and is never read from the
//! clock, so signing is a pure function of the request and the credential.
//!
//! ## Example
//!
//! ```
//! use kinesign_kinesis::{Credential, RequestSigner, KINESIS_CONTENT_TYPE};
//!
//! # fn main() -> kinesign_core::Result<()> {
//! let mut req = http::Request::post("https://kinesis.us-east-1.amazonaws.com")
//!     .header(http::header::CONTENT_TYPE, KINESIS_CONTENT_TYPE)
//!     .header("x-amz-target", "Kinesis_20131202.ListStreams")
//!     .header(http::header::DATE, "Thu, 28 Nov 2013 15:04:05 GMT")
//!     .body("{}")
//!     .expect("request must be valid");
//!
//! let cred = Credential::new("access_key_id", "secret_access_key");
//! RequestSigner::new().sign(&mut req, &cred)?;
//!
//! assert!(req.headers().contains_key(http::header::AUTHORIZATION));
//! # Ok(())
//! # }
//! ```
//!
//! Use [`kinesign_core::Signer`] together with a credential provider such as
//! [`DefaultCredentialProvider`] to load credentials from the environment.

#![warn(missing_docs)]

mod constants;
pub use constants::KINESIS_CONTENT_TYPE;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod scope;
pub use scope::{signing_time, Endpoint, Scope};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
