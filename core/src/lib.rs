//! Core components for signing Kinesis API requests.
//!
//! This crate provides the building blocks shared by the service signers: the error type,
//! hashing and time helpers, environment access for credential loading, and the traits
//! that tie credential loading and request signing together.
//!
//! ## Overview
//!
//! - **Context**: holds the environment used by credential providers
//! - **Traits**: `ProvideCredential` loads credentials, `SignRequest` signs a request
//! - **Signer**: loads a credential, buffers the body and signs the request
//! - **SignableBody**: a request body that can be hashed and still be sent afterwards
//!
//! ## Example
//!
//! ```no_run
//! use kinesign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//! use async_trait::async_trait;
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential { key: "my-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         req: &mut Parts,
//!         _payload: &[u8],
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         if let Some(cred) = cred {
//!             req.headers.insert("x-my-key", cred.key.parse()?);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MySigner);
//!
//! let mut req = http::Request::post("https://example.com")
//!     .body("{}")
//!     .expect("request must be valid");
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod body;
pub use body::{ReaderBody, SignableBody};
mod request;
pub use request::{clone_parts, SigningRequest};
mod signer;
pub use signer::Signer;
