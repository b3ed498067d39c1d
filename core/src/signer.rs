use crate::request::clone_parts;
use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SignableBody, SigningCredential,
};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads the credential through its provider, keeps the last valid one around, and
/// hands the buffered request to its [`SignRequest`] implementation. Only the credential
/// is cached; signing keys are derived again on every call.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    ///
    /// The body is buffered for hashing and stays readable for sending afterwards.
    pub async fn sign<B: SignableBody>(&self, req: &mut http::Request<B>) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            log::debug!("no valid cached credential, loading from {:?}", self.provider);
            let loaded = self.provider.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        let Some(credential) = credential.filter(|v| v.is_valid()) else {
            return Err(Error::credential_invalid(
                "no valid credential found for signing",
            ));
        };

        let payload = req.body_mut().buffer()?;

        // Sign a copy of the head so a failure can't leave half-written headers behind.
        let mut parts = clone_parts(req)?;
        self.builder
            .sign_request(&mut parts, &payload, Some(&credential))?;

        *req.headers_mut() = parts.headers;
        Ok(())
    }
}
