use crate::{Context, Error, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// The credential is validated once at construction and never changes.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    credential: K,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    ///
    /// Returns a credential error if `credential` is not valid.
    pub fn new(
        ctx: Context,
        credential: K,
        builder: impl SignRequest<Credential = K>,
    ) -> Result<Self> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "credential is invalid: api key and api secret are required",
            ));
        }

        Ok(Self {
            ctx,
            credential,
            builder: Arc::new(builder),
        })
    }

    /// Context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Credential used by this signer.
    pub fn credential(&self) -> &K {
        &self.credential
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        self.builder
            .sign_request(&self.ctx, req, Some(&self.credential))
            .await
    }
}
