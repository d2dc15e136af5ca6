use async_trait::async_trait;
use http::request::Parts;
use showcase_core::hash::hex_md5_signature;
use showcase_core::time::format_timestamp;
use showcase_core::{
    Context, Error, FixedClock, Result, SignRequest, Signer, SigningCredential, SigningRequest,
};

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Sign every query value in request order, with the key and time appended
#[derive(Debug)]
struct InsertionOrderSigner;

#[async_trait]
impl SignRequest for InsertionOrderSigner {
    type Credential = MyCredential;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let mut signing = SigningRequest::build(req)?;
        signing.query_push("key", &cred.api_key);
        signing.query_push("ts", format_timestamp(ctx.now()));

        let signature = hex_md5_signature(
            &cred.api_secret,
            signing.query.iter().map(|(_, v)| v.as_str()),
        );
        signing.query_push("sig", signature);

        signing.apply(req)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_clock(FixedClock::from_timestamp(1370534334)?);
    let cred = MyCredential {
        api_key: "demo-api-key".to_string(),
        api_secret: "demo-api-secret".to_string(),
    };
    let signer = Signer::new(ctx, cred, InsertionOrderSigner)?;

    let (mut parts, _) = http::Request::get("http://showcase.doyoubuzz.com/api/v1/users?page=2")
        .body(())?
        .into_parts();
    signer.sign(&mut parts).await?;

    println!("signed uri: {}", parts.uri);
    Ok(())
}
