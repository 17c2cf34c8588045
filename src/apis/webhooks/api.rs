use crate::{
    apis::webhooks::{parse_webhook, WebhookMessage},
    context::Context,
    engine::{ClientRequest, Engine},
    error::Cause,
    Error,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use std::{fmt, sync::Arc};
use tokio::sync::RwLock;

/// Webhook verification failures are reported with this status.
const VERIFICATION_FAILURE_STATUS: u16 = 500;

const PUBLIC_KEY_PEM_LABEL: &str = "-----BEGIN PUBLIC KEY-----";

/// Lago Webhooks client.
///
/// The public key used to verify signatures is fetched on first use and cached.
/// Clones share the same cache.
#[derive(Clone)]
pub struct WebhooksApi {
    engine: Arc<Engine>,
    public_key: Arc<RwLock<Option<DecodingKey>>>,
}

impl WebhooksApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            public_key: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the public key of the organization, fetching it if it is not cached yet.
    ///
    /// Concurrent callers missing the cache wait for a single fetch.
    pub async fn public_key(&self, ctx: &Context) -> Result<DecodingKey, Error> {
        if let Some(key) = self.public_key.read().await.as_ref() {
            return Ok(key.clone());
        }

        let mut cached = self.public_key.write().await;
        // Another caller may have filled the cache while we waited for the write lock
        if let Some(key) = cached.as_ref() {
            return Ok(key.clone());
        }

        let key = self.fetch_public_key(ctx).await?;
        *cached = Some(key.clone());

        Ok(key)
    }

    /// Fetches the public key of the organization and replaces the cached one.
    pub async fn refresh_public_key(&self, ctx: &Context) -> Result<DecodingKey, Error> {
        let mut cached = self.public_key.write().await;

        let key = self.fetch_public_key(ctx).await?;
        *cached = Some(key.clone());

        Ok(key)
    }

    /// Verifies the signature of a webhook.
    ///
    /// Returns `true` if `token` was signed with the organization's key.
    /// A token which cannot be parsed or verified is an error.
    #[tracing::instrument(name = "Validate Webhook Signature", skip(self, ctx, token))]
    pub async fn validate_signature(&self, ctx: &Context, token: &str) -> Result<bool, Error> {
        self.verify(ctx, token).await?;
        Ok(true)
    }

    /// Verifies the signature of a webhook and checks that it was issued for `body`.
    ///
    /// `body` must be the raw body, exactly as received.
    #[tracing::instrument(name = "Validate Webhook Body", skip(self, ctx, token, body))]
    pub async fn validate_body(
        &self,
        ctx: &Context,
        token: &str,
        body: &str,
    ) -> Result<bool, Error> {
        let claims = self.verify(ctx, token).await?;
        Ok(matches!(claims.get("data"), Some(Value::String(data)) if data == body))
    }

    /// Parses the body of a webhook, see [`parse_webhook`](crate::apis::webhooks::parse_webhook).
    pub fn parse(&self, body: &str) -> Result<WebhookMessage, Error> {
        parse_webhook(body)
    }

    #[tracing::instrument(name = "Fetch Webhook Public Key", skip(self, ctx))]
    async fn fetch_public_key(&self, ctx: &Context) -> Result<DecodingKey, Error> {
        let encoded = self
            .engine
            .get_text(ctx, ClientRequest::new("webhooks/public_key"))
            .await?;

        decode_public_key(&encoded)
    }

    /// Verifies `token` and returns its claims, whatever their shape.
    async fn verify(&self, ctx: &Context, token: &str) -> Result<Map<String, Value>, Error> {
        let header = jsonwebtoken::decode_header(token).map_err(cannot_parse_token)?;

        match header.alg {
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => {}
            alg => {
                return Err(cannot_parse_token(Cause::UnexpectedSigningMethod(format!(
                    "{:?}",
                    alg
                ))))
            }
        }

        let key = self.public_key(ctx).await?;

        let mut validation = Validation::new(header.alg);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let token = jsonwebtoken::decode::<Map<String, Value>>(token, &key, &validation)
            .map_err(cannot_parse_token)?;

        Ok(token.claims)
    }
}

impl fmt::Debug for WebhooksApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhooksApi")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

fn cannot_parse_token(cause: impl Into<Cause>) -> Error {
    Error::with_status(VERIFICATION_FAILURE_STATUS, "cannot parse token", cause)
}

fn invalid_public_key(cause: impl Into<Cause>) -> Error {
    Error::with_status(VERIFICATION_FAILURE_STATUS, "cannot parse public key", cause)
}

/// Decodes a base64 encoded PEM `PUBLIC KEY` block holding an RSA key.
fn decode_public_key(encoded: &str) -> Result<DecodingKey, Error> {
    let pem = STANDARD
        .decode(encoded.trim())
        .map_err(invalid_public_key)?;

    let is_public_key_block = std::str::from_utf8(&pem)
        .map(|pem| pem.trim_start().starts_with(PUBLIC_KEY_PEM_LABEL))
        .unwrap_or(false);
    if !is_public_key_block {
        return Err(invalid_public_key(Cause::InvalidPublicKey(
            "public key is not a PEM encoded PUBLIC KEY block".to_string(),
        )));
    }

    DecodingKey::from_rsa_pem(&pem).map_err(invalid_public_key)
}
