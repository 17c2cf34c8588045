use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use secrecy::{ExposeSecret, Secret};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the API key as a bearer token into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    pub(crate) api_key: Secret<String>,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Inject the API key as a header
        let mut header_value =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
                .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, header_value);

        next.run(req, extensions).await
    }
}
