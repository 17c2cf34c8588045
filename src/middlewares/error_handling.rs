use crate::{common::is_success, error::Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from the Lago API
/// into [`Error`](crate::error::Error)s carrying the HTTP status and the decoded error body.
///
/// Only `200`, `201`, `202` and `204` are treated as successes.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an error if the response is not a success.
        // Try parsing the contents of the error as an error envelope,
        // but if that doesn't work, use the entire contents of the response as the error text.
        let status = response.status().as_u16();
        if !is_success(status) {
            let bytes = response.bytes().await?;

            tracing::debug!("Failed HTTP request. Status code: {}", status);

            return Err(Error::from_response_body(status, &bytes).into());
        }

        Ok(response)
    }
}
