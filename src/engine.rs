//! The request engine shared by every API client.
//!
//! Each call issues exactly one HTTP request, races it against the caller's
//! [`Context`](crate::context::Context), and decodes the response body into the type requested by the caller.
//! There are no retries.
//!
//! Response bodies are decoded into any [`DeserializeOwned`](serde::de::DeserializeOwned) type.
//! An empty body is decoded as JSON `null`, so asking for an `Option<_>` yields `None`
//! while asking for an envelope such as [`Single`](crate::envelope::Single) yields a decode error.

use crate::{
    context::Context,
    error::{Cause, Error},
    query::QueryParams,
};
use reqwest::{header::CONTENT_TYPE, Method};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};
use url::Url;

/// Description of a single API call: a path relative to the API root, query parameters and an optional body.
#[derive(Debug, Clone)]
pub struct ClientRequest<'a, B: ?Sized = ()> {
    /// Path relative to `<base_url>/api/v1/`, without a leading slash.
    pub path: String,
    /// Query parameters. Only sent with `GET` and `DELETE` requests.
    pub query: QueryParams,
    /// Body, encoded as JSON.
    pub body: Option<&'a B>,
}

impl<'a> ClientRequest<'a, ()> {
    /// Builds a request for `path` without query parameters nor body.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }
}

impl<'a, B: ?Sized> ClientRequest<'a, B> {
    /// Sets the query parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets the body.
    pub fn with_body<C: ?Sized>(self, body: &'a C) -> ClientRequest<'a, C> {
        ClientRequest {
            path: self.path,
            query: self.query,
            body: Some(body),
        }
    }
}

/// Executes requests against the Lago API.
pub struct Engine {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) base_url: String,
    pub(crate) debug: bool,
    pub(crate) timeout: Option<Duration>,
}

impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Returns the base URL requests are sent to, including the API path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a `GET` request and decodes the response.
    pub async fn get<R: DeserializeOwned>(
        &self,
        ctx: &Context,
        req: ClientRequest<'_>,
    ) -> Result<R, Error> {
        self.send(ctx, Method::GET, req).await
    }

    /// Sends a `POST` request with a JSON body and decodes the response.
    pub async fn post<B, R>(&self, ctx: &Context, req: ClientRequest<'_, B>) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(ctx, Method::POST, req).await
    }

    /// Sends a `POST` request without a body and decodes the response.
    pub async fn post_without_body<R: DeserializeOwned>(
        &self,
        ctx: &Context,
        req: ClientRequest<'_>,
    ) -> Result<R, Error> {
        self.send(
            ctx,
            Method::POST,
            ClientRequest {
                body: None,
                ..req
            },
        )
        .await
    }

    /// Sends a `POST` request with a JSON body and ignores the response body.
    pub async fn post_without_result<B>(
        &self,
        ctx: &Context,
        req: ClientRequest<'_, B>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.execute(ctx, Method::POST, req).await?;
        Ok(())
    }

    /// Sends a `PUT` request with a JSON body and decodes the response.
    pub async fn put<B, R>(&self, ctx: &Context, req: ClientRequest<'_, B>) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(ctx, Method::PUT, req).await
    }

    /// Sends a `PATCH` request with a JSON body and decodes the response.
    pub async fn patch<B, R>(&self, ctx: &Context, req: ClientRequest<'_, B>) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(ctx, Method::PATCH, req).await
    }

    /// Sends a `DELETE` request and decodes the response.
    pub async fn delete<B, R>(&self, ctx: &Context, req: ClientRequest<'_, B>) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(ctx, Method::DELETE, req).await
    }

    /// Sends a `GET` request and returns the response body as text, without decoding it.
    pub async fn get_text(&self, ctx: &Context, req: ClientRequest<'_>) -> Result<String, Error> {
        let (_, bytes) = self.execute(ctx, Method::GET, req).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn send<B, R>(
        &self,
        ctx: &Context,
        method: Method,
        req: ClientRequest<'_, B>,
    ) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = req.path.clone();
        let (status, bytes) = self.execute(ctx, method.clone(), req).await?;

        let decoded = if bytes.is_empty() {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(&bytes)
        };

        decoded.map_err(|e| {
            Error::with_status(
                status,
                format!("cannot decode response of {} {}", method, path),
                Cause::Decode(e),
            )
        })
    }

    #[tracing::instrument(name = "Lago API request", level = "debug", skip(self, ctx, req), fields(path = %req.path))]
    async fn execute<B>(
        &self,
        ctx: &Context,
        method: Method,
        req: ClientRequest<'_, B>,
    ) -> Result<(u16, Vec<u8>), Error>
    where
        B: Serialize + ?Sized,
    {
        // Apply the default timeout unless the caller already set a deadline
        let ctx = match (ctx.deadline(), self.timeout) {
            (None, Some(timeout)) => ctx.with_timeout(timeout),
            _ => ctx.clone(),
        };
        if let Some(cause) = ctx.err() {
            return Err(Error::transport(cause));
        }

        let url = self.url(&method, &req)?;
        let body = req
            .body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| Error::transport(Cause::Encode(e)))?;

        if self.debug {
            tracing::debug!(
                method = %method,
                url = %url,
                body = %body.as_deref().map(String::from_utf8_lossy).unwrap_or_default(),
                "Sending request"
            );
        }

        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| Error::with_status(status, String::new(), e))?;
            Ok::<_, Error>((status, bytes.to_vec()))
        };

        let res = ctx.run(exchange).await.map_err(Error::transport)?;

        if self.debug {
            match &res {
                Ok((status, bytes)) => tracing::debug!(
                    status = status,
                    body = %String::from_utf8_lossy(bytes),
                    "Received response"
                ),
                Err(e) => tracing::debug!(error = %e, "Request failed"),
            }
        }

        res
    }

    fn url<B: ?Sized>(&self, method: &Method, req: &ClientRequest<'_, B>) -> Result<Url, Error> {
        let mut url =
            Url::parse(&format!("{}{}", self.base_url, req.path)).map_err(Error::transport)?;

        if matches!(*method, Method::GET | Method::DELETE) && !req.query.is_empty() {
            url.query_pairs_mut().extend_pairs(req.query.iter());
        }

        Ok(url)
    }
}
