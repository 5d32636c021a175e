//! Middleware for the outbound HTTP client.

use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Logs every outbound request with its status and latency.
///
/// Query strings are left out of the log line so an API key passed as a
/// parameter never reaches the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogging;

#[async_trait::async_trait]
impl Middleware for RequestLogging {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::debug!(
                %method,
                %path,
                status = response.status().as_u16(),
                elapsed_ms,
                "Outbound request completed"
            ),
            Err(e) => tracing::warn!(
                %method,
                %path,
                elapsed_ms,
                error = %e,
                "Outbound request failed"
            ),
        }

        result
    }
}
