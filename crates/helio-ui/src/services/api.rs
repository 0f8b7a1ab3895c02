//! HTTP transport for live datasets.

use async_trait::async_trait;
use gloo_net::http::Request;
use helio_core::{HttpResponse, Transport, TransportError};

/// [`Transport`] over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let network = |source: gloo_net::Error| TransportError::Network {
            url: url.to_string(),
            source: source.into(),
        };
        let response = Request::get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(HttpResponse { status, body })
    }
}
