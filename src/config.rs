// ABOUTME: Connection configuration shared by every note handle
// ABOUTME: Validates the endpoint and probes it once before handing out a config

use crate::transport::{HttpTransport, Method, Request};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use url::Url;

pub struct ClientConfig {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Validates `endpoint` and issues one `GET` to it, expecting `200`.
    ///
    /// Every failure here, including transport errors and a missing
    /// response, is reported as [`Error::Config`]. No retries.
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: &str) -> Result<Self> {
        if endpoint.is_empty() {
            return Err(Error::Config("endpoint cannot be empty".into()));
        }

        let url = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint {:?}: {}", endpoint, e)))?;

        log::debug!("probing endpoint {}", url);
        let response = transport
            .send(&Request::new(Method::Get, url))
            .map_err(|e| Error::Config(format!("endpoint probe failed: {}", e)))?
            .ok_or_else(|| Error::Config("endpoint probe returned no response".into()))?;

        if response.status != 200 {
            return Err(Error::Config(format!(
                "endpoint probe returned status {}",
                response.status
            )));
        }

        Ok(ClientConfig {
            transport,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn route_url(&self, route: &str) -> Result<Url> {
        let raw = format!("{}{}", self.endpoint.trim_end_matches('/'), route);
        Url::parse(&raw).map_err(|e| Error::Config(format!("invalid route url {:?}: {}", raw, e)))
    }

    /// One JSON round trip: serialize `body`, send it to `route`, require
    /// `200`, decode the response envelope.
    pub(crate) fn exchange<B, R>(&self, method: Method, route: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.route_url(route)?;
        let payload = serde_json::to_vec(body)?;

        log::debug!("{} {}", method.as_str(), url);
        let request = Request::new(method, url).with_body(payload);
        let response = self
            .transport
            .send(&request)?
            .ok_or_else(|| Error::NoResponse {
                endpoint: route.into(),
            })?;

        if response.status != 200 {
            log::warn!("{} {} returned status {}", method.as_str(), route, response.status);
            return Err(Error::Remote {
                endpoint: route.into(),
                status: response.status,
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}
