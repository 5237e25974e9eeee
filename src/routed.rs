//! HTTP driver for a remote `osrm-routed` daemon.
//!
//! One logical call is one GET round trip: no pooled sessions, no retry,
//! no interpretation of the response body.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use crate::geo::GeoPoint;

#[derive(Debug, Clone)]
pub struct RoutedConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for RoutedConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5000,
            timeout_secs: 10,
        }
    }
}

/// Failures surfaced by [`RoutedClient`].
#[derive(Debug, Error)]
pub enum RoutedError {
    /// The endpoint did not assemble into a valid URL. Raised before any
    /// network activity.
    #[error("invalid endpoint: {0}")]
    Config(String),
    /// Connection, transmission, or read failure during the exchange.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response bytes were not valid UTF-8. Transport-class: the
    /// exchange happened but the body could not be decoded.
    #[error("response was not valid utf-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Response body as received, with the HTTP status alongside.
///
/// Non-success statuses are not rejected by the client; callers that care
/// inspect `status` themselves.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    /// Full body decoded as UTF-8, line-break characters removed.
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct RoutedClient {
    config: RoutedConfig,
    client: reqwest::blocking::Client,
}

impl RoutedClient {
    pub fn new(config: RoutedConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Compute a route through `points` in the given order (`viaroute`).
    pub fn route(&self, points: &[GeoPoint]) -> Result<RawResponse, RoutedError> {
        self.invoke("viaroute", points)
    }

    /// Compute the pairwise distance/time matrix over `points`
    /// (`distmatrix`). Row and column order follow input order.
    pub fn distance_matrix(&self, points: &[GeoPoint]) -> Result<RawResponse, RoutedError> {
        self.invoke("distmatrix", points)
    }

    fn invoke(&self, command: &str, points: &[GeoPoint]) -> Result<RawResponse, RoutedError> {
        let url = request_url(&self.config, command, points)?;
        debug!(%url, "dispatching routed request");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let bytes = response.bytes()?;
        let body = String::from_utf8(bytes.to_vec())?;
        debug!(%status, bytes = body.len(), "routed response received");

        Ok(RawResponse {
            status,
            body: body.lines().collect(),
        })
    }
}

/// Render the request path for a command, e.g.
/// `/viaroute?loc=35.0,139.0&loc=35.1,139.1`.
///
/// An empty point slice yields a bare query (`/viaroute?`); the daemon
/// decides what that means.
pub fn request_path(command: &str, points: &[GeoPoint]) -> String {
    let query = points
        .iter()
        .map(GeoPoint::query_fragment)
        .collect::<Vec<_>>()
        .join("&");

    format!("/{}?{}", command, query)
}

fn request_url(
    config: &RoutedConfig,
    command: &str,
    points: &[GeoPoint],
) -> Result<Url, RoutedError> {
    let raw = format!(
        "http://{}:{}{}",
        config.host,
        config.port,
        request_path(command, points)
    );

    Url::parse(&raw).map_err(|err| RoutedError::Config(format!("{}: {}", raw, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<GeoPoint> {
        vec![GeoPoint::new(35.0, 139.0), GeoPoint::new(35.1, 139.1)]
    }

    #[test]
    fn test_request_path_preserves_input_order() {
        let path = request_path("viaroute", &sample_points());
        assert_eq!(path, "/viaroute?loc=35.0,139.0&loc=35.1,139.1");
    }

    #[test]
    fn test_request_path_empty_points() {
        assert_eq!(request_path("viaroute", &[]), "/viaroute?");
        assert_eq!(request_path("distmatrix", &[]), "/distmatrix?");
    }

    #[test]
    fn test_request_path_single_point_has_no_separator() {
        let path = request_path("distmatrix", &[GeoPoint::new(1.5, 2.5)]);
        assert_eq!(path, "/distmatrix?loc=1.5,2.5");
    }

    #[test]
    fn test_request_url_default_endpoint() {
        let url = request_url(&RoutedConfig::default(), "viaroute", &sample_points()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/viaroute?loc=35.0,139.0&loc=35.1,139.1"
        );
    }

    #[test]
    fn test_request_url_malformed_host_is_config_error() {
        let config = RoutedConfig {
            host: "bad host".to_string(),
            ..RoutedConfig::default()
        };
        let err = request_url(&config, "viaroute", &sample_points()).unwrap_err();
        assert!(
            matches!(err, RoutedError::Config(_)),
            "Malformed host should fail before any I/O, got {:?}",
            err
        );
    }

    #[test]
    fn test_operations_differ_only_in_command_segment() {
        let points = sample_points();
        let via = request_path("viaroute", &points);
        let matrix = request_path("distmatrix", &points);
        assert_eq!(
            via.trim_start_matches("/viaroute"),
            matrix.trim_start_matches("/distmatrix")
        );
    }
}
