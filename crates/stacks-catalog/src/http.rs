//! Response handling shared by the catalog endpoints.
//!
//! Every endpoint goes through [`read_json`]: status checks first (429 with
//! `Retry-After`, any other non-success as [`CatalogError::Api`]), then the
//! body is decoded. Decoding goes through `serde_json` on the raw text so a
//! malformed payload is reported as [`CatalogError::Parse`] rather than an
//! opaque transport error.

use serde::de::DeserializeOwned;

use crate::error::CatalogError;

/// Seconds to back off when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest error body kept in [`CatalogError::Api`] messages.
const MAX_ERROR_BODY: usize = 200;

/// Check status and decode a JSON body into `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, CatalogError> {
    let resp = check_status(resp).await?;
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(CatalogError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(CatalogError::Api {
            status: status.as_u16(),
            message: truncate_body(body.trim()),
        });
    }
    Ok(resp)
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        num_found: u32,
    }

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[tokio::test]
    async fn decodes_success_body() {
        let probe: Probe = read_json(response(200, &[], r#"{"num_found": 3}"#))
            .await
            .unwrap();
        assert_eq!(probe.num_found, 3);
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let err = read_json::<Probe>(response(200, &[], "<html>oops</html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let err = read_json::<Probe>(response(429, &[("Retry-After", " 15 ")], ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RateLimited {
                retry_after_secs: 15
            }
        ));
    }

    #[tokio::test]
    async fn rate_limit_without_header_uses_default() {
        let err = read_json::<Probe>(response(429, &[("Retry-After", "soon")], ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RateLimited {
                retry_after_secs: DEFAULT_RETRY_AFTER_SECS
            }
        ));
    }

    #[tokio::test]
    async fn server_error_keeps_status_and_trimmed_body() {
        let err = read_json::<Probe>(response(503, &[], "  upstream down \n"))
            .await
            .unwrap_err();
        match err {
            CatalogError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY + 50);
        let cut = truncate_body(&body);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY + 1);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_body("short"), "short");
    }
}
