//! HTTP GET of the source document.
//!
//! Uses the curl crate (libcurl) to fetch the document body in a single
//! blocking GET. No timeouts are configured; the call blocks until the
//! server responds or the transfer fails. The handle is scoped to the
//! call and released on every exit path.

use std::fmt;
use std::string::FromUtf8Error;

/// Error from a document fetch (curl failure, HTTP error, or a body
/// that is not valid UTF-8).
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, protocol, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-200 status.
    Http(u32),
    /// Body bytes did not decode as UTF-8.
    Utf8(FromUtf8Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Utf8(e) => write!(f, "invalid UTF-8 in body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Utf8(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

/// Performs a blocking GET and returns the body as UTF-8 text.
///
/// Follows redirects. The final status must be exactly 200.
pub fn http_get_text(url: &str) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Curl)?;
    easy.follow_location(true).map_err(FetchError::Curl)?;
    easy.max_redirections(10).map_err(FetchError::Curl)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Curl)?;
        transfer.perform().map_err(FetchError::Curl)?;
    }

    let code = easy.response_code().map_err(FetchError::Curl)?;
    if code != 200 {
        return Err(FetchError::Http(code));
    }

    String::from_utf8(body).map_err(FetchError::Utf8)
}

/// Fetches `url`, converting every failure into a printed diagnostic
/// plus `None`. Never panics and never propagates an error; "no
/// content" is the only failure signal the caller sees.
pub fn fetch_text(url: &str) -> Option<String> {
    match http_get_text(url) {
        Ok(text) => {
            tracing::debug!("fetched {} bytes from {}", text.len(), url);
            Some(text)
        }
        Err(FetchError::Http(code)) => {
            tracing::warn!("GET {} returned HTTP {}", url, code);
            println!("Error: Received status code {}", code);
            None
        }
        Err(e) => {
            tracing::warn!("fetch of {} failed: {}", url, e);
            println!("Error fetching {}: {}", url, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::Http(503).to_string(), "HTTP 503");
    }

    #[test]
    fn utf8_error_has_source() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let fetch_err = FetchError::Utf8(err);
        assert!(std::error::Error::source(&fetch_err).is_some());
    }
}
