//! URL validation utilities for the `to` and `image` commands.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i-u:https?)://.*\.(?i-u:jpg|jpeg|png|gif|bmp|webp)$")
        .expect("valid image URL pattern")
});

/// Reasons a link target is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// URL is empty
    #[error("URL is empty")]
    Empty,
    /// URL uses a scheme other than http or https
    #[error("unsupported protocol '{0}' (use http:// or https://)")]
    InvalidProtocol(String),
    /// URL has no host
    #[error("URL has no host")]
    NoHost,
    /// Host does not look like a domain name
    #[error("'{0}' does not look like a host name")]
    InvalidHost(String),
}

/// Normalize a link typed after `to`.
///
/// Adds `https://` when no scheme is given, then checks that the scheme is
/// http(s) and the host looks like a domain (`example.com`, `localhost`).
pub fn normalize_link(raw: &str) -> Result<String, LinkError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LinkError::Empty);
    }

    let url = match raw.split_once("://") {
        Some((scheme, _)) => {
            let scheme = scheme.to_lowercase();
            if scheme != "http" && scheme != "https" {
                return Err(LinkError::InvalidProtocol(scheme));
            }
            raw.to_string()
        }
        None if raw.contains(':') && !has_port(raw) => {
            let scheme = raw.split(':').next().unwrap_or_default().to_lowercase();
            return Err(LinkError::InvalidProtocol(scheme));
        }
        None => format!("https://{}", raw),
    };

    let host = extract_host(&url).ok_or(LinkError::NoHost)?;
    if !is_plausible_host(&host) {
        return Err(LinkError::InvalidHost(host));
    }

    Ok(url)
}

/// Whether `url` is an http(s) link to a common raster image format.
pub fn is_image_url(url: &str) -> bool {
    IMAGE_URL.is_match(url)
}

/// `host:port` without a scheme, e.g. `localhost:8080/path`.
fn has_port(raw: &str) -> bool {
    let authority = raw.split('/').next().unwrap_or_default();
    authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let (_, without_protocol) = url.split_once("://")?;

    // Get the host part (before first /, ? or # or end of string)
    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Drop credentials and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

fn is_plausible_host(host: &str) -> bool {
    if host == "localhost" {
        return true;
    }
    let labels: Vec<&str> = host.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
