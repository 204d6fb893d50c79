//! Time-based HMAC request signing for the Lalamove API
//!
//! Each request is authenticated by a SHA-256 HMAC over a canonical string
//! of the timestamp, method, path, and serialized body. Signatures embed the
//! call-time timestamp and are never reused or cached.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::QuotationError;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical string the signature is computed over
///
/// Layout: `"{timestamp}\r\n{METHOD}\r\n{path}\r\n\r\n{body}"`, with the
/// timestamp in epoch milliseconds and the body exactly as it goes on the
/// wire.
#[must_use]
pub fn canonical_string(timestamp_ms: i64, method: &str, path: &str, body: &str) -> String {
    format!("{timestamp_ms}\r\n{method}\r\n{path}\r\n\r\n{body}")
}

/// Compute the lowercase-hex HMAC-SHA256 signature for a request
///
/// # Errors
///
/// Returns `QuotationError::Signing` if the MAC cannot be keyed.
pub fn sign(
    secret: &str,
    timestamp_ms: i64,
    method: &str,
    path: &str,
    body: &str,
) -> Result<String, QuotationError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| QuotationError::Signing(e.to_string()))?;
    mac.update(canonical_string(timestamp_ms, method, path, body).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Format the Authorization header value: `hmac {api_key}:{timestamp}:{signature}`
#[must_use]
pub fn authorization_header(api_key: &str, timestamp_ms: i64, signature: &str) -> String {
    format!("hmac {api_key}:{timestamp_ms}:{signature}")
}
