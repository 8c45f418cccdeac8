//! Response body reading and decoding.

use std::collections::HashMap;
use std::io::Read;

use flate2::read::{GzDecoder, ZlibDecoder};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;

/// Collects response headers keyed by lower-case name.
///
/// Repeated headers are joined with `", "`. Non-UTF-8 values are decoded lossily.
pub(crate) fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

/// Reads the raw response body, failing once it exceeds `MAX_RESPONSE_BODY_SIZE`.
pub(crate) async fn read_body_with_limit(
    mut response: reqwest::Response,
) -> Result<Vec<u8>, FetchError> {
    if let Some(length) = response.content_length() {
        if length as usize > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge {
                size: length as usize,
            });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge {
                size: body.len() + chunk.len(),
            });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Reads a decoder to the end, bounded by `MAX_RESPONSE_BODY_SIZE`.
fn read_limited<R: Read>(reader: R) -> Result<Vec<u8>, FetchError> {
    let mut decoded = Vec::new();
    reader
        .take(MAX_RESPONSE_BODY_SIZE as u64 + 1)
        .read_to_end(&mut decoded)
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    if decoded.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(FetchError::BodyTooLarge {
            size: decoded.len(),
        });
    }
    Ok(decoded)
}

/// Decodes a body according to its `content-encoding` and returns it as text.
///
/// # Errors
///
/// Returns `FetchError::Decode` for corrupt data or an encoding other than
/// gzip, deflate, or identity.
pub(crate) fn decode_body(raw: Vec<u8>, content_encoding: Option<&str>) -> Result<String, FetchError> {
    let encoding = content_encoding
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();

    let bytes = match encoding.as_str() {
        "" | "identity" => raw,
        "gzip" | "x-gzip" => read_limited(GzDecoder::new(raw.as_slice()))?,
        "deflate" => read_limited(ZlibDecoder::new(raw.as_slice()))?,
        other => {
            return Err(FetchError::Decode(format!(
                "unsupported content-encoding '{other}'"
            )))
        }
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
