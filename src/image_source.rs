use serde::{Serialize, Deserialize};
use crate::error::{DesignError, Result};
use base64::{Engine as _, engine::general_purpose};
use std::io::Cursor;

/// An image source the host must fetch before the slot can be finalized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub ticket: u64,
    pub slot: usize,
    pub src: String,
}

pub fn is_inline(src: &str) -> bool {
    src.starts_with("data:")
}

/// Payload bytes of a base64 `data:` URL.
pub fn decode_data_url(src: &str) -> Result<Vec<u8>> {
    let rest = src
        .strip_prefix("data:")
        .ok_or_else(|| DesignError::ImageResolutionFailed("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| DesignError::ImageResolutionFailed("data URL has no payload".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(DesignError::ImageResolutionFailed("data URL is not base64 encoded".to_string()));
    }
    general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| DesignError::ImageResolutionFailed(e.to_string()))
}

/// Natural size of an encoded image.
pub fn probe(bytes: &[u8]) -> Result<(u32, u32)> {
    image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DesignError::ImageResolutionFailed(e.to_string()))?
        .into_dimensions()
        .map_err(|e| DesignError::ImageResolutionFailed(e.to_string()))
}

pub fn probe_inline(src: &str) -> Result<(u32, u32)> {
    probe(&decode_data_url(src)?)
}
