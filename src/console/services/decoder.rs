//! Response body decoding: content-encoding decompression followed by
//! charset detection.

use anyhow::Result;
use bytes::Bytes;
use encoding_rs::SHIFT_JIS;
use flate2::read::{DeflateDecoder, GzDecoder};
use std::io::Read;

pub const ENC_NONE: &str = ":plaintext:";
pub const ENC_GZIP: &str = "gzip";
pub const ENC_DEFLATE: &str = "deflate";
pub const ENC_ZSTD: &str = "zstd";

pub fn decode_gzip(data: &[u8]) -> Result<Bytes> {
    let mut decoder = GzDecoder::new(data);
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded)?;
    Ok(Bytes::from(decoded))
}

pub fn decode_deflate(data: &[u8]) -> Result<Bytes> {
    let mut decoder = DeflateDecoder::new(data);
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded)?;
    Ok(Bytes::from(decoded))
}

pub fn decode_zstd(data: &[u8]) -> Result<Bytes> {
    Ok(Bytes::from(zstd::decode_all(data)?))
}

/// Decompress `data` according to a `content-encoding` value and turn it
/// into text. UTF-8 is tried first, Shift_JIS second.
pub fn decode_bytes(data: &[u8], encoding: &str) -> Result<String> {
    let encoding = encoding.trim().to_ascii_lowercase();
    let body_bytes = match encoding.as_str() {
        ENC_GZIP => decode_gzip(data)?,
        ENC_DEFLATE => decode_deflate(data)?,
        ENC_ZSTD => decode_zstd(data)?,
        _ => Bytes::copy_from_slice(data),
    };

    match String::from_utf8(body_bytes.to_vec()) {
        Ok(text) => Ok(text),
        Err(utf8_error) => {
            let (text, _, had_errors) = SHIFT_JIS.decode(&body_bytes);
            if had_errors {
                return Err(anyhow::anyhow!(
                    "Failed to decode response body as utf-8 or shift_jis: {}",
                    utf8_error
                ));
            }
            Ok(text.into_owned())
        }
    }
}
