//! VAPID key decoding.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use color_eyre::eyre::WrapErr as _;

/// Decode a server-issued VAPID public key into raw bytes.
///
/// Accepts base64url with or without padding, and tolerates the standard
/// alphabet since some backends re-encode the key on the way out.
pub fn decode_key(key: &str) -> color_eyre::eyre::Result<Vec<u8>> {
    let normalized: String = key
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .wrap_err("VAPID key is not valid base64url")
}
