use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Create a random nonce with `bytes` bytes of entropy.  The nonce is url-safe base64 without
/// padding, so it will be longer than `bytes` characters and never contains `"`.
pub fn random_nonce(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    base64::encode_config(&buf, base64::URL_SAFE_NO_PAD)
}

/// The current time in seconds since the Unix epoch, suitable for a `timestamp` attribute.
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
