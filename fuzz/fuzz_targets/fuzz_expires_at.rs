#![no_main]
use libfuzzer_sys::fuzz_target;
use moneymour_core::types::ExpiresAt;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(expires_at) = text.parse::<ExpiresAt>() {
            assert_eq!(expires_at.as_str(), text);
            let _ = moneymour_sign::canonicalize(&expires_at, &serde_json::Value::Null);
        }
    }
});
