#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pem) = std::str::from_utf8(data) {
        let _ = moneymour_sign::keys::parse_public_key(pem);
        let _ = moneymour_sign::keys::parse_private_key(pem);
    }
});
