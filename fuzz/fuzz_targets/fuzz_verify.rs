#![no_main]
use libfuzzer_sys::fuzz_target;
use moneymour_core::environment::Environment;
use moneymour_core::types::ExpiresAt;

fuzz_target!(|data: &[u8]| {
    // Split input into signature text and JSON body
    let mid = data.len() / 2;
    let (left, right) = data.split_at(mid);
    if let (Ok(signature), Ok(body)) = (
        std::str::from_utf8(left),
        serde_json::from_slice::<serde_json::Value>(right),
    ) {
        let expires_at = ExpiresAt::from_epoch_seconds(1_572_281_748);
        let _ = moneymour_sign::verify(signature, &expires_at, &body, None, Environment::Sandbox);
    }
});
