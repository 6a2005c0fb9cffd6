#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = toml::from_str::<irma_ansible::Settings>(content);
        let _ = irma_ansible::config::parse_profile(content);
    }
});
