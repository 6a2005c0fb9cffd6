#![no_main]

use irma_ansible::{InventoryRenderer, Profile, VarsRenderer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for profile in [Profile::Core, Profile::Kiosk] {
            // Parsing and rendering must never panic
            if let Ok(deployment) = irma_ansible::parse_deployment(content, "fuzz", profile) {
                let _ = InventoryRenderer::render(&deployment);
                let _ = VarsRenderer::new(false, false).render(&deployment);
            }
        }
    }
});
