#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic for any supported country; errors are fine.
        for cc in vies_address::SUPPORTED_COUNTRY_CODES {
            let _ = vies_address::parse_address(cc, s);
        }
    }
});
