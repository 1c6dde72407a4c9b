#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Transliterated output must be stable under a second pass.
        let once = vies_address::greek::transliterate(s).into_owned();
        assert_eq!(vies_address::greek::transliterate(&once), once.as_str());
    }
});
