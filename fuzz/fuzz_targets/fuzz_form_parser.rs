#![no_main]

use arc_diem_config::config::{FormFormat, FormLoader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let loader = FormLoader::with_defaults();

        // Only panics are interesting here
        for format in [FormFormat::Json, FormFormat::Yaml, FormFormat::Clay] {
            let _ = loader.load_from_str(text, format);
        }
    }
});
