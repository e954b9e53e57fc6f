#![no_main]

use arc_diem_config::config::arc_diem_form;
use arc_diem_config::settings::{Selection, parse_assignment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let form = arc_diem_form();
        let updates: Vec<_> = text.lines().filter_map(|l| parse_assignment(l).ok()).collect();

        if let Ok(selection) = Selection::defaults(&form).apply(&form, updates) {
            assert_eq!(selection.len(), form.message_keys().len());
        }
    }
});
