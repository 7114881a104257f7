#![no_main]
use libfuzzer_sys::fuzz_target;
use texml::{voice, Custom, Say, Verb};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (name, rest) = s.split_once('|').unwrap_or(("Say", s));
        let verbs: Vec<Verb> = vec![
            Say::new(rest).with_attribute("Voice", rest).into(),
            Custom::new(name).with_text(rest).into(),
        ];
        if let Ok(xml) = voice(&verbs) {
            assert!(xml.starts_with("<?xml"));
            assert!(xml.ends_with("</Response>"));
        }
    }
});
