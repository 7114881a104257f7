//! Property-based tests for document rendering
//!
//! These tests use proptest to verify:
//! 1. Rendering is deterministic for a fixed input
//! 2. Plain text survives rendering unchanged
//! 3. Unset attributes never appear and reserved characters are always escaped
//! 4. Element folding and child order

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use texml::{voice, Dial, Number, Pause, Say, Sip, Verb};

fn render_or_fail<E: texml::Element>(verbs: &[E]) -> Result<String, TestCaseError> {
    voice(verbs).map_err(|err| TestCaseError::fail(format!("render failed: {err}")))
}

fn ensure(condition: bool, message: impl Into<String>) -> Result<(), TestCaseError> {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(message.into()))
    }
}

/// Text without markup characters
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 +:@./,!?-]{1,40}"
}

/// Text that may contain any of the five reserved characters
fn markup_text() -> impl Strategy<Value = String> {
    "[a-z &<>\"']{0,40}"
}

fn arb_verb() -> impl Strategy<Value = Verb> {
    let leaf = prop_oneof![
        (plain_text(), markup_text()).prop_map(|(message, voice)| Verb::Say(Say {
            message,
            voice,
            ..Say::default()
        })),
        "[0-9]{0,3}".prop_map(|length| Verb::Pause(Pause {
            length,
            ..Pause::default()
        })),
        plain_text().prop_map(|number| Verb::Number(Number::new(number))),
        plain_text().prop_map(|uri| Verb::Sip(Sip::new(uri))),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        (prop::collection::vec(inner, 0..4), "[0-9]{0,2}").prop_map(|(children, timeout)| {
            Verb::Dial(Dial {
                timeout,
                children,
                ..Dial::default()
            })
        })
    })
}

proptest! {
    #[test]
    fn prop_render_is_deterministic(verbs in prop::collection::vec(arb_verb(), 0..6)) {
        let first = render_or_fail(&verbs)?;
        let second = render_or_fail(&verbs.clone())?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_plain_text_roundtrips(message in plain_text()) {
        let output = render_or_fail(&[Say::new(message.clone())])?;
        let expected = format!("<Say>{message}</Say>");
        ensure(output.contains(&expected), format!("missing {expected} in {output}"))?;
    }

    #[test]
    fn prop_unset_attributes_omitted(message in plain_text()) {
        let output = render_or_fail(&[Say::new(message)])?;
        for name in ["Voice", "Language", "Loop"] {
            let attr = format!("{name}=");
            ensure(!output.contains(&attr), format!("{name} leaked into {output}"))?;
        }
    }

    #[test]
    fn prop_reserved_characters_escaped(message in markup_text(), voice_attr in markup_text()) {
        let say = Say {
            message: message.clone(),
            voice: voice_attr.clone(),
            ..Say::default()
        };
        let output = render_or_fail(&[say])?;
        let tag_start = output
            .find("<Say")
            .ok_or_else(|| TestCaseError::fail(format!("missing Say in {output}")))?;
        let say = output.get(tag_start..).unwrap_or_default();

        let attr_value = match say.strip_prefix("<Say Voice=\"") {
            Some(rest) => rest
                .split_once('"')
                .map(|(value, _)| value)
                .ok_or_else(|| TestCaseError::fail(format!("unterminated Voice in {output}")))?,
            None => "",
        };
        let text = say
            .split_once("</Say>")
            .and_then(|(open, _)| open.split_once('>'))
            .map(|(_, text)| text)
            .unwrap_or_default();

        for payload in [attr_value, text] {
            for ch in ['<', '>', '"', '\''] {
                ensure(!payload.contains(ch), format!("raw {ch:?} in {output}"))?;
            }
            ensure(
                payload.matches('&').count()
                    == payload.matches("&amp;").count()
                        + payload.matches("&lt;").count()
                        + payload.matches("&gt;").count()
                        + payload.matches("&quot;").count()
                        + payload.matches("&apos;").count(),
                format!("unescaped & in {output}"),
            )?;
        }
        let escaped_len = |raw: &str| -> usize {
            raw.chars()
                .map(|ch| match ch {
                    '&' => 5,
                    '<' | '>' => 4,
                    '"' | '\'' => 6,
                    _ => 1,
                })
                .sum()
        };
        ensure(
            attr_value.len() == escaped_len(&voice_attr) && text.len() == escaped_len(&message),
            format!("payload lengths differ from input in {output}"),
        )?;
    }

    #[test]
    fn prop_childless_elements_fold(length in "[0-9]{1,3}") {
        let pause = Pause { length: length.clone(), ..Pause::default() };
        let output = render_or_fail(&[pause])?;
        let expected = format!(r#"<Pause Length="{length}"/>"#);
        ensure(output.contains(&expected), format!("missing {expected} in {output}"))?;
    }

    #[test]
    fn prop_dial_children_keep_order(numbers in prop::collection::vec("[0-9]{4,8}", 1..6)) {
        let dial = numbers
            .iter()
            .fold(Dial::default(), |dial, number| dial.with_child(Number::new(number.as_str())));
        let output = render_or_fail(&[dial])?;
        let expected: String = numbers
            .iter()
            .map(|number| format!("<Number>{number}</Number>"))
            .collect();
        ensure(
            output.contains(&format!("<Dial>{expected}</Dial>")),
            format!("children out of order in {output}"),
        )?;
    }
}
