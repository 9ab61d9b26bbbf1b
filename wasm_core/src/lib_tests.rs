use super::*;
use crate::input::{focus_after_keydown, split_paste};
use crate::render::dotted_binary;

fn typed(raw: [&str; 4]) -> Vec<String> {
    raw.iter().map(|v| input::sanitize_digits(v)).collect()
}

#[test]
fn typed_private_address_renders_dotted_binary() {
    let values = typed(["192", "168", "1", "1"]);
    let view = render_octets_internal(&values, None).expect("four fields");
    assert_eq!(view.binary, "11000000.10101000.00000001.00000001");
    assert_eq!(view.details.len(), 4);
    assert_eq!(view.invalid, [false; 4]);
}

#[test]
fn pasted_address_matches_manual_entry() {
    let pasted = split_paste("10.0.0.1").expect("three separators");
    let manual = typed(["10", "0", "0", "1"]);
    assert_eq!(pasted.fields.to_vec(), manual);
    assert_eq!(pasted.focus, 3, "focus lands on the last field");

    assert_eq!(
        render_octets_html_internal(&pasted.fields, None).unwrap(),
        render_octets_html_internal(&manual, None).unwrap()
    );
    assert_eq!(
        dotted_binary(&pasted.fields).unwrap(),
        "00001010.00000000.00000000.00000001"
    );
}

#[test]
fn paste_result_serializes_fields_and_focus() {
    let pasted = split_paste("192.168.0.1").expect("three separators");
    let json = serde_json::to_value(&pasted).unwrap();
    assert_eq!(json["fields"], serde_json::json!(["192", "168", "0", "1"]));
    assert_eq!(json["focus"], 3);
}

#[test]
fn numeric_literal_forms_render_like_plain_digits() {
    let literal: Vec<String> = ["1.0", "1e2", "0x10", "10."].map(String::from).to_vec();
    let plain: Vec<String> = ["1", "100", "16", "10"].map(String::from).to_vec();
    let view = render_octets_internal(&literal, None).unwrap();
    assert_eq!(view.invalid, [false; 4]);
    assert_eq!(view.binary, render_octets_internal(&plain, None).unwrap().binary);
    assert_eq!(view.binary, "00000001.01100100.00010000.00001010");
}

#[test]
fn internal_render_applies_config_and_checks_field_count() {
    let config = RenderConfig {
        steps_heading: "Steps".into(),
        ..RenderConfig::default()
    };
    let html = render_octets_html_internal(&typed(["1", "2", "3", "4"]), Some(config)).unwrap();
    assert!(html.steps_html.starts_with(r#"<p class="steps-heading">Steps</p>"#));

    let short: Vec<String> = vec!["1".into(), "2".into()];
    assert_eq!(
        render_octets_internal(&short, None).unwrap_err(),
        OctetError::FieldCount(2)
    );
}

#[test]
fn typing_letters_leaves_field_empty_not_invalid() {
    let values = typed(["abc", "1", "2", "3"]);
    let view = render_octets_internal(&values, None).unwrap();
    assert_eq!(values[0], "");
    assert_eq!(view.invalid, [false; 4]);
    assert_eq!(view.binary, "");
    assert_eq!(view.rows[0].decimal, None);
}

#[test]
fn over_range_field_is_flagged_but_others_still_explained() {
    let values = typed(["999", "1", "2", "3"]);
    let view = render_octets_internal(&values, None).unwrap();
    assert_eq!(view.invalid, [true, false, false, false]);
    assert_eq!(view.binary, "");
    assert_eq!(view.details.len(), 3);
    assert_eq!(view.details[0].label, "2nd");
}

#[test]
fn keyboard_walk_through_fields() {
    let mut focus = 0usize;
    for _ in 0..3 {
        let action = focus_after_keydown(focus, ".", false, "1");
        focus = action.target.expect("next field");
    }
    assert_eq!(focus, 3);
    assert_eq!(focus_after_keydown(focus, ".", false, "1").target, None);

    let back = focus_after_keydown(focus, "Tab", true, "1");
    assert_eq!(back.target, Some(2));
    assert!(back.prevent_default);
}

#[test]
fn step_trace_serializes_in_camel_case() {
    let result = octet::octet_to_binary(5).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["decimal"], 5);
    assert_eq!(json["steps"][5]["newRemainder"], 1);
    assert_eq!(json["bits"].as_array().unwrap().len(), 8);
}

#[test]
fn key_action_serializes_for_page_glue() {
    let action = focus_after_keydown(1, "Backspace", false, "");
    let json = serde_json::to_value(action).unwrap();
    assert_eq!(json["target"], 0);
    assert_eq!(json["preventDefault"], false);
}

#[test]
fn octet_error_messages() {
    assert_eq!(
        octet::octet_to_binary(300).unwrap_err().to_string(),
        "invalid argument: 300 is not an octet"
    );
    assert_eq!(
        OctetError::FieldCount(2).to_string(),
        "expected 4 octet fields, got 2"
    );
}
