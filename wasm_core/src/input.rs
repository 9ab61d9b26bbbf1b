//! Field editing rules for the four octet inputs.
//!
//! The page owns the DOM; these helpers only decide what the fields should
//! contain and where focus goes next.

use serde::Serialize;

use crate::octet::is_valid_octet;

pub const OCTET_COUNT: usize = 4;
pub const MAX_DIGITS: usize = 3;

/// Field that receives focus after a successful paste.
pub const PASTE_FOCUS: usize = OCTET_COUNT - 1;

/// Field contents produced by a dotted paste, plus where focus lands.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PastedOctets {
    pub fields: [String; OCTET_COUNT],
    pub focus: usize,
}

/// Focus change requested by a key press.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyAction {
    pub target: Option<usize>,
    pub select: bool,
    pub prevent_default: bool,
}

impl KeyAction {
    fn none() -> Self {
        Self::default()
    }

    fn jump(target: usize) -> Self {
        Self {
            target: Some(target),
            select: true,
            prevent_default: true,
        }
    }
}

pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Auto-advance after typing: a full, valid 3-digit octet moves to the next field.
pub fn focus_after_input(index: usize, value: &str) -> Option<usize> {
    let next = next_index(index)?;
    (value.len() == MAX_DIGITS && is_valid_octet(value)).then_some(next)
}

/// Index of the field after `index`, if both exist.
fn next_index(index: usize) -> Option<usize> {
    index
        .checked_add(1)
        .filter(|next| *next < OCTET_COUNT)
}

pub fn focus_after_keydown(index: usize, key: &str, shift: bool, value: &str) -> KeyAction {
    if index >= OCTET_COUNT {
        return KeyAction::none();
    }
    match key {
        "." => next_field(index),
        "Tab" if !shift => next_field(index),
        "Tab" if index > 0 => KeyAction::jump(index - 1),
        // Backspace keeps its default so the browser still edits the field.
        "Backspace" if value.is_empty() && index > 0 => KeyAction {
            target: Some(index - 1),
            select: false,
            prevent_default: false,
        },
        _ => KeyAction::none(),
    }
}

fn next_field(index: usize) -> KeyAction {
    next_index(index).map_or_else(KeyAction::none, KeyAction::jump)
}

/// Splits pasted text like `"10.0.0.1"` across the four fields.
///
/// Returns `None` unless the text has exactly three `.` separators, in which
/// case the browser's own paste should run. A successful split moves focus
/// to [`PASTE_FOCUS`].
pub fn split_paste(text: &str) -> Option<PastedOctets> {
    let parts: Vec<&str> = text.trim().split('.').collect();
    if parts.len() != OCTET_COUNT {
        log::debug!("paste ignored, {} parts", parts.len());
        return None;
    }
    let mut fields: [String; OCTET_COUNT] = Default::default();
    for (field, part) in fields.iter_mut().zip(parts) {
        *field = sanitize_digits(part).chars().take(MAX_DIGITS).collect();
    }
    Some(PastedOctets {
        fields,
        focus: PASTE_FOCUS,
    })
}
