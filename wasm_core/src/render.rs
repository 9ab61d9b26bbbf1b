//! Builds the page output from the four raw field values: the dotted-binary
//! line, the bit table and the per-octet step panels.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::OctetError;
use crate::input::OCTET_COUNT;
use crate::octet::{convert, is_flagged_invalid, parse_octet, ConversionResult, ConversionStep};

const CHEVRON_SVG: &str = r#"<span class="summary-chevron" aria-hidden="true"><svg width="12" height="12" viewBox="0 0 12 12" fill="none"><path d="M4.5 2.5L8 6L4.5 9.5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg></span>"#;

/// One row of the bit table. `decimal` and `bits` are absent for invalid fields.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub label: String,
    pub decimal: Option<u8>,
    pub bits: Option<[u8; 8]>,
}

/// Step panel for one valid octet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OctetDetail {
    pub index: usize,
    pub label: String,
    pub decimal: u8,
    pub bits: String,
    pub steps: Vec<ConversionStep>,
    pub lines: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OctetView {
    pub binary: String,
    pub invalid: [bool; OCTET_COUNT],
    pub rows: Vec<TableRow>,
    pub details: Vec<OctetDetail>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OctetHtml {
    pub binary_html: String,
    pub table_html: String,
    pub steps_html: String,
    pub invalid: [bool; OCTET_COUNT],
}

fn check_count<S: AsRef<str>>(values: &[S]) -> Result<(), OctetError> {
    if values.len() == OCTET_COUNT {
        Ok(())
    } else {
        Err(OctetError::FieldCount(values.len()))
    }
}

fn conversions<S: AsRef<str>>(values: &[S]) -> Vec<Option<ConversionResult>> {
    values
        .iter()
        .map(|raw| parse_octet(raw.as_ref()).ok().map(convert))
        .collect()
}

fn invalid_flags<S: AsRef<str>>(values: &[S]) -> [bool; OCTET_COUNT] {
    let mut flags = [false; OCTET_COUNT];
    for (flag, raw) in flags.iter_mut().zip(values) {
        *flag = is_flagged_invalid(raw.as_ref());
    }
    flags
}

fn join_dotted(converted: &[Option<ConversionResult>]) -> String {
    let groups: Option<Vec<String>> = converted
        .iter()
        .map(|c| c.as_ref().map(ConversionResult::bit_string))
        .collect();
    groups.map(|g| g.join(".")).unwrap_or_default()
}

/// Dotted-binary form of the four fields, or an empty string if any field is invalid.
pub fn dotted_binary<S: AsRef<str>>(values: &[S]) -> Result<String, OctetError> {
    check_count(values)?;
    Ok(join_dotted(&conversions(values)))
}

/// Human-readable text for one bit decision.
pub fn describe_step(step: &ConversionStep) -> String {
    if step.is_on() {
        format!(
            "{} ≥ {} → 1, remainder = {} − {} = {}",
            step.value, step.power, step.value, step.power, step.new_remainder
        )
    } else {
        format!("{} < {} → 0", step.value, step.power)
    }
}

pub fn render_view<S: AsRef<str>>(
    values: &[S],
    config: &RenderConfig,
) -> Result<OctetView, OctetError> {
    check_count(values)?;
    let converted = conversions(values);
    let rows = converted
        .iter()
        .enumerate()
        .map(|(idx, c)| TableRow {
            label: config.label(idx).to_string(),
            decimal: c.as_ref().map(|r| r.decimal),
            bits: c.as_ref().map(|r| r.bits),
        })
        .collect();
    let details = converted
        .iter()
        .enumerate()
        .filter_map(|(idx, c)| {
            let result = c.as_ref()?;
            Some(OctetDetail {
                index: idx,
                label: config.label(idx).to_string(),
                decimal: result.decimal,
                bits: result.bit_string(),
                steps: result.steps.to_vec(),
                lines: result.steps.iter().map(describe_step).collect(),
            })
        })
        .collect();
    let view = OctetView {
        binary: join_dotted(&converted),
        invalid: invalid_flags(values),
        rows,
        details,
    };
    log::debug!("rendered view binary={:?}", view.binary);
    Ok(view)
}

pub fn render_html<S: AsRef<str>>(
    values: &[S],
    config: &RenderConfig,
) -> Result<OctetHtml, OctetError> {
    let view = render_view(values, config)?;
    Ok(OctetHtml {
        binary_html: binary_html(&view.binary),
        table_html: view
            .rows
            .iter()
            .map(|row| table_row_html(row, config))
            .collect(),
        steps_html: steps_html(&view.details, config),
        invalid: view.invalid,
    })
}

fn binary_html(binary: &str) -> String {
    if binary.is_empty() {
        return String::new();
    }
    binary
        .split('.')
        .map(|group| format!(r#"<span class="binary-group">{group}</span>"#))
        .collect::<Vec<_>>()
        .join(r#"<span class="binary-separator">.</span>"#)
}

fn row_label_html(label: &str, value: &str) -> String {
    format!(
        r#"<th class="row-label"><span class="row-label-ordinal">{}</span> <span class="row-label-value">{}</span></th>"#,
        html_escape(label),
        html_escape(value)
    )
}

fn table_row_html(row: &TableRow, config: &RenderConfig) -> String {
    match (row.decimal, row.bits) {
        (Some(decimal), Some(bits)) => {
            let cells: String = bits
                .iter()
                .map(|b| {
                    let class = if *b == 1 { "bit-on" } else { "bit-off" };
                    format!(r#"<td class="{class}">{b}</td>"#)
                })
                .collect();
            let result: String = bits.iter().map(u8::to_string).collect();
            format!(
                "<tr>{}{}<td class=\"row-result\">{}</td></tr>",
                row_label_html(&row.label, &decimal.to_string()),
                cells,
                result
            )
        }
        _ => {
            let placeholder = html_escape(&config.placeholder_bit);
            let cells = format!(r#"<td class="bit-off">{placeholder}</td>"#).repeat(8);
            format!(
                "<tr>{}{}<td class=\"row-result bit-off\">{}</td></tr>",
                row_label_html(&row.label, &config.placeholder_value),
                cells,
                html_escape(&config.placeholder_value)
            )
        }
    }
}

fn step_html(step: &ConversionStep) -> String {
    if step.is_on() {
        format!(
            r#"<div class="step"><span class="step-value">{v}</span> ≥ {p} → <span class="step-bit on">1</span>, remainder = {v} − {p} = <span class="step-value">{r}</span></div>"#,
            v = step.value,
            p = step.power,
            r = step.new_remainder
        )
    } else {
        format!(
            r#"<div class="step"><span class="step-value">{}</span> &lt; {} → <span class="step-bit off">0</span></div>"#,
            step.value, step.power
        )
    }
}

fn detail_html(detail: &OctetDetail) -> String {
    let steps: String = detail.steps.iter().map(step_html).collect();
    format!(
        r#"<details class="octet-details"><summary>{} octet: <strong>{}</strong> = <span class="accent">{}</span>{}</summary><div class="steps">{}</div></details>"#,
        html_escape(&detail.label),
        detail.decimal,
        detail.bits,
        CHEVRON_SVG,
        steps
    )
}

fn steps_html(details: &[OctetDetail], config: &RenderConfig) -> String {
    if details.is_empty() {
        return String::new();
    }
    let mut out = format!(
        r#"<p class="steps-heading">{}</p>"#,
        html_escape(&config.steps_heading)
    );
    for detail in details {
        out.push_str(&detail_html(detail));
    }
    out
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
