use console_error_panic_hook::set_once as set_panic_hook;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod input;
pub mod octet;
pub mod render;

pub use config::RenderConfig;
pub use error::OctetError;
pub use octet::{ConversionResult, ConversionStep, POWERS};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
    // A second init (e.g. module re-instantiated by a test runner) just keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn js_err(err: OctetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_config(config: JsValue) -> Result<Option<RenderConfig>, OctetError> {
    if config.is_undefined() || config.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(config).map(Some).map_err(|err| {
        log::warn!("rejected render config: {err}");
        OctetError::Config(err.to_string())
    })
}

fn parse_values(values: JsValue) -> Result<Vec<String>, OctetError> {
    serde_wasm_bindgen::from_value(values)
        .map_err(|err| OctetError::Config(format!("octet values must be strings: {err}")))
}

/// Converts a decimal octet into its bits and step trace.
#[wasm_bindgen]
pub fn octet_to_binary(decimal: u32) -> Result<JsValue, JsValue> {
    octet::octet_to_binary(decimal)
        .map_err(js_err)
        .and_then(|res| to_js(&res))
}

#[wasm_bindgen]
pub fn is_valid_octet(value: &str) -> bool {
    octet::is_valid_octet(value)
}

#[wasm_bindgen]
pub fn sanitize_octet_input(value: &str) -> String {
    input::sanitize_digits(value)
}

/// `{ fields, focus }` for a dotted paste, or `null` when the paste should be
/// left to the browser.
#[wasm_bindgen]
pub fn split_pasted_octets(text: &str) -> Result<JsValue, JsValue> {
    match input::split_paste(text) {
        Some(pasted) => to_js(&pasted),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn focus_after_input(index: usize, value: &str) -> Option<usize> {
    input::focus_after_input(index, value)
}

#[wasm_bindgen]
pub fn focus_after_keydown(
    index: usize,
    key: &str,
    shift: bool,
    value: &str,
) -> Result<JsValue, JsValue> {
    to_js(&input::focus_after_keydown(index, key, shift, value))
}

pub(crate) fn render_octets_internal(
    values: &[String],
    config: Option<RenderConfig>,
) -> Result<render::OctetView, OctetError> {
    render::render_view(values, &config.unwrap_or_default())
}

pub(crate) fn render_octets_html_internal(
    values: &[String],
    config: Option<RenderConfig>,
) -> Result<render::OctetHtml, OctetError> {
    render::render_html(values, &config.unwrap_or_default())
}

/// Structured view of the four fields: dotted binary, table rows and step panels.
#[wasm_bindgen]
pub fn render_octets(values: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values).map_err(js_err)?;
    let config = parse_config(config).map_err(js_err)?;
    render_octets_internal(&values, config)
        .map_err(js_err)
        .and_then(|view| to_js(&view))
}

/// Same as [`render_octets`] but as HTML fragments ready for `innerHTML`.
#[wasm_bindgen]
pub fn render_octets_html(values: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values).map_err(js_err)?;
    let config = parse_config(config).map_err(js_err)?;
    render_octets_html_internal(&values, config)
        .map_err(js_err)
        .and_then(|html| to_js(&html))
}

#[cfg(test)]
mod lib_tests;
