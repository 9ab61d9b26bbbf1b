use serde::{Deserialize, Serialize};

use crate::input::OCTET_COUNT;

/// Page text used by the renderer. Every field falls back to the default page copy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Row and panel labels, one per octet.
    pub labels: [String; OCTET_COUNT],
    /// Paragraph shown above the step panels.
    pub steps_heading: String,
    /// Cell text for bits of an empty or invalid octet.
    pub placeholder_bit: String,
    /// Value and result text for an empty or invalid octet.
    pub placeholder_value: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            labels: ["1st", "2nd", "3rd", "4th"].map(String::from),
            steps_heading: "Click to see how each octet is calculated".into(),
            placeholder_bit: "–".into(),
            placeholder_value: "—".into(),
        }
    }
}

impl RenderConfig {
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"stepsHeading":"How it works"}"#).unwrap();
        assert_eq!(config.steps_heading, "How it works");
        assert_eq!(config.label(0), "1st");
        assert_eq!(config.placeholder_bit, "–");
    }

    #[test]
    fn labels_must_cover_every_octet() {
        let err = serde_json::from_str::<RenderConfig>(r#"{"labels":["a","b"]}"#);
        assert!(err.is_err());
    }
}
