//! Design-system projection - pick the recognized tokens out of
//! `colors.json` and `typography.json`.

use crate::model::{ColorTokens, DesignSystemDoc, TypographyTokens};
use serde_json::Value;

/// Monospace face used when typography omits `mono`.
pub const DEFAULT_MONO: &str = "IBM Plex Mono";

/// Project the two token documents. JSON `null` counts as missing.
///
/// Absent only when both inputs are missing.
pub fn project(colors: Option<&Value>, typography: Option<&Value>) -> Option<DesignSystemDoc> {
    let colors = present(colors).map(project_colors);
    let typography = present(typography).map(project_typography);

    if colors.is_none() && typography.is_none() {
        return None;
    }
    Some(DesignSystemDoc { colors, typography })
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn project_colors(value: &Value) -> ColorTokens {
    ColorTokens {
        primary: string_field(value, "primary"),
        secondary: string_field(value, "secondary"),
        neutral: string_field(value, "neutral"),
    }
}

fn project_typography(value: &Value) -> TypographyTokens {
    TypographyTokens {
        heading: string_field(value, "heading"),
        body: string_field(value, "body"),
        mono: string_field(value, "mono")
            .filter(|mono| !mono.is_empty())
            .unwrap_or_else(|| DEFAULT_MONO.to_string()),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
