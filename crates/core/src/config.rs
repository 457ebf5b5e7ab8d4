//! Session configuration.
//!
//! Parsed from a JSON object so the browser host can pass a single string
//! and the CLI can reuse the same format. Missing keys fall back to the
//! variant's defaults; present but invalid values are errors.

use crate::color::Rgba;
use crate::error::LumenError;
use crate::params::{param_f64, param_str};
use crate::pointer::MIN_DIAGONAL;
use serde::Serialize;
use serde_json::Value;

const VARIANT_NAMES: &[&str] = &["static", "interactive"];

/// Which of the two demos a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Solid cornflower-blue fill, drawn once.
    Static,
    /// Pointer-reactive radial gradient, redrawn every frame.
    Interactive,
}

impl Variant {
    /// Looks up a variant by its config name.
    pub fn from_name(name: &str) -> Result<Self, LumenError> {
        match name {
            "static" => Ok(Variant::Static),
            "interactive" => Ok(Variant::Interactive),
            _ => Err(LumenError::InvalidConfig(format!(
                "unknown variant '{name}', expected one of: {}",
                VARIANT_NAMES.join(", ")
            ))),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        VARIANT_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Static => "static",
            Variant::Interactive => "interactive",
        }
    }

    /// Background color used when the config does not name one.
    pub fn default_clear_color(self) -> Rgba {
        match self {
            Variant::Static => Rgba::CORNFLOWER_BLUE,
            Variant::Interactive => Rgba::BLACK,
        }
    }
}

/// Everything a session needs besides the rendering context and surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionConfig {
    pub variant: Variant,
    pub clear_color: Rgba,
    /// Lower bound for the diagonal uniform.
    pub min_diagonal: f32,
}

impl SessionConfig {
    /// Default configuration for a variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            clear_color: variant.default_clear_color(),
            min_diagonal: MIN_DIAGONAL,
        }
    }

    /// Builds a config from a JSON object.
    ///
    /// Recognized keys: `variant`, `clear_color`, `min_diagonal`.
    pub fn from_json(params: &Value) -> Result<Self, LumenError> {
        let variant = match param_str(params, "variant") {
            Some(name) => Variant::from_name(name)?,
            None => Variant::Interactive,
        };

        let mut config = Self::new(variant);

        if let Some(hex) = param_str(params, "clear_color") {
            config.clear_color = Rgba::from_hex(hex)?;
        }

        if let Some(raw) = param_f64(params, "min_diagonal") {
            let min = raw as f32;
            if !min.is_finite() || min <= 0.0 {
                return Err(LumenError::InvalidConfig(format!(
                    "min_diagonal must be a positive finite number, got {raw}"
                )));
            }
            config.min_diagonal = min;
        }

        Ok(config)
    }

    /// Parses a JSON string; an empty or blank string yields the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LumenError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(json)
            .map_err(|e| LumenError::InvalidConfig(format!("invalid config JSON: {e}")))?;
        Self::from_json(&value)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Variant::Interactive)
    }
}
