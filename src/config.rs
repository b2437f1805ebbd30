// ============================================================================
// Render Configuration
// Options for turning a NumericValue into text
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Notation used for the float payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatStyle {
    /// Positional notation, e.g. `3.1400000000`
    #[default]
    Fixed,

    /// Exponent notation, e.g. `3.1400000000e0`
    Scientific,
}

/// Rendering options used by [`NumericValue::render`](crate::numeric::NumericValue::render)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Digits after the decimal point for float payloads
    pub float_precision: usize,

    /// Notation for float payloads
    pub float_style: FloatStyle,
}

impl RenderConfig {
    /// Fractional digits used by `Display`
    pub const DEFAULT_FLOAT_PRECISION: usize = 10;

    /// Upper bound accepted by `validate`; f64 carries at most 17 significant digits
    pub const MAX_FLOAT_PRECISION: usize = 17;

    /// Create a new configuration
    pub fn new(float_precision: usize, float_style: FloatStyle) -> Self {
        Self {
            float_precision,
            float_style,
        }
    }

    /// Builder method: Set float precision
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }

    /// Builder method: Set float notation
    pub fn with_float_style(mut self, style: FloatStyle) -> Self {
        self.float_style = style;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.float_precision > Self::MAX_FLOAT_PRECISION {
            return Err(format!(
                "Float precision must be at most {}",
                Self::MAX_FLOAT_PRECISION
            ));
        }

        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FLOAT_PRECISION, FloatStyle::Fixed)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RenderConfig {
    /// Serial console output: fixed notation, 10 fractional digits
    pub fn serial() -> Self {
        Self::default()
    }

    /// Short readouts: fixed notation, 4 fractional digits
    pub fn compact() -> Self {
        Self::default().with_float_precision(4)
    }

    /// Exponent notation with the default precision
    pub fn scientific() -> Self {
        Self::default().with_float_style(FloatStyle::Scientific)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = RenderConfig::new(6, FloatStyle::Fixed);
        assert_eq!(config.float_precision, 6);
        assert_eq!(config.float_style, FloatStyle::Fixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_display_precision() {
        let config = RenderConfig::default();
        assert_eq!(config.float_precision, 10);
        assert_eq!(config, RenderConfig::serial());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::compact().with_float_style(FloatStyle::Scientific);
        assert_eq!(config.float_precision, 4);
        assert_eq!(config.float_style, FloatStyle::Scientific);
    }

    #[test]
    fn test_validation() {
        let config = RenderConfig::default().with_float_precision(40);
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_float_precision(17);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = RenderConfig::scientific().with_float_precision(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
