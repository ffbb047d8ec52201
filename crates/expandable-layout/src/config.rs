//! Expandable container configuration.
//!
//! [`ExpandableConfig`] captures the tunable parameters of an
//! [`ExpandableContainer`](crate::widgets::ExpandableContainer) so they can
//! be kept in a TOML file next to the rest of an application's settings.
//!
//! ```toml
//! animation_duration_ms = 250
//! orientation = "vertical"
//! displacement = 0.5
//! expanded = false
//! interpolator = { easing = "ease_in_out" }
//! ```
//!
//! Every field is optional; missing fields take the defaults of
//! [`ExpandableConfig::default`].

use std::path::Path;

use expandable_layout_core::logging::{span_names, targets};
use expandable_layout_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::animation::InterpolatorKind;
use crate::geometry::Orientation;

/// Tunable parameters of an expandable container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandableConfig {
    /// Length of an expand or collapse animation, in milliseconds.
    pub animation_duration_ms: u64,
    /// Time-to-progress curve for animations.
    pub interpolator: InterpolatorKind,
    /// Axis that collapses.
    pub orientation: Orientation,
    /// Fraction of the collapsed distance by which children slide.
    pub displacement: f32,
    /// Whether the container starts fully expanded.
    pub expanded: bool,
}

impl Default for ExpandableConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 200,
            interpolator: InterpolatorKind::FastOutSlowIn,
            orientation: Orientation::Vertical,
            displacement: 1.0,
            expanded: true,
        }
    }
}

impl ExpandableConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!(target: targets::CONFIG, "load", name = span_names::CONFIG)
            .entered();

        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> Result<()> {
        if !self.displacement.is_finite() || self.displacement < 0.0 {
            return Err(Error::invalid_config(
                "displacement",
                format!("{} is not a finite, non-negative value", self.displacement),
            ));
        }
        if let InterpolatorKind::CubicBezier(curve) = self.interpolator {
            let (x1, y1, x2, y2) = curve.control_points();
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(Error::invalid_config(
                    "interpolator",
                    "control points must be finite",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;

    #[test]
    fn test_defaults() {
        let config = ExpandableConfig::default();
        assert_eq!(config.animation_duration_ms, 200);
        assert_eq!(config.interpolator, InterpolatorKind::FastOutSlowIn);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.displacement, 1.0);
        assert!(config.expanded);
    }

    #[test]
    fn test_empty_text_gives_defaults() {
        let config = ExpandableConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExpandableConfig::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = ExpandableConfig::from_toml_str(
            r#"
            animation_duration_ms = 350
            orientation = "horizontal"
            displacement = 0.5
            expanded = false
            interpolator = { easing = "ease_in_out" }
            "#,
        )
        .unwrap();

        assert_eq!(config.animation_duration_ms, 350);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.displacement, 0.5);
        assert!(!config.expanded);
        assert_eq!(config.interpolator, InterpolatorKind::Easing(Easing::EaseInOut));
    }

    #[test]
    fn test_named_interpolator() {
        let config =
            ExpandableConfig::from_toml_str(r#"interpolator = "linear_out_slow_in""#).unwrap();
        assert_eq!(config.interpolator, InterpolatorKind::LinearOutSlowIn);
    }

    #[test]
    fn test_negative_displacement_rejected() {
        let err = ExpandableConfig::from_toml_str("displacement = -1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "displacement"));
    }

    #[test]
    fn test_unknown_orientation_rejected() {
        let err = ExpandableConfig::from_toml_str(r#"orientation = "diagonal""#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExpandableConfig {
            animation_duration_ms: 120,
            orientation: Orientation::Horizontal,
            ..ExpandableConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(ExpandableConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExpandableConfig::load_toml("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expandable.toml");
        std::fs::write(&path, "animation_duration_ms = 90\nexpanded = false\n").unwrap();

        let config = ExpandableConfig::load_toml(&path).unwrap();
        assert_eq!(config.animation_duration_ms, 90);
        assert!(!config.expanded);
    }
}
