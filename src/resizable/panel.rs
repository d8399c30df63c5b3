//! Panels - sizable regions of a group

use serde::{Deserialize, Serialize};

/// Initial size when none is configured (percent)
pub const DEFAULT_SIZE: f64 = 50.0;
/// Minimum size when none is configured (percent)
pub const DEFAULT_MIN_SIZE: f64 = 10.0;
/// Maximum size when none is configured (percent)
pub const DEFAULT_MAX_SIZE: f64 = 90.0;

/// Construction parameters for a panel, all in percent of the group extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSpec {
    pub default_size: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl PanelSpec {
    pub const fn new(default_size: f64, min_size: f64, max_size: f64) -> Self {
        Self {
            default_size,
            min_size,
            max_size,
        }
    }

    /// Same bounds, different initial size
    pub fn with_default_size(self, default_size: f64) -> Self {
        Self {
            default_size,
            ..self
        }
    }
}

/// Min/max pair read by the resize math
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}

/// A sizable region inside a `PanelGroup`
///
/// The size is only written by the group on behalf of an adjacent handle;
/// there is no public setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    size: f64,
    min_size: f64,
    max_size: f64,
    key: Option<&'static str>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(PanelSpec::default())
    }
}

impl Panel {
    /// Build a panel from a spec, clamping inconsistent values instead of
    /// failing.
    pub fn new(spec: PanelSpec) -> Self {
        let min_size = finite_or(spec.min_size, DEFAULT_MIN_SIZE).clamp(0.0, 100.0);
        let mut max_size = finite_or(spec.max_size, DEFAULT_MAX_SIZE).clamp(0.0, 100.0);
        if max_size < min_size {
            tracing::warn!(
                target: "resize",
                min_size,
                max_size,
                "panel max_size below min_size, raising max to min"
            );
            max_size = min_size;
        }

        let requested = finite_or(spec.default_size, DEFAULT_SIZE);
        let size = requested.clamp(min_size, max_size);
        if size != requested {
            tracing::warn!(
                target: "resize",
                requested,
                min_size,
                max_size,
                clamped = size,
                "panel default_size outside bounds"
            );
        }

        Self {
            size,
            min_size,
            max_size,
            key: None,
        }
    }

    /// Attach a stable label (used by renderers and diagnostics)
    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    /// Current size in percent of the group's main-axis extent
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    pub fn bounds(&self) -> SizeBounds {
        SizeBounds {
            min: self.min_size,
            max: self.max_size,
        }
    }

    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    pub(crate) fn set_size(&mut self, size: f64) {
        self.size = size;
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_matches_documented_defaults() {
        let panel = Panel::default();
        assert_eq!(panel.size(), 50.0);
        assert_eq!(panel.min_size(), 10.0);
        assert_eq!(panel.max_size(), 90.0);
        assert_eq!(panel.key(), None);
    }

    #[test]
    fn test_default_size_clamped_into_bounds() {
        let panel = Panel::new(PanelSpec::new(100.0, 30.0, 90.0));
        assert_eq!(panel.size(), 90.0);

        let panel = Panel::new(PanelSpec::new(5.0, 30.0, 90.0));
        assert_eq!(panel.size(), 30.0);
    }

    #[test]
    fn test_inverted_bounds_collapse_to_min() {
        let panel = Panel::new(PanelSpec::new(50.0, 60.0, 40.0));
        assert_eq!(panel.min_size(), 60.0);
        assert_eq!(panel.max_size(), 60.0);
        assert_eq!(panel.size(), 60.0);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_defaults() {
        let panel = Panel::new(PanelSpec::new(f64::NAN, f64::INFINITY, f64::NAN));
        assert_eq!(panel.size(), 50.0);
        assert_eq!(panel.min_size(), 10.0);
        assert_eq!(panel.max_size(), 90.0);
    }

    #[test]
    fn test_bounds_clamped_to_percent_range() {
        let panel = Panel::new(PanelSpec::new(50.0, -5.0, 140.0));
        assert_eq!(panel.min_size(), 0.0);
        assert_eq!(panel.max_size(), 100.0);
    }

    #[test]
    fn test_spec_deserializes_missing_fields_as_defaults() {
        let spec: PanelSpec = serde_yaml::from_str("min_size: 30").unwrap();
        assert_eq!(spec, PanelSpec::new(50.0, 30.0, 90.0));
    }
}
