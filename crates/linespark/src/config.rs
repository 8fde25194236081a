//! Chart configuration and the three-layer resolver.
//!
//! A [`SparklineChart`](crate::SparklineChart) owns a base
//! [`ChartConfig`] seeded from the built-in defaults. Each render merges
//! a call-local [`ConfigOverrides`] layer on top of a *copy* of the base,
//! so neither the base nor the caller's overrides are ever modified by
//! rendering.
//!
//! Values are not validated: a negative width is accepted and flows
//! straight into the geometry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional dashed reference line.
///
/// Only a numeric value enables the line. In serialized form this is
/// either a boolean (`false` and `true` both mean off) or a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Baseline {
    /// No reference line.
    #[default]
    Off,
    /// Draw the reference line at this value.
    Value(f64),
}

impl Baseline {
    /// Returns the numeric value, if the baseline is enabled.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Off => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl From<f64> for Baseline {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<Option<f64>> for Baseline {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Off, Self::Value)
    }
}

/// Wire form of [`Baseline`]: `false`/`true` or a number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BaselineRepr {
    Flag(bool),
    Number(f64),
}

impl Serialize for Baseline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Off => BaselineRepr::Flag(false),
            Self::Value(v) => BaselineRepr::Number(v),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Baseline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match BaselineRepr::deserialize(deserializer)? {
            BaselineRepr::Flag(_) => Self::Off,
            BaselineRepr::Number(v) => Self::Value(v),
        })
    }
}

/// Effective configuration for one render, or the persistent base
/// configuration of a chart instance.
///
/// Missing keys in serialized input fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Outer SVG width in pixels.
    pub width: f64,

    /// Outer SVG height in pixels.
    pub height: f64,

    /// Series stroke color (any CSS color).
    pub color: String,

    /// Series stroke width.
    pub line_width: f64,

    /// Horizontal inset applied on both sides of the plot.
    pub padding_x: f64,

    /// Vertical inset applied on both sides of the plot.
    pub padding_y: f64,

    /// Draw cubic curve segments instead of straight lines.
    pub smooth: bool,

    /// Optional dashed reference line.
    pub baseline: Baseline,
}

impl ChartConfig {
    /// Default SVG width.
    pub const DEFAULT_WIDTH: f64 = 120.0;
    /// Default SVG height.
    pub const DEFAULT_HEIGHT: f64 = 40.0;
    /// Default stroke color.
    pub const DEFAULT_COLOR: &'static str = "#666";
    /// Default stroke width.
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
    /// Default horizontal padding.
    pub const DEFAULT_PADDING_X: f64 = 1.0;
    /// Default vertical padding.
    pub const DEFAULT_PADDING_Y: f64 = 1.0;

    /// Shallow-merge `overrides` into this configuration in place.
    ///
    /// Every field present in `overrides` replaces the current value;
    /// absent fields are left untouched.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(ref color) = overrides.color {
            self.color.clone_from(color);
        }
        if let Some(line_width) = overrides.line_width {
            self.line_width = line_width;
        }
        if let Some(padding_x) = overrides.padding_x {
            self.padding_x = padding_x;
        }
        if let Some(padding_y) = overrides.padding_y {
            self.padding_y = padding_y;
        }
        if let Some(smooth) = overrides.smooth {
            self.smooth = smooth;
        }
        if let Some(baseline) = overrides.baseline {
            self.baseline = baseline;
        }
    }

    /// Produce a fresh configuration with `overrides` merged on top,
    /// leaving `self` unchanged.
    #[must_use]
    pub fn resolved(&self, overrides: Option<&ConfigOverrides>) -> Self {
        let mut effective = self.clone();
        if let Some(overrides) = overrides {
            effective.merge(overrides);
        }
        effective
    }

    /// Drawable height: `height - 2 * padding_y`.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.padding_y.mul_add(-2.0, self.height)
    }

    /// Drawable width: `width - 2 * padding_x`.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.padding_x.mul_add(-2.0, self.width)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            color: Self::DEFAULT_COLOR.to_owned(),
            line_width: Self::DEFAULT_LINE_WIDTH,
            padding_x: Self::DEFAULT_PADDING_X,
            padding_y: Self::DEFAULT_PADDING_Y,
            smooth: false,
            baseline: Baseline::Off,
        }
    }
}

/// A partial configuration layer.
///
/// Each `Some` field replaces the corresponding [`ChartConfig`] field
/// when merged. Unknown keys in serialized input are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<Baseline>,
}

impl ConfigOverrides {
    /// An empty layer; merging it changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[must_use]
    pub fn padding_x(mut self, padding_x: f64) -> Self {
        self.padding_x = Some(padding_x);
        self
    }

    #[must_use]
    pub fn padding_y(mut self, padding_y: f64) -> Self {
        self.padding_y = Some(padding_y);
        self
    }

    #[must_use]
    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    #[must_use]
    pub fn baseline(mut self, baseline: impl Into<Baseline>) -> Self {
        self.baseline = Some(baseline.into());
        self
    }
}
