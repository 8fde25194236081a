//! Scale computation: data extents to pixel factors.
//!
//! The vertical mapping is `y = (max - v) * y_scale`; SVG's y-axis grows
//! downward, so larger values land higher on the chart. A flat series
//! (`max == min`) would divide by zero, so it is drawn at `y_scale = 1`
//! with `max` raised by half the plot height, centering the line.

use crate::config::ChartConfig;
use crate::types::Series;

/// Extents and pixel factors derived from one series and configuration.
///
/// Invariant: `y_scale > 0` whenever the plot height is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Smallest plotted value (baseline included).
    pub min: f64,
    /// Largest plotted value, widened in the degenerate case.
    pub max: f64,
    /// Pixels per data unit on the vertical axis.
    pub y_scale: f64,
    /// Horizontal distance between consecutive samples.
    pub x_inc: f64,
    /// Horizontal control-point offset for cubic segments (`x_inc / 3`).
    pub cubic_inc: f64,
}

impl Scale {
    /// Compute the scale for `series` under `config`.
    ///
    /// A numeric baseline is folded into the extents before the samples
    /// are scanned, so the reference line always lies within the plot.
    /// A series with no present values and no numeric baseline is
    /// treated as degenerate; it produces no geometry anyway.
    #[must_use]
    pub fn compute(series: &Series, config: &ChartConfig) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let x_inc = config.plot_width() / (series.len() - 1) as f64;

        let extents = config
            .baseline
            .value()
            .into_iter()
            .chain(series.values())
            .fold(None, |acc: Option<(f64, f64)>, v| {
                Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
            });
        let (min, mut max) = extents.unwrap_or((0.0, 0.0));

        #[allow(clippy::float_cmp)]
        let y_scale = if max == min {
            max += config.plot_height() / 2.0;
            1.0
        } else {
            config.plot_height() / (max - min)
        };

        Self {
            min,
            max,
            y_scale,
            x_inc,
            cubic_inc: x_inc / 3.0,
        }
    }

    /// Horizontal pixel position of the sample at `index`.
    #[must_use]
    pub fn x(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        self.x_inc * index
    }

    /// Vertical pixel position of `value`.
    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        (self.max - value) * self.y_scale
    }
}
