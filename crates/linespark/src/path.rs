//! Path data generation: samples to SVG path commands.
//!
//! This module defines the [`PointFormatter`] trait for per-sample
//! fragment generation and the [`PathMode`] enum that selects between
//! straight ([`Sharp`](PathMode::Sharp)) and cubic
//! ([`Smooth`](PathMode::Smooth)) segments once per render.
//!
//! # Gaps
//!
//! An absent sample yields an empty fragment. The next present sample
//! starts a fresh subpath with `M` instead of continuing the previous
//! one. A present sample with gaps on both sides would be a bare `M`,
//! which SVG does not paint, so a tiny closed detour is appended to
//! leave a visible dot.

use crate::format::{command, push_command};
use crate::scale::Scale;
use crate::types::Series;

/// Zero-length detour appended to an isolated point so it gets stroked.
pub const ISOLATED_POINT_DETOUR: &str = "h-0.5v-0.5h0.5v0.5";

/// Selects how consecutive samples are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Straight `L` segments.
    #[default]
    Sharp,

    /// Cubic `C` segments whose control points sit a third of the way
    /// along the step, at the previous and current sample heights.
    ///
    /// No continuity guarantee is made between consecutive curves.
    Smooth,
}

impl PathMode {
    /// Map the `smooth` configuration flag to a mode.
    #[must_use]
    pub const fn from_smooth(smooth: bool) -> Self {
        if smooth { Self::Smooth } else { Self::Sharp }
    }
}

/// Everything needed to render one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Position in the series.
    pub index: usize,
    /// The sample itself.
    pub value: Option<f64>,
    /// The preceding sample (the sample itself at index 0).
    pub prev: Option<f64>,
    /// `index == 0` or the preceding sample is absent.
    pub null_before: bool,
    /// `index` is the last position or the following sample is absent.
    pub null_after: bool,
    /// Snap y to the pixel center (`floor(y) + 0.5`) for crisp 1px lines.
    pub half_align: bool,
}

/// Trait for per-sample path fragment strategies.
pub trait PointFormatter {
    /// Render one sample as a path fragment; empty for an absent sample.
    fn format_point(&self, scale: &Scale, point: &PlotPoint) -> String;
}

impl PointFormatter for PathMode {
    fn format_point(&self, scale: &Scale, point: &PlotPoint) -> String {
        match *self {
            Self::Sharp => sharp_point(scale, point),
            Self::Smooth => smooth_point(scale, point),
        }
    }
}

/// Start a new subpath at `(x, y)`, with a detour if the point is isolated.
fn move_to(x: f64, y: f64, isolated: bool) -> String {
    let mut out = String::new();
    push_command(&mut out, 'M', &[x, y]);
    if isolated {
        out.push_str(ISOLATED_POINT_DETOUR);
    }
    out
}

fn sharp_point(scale: &Scale, point: &PlotPoint) -> String {
    let Some(value) = point.value else {
        return String::new();
    };

    let mut y = scale.y(value);
    if point.half_align {
        y = y.floor() + 0.5;
    }
    let x = scale.x(point.index);

    if point.index == 0 || point.null_before {
        return move_to(x, y, point.null_after);
    }
    command('L', &[x, y])
}

fn smooth_point(scale: &Scale, point: &PlotPoint) -> String {
    let Some(value) = point.value else {
        return String::new();
    };

    let x = scale.x(point.index);
    let y = scale.y(value);

    if point.index == 0 || point.null_before {
        return move_to(x, y, point.null_after);
    }

    // A continuation always has a present predecessor.
    let prev_y = point.prev.map_or(y, |p| scale.y(p));
    command(
        'C',
        &[
            x - scale.x_inc + scale.cubic_inc,
            prev_y,
            x - scale.cubic_inc,
            y,
            x,
            y,
        ],
    )
}

/// Build the `d` value for the series stroke.
///
/// Fragments are joined with single spaces in sample order; absent
/// samples contribute empty fragments.
#[must_use]
pub fn build_path_data(series: &Series, scale: &Scale, mode: PathMode) -> String {
    let samples = series.samples();
    let last = samples.len().saturating_sub(1);

    let fragments: Vec<String> = samples
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let point = PlotPoint {
                index,
                value,
                prev: if index == 0 {
                    value
                } else {
                    series.get(index - 1)
                },
                null_before: index == 0 || series.get(index - 1).is_none(),
                null_after: index >= last || series.get(index + 1).is_none(),
                half_align: false,
            };
            mode.format_point(scale, &point)
        })
        .collect();

    fragments.join(" ")
}

/// Build the `d="..."` attribute for the dashed reference line.
///
/// The line spans from the first to the last sample position, snapped
/// to pixel centers, regardless of the series' own mode. Returns an
/// empty string when `baseline` is `None`.
#[must_use]
pub fn build_baseline_attr(series: &Series, scale: &Scale, baseline: Option<f64>) -> String {
    let Some(value) = baseline else {
        return String::new();
    };

    let endpoint = |index: usize| PlotPoint {
        index,
        value: Some(value),
        prev: Some(value),
        null_before: false,
        null_after: false,
        half_align: true,
    };
    let start = PathMode::Sharp.format_point(scale, &endpoint(0));
    let end = PathMode::Sharp.format_point(scale, &endpoint(series.len() - 1));

    format!(r#"d="{start} {end}""#)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ChartConfig, ConfigOverrides};

    fn render(samples: &[Option<f64>], config: &ChartConfig) -> String {
        let series = Series::new(samples).unwrap();
        let scale = Scale::compute(&series, config);
        build_path_data(&series, &scale, PathMode::from_smooth(config.smooth))
    }

    #[test]
    fn default_mode_is_sharp() {
        assert_eq!(PathMode::default(), PathMode::Sharp);
        assert_eq!(PathMode::from_smooth(true), PathMode::Smooth);
    }

    #[test]
    fn sharp_three_points() {
        let d = render(&[Some(1.0), Some(3.0), Some(2.0)], &ChartConfig::default());
        assert_eq!(d, "M 0 38 L 59 0 L 118 19");
    }

    #[test]
    fn smooth_three_points() {
        let config = ChartConfig {
            width: 8.0,
            padding_x: 1.0,
            smooth: true,
            ..ChartConfig::default()
        };
        // x_inc = 3, cubic_inc = 1
        let d = render(&[Some(1.0), Some(3.0), Some(2.0)], &config);
        assert_eq!(d, "M 0 38 C 1 38 2 0 3 0 C 4 0 5 19 6 19");
    }

    #[test]
    fn gap_restarts_with_move() {
        let d = render(
            &[Some(1.0), Some(3.0), None, Some(2.0), Some(1.0)],
            &ChartConfig::default(),
        );
        // x_inc = 29.5; the gap leaves an empty fragment between spaces.
        assert_eq!(d, "M 0 38 L 29.5 0  M 88.5 19 L 118 38");
    }

    #[test]
    fn leading_gap_moves_at_first_present_sample() {
        let d = render(&[None, Some(1.0), Some(3.0)], &ChartConfig::default());
        assert_eq!(d, " M 59 38 L 118 0");
    }

    #[test]
    fn isolated_point_gets_detour() {
        let d = render(&[Some(1.0), None, Some(3.0), None, Some(2.0)], &ChartConfig::default());
        let fragments: Vec<&str> = d.split(' ').collect();
        assert!(d.contains(&format!("M 59 0{ISOLATED_POINT_DETOUR}")), "{d}");
        assert_eq!(fragments.iter().filter(|f| f.is_empty()).count(), 2);
        assert!(d.starts_with(&format!("M 0 38{ISOLATED_POINT_DETOUR}")), "{d}");
    }

    #[test]
    fn smooth_isolated_point_gets_detour() {
        let config = ChartConfig {
            smooth: true,
            ..ChartConfig::default()
        };
        let d = render(&[Some(1.0), None, Some(3.0), None, Some(2.0)], &config);
        assert!(d.contains(&format!("M 59 0{ISOLATED_POINT_DETOUR}")), "{d}");
        assert!(d.starts_with(&format!("M 0 38{ISOLATED_POINT_DETOUR}")), "{d}");
        assert!(d.ends_with(&format!("M 118 19{ISOLATED_POINT_DETOUR}")), "{d}");
        assert!(!d.contains('C'), "{d}");
    }

    #[test]
    fn trailing_point_after_gap_is_isolated() {
        let d = render(&[Some(1.0), Some(2.0), None, Some(3.0)], &ChartConfig::default());
        assert!(d.ends_with(ISOLATED_POINT_DETOUR), "{d}");
    }

    #[test]
    fn smooth_gap_restarts_with_move() {
        let config = ChartConfig {
            smooth: true,
            ..ChartConfig::default()
        };
        let d = render(&[Some(1.0), Some(2.0), None, Some(3.0), Some(1.0)], &config);
        assert!(d.contains(" M 88.5 0 C "), "{d}");
        assert_eq!(d.matches('C').count(), 2);
    }

    #[test]
    fn absent_sample_yields_empty_fragment() {
        let series = Series::new(&[Some(1.0), None]).unwrap();
        let scale = Scale::compute(&series, &ChartConfig::default());
        let point = PlotPoint {
            index: 1,
            value: None,
            prev: Some(1.0),
            null_before: false,
            null_after: true,
            half_align: false,
        };
        assert_eq!(PathMode::Sharp.format_point(&scale, &point), "");
        assert_eq!(PathMode::Smooth.format_point(&scale, &point), "");
    }

    #[test]
    fn flat_series_is_vertically_centered() {
        let d = render(&[Some(4.0), Some(4.0), Some(4.0)], &ChartConfig::default());
        assert_eq!(d, "M 0 19 L 59 19 L 118 19");
    }

    #[test]
    fn baseline_attr_is_half_aligned() {
        let config = ChartConfig::default().resolved(Some(&ConfigOverrides::new().baseline(2.0)));
        let series = Series::new(&[Some(1.0), Some(3.0), Some(2.0)]).unwrap();
        let scale = Scale::compute(&series, &config);
        assert_eq!(
            build_baseline_attr(&series, &scale, config.baseline.value()),
            r#"d="M 0 19.5 L 118 19.5""#
        );
    }

    #[test]
    fn baseline_attr_empty_when_off() {
        let series = Series::new(&[Some(1.0), Some(3.0)]).unwrap();
        let scale = Scale::compute(&series, &ChartConfig::default());
        assert_eq!(build_baseline_attr(&series, &scale, None), "");
    }

    #[test]
    fn baseline_ignores_gaps_at_the_ends() {
        let config = ChartConfig::default().resolved(Some(&ConfigOverrides::new().baseline(1.0)));
        let series = Series::new(&[None, Some(1.0), Some(3.0), Some(2.0), None]).unwrap();
        let scale = Scale::compute(&series, &config);
        // y(1) = 38 -> floor(38) + 0.5
        assert_eq!(
            build_baseline_attr(&series, &scale, config.baseline.value()),
            r#"d="M 0 38.5 L 118 38.5""#
        );
    }
}
