//! The chart instance: persistent base configuration plus rendering.

use crate::config::{ChartConfig, ConfigOverrides};
use crate::path::{PathMode, build_baseline_attr, build_path_data};
use crate::scale::Scale;
use crate::template::{self, ChartRenderData};
use crate::types::{ChartError, Sample, Series};

/// A sparkline renderer holding a base configuration.
///
/// [`configure`](Self::configure) is the only operation that mutates the
/// instance. [`build_chart`](Self::build_chart) works on a copy of the
/// base configuration, so per-call overrides never leak into later
/// calls and repeated renders of the same input are identical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparklineChart {
    base: ChartConfig,
}

impl SparklineChart {
    /// Create a chart with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart whose base configuration is the defaults with
    /// `initial` merged on top.
    #[must_use]
    pub fn with_config(initial: &ConfigOverrides) -> Self {
        let mut chart = Self::new();
        chart.configure(initial);
        chart
    }

    /// Shallow-merge `overrides` into the base configuration.
    pub fn configure(&mut self, overrides: &ConfigOverrides) {
        self.base.merge(overrides);
    }

    /// The persistent base configuration.
    #[must_use]
    pub const fn base_config(&self) -> &ChartConfig {
        &self.base
    }

    /// The configuration a render with `overrides` would use.
    #[must_use]
    pub fn effective_config(&self, overrides: Option<&ConfigOverrides>) -> ChartConfig {
        self.base.resolved(overrides)
    }

    /// Render `samples` as an SVG string.
    ///
    /// `overrides` apply to this call only.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidSeries`] if fewer than two samples are
    /// supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use linespark::SparklineChart;
    ///
    /// let chart = SparklineChart::new();
    /// let svg = chart.build_chart(&[Some(1.0), Some(3.0), Some(2.0)], None).unwrap();
    /// assert!(svg.contains(r#"d="M 0 38 L 59 0 L 118 19""#));
    /// ```
    pub fn build_chart(
        &self,
        samples: &[Sample],
        overrides: Option<&ConfigOverrides>,
    ) -> Result<String, ChartError> {
        let series = Series::new(samples)?;
        let config = self.effective_config(overrides);
        tracing::trace!(?config, "resolved chart configuration");

        let scale = Scale::compute(&series, &config);
        tracing::debug!(
            samples = series.len(),
            min = scale.min,
            max = scale.max,
            y_scale = scale.y_scale,
            x_inc = scale.x_inc,
            "computed chart scale"
        );

        let data = ChartRenderData {
            path_data: build_path_data(&series, &scale, PathMode::from_smooth(config.smooth)),
            baseline: build_baseline_attr(&series, &scale, config.baseline.value()),
        };

        Ok(template::render(&data, &config))
    }
}
