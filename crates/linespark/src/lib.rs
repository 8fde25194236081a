//! linespark: Pure SVG sparkline renderer (sans-IO).
//!
//! Turns a single series of optional numbers into a standalone SVG
//! string through:
//! configuration resolution -> scale computation -> path generation ->
//! template rendering.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! samples and returns a `String`. Reading input and writing files
//! lives in `linespark-cli`.
//!
//! # Examples
//!
//! ```
//! use linespark::{ConfigOverrides, SparklineChart};
//!
//! let mut chart = SparklineChart::new();
//! chart.configure(&ConfigOverrides::new().color("#08f"));
//!
//! let svg = chart
//!     .build_chart(&[Some(1.0), None, Some(3.0), Some(2.0)], Some(&ConfigOverrides::new().smooth(true)))
//!     .unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod chart;
pub mod config;
pub mod format;
pub mod path;
pub mod scale;
pub mod template;
pub mod types;

pub use chart::SparklineChart;
pub use config::{Baseline, ChartConfig, ConfigOverrides};
pub use path::{PathMode, PointFormatter};
pub use scale::Scale;
pub use template::ChartRenderData;
pub use types::{ChartError, Sample, Series};
