//! Shared types for the linespark renderer.

use serde::{Deserialize, Serialize};

/// A single data point: a number, or `None` for a missing sample.
pub type Sample = Option<f64>;

/// Minimum number of samples required to render a chart.
pub const MIN_SERIES_LEN: usize = 2;

/// An owned, validated copy of the caller's samples.
///
/// Rendering always works on this copy so the caller's slice is never
/// touched. `NaN` samples are normalized to absent on construction.
/// Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>")]
pub struct Series(Vec<Sample>);

impl Series {
    /// Copy `samples` into a new series.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidSeries`] if fewer than
    /// [`MIN_SERIES_LEN`] samples are supplied.
    pub fn new(samples: &[Sample]) -> Result<Self, ChartError> {
        if samples.len() < MIN_SERIES_LEN {
            return Err(ChartError::InvalidSeries { len: samples.len() });
        }
        Ok(Self(
            samples
                .iter()
                .map(|s| s.filter(|v| !v.is_nan()))
                .collect(),
        ))
    }

    /// Returns the number of samples, absent ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a constructed series holds at least two samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of all samples.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.0
    }

    /// Returns the sample at `index`, treating out-of-range as absent.
    #[must_use]
    pub fn get(&self, index: usize) -> Sample {
        self.0.get(index).copied().flatten()
    }

    /// Iterate over the present (non-absent) values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(|s| *s)
    }
}

impl TryFrom<Vec<Sample>> for Series {
    type Error = ChartError;

    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        Self::new(&samples)
    }
}

/// Errors that can occur while building a chart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ChartError {
    /// The supplied series is too short to draw a line.
    #[error("series must be a one-dimensional sequence containing at least 2 samples (got {len})")]
    InvalidSeries {
        /// Number of samples actually supplied.
        len: usize,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(Series::new(&[]), Err(ChartError::InvalidSeries { len: 0 }));
    }

    #[test]
    fn single_sample_is_rejected() {
        assert_eq!(
            Series::new(&[Some(4.0)]),
            Err(ChartError::InvalidSeries { len: 1 })
        );
    }

    #[test]
    fn two_absent_samples_are_accepted() {
        let series = Series::new(&[None, None]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.values().count(), 0);
    }

    #[test]
    fn nan_becomes_absent() {
        let series = Series::new(&[Some(1.0), Some(f64::NAN), Some(2.0)]).unwrap();
        assert_eq!(series.samples(), &[Some(1.0), None, Some(2.0)]);
    }

    #[test]
    fn get_out_of_range_is_absent() {
        let series = Series::new(&[Some(1.0), Some(2.0)]).unwrap();
        assert_eq!(series.get(1), Some(2.0));
        assert_eq!(series.get(2), None);
    }

    #[test]
    fn error_message_names_length() {
        let msg = ChartError::InvalidSeries { len: 1 }.to_string();
        assert!(msg.contains("at least 2 samples"), "{msg}");
        assert!(msg.contains("got 1"), "{msg}");
    }

    #[test]
    fn deserialize_rejects_short_series() {
        assert!(serde_json::from_str::<Series>("[]").is_err());
        let err = serde_json::from_str::<Series>("[1.0]").unwrap_err();
        assert!(err.to_string().contains("got 1"), "{err}");
    }

    #[test]
    fn deserialize_validates_like_new() {
        let series: Series = serde_json::from_str("[1.0, null, 3.5]").unwrap();
        assert_eq!(series, Series::new(&[Some(1.0), None, Some(3.5)]).unwrap());
    }

    #[test]
    fn error_serde_roundtrip() {
        let err = ChartError::InvalidSeries { len: 0 };
        let json = serde_json::to_string(&err).unwrap();
        let back: ChartError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
