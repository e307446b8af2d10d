//! Chart aggregations over the visible sample set.
//!
//! Both aggregations recompute in full on every filter change; dataset
//! sizes are in the hundreds to low thousands, so incremental updates
//! would buy nothing.

use super::dataset::{Sample, SampleStatus};
use super::filter::VisibilityMap;

/// Tally of visible samples per workflow status. Always carries all four
/// buckets so the chart never shifts layout when a status count drops to
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    counts: [u32; 4],
}

impl StatusCounts {
    pub fn from_visible(samples: &[Sample], visibility: &VisibilityMap) -> Self {
        let mut counts = [0u32; 4];
        for sample in samples {
            if visibility.is_visible(&sample.name) {
                counts[sample.status.index()] += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, status: SampleStatus) -> u32 {
        self.counts[status.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Buckets in the canonical `[registered, collected, extracted,
    /// sequenced]` order, absent statuses included as zero.
    pub fn iter(&self) -> impl Iterator<Item = (SampleStatus, u32)> + '_ {
        SampleStatus::ALL
            .into_iter()
            .map(|status| (status, self.counts[status.index()]))
    }
}

/// Category code for regular sample points in the scatter strip.
pub const CATEGORY_SAMPLE: u8 = 0;
/// Category code for blank (control) sample points.
pub const CATEGORY_BLANK: u8 = 1;

/// The concentration distribution for the scatter chart: one flattened
/// point per DNA extraction of every visible sample, and a second point
/// set restricted to blanks. Points are a multiset in dataset order; no
/// dedup, no sorting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConcentrationSeries {
    pub samples: Vec<(u8, f64)>,
    pub blanks: Vec<(u8, f64)>,
}

impl ConcentrationSeries {
    pub fn from_visible(samples: &[Sample], visibility: &VisibilityMap) -> Self {
        let mut series = Self::default();
        for sample in samples {
            if !visibility.is_visible(&sample.name) {
                continue;
            }
            for dna in &sample.dnas {
                series.samples.push((CATEGORY_SAMPLE, dna.concentration));
                if sample.blank {
                    series.blanks.push((CATEGORY_BLANK, dna.concentration));
                }
            }
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() && self.blanks.is_empty()
    }

    /// Largest concentration across both point sets, for chart scaling.
    pub fn max_concentration(&self) -> f64 {
        self.samples
            .iter()
            .chain(self.blanks.iter())
            .map(|(_, value)| *value)
            .fold(0.0, f64::max)
    }
}
