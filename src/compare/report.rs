use super::alias::alias_of;
use super::engine::evaluate;
use super::model::{CompanyMetrics, ComparisonRow, Descriptions, Verdict};
use super::normalize::ValueNormalizer;
use crate::filters::FilterDescriptor;

/// Text shown for a metric the snapshot does not have.
pub const MISSING_VALUE: &str = "N/A";

/// Builds one row per descriptor, in order.
#[derive(Clone, Debug, Default)]
pub struct ComparisonReport {
    normalizer: ValueNormalizer,
}

impl ComparisonReport {
    /// Report that evaluates values with `normalizer`.
    pub fn new(normalizer: ValueNormalizer) -> Self {
        Self { normalizer }
    }

    /// One row per descriptor, in descriptor order.
    ///
    /// A value is looked up under the descriptor's label, then under its
    /// alias. A missing value shows as [`MISSING_VALUE`] with an `NA`
    /// verdict. Descriptions are looked up the same way when given.
    #[must_use]
    pub fn build(
        &self,
        descriptors: &[FilterDescriptor],
        metrics: &CompanyMetrics,
        descriptions: Option<&Descriptions>,
    ) -> Vec<ComparisonRow> {
        descriptors
            .iter()
            .map(|d| self.row(d, metrics, descriptions))
            .collect()
    }

    fn row(
        &self,
        d: &FilterDescriptor,
        metrics: &CompanyMetrics,
        descriptions: Option<&Descriptions>,
    ) -> ComparisonRow {
        let (actual, verdict) = match lookup(&d.label, |k| metrics.get(k)) {
            Some(value) => (
                value.to_string(),
                evaluate(&self.normalizer, d.operator, &d.threshold, value),
            ),
            None => (MISSING_VALUE.to_string(), Verdict::Na),
        };

        ComparisonRow {
            label: d.label.clone(),
            condition: d.condition_text(),
            actual,
            verdict,
            description: descriptions
                .and_then(|ds| lookup(&d.label, |k| ds.get(k)))
                .map(str::to_string),
        }
    }
}

/// Tries `label`, then its alias.
fn lookup<'a>(label: &str, get: impl Fn(&str) -> Option<&'a str>) -> Option<&'a str> {
    get(label).or_else(|| alias_of(label).and_then(&get))
}
