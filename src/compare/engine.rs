use super::model::Verdict;
use super::normalize::ValueNormalizer;
use crate::filters::Operator;

/// Evaluates one condition against one scraped value.
///
/// `NA` when there is no operator, the threshold is empty, or either side
/// does not normalize to a number. Never panics.
#[must_use]
pub fn evaluate(
    normalizer: &ValueNormalizer,
    operator: Option<Operator>,
    threshold: &str,
    actual: &str,
) -> Verdict {
    let Some(op) = operator else {
        return Verdict::Na;
    };
    if threshold.trim().is_empty() {
        return Verdict::Na;
    }
    let (Some(a), Some(t)) = (normalizer.normalize(actual), normalizer.normalize(threshold)) else {
        return Verdict::Na;
    };

    let pass = match op {
        Operator::Ge => a >= t,
        Operator::Le => a <= t,
        Operator::Eq => a == t,
        Operator::Gt => a > t,
        Operator::Lt => a < t,
    };
    Verdict::from_pass(pass)
}
