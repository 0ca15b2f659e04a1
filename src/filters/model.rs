use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison direction of a screener filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `actual >= threshold`
    Ge,
    /// `actual <= threshold`
    Le,
    /// `actual == threshold` (exact, no epsilon)
    Eq,
    /// `actual > threshold`
    Gt,
    /// `actual < threshold`
    Lt,
}

impl Operator {
    /// Display symbol used in condition text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ge => "≥",
            Self::Le => "≤",
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Table entry for one known filter code: what the code means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterTemplate {
    /// Human-readable metric name, in the descriptor label vocabulary.
    pub label: String,
    /// Comparison direction.
    pub operator: Operator,
    /// Threshold text, optionally with a `%` or `B`/`M`/`K` unit.
    pub threshold: String,
}

impl FilterTemplate {
    pub fn new(label: impl Into<String>, operator: Operator, threshold: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            operator,
            threshold: threshold.into(),
        }
    }
}

/// A decoded screener filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    /// The raw filter code from the URL.
    pub code: String,
    /// Metric label, used to look the value up in the company metrics.
    pub label: String,
    /// `None` for a fallback descriptor built from an unknown code.
    pub operator: Option<Operator>,
    /// Threshold text; empty for a fallback descriptor.
    pub threshold: String,
}

impl FilterDescriptor {
    pub(crate) fn from_template(code: &str, t: &FilterTemplate) -> Self {
        Self {
            code: code.to_string(),
            label: t.label.clone(),
            operator: Some(t.operator),
            threshold: t.threshold.clone(),
        }
    }

    /// Descriptor for a code the table does not know: the raw code becomes
    /// the label and there is no condition.
    #[must_use]
    pub fn fallback(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            label: code.clone(),
            code,
            operator: None,
            threshold: String::new(),
        }
    }

    /// True if this descriptor was built from an unknown code.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.operator.is_none()
    }

    /// `"<symbol> <threshold>"`, or an empty string for a fallback descriptor.
    #[must_use]
    pub fn condition_text(&self) -> String {
        match self.operator {
            Some(op) if !self.threshold.is_empty() => format!("{} {}", op.symbol(), self.threshold),
            _ => String::new(),
        }
    }
}
