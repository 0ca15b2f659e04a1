use rust_decimal::Decimal;
use std::str::FromStr;

/// How a trailing `B`/`M`/`K` on a value is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MagnitudePolicy {
    /// Drop the letter and keep the number as written: `"1.2B"` is `1.2`.
    /// This is the screener's own convention and the default.
    #[default]
    Informational,
    /// Multiply by the magnitude: `"1.2B"` is `1_200_000_000`.
    Scale,
}

/// Turns scraped metric text into a comparable number.
///
/// Steps, in order: trim, missing sentinels, thousands separators, trailing
/// `%`, trailing magnitude letter, decimal parse. Anything that does not end
/// up as a decimal is `None`.
#[derive(Clone, Debug)]
pub struct ValueNormalizer {
    magnitude: MagnitudePolicy,
    missing: Vec<String>,
}

impl Default for ValueNormalizer {
    fn default() -> Self {
        Self {
            magnitude: MagnitudePolicy::default(),
            missing: vec!["N/A".to_string()],
        }
    }
}

impl ValueNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn magnitude(mut self, policy: MagnitudePolicy) -> Self {
        self.magnitude = policy;
        self
    }

    /// Adds a text that means "no value" (besides `N/A` and the empty string).
    #[must_use]
    pub fn missing_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.missing.push(sentinel.into());
        self
    }

    #[must_use]
    pub const fn magnitude_policy(&self) -> MagnitudePolicy {
        self.magnitude
    }

    /// Parses scraped text into a decimal.
    ///
    /// Returns `None` for empty text, a missing sentinel, or anything that is
    /// not a number once separators and suffixes are removed.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use screener_check::ValueNormalizer;
    ///
    /// let n = ValueNormalizer::new();
    /// assert_eq!(n.normalize("1,234.5%"), Some(Decimal::new(12345, 1)));
    /// assert_eq!(n.normalize("N/A"), None);
    /// ```
    #[must_use]
    pub fn normalize(&self, raw: &str) -> Option<Decimal> {
        let s = raw.trim();
        if s.is_empty() || self.missing.iter().any(|m| m == s) {
            return None;
        }

        let s = s.replace(',', "");
        let s = s.strip_suffix('%').unwrap_or(&s);

        let (digits, scale) = match s.char_indices().last() {
            Some((i, 'B')) => (&s[..i], Decimal::from(1_000_000_000u64)),
            Some((i, 'M')) => (&s[..i], Decimal::from(1_000_000u64)),
            Some((i, 'K')) => (&s[..i], Decimal::from(1_000u64)),
            _ => (s, Decimal::ONE),
        };

        let value = Decimal::from_str(digits.trim()).ok()?;
        match self.magnitude {
            MagnitudePolicy::Informational => Some(value),
            MagnitudePolicy::Scale => value.checked_mul(scale),
        }
    }
}
