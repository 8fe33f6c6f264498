use serde::{Deserialize, Deserializer, Serialize};

/// Shortest projection horizon accepted from user input, in months.
pub const MIN_HORIZON_MONTHS: u32 = 1;

/// Longest projection horizon accepted from user input, in months (30 years).
pub const MAX_HORIZON_MONTHS: u32 = 360;

/// Horizon used on first load and when the input cannot be parsed.
pub const DEFAULT_HORIZON_MONTHS: u32 = 60;

/// Projection horizon in months, always within [1, 360].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PredictionHorizon(u32);

impl PredictionHorizon {
    /// Build a horizon, clamping into [1, 360].
    #[must_use]
    pub fn new(months: i64) -> Self {
        let clamped = months.clamp(MIN_HORIZON_MONTHS as i64, MAX_HORIZON_MONTHS as i64);
        Self(clamped as u32)
    }

    /// Parse the horizon input field. Non-integer text falls back to the default.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(months) => Self::new(months),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn months(self) -> u32 {
        self.0
    }

    /// Split into whole years and remaining months for display.
    #[must_use]
    pub fn label(self) -> HorizonLabel {
        HorizonLabel {
            years: self.0 / 12,
            months: self.0 % 12,
        }
    }
}

impl Default for PredictionHorizon {
    fn default() -> Self {
        Self(DEFAULT_HORIZON_MONTHS)
    }
}

impl std::fmt::Display for PredictionHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} months", self.0)
    }
}

impl<'de> Deserialize<'de> for PredictionHorizon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Fractional values from hand-edited documents are truncated.
        let raw = f64::deserialize(deserializer)?;
        if !raw.is_finite() {
            return Err(serde::de::Error::custom("prediction horizon must be finite"));
        }
        Ok(Self::new(raw.trunc() as i64))
    }
}

/// A horizon expressed as whole years plus remaining months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonLabel {
    pub years: u32,
    pub months: u32,
}

impl std::fmt::Display for HorizonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}
