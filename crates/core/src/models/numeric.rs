use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single numeric input field as the user typed it: either a finite number or unset.
///
/// Unset covers the empty string, `null`, non-numeric text and non-finite values.
/// Every derived calculation reads an unset field as zero via [`NumericInput::value`].
///
/// On the wire a set field is a JSON number and an unset field is `""`, which keeps
/// documents compatible with the dashboard's historical export format. Numeric
/// strings such as `"1500000"` are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericInput(Option<f64>);

impl NumericInput {
    pub const UNSET: Self = Self(None);

    /// Wrap a number. Non-finite values become unset.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self(None)
        }
    }

    /// Parse free-form text from an input widget. Never fails.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self(None);
        }
        trimmed.parse::<f64>().map(Self::new).unwrap_or(Self(None))
    }

    /// The number used in calculations (unset reads as `0.0`).
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    /// The stored number, if any.
    #[must_use]
    pub fn get(self) -> Option<f64> {
        self.0
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self.0.is_some()
    }

    /// Clamp a set value to be at least zero. Unset stays unset.
    #[must_use]
    pub fn non_negative(self) -> Self {
        Self(self.0.map(|v| v.max(0.0)))
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for NumericInput {
    fn from(value: Option<f64>) -> Self {
        value.map(Self::new).unwrap_or(Self(None))
    }
}

impl std::fmt::Display for NumericInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => Ok(()),
        }
    }
}

impl Serialize for NumericInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericInputVisitor)
    }
}

struct NumericInputVisitor;

impl<'de> Visitor<'de> for NumericInputVisitor {
    type Value = NumericInput;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a number, a numeric string, an empty string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(NumericInput::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NumericInput::new(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NumericInput::new(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(NumericInput::parse(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NumericInput::UNSET)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NumericInput::UNSET)
    }
}

/// Deserialize a plain `f64` with the same leniency as [`NumericInput`]
/// (unset reads as `0.0`).
pub(crate) fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumericInput::deserialize(deserializer).map(NumericInput::value)
}
