use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error as ThisError;

///
/// FieldType
///
/// Declared mapping type of a field as reported by field-capabilities
/// discovery. Types this crate has no rule for are carried as `Other`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum FieldType {
    Byte,
    Date,
    Double,
    Float,
    HalfFloat,
    Integer,
    Keyword,
    Long,
    Other(String),
    ScaledFloat,
    Short,
    Text,
}

impl FieldType {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "byte" => Self::Byte,
            "date" => Self::Date,
            "double" => Self::Double,
            "float" => Self::Float,
            "half_float" => Self::HalfFloat,
            "integer" => Self::Integer,
            "keyword" => Self::Keyword,
            "long" => Self::Long,
            "scaled_float" => Self::ScaledFloat,
            "short" => Self::Short,
            "text" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Byte => "byte",
            Self::Date => "date",
            Self::Double => "double",
            Self::Float => "float",
            Self::HalfFloat => "half_float",
            Self::Integer => "integer",
            Self::Keyword => "keyword",
            Self::Long => "long",
            Self::Other(s) => s,
            Self::ScaledFloat => "scaled_float",
            Self::Short => "short",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Short
                | Self::Integer
                | Self::Long
                | Self::Float
                | Self::Double
                | Self::HalfFloat
                | Self::ScaledFloat
        )
    }

    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date)
    }

    // keyword and text both bucket by term
    #[must_use]
    pub const fn is_term(&self) -> bool {
        matches!(self, Self::Keyword | Self::Text)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Ok(Self::parse(&s))
    }
}

///
/// MetricKind
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[display("avg")]
    Avg,
    #[display("max")]
    Max,
    #[display("min")]
    Min,
    #[display("sum")]
    Sum,
    #[display("value_count")]
    ValueCount,
}

impl MetricKind {
    /// Whether this aggregation is meaningful over a `date` field.
    #[must_use]
    pub const fn supports_date(self) -> bool {
        matches!(self, Self::Min | Self::Max | Self::ValueCount)
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(Self::Avg),
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "sum" => Ok(Self::Sum),
            "value_count" => Ok(Self::ValueCount),
            other => Err(format!("unsupported metric [{other}]")),
        }
    }
}

///
/// TimeValueError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimeValueError {
    #[error("time value is empty")]
    Empty,

    #[error("time value [{0}] has no numeric part")]
    MissingAmount(String),

    #[error("time value [{0}] has an unknown unit")]
    UnknownUnit(String),

    #[error("time value [{0}] is out of range")]
    Overflow(String),
}

///
/// TimeUnit
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TimeUnit {
    #[display("ms")]
    Millis,
    #[display("s")]
    Seconds,
    #[display("m")]
    Minutes,
    #[display("h")]
    Hours,
    #[display("d")]
    Days,
}

impl TimeUnit {
    const fn millis(self) -> u64 {
        match self {
            Self::Millis => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "ms" => Some(Self::Millis),
            "s" => Some(Self::Seconds),
            "m" => Some(Self::Minutes),
            "h" => Some(Self::Hours),
            "d" => Some(Self::Days),
            _ => None,
        }
    }
}

///
/// TimeValue
///
/// Amount plus unit, kept as written so `1h` stays `1h` on the wire
/// rather than collapsing to `60m` or `3600000ms`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeValue {
    amount: u64,
    unit: TimeUnit,
}

impl TimeValue {
    #[must_use]
    pub const fn new(amount: u64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    #[must_use]
    pub const fn seconds(amount: u64) -> Self {
        Self::new(amount, TimeUnit::Seconds)
    }

    #[must_use]
    pub const fn amount(self) -> u64 {
        self.amount
    }

    #[must_use]
    pub const fn unit(self) -> TimeUnit {
        self.unit
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.amount == 0
    }

    /// Wall-clock length, saturating at `u64::MAX` milliseconds.
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_millis(self.amount.saturating_mul(self.unit.millis()))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

impl FromStr for TimeValue {
    type Err = TimeValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeValueError::Empty);
        }

        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);
        if digits.is_empty() {
            return Err(TimeValueError::MissingAmount(s.to_string()));
        }

        let unit = TimeUnit::parse(unit).ok_or_else(|| TimeValueError::UnknownUnit(s.to_string()))?;
        let amount = digits
            .parse::<u64>()
            .map_err(|_| TimeValueError::Overflow(s.to_string()))?;

        Ok(Self::new(amount, unit))
    }
}

impl Serialize for TimeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_value_keeps_written_unit() {
        let tv: TimeValue = "1h".parse().expect("1h parses");

        assert_eq!(tv, TimeValue::new(1, TimeUnit::Hours));
        assert_eq!(tv.to_string(), "1h");
        assert_eq!(tv.as_duration(), Duration::from_secs(3_600));
    }

    #[test]
    fn time_value_distinguishes_ms_from_minutes() {
        let ms: TimeValue = "250ms".parse().expect("ms parses");
        let m: TimeValue = "5m".parse().expect("m parses");

        assert_eq!(ms.unit(), TimeUnit::Millis);
        assert_eq!(m.unit(), TimeUnit::Minutes);
    }

    #[test]
    fn time_value_rejects_malformed_input() {
        assert_eq!("".parse::<TimeValue>(), Err(TimeValueError::Empty));
        assert!(matches!(
            "h".parse::<TimeValue>(),
            Err(TimeValueError::MissingAmount(_))
        ));
        assert!(matches!(
            "10y".parse::<TimeValue>(),
            Err(TimeValueError::UnknownUnit(_))
        ));
        assert!(matches!(
            "99999999999999999999999s".parse::<TimeValue>(),
            Err(TimeValueError::Overflow(_))
        ));
    }

    #[test]
    fn field_type_round_trips_unknown_names() {
        let ty = FieldType::parse("geo_point");

        assert_eq!(ty, FieldType::Other("geo_point".to_string()));
        assert_eq!(ty.as_str(), "geo_point");
        assert!(!ty.is_numeric());
    }

    #[test]
    fn metric_kind_display_matches_wire_name() {
        assert_eq!(MetricKind::ValueCount.to_string(), "value_count");
        assert_eq!("value_count".parse::<MetricKind>(), Ok(MetricKind::ValueCount));
        assert!("median".parse::<MetricKind>().is_err());
    }
}
