//! Wage-estimation types
//!
//! The wage knowledge base is a set of [`WageProfile`] records keyed by job
//! title. A profile can carry several lookup strategies at once (location
//! table, experience brackets, revenue brackets, national average); which one
//! fires is recorded explicitly as a [`RateBasis`] so confidence is a
//! deterministic function of the lookup branch, not of object shape.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Coarse classification of how directly an hourly-value estimate was
/// derived from a specific lookup versus a generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ConfidenceLevel {
    /// A specific table row (revenue bracket, location, experience) matched
    High,
    /// A known profile resolved, but only via its national average
    Medium,
    /// The generic default profile was used (unknown job title)
    Low,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// Which lookup branch produced a calculated hourly value.
///
/// Replaces the implicit "was the default profile object used" inference:
/// every resolution tags its result with the branch that fired, and the
/// confidence level is derived from that tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum RateBasis {
    /// Ownership title valued by an exact revenue-bracket match
    RevenueBracket,
    /// Ownership title with an unrecognized bracket, valued at the lowest
    /// revenue tier the profile defines
    RevenueFloor,
    /// Location table contained the supplied state
    LocationRate,
    /// Location table fell back to its own default entry
    LocationDefault,
    /// Experience bracket overrode the location-adjusted base
    ExperienceBracket,
    /// Known profile, national average only
    NationalAverage,
    /// Unknown title resolved through the generic default profile
    DefaultProfile,
}

impl RateBasis {
    /// Confidence level implied by this lookup branch
    #[must_use]
    pub const fn confidence(self) -> ConfidenceLevel {
        match self {
            Self::DefaultProfile => ConfidenceLevel::Low,
            Self::NationalAverage => ConfidenceLevel::Medium,
            Self::RevenueBracket
            | Self::RevenueFloor
            | Self::LocationRate
            | Self::LocationDefault
            | Self::ExperienceBracket => ConfidenceLevel::High,
        }
    }
}

/// Experience bracket for titles whose rate scales with years worked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ExperienceBracket {
    /// 0-2 years
    Early,
    /// 3-5 years
    Mid,
    /// 6-10 years
    Senior,
    /// More than 10 years
    Veteran,
}

impl ExperienceBracket {
    /// Map years of experience onto a bracket (upper bounds inclusive)
    #[must_use]
    pub const fn from_years(years: u32) -> Self {
        match years {
            0..=2 => Self::Early,
            3..=5 => Self::Mid,
            6..=10 => Self::Senior,
            _ => Self::Veteran,
        }
    }

    /// Human-readable bracket label as used in methodology strings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Early => "0-2 years",
            Self::Mid => "3-5 years",
            Self::Senior => "5-10 years",
            Self::Veteran => "10+ years",
        }
    }
}

/// Location-indexed hourly rates with an explicit table-level fallback
///
/// The fallback is a named field rather than a magic `"default"` key so the
/// resolver can distinguish an exact state hit from a table default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LocationRates {
    /// State/region name → hourly rate
    pub rates: HashMap<String, f64>,
    /// Rate used when the supplied location is absent from `rates`
    pub default_rate: Option<f64>,
}

/// One revenue bracket and its hourly rate
///
/// Profiles hold these in an ordered list, lowest bracket first, so the
/// "fall back to the lowest bucket" policy never depends on map iteration
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RevenueTier {
    /// Bracket label, matched exactly (e.g. `"$1M-$5M"`)
    pub bracket: String,
    /// Hourly rate in dollars
    pub rate: f64,
}

/// Static wage knowledge-base entry for one job title
///
/// Invariant: every profile resolves to some numeric rate for any valid
/// input combination; the built-in catalogue guarantees this by giving
/// every profile a national average.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WageProfile {
    /// National average hourly rate, the base for location adjustment
    pub national_average: Option<f64>,
    /// Optional location adjustment table
    pub location_rates: Option<LocationRates>,
    /// Optional experience-bracket overrides
    pub experience_rates: Option<HashMap<ExperienceBracket, f64>>,
    /// Optional revenue brackets (ownership titles), ordered lowest first
    pub revenue_rates: Option<Vec<RevenueTier>>,
    /// Citation for where the figures came from
    pub source: String,
}

/// Input supplied by the client registration/update handler
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HourlyValueRequest {
    /// Job title as entered by the client
    pub job_title: String,
    /// US state or region, if known
    pub location_state: Option<String>,
    /// Company revenue bracket label, if known (ownership titles)
    pub company_revenue_range: Option<String>,
    /// Years of professional experience, if known
    pub experience_years: Option<u32>,
}

impl HourlyValueRequest {
    /// Request with just a job title
    #[must_use]
    pub fn for_title(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            location_state: None,
            company_revenue_range: None,
            experience_years: None,
        }
    }
}

/// Result of resolving a client's estimated hourly value
///
/// Immutable once produced; clients may override the value manually, but
/// the calculated value and its provenance are retained for re-derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HourlyValueResult {
    /// Estimated hourly value, positive and rounded to the nearest $5
    pub calculated_hourly_value: f64,
    /// Citation of the wage data the estimate came from
    pub data_source: String,
    /// Confidence classification derived from the lookup branch
    pub confidence_level: ConfidenceLevel,
    /// Human-readable description of how the value was derived
    pub methodology: String,
    /// The lookup branch that produced the rate
    pub rate_basis: RateBasis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_bracket_boundaries() {
        assert_eq!(ExperienceBracket::from_years(0), ExperienceBracket::Early);
        assert_eq!(ExperienceBracket::from_years(2), ExperienceBracket::Early);
        assert_eq!(ExperienceBracket::from_years(3), ExperienceBracket::Mid);
        assert_eq!(ExperienceBracket::from_years(5), ExperienceBracket::Mid);
        assert_eq!(ExperienceBracket::from_years(6), ExperienceBracket::Senior);
        assert_eq!(ExperienceBracket::from_years(10), ExperienceBracket::Senior);
        assert_eq!(ExperienceBracket::from_years(11), ExperienceBracket::Veteran);
    }

    #[test]
    fn test_confidence_from_basis() {
        assert_eq!(RateBasis::RevenueBracket.confidence(), ConfidenceLevel::High);
        assert_eq!(RateBasis::RevenueFloor.confidence(), ConfidenceLevel::High);
        assert_eq!(RateBasis::LocationRate.confidence(), ConfidenceLevel::High);
        assert_eq!(RateBasis::NationalAverage.confidence(), ConfidenceLevel::Medium);
        assert_eq!(RateBasis::DefaultProfile.confidence(), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        let json = serde_json::to_string(&ConfidenceLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: ConfidenceLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, ConfidenceLevel::Medium);
    }
}
