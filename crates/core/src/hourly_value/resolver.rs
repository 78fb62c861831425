//! Hourly-value resolver
//!
//! Pure, infallible resolution of a client's estimated hourly value. Every
//! lookup has a defined fallback, so any job title / location / revenue
//! combination produces a usable rate: unknown title → default profile,
//! unknown location → table default → national average, unrecognized
//! revenue bracket → lowest tier.

use std::sync::Arc;

use reclaim_common::rounding::round_to_nearest_five;
use reclaim_domain::constants::DEFAULT_HOURLY_VALUE;
use reclaim_domain::{
    ExperienceBracket, HourlyValueRequest, HourlyValueResult, RateBasis, WageProfile,
};

use super::knowledge_base::WageKnowledgeBase;

/// Resolves job profiles into hourly-value estimates
///
/// Stateless apart from the shared, read-only knowledge base; safe to call
/// concurrently from any number of request handlers.
pub struct HourlyValueResolver {
    kb: Arc<WageKnowledgeBase>,
}

impl Default for HourlyValueResolver {
    fn default() -> Self {
        Self::new(WageKnowledgeBase::shared())
    }
}

impl HourlyValueResolver {
    /// Create a resolver over a specific knowledge base
    #[must_use]
    pub fn new(kb: Arc<WageKnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Estimate the hourly value for a job profile
    ///
    /// Never fails and is idempotent: identical requests always yield
    /// identical results. The returned rate is positive and rounded to the
    /// nearest $5, tagged with the lookup branch that produced it.
    #[must_use]
    pub fn resolve(&self, request: &HourlyValueRequest) -> HourlyValueResult {
        let title = request.job_title.trim();
        let (profile, is_default) = self.kb.profile_for(title);

        let (rate, basis, detail) = self.pick_rate(request, title, profile, is_default);
        let calculated = round_to_nearest_five(rate);

        tracing::debug!(
            job_title = title,
            basis = ?basis,
            raw_rate = rate,
            calculated_hourly_value = calculated,
            "resolved hourly value"
        );

        HourlyValueResult {
            calculated_hourly_value: calculated,
            data_source: profile.source.clone(),
            confidence_level: basis.confidence(),
            methodology: methodology(basis, title, &detail),
            rate_basis: basis,
        }
    }

    fn pick_rate(
        &self,
        request: &HourlyValueRequest,
        title: &str,
        profile: &WageProfile,
        is_default: bool,
    ) -> (f64, RateBasis, String) {
        // Ownership titles are valued primarily by company revenue bracket
        if self.kb.is_ownership_title(title) {
            let bracket = request
                .company_revenue_range
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty());
            if let (Some(bracket), Some(tiers)) = (bracket, profile.revenue_rates.as_deref()) {
                // Exact string match only; anything else falls to the
                // lowest defined tier rather than erroring
                if let Some(tier) = tiers.iter().find(|t| t.bracket == bracket) {
                    return (tier.rate, RateBasis::RevenueBracket, tier.bracket.clone());
                }
                if let Some(lowest) = tiers.first() {
                    return (lowest.rate, RateBasis::RevenueFloor, lowest.bracket.clone());
                }
            }
        }

        // Location-adjusted base rate for everyone else (and for ownership
        // titles without a usable revenue bracket)
        let mut rate = profile.national_average.unwrap_or(DEFAULT_HOURLY_VALUE);
        let mut basis =
            if is_default { RateBasis::DefaultProfile } else { RateBasis::NationalAverage };
        let mut detail = String::new();

        let location =
            request.location_state.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if let (Some(location), Some(table)) = (location, profile.location_rates.as_ref()) {
            if let Some(found) = table.rates.get(location) {
                rate = *found;
                basis = RateBasis::LocationRate;
                detail = location.to_string();
            } else if let Some(default_rate) = table.default_rate {
                rate = default_rate;
                basis = RateBasis::LocationDefault;
            }
        }

        // Experience brackets, where defined, override the location base
        if let (Some(years), Some(table)) =
            (request.experience_years, profile.experience_rates.as_ref())
        {
            let bracket = ExperienceBracket::from_years(years);
            if let Some(found) = table.get(&bracket) {
                rate = *found;
                basis = RateBasis::ExperienceBracket;
                detail = bracket.label().to_string();
            }
        }

        (rate, basis, detail)
    }
}

/// Human-readable description of how a value was derived
fn methodology(basis: RateBasis, title: &str, detail: &str) -> String {
    match basis {
        RateBasis::RevenueBracket => {
            format!("Revenue-based estimate for {title} ({detail} bracket)")
        }
        RateBasis::RevenueFloor => {
            format!("Revenue-based estimate for {title} (lowest defined bracket, {detail})")
        }
        RateBasis::LocationRate => format!("Location-adjusted estimate for {title} in {detail}"),
        RateBasis::LocationDefault => {
            format!("Location-adjusted estimate for {title} (regional default)")
        }
        RateBasis::ExperienceBracket => {
            format!("Experience-adjusted estimate for {title} ({detail})")
        }
        RateBasis::NationalAverage => format!("National average estimate for {title}"),
        RateBasis::DefaultProfile => {
            "Conservative default estimate (unrecognized job title)".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use reclaim_domain::ConfidenceLevel;

    use super::*;

    fn resolver() -> HourlyValueResolver {
        HourlyValueResolver::default()
    }

    fn request(
        title: &str,
        location: Option<&str>,
        revenue: Option<&str>,
        years: Option<u32>,
    ) -> HourlyValueRequest {
        HourlyValueRequest {
            job_title: title.to_string(),
            location_state: location.map(String::from),
            company_revenue_range: revenue.map(String::from),
            experience_years: years,
        }
    }

    #[test]
    fn test_ceo_revenue_bracket() {
        let result = resolver().resolve(&request("CEO", None, Some("$1M-$5M"), None));
        assert_eq!(result.calculated_hourly_value, 100.0);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
        assert_eq!(result.rate_basis, RateBasis::RevenueBracket);
        assert!(result.data_source.contains("Kruze_Consulting_2025"));
        assert!(result.methodology.contains("CEO"));
    }

    #[test]
    fn test_ownership_unrecognized_bracket_falls_to_lowest_tier() {
        // No fuzzy matching: an unknown label is treated as absent
        let result = resolver().resolve(&request("Founder", None, Some("$3M or so"), None));
        assert_eq!(result.calculated_hourly_value, 75.0);
        assert_eq!(result.rate_basis, RateBasis::RevenueFloor);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn test_ownership_without_bracket_uses_national_average() {
        let result = resolver().resolve(&request("Business Owner", None, None, None));
        assert_eq!(result.calculated_hourly_value, 100.0);
        assert_eq!(result.rate_basis, RateBasis::NationalAverage);
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_real_estate_agent_in_california_rounds_to_fifty() {
        let result =
            resolver().resolve(&request("Real Estate Agent", Some("California"), None, None));
        // Table rate is 52; rounding to the nearest $5 lands on 50
        assert_eq!(result.calculated_hourly_value, 50.0);
        assert_eq!(result.rate_basis, RateBasis::LocationRate);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
        assert!(result.methodology.contains("California"));
    }

    #[test]
    fn test_unknown_location_falls_back_to_table_default() {
        let result =
            resolver().resolve(&request("Real Estate Agent", Some("Atlantis"), None, None));
        assert_eq!(result.calculated_hourly_value, 45.0);
        assert_eq!(result.rate_basis, RateBasis::LocationDefault);
    }

    #[test]
    fn test_empty_location_is_treated_as_absent() {
        let result = resolver().resolve(&request("Real Estate Agent", Some("   "), None, None));
        assert_eq!(result.rate_basis, RateBasis::NationalAverage);
        assert_eq!(result.calculated_hourly_value, 45.0);
    }

    #[test]
    fn test_experience_bracket_overrides_location_base() {
        let result =
            resolver().resolve(&request("Attorney", Some("California"), None, Some(12)));
        assert_eq!(result.calculated_hourly_value, 225.0);
        assert_eq!(result.rate_basis, RateBasis::ExperienceBracket);
        assert!(result.methodology.contains("10+ years"));
    }

    #[test]
    fn test_unknown_title_uses_default_profile() {
        let result = resolver().resolve(&request("Dragon Wrangler", Some("Texas"), None, Some(8)));
        assert_eq!(result.calculated_hourly_value, 50.0);
        assert_eq!(result.rate_basis, RateBasis::DefaultProfile);
        assert_eq!(result.confidence_level, ConfidenceLevel::Low);
        assert!(result.data_source.contains("Conservative_estimate"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let req = request("Software Engineer", Some("Washington"), None, Some(4));
        let r = resolver();
        assert_eq!(r.resolve(&req), r.resolve(&req));
    }

    #[test]
    fn test_all_rates_are_positive_multiples_of_five() {
        let r = resolver();
        let titles = ["CEO", "Attorney", "Accountant", "Physician", "Nobody Knows This Job"];
        for title in titles {
            let result = r.resolve(&request(title, Some("California"), Some("$25M+"), Some(7)));
            assert!(result.calculated_hourly_value > 0.0);
            assert_eq!(result.calculated_hourly_value % 5.0, 0.0, "title {title}");
        }
    }
}
