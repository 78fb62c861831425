//! Static wage knowledge base
//!
//! Title-keyed [`WageProfile`] records plus the set of ownership titles
//! that are valued by company revenue rather than by wage tables. The
//! catalogue is built once at process start and never mutated; replacing
//! it at runtime would mean swapping in a whole new immutable instance.
//!
//! The figures are a configurable knowledge base, not ground truth; each
//! profile carries a citation for where its numbers came from.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use reclaim_domain::constants::DEFAULT_HOURLY_VALUE;
use reclaim_domain::{ExperienceBracket, LocationRates, RevenueTier, WageProfile};

/// Citation attached to the generic default profile
pub const DEFAULT_PROFILE_SOURCE: &str = "Conservative_estimate_US_median_knowledge_worker";

static SHARED: Lazy<Arc<WageKnowledgeBase>> = Lazy::new(|| Arc::new(WageKnowledgeBase::builtin()));

/// Immutable catalogue of wage profiles keyed by (lowercased) job title
#[derive(Debug)]
pub struct WageKnowledgeBase {
    profiles: HashMap<String, WageProfile>,
    ownership_titles: HashSet<String>,
    default_profile: WageProfile,
}

impl WageKnowledgeBase {
    /// Process-wide shared instance of the built-in catalogue
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Look up the profile for a job title
    ///
    /// Matching is case-insensitive on the trimmed title. Unknown titles
    /// resolve to the generic default profile; the second element reports
    /// whether that fallback happened.
    #[must_use]
    pub fn profile_for(&self, job_title: &str) -> (&WageProfile, bool) {
        match self.profiles.get(&normalize(job_title)) {
            Some(profile) => (profile, false),
            None => (&self.default_profile, true),
        }
    }

    /// Whether a title belongs to the ownership/equity set (CEO, Founder,
    /// Business Owner, ...), which is valued primarily by company revenue
    #[must_use]
    pub fn is_ownership_title(&self, job_title: &str) -> bool {
        self.ownership_titles.contains(&normalize(job_title))
    }

    /// Number of known (non-default) profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalogue holds no known profiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Build the built-in catalogue
    #[must_use]
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();
        let mut ownership_titles = HashSet::new();

        for title in ["ceo", "founder", "co-founder", "business owner", "owner"] {
            ownership_titles.insert(title.to_string());
            profiles.insert(title.to_string(), ownership_profile());
        }

        profiles.insert("real estate agent".to_string(), real_estate_agent());
        profiles.insert("attorney".to_string(), attorney());
        profiles.insert("lawyer".to_string(), attorney());
        profiles.insert("accountant".to_string(), accountant());
        profiles.insert("physician".to_string(), physician());
        profiles.insert("software engineer".to_string(), software_engineer());
        profiles.insert("marketing manager".to_string(), marketing_manager());
        profiles.insert("consultant".to_string(), consultant());

        Self { profiles, ownership_titles, default_profile: default_profile() }
    }
}

fn normalize(job_title: &str) -> String {
    job_title.trim().to_lowercase()
}

fn locations<const N: usize>(rates: [(&str, f64); N], default_rate: f64) -> LocationRates {
    LocationRates {
        rates: rates.into_iter().map(|(state, rate)| (state.to_string(), rate)).collect(),
        default_rate: Some(default_rate),
    }
}

fn experience<const N: usize>(rates: [(ExperienceBracket, f64); N]) -> HashMap<ExperienceBracket, f64> {
    rates.into_iter().collect()
}

/// Shared profile for CEO / Founder / Business Owner titles
///
/// Revenue tiers are an ordered list, lowest bracket first; the resolver
/// falls back to the first entry when a supplied bracket is unrecognized.
fn ownership_profile() -> WageProfile {
    WageProfile {
        national_average: Some(100.0),
        location_rates: None,
        experience_rates: None,
        revenue_rates: Some(vec![
            RevenueTier { bracket: "Under $1M".to_string(), rate: 75.0 },
            RevenueTier { bracket: "$1M-$5M".to_string(), rate: 100.0 },
            RevenueTier { bracket: "$5M-$10M".to_string(), rate: 125.0 },
            RevenueTier { bracket: "$10M-$25M".to_string(), rate: 150.0 },
            RevenueTier { bracket: "$25M+".to_string(), rate: 200.0 },
        ]),
        source: "Kruze_Consulting_2025_startup_CEO_compensation".to_string(),
    }
}

fn real_estate_agent() -> WageProfile {
    WageProfile {
        national_average: Some(45.0),
        location_rates: Some(locations(
            [("California", 52.0), ("New York", 55.0), ("Texas", 48.0), ("Florida", 47.0)],
            45.0,
        )),
        experience_rates: None,
        revenue_rates: None,
        source: "NAR_Member_Profile_2024".to_string(),
    }
}

fn attorney() -> WageProfile {
    WageProfile {
        national_average: Some(150.0),
        location_rates: Some(locations(
            [("California", 175.0), ("New York", 185.0), ("District of Columbia", 190.0)],
            150.0,
        )),
        experience_rates: Some(experience([
            (ExperienceBracket::Early, 100.0),
            (ExperienceBracket::Mid, 140.0),
            (ExperienceBracket::Senior, 175.0),
            (ExperienceBracket::Veteran, 225.0),
        ])),
        revenue_rates: None,
        source: "Clio_Legal_Trends_2024".to_string(),
    }
}

fn accountant() -> WageProfile {
    WageProfile {
        national_average: Some(75.0),
        location_rates: None,
        experience_rates: Some(experience([
            (ExperienceBracket::Early, 55.0),
            (ExperienceBracket::Mid, 70.0),
            (ExperienceBracket::Senior, 90.0),
            (ExperienceBracket::Veteran, 110.0),
        ])),
        revenue_rates: None,
        source: "BLS_OES_2024".to_string(),
    }
}

fn physician() -> WageProfile {
    WageProfile {
        national_average: Some(120.0),
        location_rates: None,
        experience_rates: None,
        revenue_rates: None,
        source: "BLS_OES_2024".to_string(),
    }
}

fn software_engineer() -> WageProfile {
    WageProfile {
        national_average: Some(85.0),
        location_rates: Some(locations(
            [("California", 110.0), ("Washington", 105.0), ("New York", 100.0), ("Texas", 90.0)],
            80.0,
        )),
        experience_rates: Some(experience([
            (ExperienceBracket::Early, 60.0),
            (ExperienceBracket::Mid, 85.0),
            (ExperienceBracket::Senior, 110.0),
            (ExperienceBracket::Veteran, 140.0),
        ])),
        revenue_rates: None,
        source: "BLS_OES_2024".to_string(),
    }
}

fn marketing_manager() -> WageProfile {
    WageProfile {
        national_average: Some(70.0),
        location_rates: Some(locations([("California", 85.0), ("New York", 90.0)], 65.0)),
        experience_rates: None,
        revenue_rates: None,
        source: "BLS_OES_2024".to_string(),
    }
}

fn consultant() -> WageProfile {
    WageProfile {
        national_average: Some(90.0),
        location_rates: None,
        experience_rates: Some(experience([
            (ExperienceBracket::Early, 65.0),
            (ExperienceBracket::Mid, 85.0),
            (ExperienceBracket::Senior, 110.0),
            (ExperienceBracket::Veteran, 150.0),
        ])),
        revenue_rates: None,
        source: "Payscale_Consulting_2024".to_string(),
    }
}

/// Generic profile for unknown titles: national average only
fn default_profile() -> WageProfile {
    WageProfile {
        national_average: Some(DEFAULT_HOURLY_VALUE),
        location_rates: None,
        experience_rates: None,
        revenue_rates: None,
        source: DEFAULT_PROFILE_SOURCE.to_string(),
    }
}
