//! Property-test run profile shared by every proptest suite in the workspace.
//!
//! CI raises case counts through `PROGTEST_CASES` and enables forked
//! execution through `KRUSKAL_PBT_FORK`. Invalid overrides are logged and
//! ignored so a typo never silently disables a suite.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const KRUSKAL_PBT_FORK_ENV_KEY: &str = "KRUSKAL_PBT_FORK";

/// Reasons an environment override was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("expected an unsigned case count, got `{raw}`")]
    NotANumber { raw: String },
    /// The case count was zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{raw}`")]
    NotABoolean { raw: String },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(KRUSKAL_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, raw = %raw, %error, "ignoring invalid property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABoolean {
            raw: raw.to_owned(),
        }),
    }
}
