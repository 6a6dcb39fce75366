use serde::{Deserialize, Serialize};

use super::rules::Check;

/// SEO result for a single analyzed theme file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingSet {
    pub asset_key: String,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub checks_passed: Vec<String>,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FindingSet {
    /// Build a finding set from classified checks, preserving their order
    /// within each bucket.
    pub fn from_checks(asset_key: &str, checks: impl IntoIterator<Item = Check>) -> Self {
        let mut issues = Vec::new();
        let mut warnings = Vec::new();
        let mut checks_passed = Vec::new();

        for check in checks {
            match check {
                Check::Issue(msg) => issues.push(msg),
                Check::Warning(msg) => warnings.push(msg),
                Check::Passed(msg) => checks_passed.push(msg),
            }
        }

        let score = score(issues.len(), warnings.len(), checks_passed.len());
        Self {
            asset_key: asset_key.to_string(),
            issues,
            warnings,
            checks_passed,
            score,
            error: None,
        }
    }

    /// A document that could not be analyzed at all.
    pub fn failed(asset_key: &str, error: impl Into<String>) -> Self {
        Self {
            asset_key: asset_key.to_string(),
            issues: Vec::new(),
            warnings: Vec::new(),
            checks_passed: Vec::new(),
            score: 0.0,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_issues: usize,
    pub total_warnings: usize,
    pub total_passed: usize,
}

/// Theme-wide report folded from per-file finding sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub shop: String,
    pub theme_id: String,
    pub files_analyzed: usize,
    pub overall_score: f64,
    pub summary: ReportSummary,
    pub results: Vec<FindingSet>,
}

/// Percentage of passed checks, rounded to two decimals with ties going to
/// the even digit. Zero when nothing was checked.
pub fn score(issues: usize, warnings: usize, passed: usize) -> f64 {
    let total = issues + warnings + passed;
    if total == 0 {
        return 0.0;
    }
    let raw = passed as f64 / total as f64 * 100.0;
    (raw * 100.0).round_ties_even() / 100.0
}
