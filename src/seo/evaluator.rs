use scraper::Html;
use tracing::{debug, trace};

use super::report::FindingSet;
use super::rules::RULES;

pub const PARSE_ERROR: &str = "Failed to parse HTML content";

/// Parse theme markup into a document tree.
///
/// html5ever recovers from any malformed markup, and Liquid tags and output
/// expressions end up as text nodes. The only input rejected is content
/// carrying NUL characters, which marks a binary asset rather than markup.
pub fn parse_document(content: &str) -> Result<Html, String> {
    if content.contains('\0') {
        return Err("content contains NUL bytes".into());
    }

    let document = Html::parse_document(content);
    if !document.errors.is_empty() {
        trace!(recovered = document.errors.len(), "Recovered from markup errors");
    }
    Ok(document)
}

/// Run every SEO rule over one theme file.
///
/// Never fails: content that cannot be parsed yields a finding set with
/// `error` set and no checks, so one bad file does not abort a theme scan.
pub fn evaluate(content: &str, asset_key: &str) -> FindingSet {
    let document = match parse_document(content) {
        Ok(doc) => doc,
        Err(reason) => {
            debug!(asset_key, %reason, "Skipping rules for unparseable asset");
            return FindingSet::failed(asset_key, PARSE_ERROR);
        }
    };

    let findings = FindingSet::from_checks(asset_key, RULES.iter().filter_map(|rule| rule(&document)));
    debug!(
        asset_key,
        issues = findings.issues.len(),
        warnings = findings.warnings.len(),
        passed = findings.checks_passed.len(),
        score = findings.score,
        "Evaluated asset"
    );
    findings
}
