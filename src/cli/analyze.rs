use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cli::commands::AnalyzeArgs;
use crate::errors::SeoError;
use crate::seo::{self, AggregateReport, FindingSet};
use crate::shopify::{AssetInfo, ThemeSource};

const LOCAL_SHOP: &str = "local";
const LOCAL_THEME_ID: &str = "local";

/// A theme laid out on disk the way Shopify stores it (`layout/`,
/// `templates/`, ...). Asset keys are paths relative to the root.
pub struct LocalTheme {
    root: PathBuf,
}

impl LocalTheme {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collect_keys(&self, dir: &Path, keys: &mut Vec<String>) -> Result<(), SeoError> {
        let mut entries = std::fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                self.collect_keys(&path, keys)?;
            } else if let Ok(relative) = path.strip_prefix(&self.root) {
                let key: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                keys.push(key.join("/"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ThemeSource for LocalTheme {
    fn shop(&self) -> &str {
        LOCAL_SHOP
    }

    async fn get_active_theme_id(&self) -> Result<Option<String>, SeoError> {
        Ok(self.root.is_dir().then(|| LOCAL_THEME_ID.to_string()))
    }

    async fn list_theme_assets(&self, _theme_id: &str) -> Result<Vec<AssetInfo>, SeoError> {
        let mut keys = Vec::new();
        self.collect_keys(&self.root, &mut keys)?;
        Ok(keys.iter().map(|key| AssetInfo::new(key)).collect())
    }

    async fn get_theme_asset(&self, _theme_id: &str, asset_key: &str) -> Result<Option<String>, SeoError> {
        match tokio::fs::read(self.root.join(asset_key)).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) => {
                debug!(asset_key, error = %e, "Local asset not readable");
                Ok(None)
            }
        }
    }
}

pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), SeoError> {
    let report = match &args.theme_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(SeoError::NotFound(format!("Theme directory not found: {}", dir.display())));
            }
            seo::check_seo(&LocalTheme::new(dir), 1).await?
        }
        None => analyze_files(&args.files).await?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Evaluate each file given on the command line. Unreadable files are
/// reported and skipped, matching how a shop scan treats missing assets.
pub async fn analyze_files(files: &[PathBuf]) -> Result<AggregateReport, SeoError> {
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match tokio::fs::read(path).await {
            Ok(bytes) if !bytes.is_empty() => {
                let content = String::from_utf8_lossy(&bytes);
                results.push(seo::evaluate(&content, &path.display().to_string()));
            }
            Ok(_) => debug!(path = %path.display(), "Empty file, skipping"),
            Err(e) => warn!(path = %path.display(), error = %e, "Cannot read file, skipping"),
        }
    }
    Ok(seo::aggregate(LOCAL_SHOP, LOCAL_THEME_ID, results))
}

fn render_finding_set(out: &mut String, set: &FindingSet) {
    out.push_str(&format!("\n{}  (score {:.2})\n", set.asset_key, set.score));
    if let Some(error) = &set.error {
        out.push_str(&format!("  error: {}\n", error));
        return;
    }
    for issue in &set.issues {
        out.push_str(&format!("  ✗ {}\n", issue));
    }
    for warning in &set.warnings {
        out.push_str(&format!("  ! {}\n", warning));
    }
    for passed in &set.checks_passed {
        out.push_str(&format!("  ✓ {}\n", passed));
    }
}

pub fn render_report(report: &AggregateReport) -> String {
    let mut out = String::new();
    for set in &report.results {
        render_finding_set(&mut out, set);
    }
    out.push_str(&format!(
        "\n{} file(s) analyzed: {} issue(s), {} warning(s), {} passed, overall score {:.2}\n",
        report.files_analyzed,
        report.summary.total_issues,
        report.summary.total_warnings,
        report.summary.total_passed,
        report.overall_score,
    ));

    let unparsed = report.results.iter().filter(|set| set.is_error()).count();
    if unparsed > 0 {
        out.push_str(&format!("{} file(s) could not be parsed\n", unparsed));
    }
    out
}
