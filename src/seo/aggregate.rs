use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::errors::SeoError;
use crate::shopify::{AssetInfo, ThemeSource};
use super::evaluator::evaluate;
use super::report::{score, AggregateReport, FindingSet, ReportSummary};

/// Theme directories whose Liquid files render page markup.
pub const SEO_PATH_PREFIXES: &[&str] = &["layout/", "templates/", "sections/", "snippets/"];
pub const LIQUID_EXTENSION: &str = ".liquid";

/// Checked when the asset listing yields nothing usable.
pub const FALLBACK_ASSET_KEYS: &[&str] = &[
    "layout/theme.liquid",
    "templates/index.liquid",
    "templates/product.liquid",
    "templates/collection.liquid",
];

/// Keys of the assets worth an SEO pass, in listing order.
pub fn select_seo_assets(assets: &[AssetInfo]) -> Vec<String> {
    assets
        .iter()
        .map(|asset| asset.key.as_str())
        .filter(|key| {
            SEO_PATH_PREFIXES.iter().any(|prefix| key.starts_with(prefix))
                && key.ends_with(LIQUID_EXTENSION)
        })
        .map(str::to_string)
        .collect()
}

/// Fold per-file finding sets into a theme report.
pub fn aggregate(shop: &str, theme_id: &str, results: Vec<FindingSet>) -> AggregateReport {
    let summary = results.iter().fold(ReportSummary::default(), |mut acc, r| {
        acc.total_issues += r.issues.len();
        acc.total_warnings += r.warnings.len();
        acc.total_passed += r.checks_passed.len();
        acc
    });

    AggregateReport {
        shop: shop.to_string(),
        theme_id: theme_id.to_string(),
        files_analyzed: results.len(),
        overall_score: score(summary.total_issues, summary.total_warnings, summary.total_passed),
        summary,
        results,
    }
}

/// Run the SEO rules over the shop's published theme.
///
/// Asset contents are fetched up to `concurrency` at a time; results keep
/// the order in which the assets were selected. Files whose content cannot
/// be retrieved are left out of the report.
pub async fn check_seo(source: &dyn ThemeSource, concurrency: usize) -> Result<AggregateReport, SeoError> {
    let shop = source.shop().to_string();
    let theme_id = source
        .get_active_theme_id()
        .await?
        .ok_or_else(|| SeoError::NotFound("No active theme found".into()))?;

    let assets = source.list_theme_assets(&theme_id).await?;
    let mut keys = select_seo_assets(&assets);
    if keys.is_empty() {
        info!(shop = %shop, theme_id = %theme_id, listed = assets.len(), "No SEO-relevant assets listed, using fallback files");
        keys = FALLBACK_ASSET_KEYS.iter().map(|k| k.to_string()).collect();
    }

    let theme = theme_id.as_str();
    let fetched: Vec<(String, Option<String>)> = stream::iter(keys)
        .map(move |key| async move {
            let content = source.get_theme_asset(theme, &key).await?;
            Ok::<_, SeoError>((key, content))
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    let mut results = Vec::with_capacity(fetched.len());
    for (key, content) in fetched {
        match content {
            Some(content) if !content.is_empty() => results.push(evaluate(&content, &key)),
            _ => debug!(shop = %shop, asset_key = %key, "Asset content not retrievable, skipping"),
        }
    }

    let report = aggregate(&shop, &theme_id, results);
    info!(
        shop = %shop,
        theme_id = %theme_id,
        files = report.files_analyzed,
        overall_score = report.overall_score,
        "SEO check complete"
    );
    Ok(report)
}
