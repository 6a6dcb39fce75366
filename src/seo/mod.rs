//! Rule-based SEO analysis of theme markup.
//!
//! [`evaluate`] turns one document into a [`FindingSet`]; [`check_seo`]
//! walks a shop's active theme and folds the per-file results into an
//! [`AggregateReport`].

pub mod aggregate;
pub mod evaluator;
pub mod report;
pub mod rules;

pub use aggregate::{aggregate, check_seo, select_seo_assets, FALLBACK_ASSET_KEYS};
pub use evaluator::evaluate;
pub use report::{score, AggregateReport, FindingSet, ReportSummary};
pub use rules::Check;
