//! The individual SEO checks.
//!
//! Each rule inspects the parsed document and yields at most one classified
//! result. Rules run in the order of [`RULES`] so messages come out in a
//! stable order for identical markup.

use std::sync::LazyLock;

use scraper::{Html, Selector};

pub const TITLE_MAX_CHARS: usize = 60;
pub const TITLE_MIN_CHARS: usize = 30;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const DESCRIPTION_MIN_CHARS: usize = 120;

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    Issue(String),
    Warning(String),
    Passed(String),
}

pub type Rule = fn(&Html) -> Option<Check>;

pub const RULES: &[Rule] = &[
    check_title,
    check_meta_description,
    check_h1,
    check_open_graph,
    check_canonical,
    check_viewport,
    check_images_missing_alt,
    check_images_with_alt,
    check_structured_data,
    check_robots,
];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse - this is a bug")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static OPEN_GRAPH: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[property^="og:"]"#));
static CANONICAL: LazyLock<Selector> = LazyLock::new(|| selector(r#"link[rel~="canonical"]"#));
static VIEWPORT: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="viewport"]"#));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static JSON_LD: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"script[type="application/ld+json"]"#));
static ROBOTS: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="robots"]"#));

pub fn check_title(doc: &Html) -> Option<Check> {
    let Some(title) = doc.select(&TITLE).next() else {
        return Some(Check::Issue("Missing title tag".into()));
    };

    let text: String = title.text().collect();
    let len = text.trim().chars().count();

    Some(if len == 0 {
        Check::Issue("Title tag is empty".into())
    } else if len > TITLE_MAX_CHARS {
        Check::Warning(format!("Title tag is too long ({len} chars, recommended: 50-60)"))
    } else if len < TITLE_MIN_CHARS {
        Check::Warning(format!("Title tag is too short ({len} chars, recommended: 30-60)"))
    } else {
        Check::Passed(format!("Title tag is well-optimized ({len} chars)"))
    })
}

pub fn check_meta_description(doc: &Html) -> Option<Check> {
    let content = doc
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.is_empty());

    let Some(content) = content else {
        return Some(Check::Issue("Missing meta description".into()));
    };

    let len = content.trim().chars().count();
    Some(if len > DESCRIPTION_MAX_CHARS {
        Check::Warning(format!(
            "Meta description is too long ({len} chars, recommended: 150-160)"
        ))
    } else if len < DESCRIPTION_MIN_CHARS {
        Check::Warning(format!(
            "Meta description is too short ({len} chars, recommended: 120-160)"
        ))
    } else {
        Check::Passed(format!("Meta description is well-optimized ({len} chars)"))
    })
}

pub fn check_h1(doc: &Html) -> Option<Check> {
    Some(match doc.select(&H1).count() {
        0 => Check::Issue("No H1 tag found".into()),
        1 => Check::Passed("Single H1 tag found (good)".into()),
        n => Check::Warning(format!("Multiple H1 tags found ({n}, should be 1)")),
    })
}

pub fn check_open_graph(doc: &Html) -> Option<Check> {
    Some(match doc.select(&OPEN_GRAPH).count() {
        0 => Check::Warning("No Open Graph tags found".into()),
        n => Check::Passed(format!("Found {n} Open Graph tag(s)")),
    })
}

pub fn check_canonical(doc: &Html) -> Option<Check> {
    Some(if doc.select(&CANONICAL).next().is_some() {
        Check::Passed("Canonical URL found".into())
    } else {
        Check::Warning("Missing canonical URL".into())
    })
}

pub fn check_viewport(doc: &Html) -> Option<Check> {
    Some(if doc.select(&VIEWPORT).next().is_some() {
        Check::Passed("Viewport meta tag found".into())
    } else {
        Check::Issue("Missing viewport meta tag (required for mobile-friendly)".into())
    })
}

/// (images total, images with non-empty alt)
fn image_alt_counts(doc: &Html) -> (usize, usize) {
    doc.select(&IMG).fold((0, 0), |(total, with_alt), img| {
        let has_alt = img.value().attr("alt").is_some_and(|alt| !alt.is_empty());
        (total + 1, with_alt + usize::from(has_alt))
    })
}

pub fn check_images_missing_alt(doc: &Html) -> Option<Check> {
    let (total, with_alt) = image_alt_counts(doc);
    let missing = total - with_alt;
    (missing > 0).then(|| Check::Warning(format!("{missing} image(s) missing alt text")))
}

pub fn check_images_with_alt(doc: &Html) -> Option<Check> {
    let (total, with_alt) = image_alt_counts(doc);
    (with_alt > 0).then(|| Check::Passed(format!("{with_alt}/{total} images have alt text")))
}

pub fn check_structured_data(doc: &Html) -> Option<Check> {
    Some(match doc.select(&JSON_LD).count() {
        0 => Check::Warning("No structured data (JSON-LD) found".into()),
        n => Check::Passed(format!("Found {n} structured data script(s)")),
    })
}

/// Robots directives are optional, so absence is not reported.
pub fn check_robots(doc: &Html) -> Option<Check> {
    doc.select(&ROBOTS)
        .next()
        .map(|_| Check::Passed("Robots meta tag found".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(head: &str, body: &str) -> Html {
        Html::parse_document(&format!("<html><head>{head}</head><body>{body}</body></html>"))
    }

    fn title_of_len(n: usize) -> Html {
        doc(&format!("<title>{}</title>", "a".repeat(n)), "")
    }

    #[test]
    fn test_title_boundaries_inclusive() {
        assert!(matches!(check_title(&title_of_len(30)), Some(Check::Passed(_))));
        assert!(matches!(check_title(&title_of_len(60)), Some(Check::Passed(_))));
        assert_eq!(
            check_title(&title_of_len(29)),
            Some(Check::Warning("Title tag is too short (29 chars, recommended: 30-60)".into()))
        );
        assert_eq!(
            check_title(&title_of_len(61)),
            Some(Check::Warning("Title tag is too long (61 chars, recommended: 50-60)".into()))
        );
    }

    #[test]
    fn test_title_missing_and_empty() {
        assert_eq!(check_title(&doc("", "")), Some(Check::Issue("Missing title tag".into())));
        assert_eq!(
            check_title(&doc("<title>   </title>", "")),
            Some(Check::Issue("Title tag is empty".into()))
        );
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        let title = "é".repeat(30);
        let html = doc(&format!("<title>{title}</title>"), "");
        assert_eq!(
            check_title(&html),
            Some(Check::Passed("Title tag is well-optimized (30 chars)".into()))
        );
    }

    #[test]
    fn test_meta_description_thresholds() {
        let meta = |n: usize| doc(&format!(r#"<meta name="description" content="{}">"#, "d".repeat(n)), "");
        assert!(matches!(check_meta_description(&meta(120)), Some(Check::Passed(_))));
        assert!(matches!(check_meta_description(&meta(160)), Some(Check::Passed(_))));
        assert!(matches!(check_meta_description(&meta(119)), Some(Check::Warning(_))));
        assert!(matches!(check_meta_description(&meta(161)), Some(Check::Warning(_))));
    }

    #[test]
    fn test_meta_description_empty_content_is_issue() {
        let html = doc(r#"<meta name="description" content="">"#, "");
        assert_eq!(
            check_meta_description(&html),
            Some(Check::Issue("Missing meta description".into()))
        );
        let html = doc(r#"<meta name="description">"#, "");
        assert!(matches!(check_meta_description(&html), Some(Check::Issue(_))));
    }

    #[test]
    fn test_h1_counts() {
        assert_eq!(check_h1(&doc("", "")), Some(Check::Issue("No H1 tag found".into())));
        assert_eq!(
            check_h1(&doc("", "<h1>a</h1>")),
            Some(Check::Passed("Single H1 tag found (good)".into()))
        );
        assert_eq!(
            check_h1(&doc("", "<h1>a</h1><h1>b</h1>")),
            Some(Check::Warning("Multiple H1 tags found (2, should be 1)".into()))
        );
    }

    #[test]
    fn test_open_graph_prefix_match() {
        let html = doc(
            r#"<meta property="og:title" content="x"><meta property="og:image" content="y"><meta property="twitter:card" content="z">"#,
            "",
        );
        assert_eq!(
            check_open_graph(&html),
            Some(Check::Passed("Found 2 Open Graph tag(s)".into()))
        );
    }

    #[test]
    fn test_canonical_among_multiple_rel_values() {
        let html = doc(r#"<link rel="alternate canonical" href="/x">"#, "");
        assert_eq!(check_canonical(&html), Some(Check::Passed("Canonical URL found".into())));
        let html = doc(r#"<link rel="stylesheet" href="/x.css">"#, "");
        assert_eq!(check_canonical(&html), Some(Check::Warning("Missing canonical URL".into())));
    }

    #[test]
    fn test_images_both_outcomes() {
        let html = doc("", r#"<img src="a" alt="A"><img src="b" alt="B"><img src="c">"#);
        assert_eq!(
            check_images_missing_alt(&html),
            Some(Check::Warning("1 image(s) missing alt text".into()))
        );
        assert_eq!(
            check_images_with_alt(&html),
            Some(Check::Passed("2/3 images have alt text".into()))
        );
    }

    #[test]
    fn test_images_empty_alt_counts_as_missing() {
        let html = doc("", r#"<img src="a" alt="">"#);
        assert_eq!(
            check_images_missing_alt(&html),
            Some(Check::Warning("1 image(s) missing alt text".into()))
        );
        assert_eq!(check_images_with_alt(&html), None);
    }

    #[test]
    fn test_no_images_no_entries() {
        let html = doc("", "<p>text</p>");
        assert_eq!(check_images_missing_alt(&html), None);
        assert_eq!(check_images_with_alt(&html), None);
    }

    #[test]
    fn test_robots_silent_when_absent() {
        assert_eq!(check_robots(&doc("", "")), None);
        let html = doc(r#"<meta name="robots" content="index,follow">"#, "");
        assert_eq!(check_robots(&html), Some(Check::Passed("Robots meta tag found".into())));
    }

    #[test]
    fn test_structured_data_count() {
        let html = doc(
            r#"<script type="application/ld+json">{"@type":"Product"}</script><script type="application/ld+json">{}</script>"#,
            "",
        );
        assert_eq!(
            check_structured_data(&html),
            Some(Check::Passed("Found 2 structured data script(s)".into()))
        );
    }
}
