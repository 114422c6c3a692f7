//! HTML parser for extracting visible text and document links
//!
//! This module handles parsing HTML content to extract:
//! - Visible page text (script/style/noscript subtrees removed,
//!   text nodes joined with single spaces)
//! - Links whose resolved path ends in a recognized document extension

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use url::Url;

/// File extensions treated as downloadable documents when found in links.
///
/// Matching is on the URL path, case-insensitive. Legacy .doc/.xls/.ppt are
/// collected here and reported as unsupported later by the extractor
/// dispatch, so the skip shows up in the logs instead of vanishing.
pub const DOCUMENT_EXTENSIONS: [&str; 8] = [
    ".pdf", ".txt", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
];

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Visible text content, whitespace-joined
    pub text: String,

    /// Document links found on the page, resolved and deduplicated,
    /// in first-seen order
    pub document_links: Vec<Url>,
}

/// Parses HTML content and extracts visible text plus document links
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The page URL, used to resolve relative hrefs
pub fn parse_page(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    let text = extract_text(&document);
    let document_links = extract_document_links(&document, base_url);

    ParsedPage {
        text,
        document_links,
    }
}

/// Extracts visible text from the document, skipping script/style/noscript
fn extract_text(document: &Html) -> String {
    let mut fragments = Vec::new();
    collect_text(document.tree.root(), &mut fragments);
    fragments.join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, fragments: &mut Vec<String>) {
    match node.value() {
        Node::Element(element) => {
            if matches!(element.name(), "script" | "style" | "noscript") {
                return;
            }
            for child in node.children() {
                collect_text(child, fragments);
            }
        }
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                fragments.push(trimmed.to_string());
            }
        }
        _ => {
            for child in node.children() {
                collect_text(child, fragments);
            }
        }
    }
}

/// Extracts document links from `<a href>` elements
///
/// Each href is resolved against the base URL; resolved URLs whose path ends
/// in a recognized document extension are kept, deduplicated in first-seen
/// order.
fn extract_document_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links: Vec<Url> = Vec::new();

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return links,
    };

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(href) => href.trim(),
            None => continue,
        };
        if href.is_empty() {
            continue;
        }

        let resolved = match crate::url::resolve(base_url, href) {
            Some(url) => url,
            None => continue,
        };

        if !has_document_extension(&resolved) {
            continue;
        }

        if !links.contains(&resolved) {
            links.push(resolved);
        }
    }

    links
}

/// Returns true if the URL path ends in a recognized document extension
pub fn has_document_extension(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    DOCUMENT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://a.gov/reports/").unwrap()
    }

    #[test]
    fn test_extract_text_simple() {
        let html = "<html><body><p>Annual Report</p></body></html>";
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.text, "Annual Report");
    }

    #[test]
    fn test_extract_text_joins_with_spaces() {
        let html = "<html><body><h1>Budget</h1><p>Fiscal year</p></body></html>";
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.text, "Budget Fiscal year");
    }

    #[test]
    fn test_script_and_style_removed() {
        let html = r#"<html><head><style>body { color: red; }</style>
            <script>var x = 1;</script></head>
            <body><noscript>enable js</noscript><p>Visible</p></body></html>"#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.text, "Visible");
    }

    #[test]
    fn test_document_link_absolute() {
        let html = r#"<a href="https://a.gov/files/report.pdf">Report</a>"#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.document_links.len(), 1);
        assert_eq!(
            parsed.document_links[0].as_str(),
            "https://a.gov/files/report.pdf"
        );
    }

    #[test]
    fn test_document_link_relative() {
        let html = r#"<a href="report.pdf">Report</a>"#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(
            parsed.document_links[0].as_str(),
            "https://a.gov/reports/report.pdf"
        );
    }

    #[test]
    fn test_document_link_case_insensitive_extension() {
        let html = r#"<a href="/files/REPORT.PDF">Report</a>"#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.document_links.len(), 1);
    }

    #[test]
    fn test_non_document_links_skipped() {
        let html = r#"<a href="/about.html">About</a><a href="/page">Page</a>"#;
        let parsed = parse_page(html, &base_url());
        assert!(parsed.document_links.is_empty());
    }

    #[test]
    fn test_legacy_extensions_still_collected() {
        // .doc is gathered here; the extractor reports it as unsupported
        let html = r#"<a href="old.doc">Old</a>"#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.document_links.len(), 1);
    }

    #[test]
    fn test_duplicate_links_deduplicated() {
        let html = r#"<a href="report.pdf">One</a><a href="/reports/report.pdf">Two</a>"#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.document_links.len(), 1);
    }

    #[test]
    fn test_mailto_and_fragment_skipped() {
        let html = r##"<a href="mailto:x@a.gov">Mail</a><a href="#top">Top</a>"##;
        let parsed = parse_page(html, &base_url());
        assert!(parsed.document_links.is_empty());
    }

    #[test]
    fn test_all_extensions_recognized() {
        let html = r#"
            <a href="a.pdf">1</a><a href="b.txt">2</a><a href="c.doc">3</a>
            <a href="d.docx">4</a><a href="e.xls">5</a><a href="f.xlsx">6</a>
            <a href="g.ppt">7</a><a href="h.pptx">8</a>
        "#;
        let parsed = parse_page(html, &base_url());
        assert_eq!(parsed.document_links.len(), 8);
    }

    #[test]
    fn test_query_string_defeats_extension_match() {
        // Extension matching is on the path only
        let html = r#"<a href="/download?file=report.pdf">Report</a>"#;
        let parsed = parse_page(html, &base_url());
        assert!(parsed.document_links.is_empty());
    }
}
