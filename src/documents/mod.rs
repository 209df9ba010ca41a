//! Text extraction for uploaded documents.
//!
//! HTML uploads are parsed into a DOM and read through CSS selectors; plain
//! text uploads are split into paragraphs on blank lines. Script, style and
//! noscript content never reaches the output.

use std::path::Path;

use scraper::{ElementRef, Html, Node, Selector};
use serde::Serialize;
use tracing::debug;

use crate::config::DocumentsConfig;
use crate::error::{EwError, Result};

const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Html,
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub format: DocumentFormat,
    pub title: Option<String>,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
    pub links: Vec<DocumentLink>,
    pub word_count: usize,
    /// Set when paragraphs were cut at `max_paragraphs`.
    pub truncated: bool,
}

impl ExtractedDocument {
    /// Paragraph text joined with blank lines.
    #[must_use]
    pub fn text(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}

/// Read and extract a document from disk, enforcing the upload size limit
/// before reading the body.
pub fn extract_file(path: &Path, config: &DocumentsConfig) -> Result<ExtractedDocument> {
    let metadata = std::fs::metadata(path)
        .map_err(|err| EwError::Document(format!("stat {}: {err}", path.display())))?;
    check_size(metadata.len(), config)?;
    let bytes = std::fs::read(path)
        .map_err(|err| EwError::Document(format!("read {}: {err}", path.display())))?;
    extract_bytes(&bytes, config)
}

pub fn extract_bytes(bytes: &[u8], config: &DocumentsConfig) -> Result<ExtractedDocument> {
    check_size(bytes.len() as u64, config)?;
    let content = String::from_utf8_lossy(bytes);
    extract(&content, config)
}

pub fn extract(content: &str, config: &DocumentsConfig) -> Result<ExtractedDocument> {
    let mut document = if looks_like_html(content) {
        extract_html(content)?
    } else {
        extract_plain(content)
    };

    let limit = usize::try_from(config.max_paragraphs).unwrap_or(usize::MAX);
    if document.paragraphs.len() > limit {
        document.paragraphs.truncate(limit);
        document.truncated = true;
    }
    debug!(
        format = ?document.format,
        paragraphs = document.paragraphs.len(),
        words = document.word_count,
        "document extracted"
    );
    Ok(document)
}

fn check_size(len: u64, config: &DocumentsConfig) -> Result<()> {
    if len > config.max_bytes {
        return Err(EwError::Document(format!(
            "document is {len} bytes, limit is {} bytes",
            config.max_bytes
        )));
    }
    Ok(())
}

/// Tag names that mark an upload as HTML when they appear as a real tag
/// (`<p>`, `<p class=..>`), not as a prefix like `<pre` or `<path`.
const HTML_MARKERS: [&str; 12] = [
    "html", "head", "body", "title", "p", "div", "h1", "h2", "h3", "ul", "li", "table",
];

/// Elements whose boundaries separate words.
const BLOCK_ELEMENTS: [&str; 30] = [
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "ul",
];

const PARAGRAPH_BLOCKS: &str = "p, li, blockquote, pre, td";

fn looks_like_html(content: &str) -> bool {
    let lower = content.trim_start().to_ascii_lowercase();
    if lower.starts_with("<!doctype html") {
        return true;
    }
    lower.match_indices('<').any(|(idx, _)| {
        let rest = &lower[idx + 1..];
        let name_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        if !HTML_MARKERS.contains(&&rest[..name_len]) {
            return false;
        }
        let after = &rest[name_len..];
        if after.starts_with('>') || after.starts_with("/>") {
            return true;
        }
        // `<p class="x">`: attributes must close before the next tag opens.
        after.starts_with(char::is_whitespace)
            && after
                .find(['>', '<'])
                .is_some_and(|pos| after[pos..].starts_with('>'))
    })
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| EwError::Document(format!("selector {css}: {err}")))
}

fn extract_html(content: &str) -> Result<ExtractedDocument> {
    let html = Html::parse_document(content);

    let title = html
        .select(&selector("title")?)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());

    let headings = html
        .select(&selector("h1, h2, h3, h4, h5, h6")?)
        .filter(|el| !has_hidden_ancestor(*el))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();

    // Outermost blocks only, so `<li><p>..</p></li>` yields one paragraph.
    let blocks = selector(PARAGRAPH_BLOCKS)?;
    let paragraphs = html
        .select(&blocks)
        .filter(|el| !has_hidden_ancestor(*el))
        .filter(|el| {
            !el.ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| blocks.matches(&ancestor))
        })
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();

    let links = html
        .select(&selector("a[href]")?)
        .filter(|el| !has_hidden_ancestor(*el))
        .filter_map(|el| {
            let href = el.value().attr("href")?.trim();
            if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
                return None;
            }
            Some(DocumentLink {
                text: element_text(el),
                href: href.to_string(),
            })
        })
        .collect();

    let word_count = visible_text(&html).split_whitespace().count();

    Ok(ExtractedDocument {
        format: DocumentFormat::Html,
        title,
        headings,
        paragraphs,
        links,
        word_count,
        truncated: false,
    })
}

fn extract_plain(content: &str) -> ExtractedDocument {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    ExtractedDocument {
        format: DocumentFormat::PlainText,
        title: None,
        headings: Vec::new(),
        word_count: content.split_whitespace().count(),
        paragraphs,
        links: Vec::new(),
        truncated: false,
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_hidden_ancestor(element: ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
    })
}

/// Text outside `<head>` and hidden elements. Inline markup is joined as-is;
/// block boundaries become spaces.
fn visible_text(html: &Html) -> String {
    let mut out = String::new();
    push_visible_text(html.root_element(), &mut out);
    out
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if HIDDEN_ELEMENTS.contains(&name) || name == "head" {
        return;
    }
    let block = BLOCK_ELEMENTS.contains(&name);
    if block {
        out.push(' ');
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_visible_text(child, out);
                }
            }
            _ => {}
        }
    }
    if block {
        out.push(' ');
    }
}
