use std::path::PathBuf;

use everyday_winners::config::DocumentsConfig;
use everyday_winners::documents::{DocumentFormat, extract_file};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn statement_fixture_extraction() {
    let doc = extract_file(
        &fixture_path("tests/fixtures/documents/statement.html"),
        &DocumentsConfig::default(),
    )
    .expect("extract");

    assert_eq!(doc.format, DocumentFormat::Html);
    assert_eq!(doc.title.as_deref(), Some("Monthly Statement"));
    assert_eq!(doc.headings, vec!["Statement", "Payments"]);
    assert_eq!(
        doc.paragraphs,
        vec!["All payments were received on time.", "Balance", "$120.00"]
    );
    assert_eq!(doc.links.len(), 1);
    assert_eq!(doc.links[0].href, "/dispute");
    // Table cells are separate words; the noscript paragraph is not counted.
    assert_eq!(doc.word_count, 14);
    assert!(!doc.text().contains("trackView"));
    assert!(!doc.text().contains("Enable scripts"));
}
