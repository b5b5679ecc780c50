//! Integration tests for region replacement functionality.

use pretty_assertions::assert_eq;
use readme_blocks::writer::{replace_region, replace_region_inline, update_region};
use rstest::rstest;

#[test]
fn test_replace_block_form() {
    let document = "A<!-- x starts -->old<!-- x ends -->B";
    let result = replace_region(document, "x", "new");
    assert_eq!(result, "A<!-- x starts -->\nnew\n<!-- x ends -->B");
}

#[test]
fn test_replace_preserves_surrounding_bytes() {
    let document = r#"# Heading

Intro paragraph.

<!-- blog starts -->
[Old post](https://example.com/old) - 2020-01-01
<!-- blog ends -->

## Footer

Trailing text.
"#;

    let result = replace_region(
        document,
        "blog",
        "[New post](https://example.com/new) - 2024-06-01",
    );

    let before = &document[..document.find("<!-- blog starts -->").unwrap()];
    let after = &document[document.find("<!-- blog ends -->").unwrap() + "<!-- blog ends -->".len()..];
    assert!(result.starts_with(before));
    assert!(result.ends_with(after));
    assert!(result.contains("New post"));
    assert!(!result.contains("Old post"));
}

#[test]
fn test_replace_only_touches_named_region() {
    let document = "<!-- a starts -->\none\n<!-- a ends -->\n<!-- b starts -->\ntwo\n<!-- b ends -->";
    let result = replace_region(document, "a", "changed");
    assert!(result.contains("<!-- b starts -->\ntwo\n<!-- b ends -->"));
    assert!(result.contains("<!-- a starts -->\nchanged\n<!-- a ends -->"));
}

#[test]
fn test_replace_missing_pair_returns_document_unchanged() {
    let document = "a document without sentinels";
    assert_eq!(replace_region(document, "blog", "content"), document);
}

#[rstest]
#[case("<!-- x starts -->old<!-- x ends -->")]
#[case("prefix <!-- x starts -->\nold\n<!-- x ends --> suffix")]
#[case("<!-- x starts -->\n\nmultiline\nold\n\n<!-- x ends -->")]
fn test_replace_is_idempotent(#[case] document: &str) {
    let once = replace_region(document, "x", "fresh content");
    let twice = replace_region(&once, "x", "fresh content");
    assert_eq!(once, twice);
}

#[test]
fn test_replace_inline_keeps_content_on_one_line() {
    let document = "Updated <!-- stamp starts -->never<!-- stamp ends --> ago";
    let result = replace_region_inline(document, "stamp", "2024-06-01");
    assert_eq!(
        result,
        "Updated <!-- stamp starts -->2024-06-01<!-- stamp ends --> ago"
    );
}

#[test]
fn test_update_region_replaces_content() {
    let document = "<!-- x starts -->\nold\n<!-- x ends -->";
    let result = update_region(document, "x", "new").unwrap();
    assert_eq!(result, "<!-- x starts -->\nnew\n<!-- x ends -->");
}

#[test]
fn test_update_region_missing_pair_fails() {
    assert!(update_region("plain text", "x", "new").is_err());
}
