// Tests for parsing and extraction.

use super::*;

fn fields_of(html: &str) -> MetaFields {
    extract(&parse(html))
}

const COMPLETE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Handmade Oak Furniture | Smith &amp; Sons Workshop</title>
  <meta name="description" content="Solid oak tables, chairs and shelving built to order in our Yorkshire workshop. Free delivery across the UK.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="robots" content="index, follow">
  <link rel="canonical" href="https://smithandsons.example/">
  <meta property="og:title" content="Handmade Oak Furniture">
  <meta property="og:description" content="Built to order in Yorkshire.">
  <meta property="og:image" content="https://smithandsons.example/og.jpg">
  <meta property="og:type" content="website">
  <meta property="og:url" content="https://smithandsons.example/">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="Oak Furniture">
  <meta name="twitter:description" content="Built to order.">
  <meta name="twitter:image" content="https://smithandsons.example/tw.jpg">
</head>
<body>
  <h1>Oak furniture, built to last</h1>
  <img src="a.jpg" alt="Oak dining table">
  <img src="b.jpg" alt="Oak bookshelf">
</body>
</html>"#;

#[test]
fn test_extract_complete_page() {
    let fields = fields_of(COMPLETE_PAGE);
    assert_eq!(
        fields.title.as_deref(),
        Some("Handmade Oak Furniture | Smith & Sons Workshop")
    );
    assert!(fields.description.as_deref().unwrap().starts_with("Solid oak"));
    assert_eq!(fields.canonical.as_deref(), Some("https://smithandsons.example/"));
    assert_eq!(fields.og_title.as_deref(), Some("Handmade Oak Furniture"));
    assert_eq!(fields.og_type.as_deref(), Some("website"));
    assert_eq!(fields.og_url.as_deref(), Some("https://smithandsons.example/"));
    assert_eq!(fields.twitter_card.as_deref(), Some("summary_large_image"));
    assert_eq!(fields.twitter_image.as_deref(), Some("https://smithandsons.example/tw.jpg"));
    assert_eq!(fields.robots.as_deref(), Some("index, follow"));
    assert_eq!(fields.lang.as_deref(), Some("en"));
    assert!(fields.viewport.is_some());
    assert!(fields.keywords.is_none());
    assert_eq!(fields.h1, vec!["Oak furniture, built to last".to_string()]);
    assert_eq!(fields.image_count, 2);
    assert_eq!(fields.images_with_alt, 2);
    assert_eq!(fields.image_alt_coverage, Some(1.0));
}

#[test]
fn test_extract_empty_document() {
    let fields = fields_of("");
    assert_eq!(fields, MetaFields::default());
    assert!(fields.image_alt_coverage.is_none());
}

#[test]
fn test_extract_non_html_input() {
    let fields = fields_of(r#"{"status": "ok", "items": [1, 2, 3]}"#);
    assert!(fields.title.is_none());
    assert!(fields.h1.is_empty());
    assert_eq!(fields.image_count, 0);
}

#[test]
fn test_extract_malformed_markup() {
    // Unclosed tags, no <head>, stray end tags
    let html = r#"<title>Broken page<meta name="description" content="still found"></div>
        <h1>First <b>bold</h1><p>text<h1>Second"#;
    let tree = parse(html);
    assert!(tree.recovered_errors() > 0);
    let fields = extract(&tree);
    // Raw text inside <title> swallows everything up to EOF when it's never closed
    assert!(fields.title.is_some());
}

#[test]
fn test_extract_unclosed_body_elements() {
    let html = r#"<html><head><title>Ok</title></head><body>
        <h1>First <b>bold</h1><p>text<h1>Second<img src="x.png"><img src="y.png" alt="y">"#;
    let fields = fields_of(html);
    assert_eq!(fields.title.as_deref(), Some("Ok"));
    assert_eq!(fields.h1, vec!["First bold".to_string(), "Second".to_string()]);
    assert_eq!(fields.image_count, 2);
    assert_eq!(fields.images_with_alt, 1);
    assert_eq!(fields.image_alt_coverage, Some(0.5));
}

#[test]
fn test_extract_name_values_case_insensitive() {
    let html = r#"<html><head>
        <META NAME="Description" CONTENT="Upper-case attributes">
        <meta name="VIEWPORT" content="width=device-width">
        <meta property="OG:Title" content="Shouty OG">
        <link REL="Canonical" HREF="https://example.com/c">
    </head></html>"#;
    let fields = fields_of(html);
    assert_eq!(fields.description.as_deref(), Some("Upper-case attributes"));
    assert_eq!(fields.viewport.as_deref(), Some("width=device-width"));
    assert_eq!(fields.og_title.as_deref(), Some("Shouty OG"));
    assert_eq!(fields.canonical.as_deref(), Some("https://example.com/c"));
}

#[test]
fn test_extract_first_match_wins() {
    let html = r#"<html><head>
        <title>First title</title>
        <title>Second title</title>
        <meta name="description" content="first description">
        <meta name="description" content="second description">
        <link rel="canonical" href="https://example.com/one">
        <link rel="canonical" href="https://example.com/two">
    </head></html>"#;
    let fields = fields_of(html);
    assert_eq!(fields.title.as_deref(), Some("First title"));
    assert_eq!(fields.description.as_deref(), Some("first description"));
    assert_eq!(fields.canonical.as_deref(), Some("https://example.com/one"));
}

#[test]
fn test_extract_blank_values_are_absent() {
    let html = r#"<html lang="  "><head>
        <title>   </title>
        <meta name="description" content="   ">
        <meta property="og:image" content="">
        <link rel="canonical" href=" ">
    </head></html>"#;
    let fields = fields_of(html);
    assert!(fields.title.is_none());
    assert!(fields.description.is_none());
    assert!(fields.og_image.is_none());
    assert!(fields.canonical.is_none());
    assert!(fields.lang.is_none());
}

#[test]
fn test_extract_blank_first_element_does_not_hide_later_value() {
    let html = r#"<meta name="description" content="">
        <meta name="description" content="the real one">"#;
    assert_eq!(fields_of(html).description.as_deref(), Some("the real one"));
}

#[test]
fn test_extract_trims_but_keeps_interior_whitespace() {
    let html = "<title>\n   Spread\n   over   lines \n</title>";
    assert_eq!(
        fields_of(html).title.as_deref(),
        Some("Spread\n   over   lines")
    );
}

#[test]
fn test_title_length_counts_interior_whitespace() {
    // 30 characters once trimmed, 3 if whitespace runs were collapsed
    let html = format!("<title>  A\n{}B  </title>", " ".repeat(27));
    let fields = fields_of(&html);
    assert_eq!(fields.title.as_deref().map(|t| t.chars().count()), Some(30));
    let report = crate::score::score(&fields);
    let title = report
        .findings
        .iter()
        .find(|f| f.check == "Title length")
        .unwrap();
    assert_eq!(title.severity, crate::score::Severity::Pass);
}

#[test]
fn test_h1_text_is_collapsed() {
    let html = "<h1>\n  Oak\n   furniture </h1>";
    assert_eq!(fields_of(html).h1, vec!["Oak furniture".to_string()]);
}

#[test]
fn test_extract_ignores_svg_title() {
    let html = r#"<html><head></head><body>
        <svg><title>Icon tooltip</title></svg>
    </body></html>"#;
    assert!(fields_of(html).title.is_none());
}

#[test]
fn test_extract_link_rel_token_list() {
    let html = r#"<link rel="alternate canonical" href="https://example.com/">"#;
    assert_eq!(fields_of(html).canonical.as_deref(), Some("https://example.com/"));
}

#[test]
fn test_extract_og_requires_property_attribute() {
    // og:* lives in property=, twitter:* lives in name=
    let html = r#"<meta name="og:title" content="wrong attribute">
        <meta property="twitter:card" content="summary">"#;
    let fields = fields_of(html);
    assert!(fields.og_title.is_none());
    assert!(fields.twitter_card.is_none());
}

#[test]
fn test_extract_keeps_empty_h1_headings() {
    let html = "<h1></h1><h1>  Real heading </h1>";
    let fields = fields_of(html);
    assert_eq!(fields.h1_count(), 2);
    assert_eq!(fields.h1, vec![String::new(), "Real heading".to_string()]);
}

#[test]
fn test_extract_images_without_alt() {
    let html = r#"<img src="a"><img src="b" alt=""><img src="c" alt="  "><img src="d" alt="d">"#;
    let fields = fields_of(html);
    assert_eq!(fields.image_count, 4);
    assert_eq!(fields.images_with_alt, 1);
    assert_eq!(fields.image_alt_coverage, Some(0.25));
}

#[test]
fn test_text_accessor_matches_fields() {
    let fields = fields_of(COMPLETE_PAGE);
    assert_eq!(fields.text(TextField::OgImage), fields.og_image.as_deref());
    assert_eq!(fields.text(TextField::Lang), Some("en"));
    assert_eq!(fields.text(TextField::Keywords), None);
}

#[test]
fn test_meta_fields_serialize_every_key() {
    let value = serde_json::to_value(MetaFields::default()).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "title",
        "description",
        "canonical",
        "og:title",
        "og:description",
        "og:image",
        "og:type",
        "og:url",
        "twitter:card",
        "twitter:title",
        "twitter:description",
        "twitter:image",
        "h1",
        "image_count",
        "images_with_alt",
        "image_alt_coverage",
        "robots",
        "lang",
        "viewport",
        "keywords",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert!(object["title"].is_null());
    assert_eq!(object["h1"], serde_json::json!([]));
}
