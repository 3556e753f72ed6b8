use mdict_types::LookupResult;

use crate::bridge::HostBridge;
use crate::panel::{FRAME_SANDBOX, render_document, render_host_page, text_excerpt};

#[test]
fn test_document_embeds_content_and_protocol() {
    let doc = render_document("abc-123", "<b>hello</b>");

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(r#"<div id="class_abc-123">"#));
    assert!(doc.contains(r#"<div class="mdict"><b>hello</b></div>"#));
    assert!(doc.contains(r#"var uuid = "abc-123";"#));

    for kind in ["iframe-resize", "request-theme", "entry-click", "'theme'"] {
        assert!(doc.contains(kind), "missing {kind}");
    }
    assert!(doc.contains("MutationObserver"));
    assert!(doc.contains("data-sound-url"));
    assert!(doc.contains("html.dark"));
}

#[test]
fn test_uuid_is_escaped() {
    let doc = render_document("x\"</script>", "");

    assert!(doc.contains(r#"id="class_x&quot;&lt;/script&gt;""#));
    assert!(doc.contains(r#"var uuid = "x\"<\/script>";"#));
}

#[test]
fn test_placeholders_in_content_are_left_alone() {
    let doc = render_document("u1", "literal {js_uuid} text");
    assert!(doc.contains("literal {js_uuid} text"));
}

#[test]
fn test_sandbox_allows_scripts() {
    assert!(FRAME_SANDBOX.contains("allow-scripts"));
    assert!(FRAME_SANDBOX.contains("allow-same-origin"));
}

#[test]
fn test_excerpt_strips_markup() {
    let html = "<style>.a{}</style><p>hello&nbsp;<b>world</b></p><script>alert(1)</script> &amp; more";
    assert_eq!(text_excerpt(html, 100), "hello world & more");
}

#[test]
fn test_excerpt_truncates() {
    assert_eq!(text_excerpt("<p>abcdefgh</p>", 4), "abcd…");
    assert_eq!(text_excerpt("", 4), "");
}

#[test]
fn test_host_page_embeds_frames() {
    let mut bridge = HostBridge::new();
    bridge.load(&[LookupResult {
        word: "cat".into(),
        uuid: "u1".into(),
        title: Some("Oxford".into()),
        logo: None,
        found: true,
        html: "<p class=\"x\">cat</p>".into(),
    }]);

    let page = render_host_page("cat", bridge.frames(), true);

    assert!(page.contains(r#"<html class="dark">"#));
    assert!(page.contains("var dark = true;"));
    assert!(page.contains(r#"data-uuid="u1""#));
    assert!(page.contains("style=\"height: 200px\""));
    assert!(page.contains("&lt;p class=&quot;x&quot;&gt;cat&lt;/p&gt;"));
    assert!(page.contains("Math.max(data.height + 20, 100)"));
    assert!(page.contains("dict-entry-click"));
    assert!(!page.contains("{frames}"));
}

#[test]
fn test_placeholder_shaped_uuid_keeps_content_in_body() {
    let doc = render_document("{html}", "<p>CONTENT</p>");

    assert!(doc.contains(r#"<div id="class_{html}">"#));
    assert!(doc.contains(r#"<div class="mdict"><p>CONTENT</p></div>"#));
    assert!(doc.contains(r#"var uuid = "{html}";"#));
}

#[test]
fn test_placeholder_shaped_word_stays_in_title() {
    let mut bridge = HostBridge::new();
    bridge.load(&[LookupResult {
        word: "x".into(),
        uuid: "u1".into(),
        title: None,
        logo: None,
        found: true,
        html: "<p>x</p>".into(),
    }]);

    let page = render_host_page("{frames}", bridge.frames(), false);

    assert!(page.contains("<title>{frames}</title>"));
    assert_eq!(page.matches(r#"data-uuid="u1""#).count(), 1);
    assert!(page.contains("var dark = false;"));
}
