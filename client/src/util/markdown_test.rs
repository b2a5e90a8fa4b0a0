use super::*;

#[test]
fn renders_emphasis_and_links() {
    let html = render_html("Plans start **free**. See [pricing](/pricing).");
    assert!(html.contains("<strong>free</strong>"));
    assert!(html.contains(r#"<a href="/pricing">pricing</a>"#));
}

#[test]
fn strips_raw_html() {
    let html = render_html("Hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("Hello"));
}

#[test]
fn renders_lists() {
    let html = render_html("- one\n- two\n");
    assert!(html.contains("<ul>"));
    assert_eq!(html.matches("<li>").count(), 2);
}
