use super::*;

#[test]
fn renders_headings_and_lists() {
    let html = render_markdown_html("# About\n\n- Cars\n- Drivers\n");
    assert!(html.contains("<h1>About</h1>"));
    assert!(html.contains("<li>Cars</li>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("Hello <script>alert(1)</script> world\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("Hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| City | Phone |\n|---|---|\n| Lahore | 042 |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>Lahore</td>"));
}
