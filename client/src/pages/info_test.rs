use super::*;

#[test]
fn content_pages_render_a_heading() {
    for (page, heading) in [(ABOUT_MD, "About RentRide"), (CONTACT_MD, "Contact us"), (TERMS_MD, "Terms of service")] {
        let html = render_markdown_html(page);
        assert!(html.contains(&format!("<h1>{heading}</h1>")), "missing heading {heading}");
    }
}

#[test]
fn contact_page_renders_table() {
    assert!(render_markdown_html(CONTACT_MD).contains("<table>"));
}
