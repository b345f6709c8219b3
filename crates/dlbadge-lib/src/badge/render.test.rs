use super::*;

#[test]
fn test_render_json_fixed_schema() {
    let artifact = render(120, &BadgeStyle::default(), BadgeFormat::Json);
    assert_eq!(
        artifact,
        BadgeArtifact::Json(ShieldsBadge {
            schema_version: 1,
            label: "downloads".to_string(),
            message: "120".to_string(),
            color: "blue".to_string(),
        })
    );
}

#[test]
fn test_render_svg_embeds_total_and_label() {
    let artifact = render(4096, &BadgeStyle::default(), BadgeFormat::Svg);
    let BadgeArtifact::Svg(markup) = artifact else {
        panic!("expected SVG artifact");
    };

    assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(markup.contains(">downloads</text>"));
    assert!(markup.contains(">4096</text>"));
    assert!(markup.contains("fill=\"#007ec6\""));
    assert_eq!(markup.matches("<rect").count(), 4);
}

#[test]
fn test_svg_width_grows_with_message() {
    let narrow = render_svg("downloads", "7", "blue");
    let wide = render_svg("downloads", "7777777", "blue");

    let width = |svg: &str| -> u32 {
        let start = svg.find("width=\"").unwrap() + 7;
        let end = start + svg[start..].find('"').unwrap();
        svg[start..end].parse().unwrap()
    };
    assert_eq!(width(&wide) - width(&narrow), 6 * CHAR_WIDTH);
}

#[test]
fn test_svg_escapes_label() {
    let markup = render_svg("a<b & \"c\"", "1", "blue");
    assert!(markup.contains("a&lt;b &amp; \"c\"</text>"));
    assert!(!markup.contains("a<b"));
    assert!(markup.contains("aria-label=\"a&lt;b &amp; &quot;c&quot;: 1\""));
}

#[test]
fn test_resolve_color() {
    assert_eq!(resolve_color("blue"), "#007ec6");
    assert_eq!(resolve_color("BrightGreen"), "#4c1");
    assert_eq!(resolve_color("ff8800"), "#ff8800");
    assert_eq!(resolve_color("#abc"), "#abc");
    assert_eq!(resolve_color("rebeccapurple"), "rebeccapurple");
}
