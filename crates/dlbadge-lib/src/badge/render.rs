use super::{BadgeArtifact, BadgeStyle, ShieldsBadge};
use crate::primitives::BadgeFormat;
use html_escape::{encode_double_quoted_attribute, encode_text};

const HEIGHT: u32 = 20;
const CHAR_WIDTH: u32 = 7;
const PADDING: u32 = 10;
const LABEL_FILL: &str = "#555";

/// shields.io named colors
const NAMED_COLORS: &[(&str, &str)] = &[
    ("brightgreen", "#4c1"),
    ("green", "#97ca00"),
    ("yellowgreen", "#a4a61d"),
    ("yellow", "#dfb317"),
    ("orange", "#fe7d37"),
    ("red", "#e05d44"),
    ("blue", "#007ec6"),
    ("grey", "#555"),
    ("gray", "#555"),
    ("lightgrey", "#9f9f9f"),
    ("lightgray", "#9f9f9f"),
];

pub fn render(total: u64, style: &BadgeStyle, format: BadgeFormat) -> BadgeArtifact {
    let message = total.to_string();
    match format {
        BadgeFormat::Json => BadgeArtifact::Json(ShieldsBadge {
            schema_version: 1,
            label: style.label.clone(),
            message,
            color: style.color.clone(),
        }),
        BadgeFormat::Svg => BadgeArtifact::Svg(render_svg(&style.label, &message, &style.color)),
    }
}

/// Map a shields.io color name or bare hex value to an SVG fill
pub fn resolve_color(color: &str) -> String {
    let color = color.trim();
    if let Some((_, hex)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
    {
        return hex.to_string();
    }

    let is_bare_hex = matches!(color.len(), 3 | 6) && color.chars().all(|c| c.is_ascii_hexdigit());
    if is_bare_hex {
        format!("#{color}")
    } else {
        color.to_string()
    }
}

fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * CHAR_WIDTH + PADDING * 2
}

/// Two-panel flat badge: grey label on the left, colored value on the right
pub fn render_svg(label: &str, message: &str, color: &str) -> String {
    let label_width = text_width(label);
    let message_width = text_width(message);
    let width = label_width + message_width;

    let title = format!("{label}: {message}");
    let aria = encode_double_quoted_attribute(&title);
    let fill = resolve_color(color);
    let fill = encode_double_quoted_attribute(&fill);
    let label_text = encode_text(label);
    let message_text = encode_text(message);
    let title_text = encode_text(&title);

    let label_x = label_width / 2;
    let message_x = label_width + message_width / 2;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{HEIGHT}" role="img" aria-label="{aria}">
  <title>{title_text}</title>
  <linearGradient id="s" x2="0" y2="100%">
    <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
    <stop offset="1" stop-opacity=".1"/>
  </linearGradient>
  <clipPath id="r">
    <rect width="{width}" height="{HEIGHT}" rx="3" fill="#fff"/>
  </clipPath>
  <g clip-path="url(#r)">
    <rect width="{label_width}" height="{HEIGHT}" fill="{LABEL_FILL}"/>
    <rect x="{label_width}" width="{message_width}" height="{HEIGHT}" fill="{fill}"/>
    <rect width="{width}" height="{HEIGHT}" fill="url(#s)"/>
  </g>
  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">
    <text x="{label_x}" y="15" fill="#010101" fill-opacity=".3">{label_text}</text>
    <text x="{label_x}" y="14">{label_text}</text>
    <text x="{message_x}" y="15" fill="#010101" fill-opacity=".3">{message_text}</text>
    <text x="{message_x}" y="14">{message_text}</text>
  </g>
</svg>
"##
    )
}

#[cfg(test)]
mod tests {
    include!("render.test.rs");
}
