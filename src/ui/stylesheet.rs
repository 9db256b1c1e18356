use super::style::{style_for, StyleTokens, HIDDEN_TOKENS, VISIBLE_TOKENS};
use crate::toast::ToastKind;

pub const CONTAINER_CLASS: &str = "toast-container";
pub const PANEL_CLASS: &str = "toast-panel";

fn token_color(token: &str) -> Option<&'static str> {
    let shade = token
        .trim_start_matches("from-")
        .trim_start_matches("to-")
        .trim_start_matches("border-");
    let color = match shade {
        "purple-600" => "#9333ea",
        "pink-600" => "#db2777",
        "purple-400" => "#c084fc",
        "green-600" => "#16a34a",
        "emerald-600" => "#059669",
        "green-400" => "#4ade80",
        "red-600" => "#dc2626",
        "rose-600" => "#e11d48",
        "red-400" => "#f87171",
        "blue-600" => "#2563eb",
        "indigo-600" => "#4f46e5",
        "blue-400" => "#60a5fa",
        _ => return None,
    };
    Some(color)
}

/// CSS defining every class the presenter toggles, for hosts without a utility framework.
pub fn toast_stylesheet(tokens: StyleTokens, motion_enabled: bool) -> String {
    let motion_ms = if motion_enabled {
        tokens.motion_standard_ms
    } else {
        0
    };

    let mut css = format!(
        "
.{container} {{
  transition: opacity {motion_ms}ms cubic-bezier(0.4, 0, 0.2, 1),
              margin-top {motion_ms}ms cubic-bezier(0.4, 0, 0.2, 1);
}}
.{container} .{panel} {{
  border-radius: {card_radius}px;
  border: {border_width}px solid transparent;
  padding: {spacing_12}px {spacing_16}px;
  color: #ffffff;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.14),
              0 1px 3px rgba(0, 0, 0, 0.08);
}}
.{container} .{panel} label {{
  color: #ffffff;
  margin-right: {spacing_8}px;
}}
.{container}.{hidden_opacity} {{
  opacity: 0;
}}
.{container}.{hidden_offset} {{
  margin-top: {slide_offset}px;
}}
.{container}.{visible_opacity} {{
  opacity: 1;
}}
.{container}.{visible_offset} {{
  margin-top: 0;
}}
",
        container = CONTAINER_CLASS,
        panel = PANEL_CLASS,
        card_radius = tokens.card_radius,
        border_width = tokens.border_width,
        spacing_8 = tokens.spacing_8,
        spacing_12 = tokens.spacing_12,
        spacing_16 = tokens.spacing_16,
        slide_offset = tokens.slide_offset_px,
        hidden_opacity = HIDDEN_TOKENS[0],
        hidden_offset = HIDDEN_TOKENS[1],
        visible_opacity = VISIBLE_TOKENS[0],
        visible_offset = VISIBLE_TOKENS[1],
    );

    for kind in ToastKind::ALL {
        let style = style_for(kind);
        let [from, to] = style.gradient;
        let (Some(from_color), Some(to_color), Some(border_color)) = (
            token_color(from),
            token_color(to),
            token_color(style.border),
        ) else {
            tracing::warn!(%kind, "toast style has no colour mapping; skipping");
            continue;
        };
        css.push_str(&format!(
            "
/* ── {kind} ── */
.{panel}.{from}.{to} {{
  background-image: linear-gradient(to right, {from_color}, {to_color});
}}
.{panel}.{border} {{
  border-color: {border_color};
}}
",
            panel = PANEL_CLASS,
            border = style.border,
        ));
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{KIND_STYLE_TOKENS, LAYOUT_TOKENS};

    #[test]
    fn every_kind_token_has_a_colour() {
        for token in KIND_STYLE_TOKENS {
            assert!(token_color(token).is_some(), "no colour for {token}");
        }
        assert_eq!(token_color("from-amber-600"), None);
    }

    #[test]
    fn stylesheet_defines_every_toggled_class() {
        let css = toast_stylesheet(LAYOUT_TOKENS, true);
        for token in KIND_STYLE_TOKENS
            .iter()
            .chain(HIDDEN_TOKENS.iter())
            .chain(VISIBLE_TOKENS.iter())
        {
            assert!(css.contains(&format!(".{token}")), "missing .{token}");
        }
        assert!(css.contains("linear-gradient(to right, #16a34a, #059669)"));
        assert!(css.contains("transition: opacity 300ms"));
        assert!(!css.contains("margin-start"));
        assert!(!css.contains("margin-end"));
    }

    #[test]
    fn stylesheet_drops_motion_when_disabled() {
        let css = toast_stylesheet(LAYOUT_TOKENS, false);
        assert!(css.contains("transition: opacity 0ms"));
    }
}
