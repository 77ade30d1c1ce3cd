use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::themes::Theme;
use crate::model::{Slide, clean_text};
use crate::render::layouts::{bar, label, line_height, rect, rows};
use crate::render::{Element, ElementKind, Field, TextStyle};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+%?").expect("valid regex"));

/// The figure shown large: first number in the title (with an optional
/// percent sign), or "100%" when the title has none.
pub fn headline_number(title: &str) -> String {
    NUMBER
        .find(&clean_text(title))
        .map_or_else(|| "100%".to_string(), |m| m.as_str().to_string())
}

/// The title with the first number removed; the whole title when nothing
/// else is left.
pub fn headline_text(title: &str) -> String {
    let cleaned = clean_text(title);
    let rest = NUMBER.replace(&cleaned, "").trim().to_string();
    if rest.is_empty() { cleaned } else { rest }
}

/// Huge figure on the left, title remainder and content on the right.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let mut elements = vec![
        label(
            rect(48.0, 216.0, 526.0, 288.0),
            headline_number(&slide.title),
            TextStyle::new(192.0, theme.accent, family.clone())
                .right()
                .middle(),
        ),
        bar(
            rect(638.0, 232.0, 4.0, 256.0),
            Theme::with_opacity(theme.text_secondary, 0.2),
        ),
    ];

    let column = rect(706.0, 96.0, 526.0, 528.0);
    let title_height = line_height(36.0, 2.0);
    let item_height = line_height(20.0, 2.0);
    let count = slide.content.len();
    let total = title_height + 24.0 + count as f32 * (item_height + 8.0);
    let top = column.top() + ((column.height() - total) / 2.0).max(0.0);

    elements.push(Element {
        rect: rect(column.left(), top, column.width(), title_height),
        kind: ElementKind::Text {
            field: Some(Field::Title),
            text: headline_text(&slide.title),
            style: TextStyle::new(36.0, theme.text_primary, family.clone()).bottom(),
            placeholder: "",
        },
    });

    let list = rect(
        column.left(),
        top + title_height + 24.0,
        column.width(),
        column.bottom() - top - title_height - 24.0,
    );
    let style = TextStyle::new(20.0, theme.text_secondary, family);
    for (i, slot) in rows(list, count, item_height, 8.0, false).into_iter().enumerate() {
        elements.push(crate::render::layouts::text(
            slot,
            slide,
            Field::Content(i),
            style.clone(),
        ));
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_number() {
        assert_eq!(headline_number("300% Growth"), "300%");
        assert_eq!(headline_number("Over 42 countries and 7 seas"), "42");
        assert_eq!(headline_number("Massive growth"), "100%");
    }

    #[test]
    fn test_headline_text() {
        assert_eq!(headline_text("300% Growth"), "Growth");
        assert_eq!(headline_text("**85%**"), "85%");
        assert_eq!(headline_text("No numbers"), "No numbers");
    }
}
