use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::StarRecord;

/// Columns taken by the row decorations around a description.
pub const ROW_MARGIN: usize = 22;
const ELLIPSIS: &str = "...";

/// Shorten `text` so it fits on one row of a `width`-column terminal.
///
/// Lengths are terminal columns, so wide glyphs count double. Widths below
/// the margin are tolerated and simply leave the ellipsis.
pub fn fit_to_width(text: &str, width: u16) -> String {
    let width = width as usize;
    let limit = width.saturating_sub(ROW_MARGIN);

    if text.width() <= limit {
        return text.to_string();
    }

    let budget = width.saturating_sub(ROW_MARGIN + ELLIPSIS.len());
    let mut used = 0;
    let mut out: String = text
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    out.push_str(ELLIPSIS);
    out
}

/// Copy of `star` whose description fits on one row.
pub fn display_copy(width: u16, star: &StarRecord) -> StarRecord {
    StarRecord {
        description: fit_to_width(&star.description, width),
        ..star.clone()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::fixtures::star;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_to_width("a small thing", 80), "a small thing");
    }

    #[test]
    fn exactly_at_limit_is_untouched() {
        let text = "x".repeat(58);
        assert_eq!(fit_to_width(&text, 80), text);
    }

    #[test]
    fn one_past_limit_is_cut() {
        let text = "x".repeat(59);
        let out = fit_to_width(&text, 80);
        assert_eq!(out, format!("{}...", "x".repeat(55)));
        assert_eq!(out.width(), 58);
    }

    #[test]
    fn narrow_terminal_leaves_only_ellipsis() {
        assert_eq!(fit_to_width("anything at all", 10), "...");
        assert_eq!(fit_to_width("anything at all", 0), "...");
    }

    #[test]
    fn narrow_terminal_keeps_empty_description() {
        assert_eq!(fit_to_width("", 5), "");
    }

    #[test]
    fn wide_glyphs_count_two_columns() {
        // 40 columns leaves 18 for the text; 15 before the ellipsis.
        let text = "星".repeat(40);
        let out = fit_to_width(&text, 40);
        assert_eq!(out, format!("{}...", "星".repeat(7)));
        assert!(out.width() <= 18);
    }

    #[test]
    fn wide_text_within_columns_is_untouched() {
        // 9 glyphs, 18 columns: exactly the limit at width 40.
        let text = "星".repeat(9);
        assert_eq!(fit_to_width(&text, 40), text);
        assert_ne!(fit_to_width(&"星".repeat(10), 40), "星".repeat(10));
    }

    #[test]
    fn display_copy_only_touches_description() {
        let mut original = star(7, "octo/long");
        original.description = "d".repeat(200);

        let copy = display_copy(60, &original);

        assert_eq!(copy.description.chars().count(), 38);
        assert_eq!(original.description.len(), 200);
        assert_eq!(copy.url, original.url);
        assert_eq!(copy.full_name, original.full_name);
    }

    proptest! {
        #[test]
        fn truncation_boundary(text in "[a-z 星é]{0,200}", width in 25u16..300) {
            let limit = width as usize - ROW_MARGIN;
            let out = fit_to_width(&text, width);
            let truncated = text.width() > limit;

            if truncated {
                prop_assert!(out.width() <= limit);
                prop_assert!(out.ends_with(ELLIPSIS));
            } else {
                prop_assert_eq!(&out, &text);
            }
        }
    }
}
