//! Width-aware padding and truncation for table cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Horizontal alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
}

/// Fits `text` into exactly `width` terminal columns.
///
/// Text wider than `width` is cut and ends with an ellipsis.
#[must_use]
pub fn fit_cell(text: &str, width: usize, align: Align) -> String {
    if width == 0 {
        return String::new();
    }

    let text_width = UnicodeWidthStr::width(text);
    let fitted = if text_width > width {
        truncate(text, width.saturating_sub(1)) + &ELLIPSIS.to_string()
    } else {
        text.to_owned()
    };

    let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(fitted.as_str())));
    match align {
        Align::Left => fitted + &padding,
        Align::Right => padding + &fitted,
    }
}

fn truncate(text: &str, width: usize) -> String {
    let mut output = String::new();
    let mut used = 0_usize;

    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::pads_left_aligned("UF", 5, Align::Left, "UF   ")]
    #[case::pads_right_aligned("12", 5, Align::Right, "   12")]
    #[case::exact_width("Bahia", 5, Align::Left, "Bahia")]
    #[case::truncates("Pernambuco", 6, Align::Left, "Perna…")]
    #[case::accented("Ceará", 5, Align::Left, "Ceará")]
    #[case::zero_width("Bahia", 0, Align::Left, "")]
    fn fits_text(
        #[case] text: &str,
        #[case] width: usize,
        #[case] align: Align,
        #[case] expected: &str,
    ) {
        assert_eq!(fit_cell(text, width, align), expected);
    }

    #[test]
    fn wide_characters_count_double() {
        let fitted = fit_cell("日本語", 4, Align::Left);
        assert_eq!(UnicodeWidthStr::width(fitted.as_str()), 4);
        assert_eq!(fitted, "日… ");
    }
}
