//! Number styles for the locales the registry uses.
//!
//! Each style describes how a fixed-point amount is laid out: separators,
//! where the grouping separator goes, and which digit glyphs are printed.
//! Tags missing from the table render with the `en-US` style.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Last three digits, then groups of two: `12,34,567`.
    Indian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    Latin,
    ArabicIndic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub grouping: Grouping,
    pub digits: Digits,
}

const fn style(
    group_separator: &'static str,
    decimal_separator: &'static str,
    grouping: Grouping,
    digits: Digits,
) -> NumberStyle {
    NumberStyle {
        group_separator,
        decimal_separator,
        grouping,
        digits,
    }
}

const COMMA_DOT: NumberStyle = style(",", ".", Grouping::Thousands, Digits::Latin);
const DOT_COMMA: NumberStyle = style(".", ",", Grouping::Thousands, Digits::Latin);

static STYLES: &[(&str, NumberStyle)] = &[
    ("en-US", COMMA_DOT),
    ("en-GB", COMMA_DOT),
    ("en-CA", COMMA_DOT),
    ("en-AU", COMMA_DOT),
    ("en-NG", COMMA_DOT),
    ("en-KE", COMMA_DOT),
    ("en-GH", COMMA_DOT),
    ("ja-JP", COMMA_DOT),
    ("zh-CN", COMMA_DOT),
    ("en-IN", style(",", ".", Grouping::Indian, Digits::Latin)),
    ("de-DE", DOT_COMMA),
    ("ar-MA", DOT_COMMA),
    // narrow no-break space
    ("fr-CM", style("\u{202F}", ",", Grouping::Thousands, Digits::Latin)),
    // no-break space
    ("en-ZA", style("\u{00A0}", ",", Grouping::Thousands, Digits::Latin)),
    ("ar-EG", style("\u{066C}", "\u{066B}", Grouping::Thousands, Digits::ArabicIndic)),
];

pub fn number_style(locale: &str) -> NumberStyle {
    STYLES
        .iter()
        .find(|(tag, _)| *tag == locale)
        .map(|(_, style)| *style)
        .unwrap_or(COMMA_DOT)
}

impl NumberStyle {
    /// Lays out a string of ASCII digits (the integer part) with this style's
    /// grouping separator.
    pub fn group(&self, int_digits: &str) -> String {
        let len = int_digits.len();
        let mut out = String::with_capacity(len + len / 2);
        for (i, ch) in int_digits.chars().enumerate() {
            let remaining = len - i;
            if i > 0 && self.breaks_before(remaining) {
                out.push_str(self.group_separator);
            }
            out.push(ch);
        }
        out
    }

    fn breaks_before(&self, remaining: usize) -> bool {
        match self.grouping {
            Grouping::Thousands => remaining % 3 == 0,
            Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }

    pub fn localize_digits(&self, s: &str) -> String {
        match self.digits {
            Digits::Latin => s.to_string(),
            Digits::ArabicIndic => s
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}
