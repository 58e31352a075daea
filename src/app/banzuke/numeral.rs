//! Japanese numeral parsing
//!
//! Rank positions and day headings are written with kanji numerals
//! (`十八`, `百五`), occasionally with full-width or ASCII digits.

/// Replace full-width digits with their ASCII equivalents
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}

fn digit_value(c: char) -> Option<u32> {
    match c {
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => c.to_digit(10),
    }
}

/// Parse a positive numeral
///
/// Returns `None` for empty input, any unrecognised character, zero, or
/// overflow. Never guesses.
pub fn parse_numeral(text: &str) -> Option<u32> {
    let text = normalize_digits(text.trim());
    if text.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    let mut pending: Option<u32> = None;

    for c in text.chars() {
        if let Some(digit) = digit_value(c) {
            pending = Some(pending.unwrap_or(0).checked_mul(10)?.checked_add(digit)?);
            continue;
        }

        let unit = match c {
            '十' => 10,
            '百' => 100,
            _ => return None,
        };
        total = total.checked_add(pending.unwrap_or(1).checked_mul(unit)?)?;
        pending = None;
    }

    let value = total.checked_add(pending.unwrap_or(0))?;
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_numerals() {
        let cases = [
            ("一", 1),
            ("九", 9),
            ("十", 10),
            ("十一", 11),
            ("十八", 18),
            ("二十", 20),
            ("二十三", 23),
            ("百", 100),
            ("百五", 105),
            ("百十二", 112),
            ("一〇五", 105),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_numeral(text), Some(expected), "parsing {}", text);
        }
    }

    #[test]
    fn test_digit_forms() {
        assert_eq!(parse_numeral("18"), Some(18));
        assert_eq!(parse_numeral("１８"), Some(18));
        assert_eq!(parse_numeral(" 7 "), Some(7));
    }

    #[test]
    fn test_rejected_numerals() {
        assert_eq!(parse_numeral(""), None);
        assert_eq!(parse_numeral("〇"), None);
        assert_eq!(parse_numeral("0"), None);
        assert_eq!(parse_numeral("付出"), None);
        assert_eq!(parse_numeral("十x"), None);
        assert_eq!(parse_numeral("99999999999"), None);
    }

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("６勝２敗"), "6勝2敗");
        assert_eq!(normalize_digits("abc"), "abc");
    }
}
