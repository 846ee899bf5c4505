// Guest count parsing.
//
// The form sends the count as text and the sheet stores whatever the form wrote, so both sides
// go through the same leading-integer parse: optional whitespace, optional sign, digits.
// Anything after the digits is ignored.

pub const DEFAULT_GUEST_COUNT: u32 = 1;

pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|value| value * sign)
}

/// Positive guest count, or [`DEFAULT_GUEST_COUNT`] when the text is missing, unparseable or not positive.
pub fn guest_count_or_default(raw: &str) -> u32 {
    parse_leading_int(raw)
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(DEFAULT_GUEST_COUNT)
}
