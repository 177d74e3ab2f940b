/// Source of credit-hour values for course identifiers.
///
/// Implementations must be total: unknown courses and unreadable values
/// resolve to zero rather than failing.
pub trait CreditLookup {
    fn credit_hours(&self, course: &str) -> u32;
}

impl<T: CreditLookup + ?Sized> CreditLookup for &T {
    fn credit_hours(&self, course: &str) -> u32 {
        (**self).credit_hours(course)
    }
}

/// Largest credit value accepted from a catalog row; anything above is
/// treated as malformed.
pub const MAX_CREDIT_HOURS: u32 = u16::MAX as u32;

/// Parses the leading numeric token of a catalog credit field such as
/// `"3 hours."` or `"1.5 hours"`, truncating to whole hours.
pub fn parse_credit_hours(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let token_len = trimmed
        .char_indices()
        .find(|(_, ch)| !(ch.is_ascii_digit() || *ch == '.'))
        .map(|(index, _)| index)
        .unwrap_or(trimmed.len());

    let value = trimmed[..token_len].parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value > f64::from(MAX_CREDIT_HOURS) {
        return None;
    }

    Some(value.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_with_trailing_units() {
        assert_eq!(parse_credit_hours("3 hours."), Some(3));
        assert_eq!(parse_credit_hours(" 4 hours. "), Some(4));
        assert_eq!(parse_credit_hours("1 TO 4 hours."), Some(1));
    }

    #[test]
    fn truncates_fractional_hours() {
        assert_eq!(parse_credit_hours("2.5 hours."), Some(2));
        assert_eq!(parse_credit_hours("3.0"), Some(3));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(parse_credit_hours("hours"), None);
        assert_eq!(parse_credit_hours(""), None);
        assert_eq!(parse_credit_hours(". hours"), None);
        assert_eq!(parse_credit_hours("1.2.3 hours"), None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(parse_credit_hours("99999999999 hours."), None);
        assert_eq!(parse_credit_hours("65536"), None);
        assert_eq!(parse_credit_hours("65535 hours."), Some(MAX_CREDIT_HOURS));
    }
}
