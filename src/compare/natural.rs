//! Natural, case-insensitive string ordering.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits
}

/// Digit runs compare by numeric value; leading zeros only break ties.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let ta = a.trim_start_matches('0');
    let tb = b.trim_start_matches('0');
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.len().cmp(&b.len()))
}

/// Compares two strings in natural order ignoring case: runs of digits are
/// compared as numbers (`"img2" < "img10"`), other characters by their
/// lowercase form.
pub fn natural_cmp_ci(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let ord = cmp_digit_runs(&take_digits(&mut a), &take_digits(&mut b));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = ca.to_lowercase().cmp(cb.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                a.next();
                b.next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_cmp_ci("img2", "img10"), Ordering::Less);
        assert_eq!(natural_cmp_ci("10", "9"), Ordering::Greater);
        assert_eq!(natural_cmp_ci("a1b2", "a1b10"), Ordering::Less);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(natural_cmp_ci("B", "b"), Ordering::Equal);
        assert_eq!(natural_cmp_ci("Apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp_ci("Żyrafa", "żyrafa"), Ordering::Equal);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(natural_cmp_ci("1", "b"), Ordering::Less);
        assert_eq!(natural_cmp_ci("", "a"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_break_ties() {
        assert_eq!(natural_cmp_ci("07", "7"), Ordering::Greater);
        assert_eq!(natural_cmp_ci("07", "8"), Ordering::Less);
    }
}
