//! Numeric-aware ordering for prefix lists.
//!
//! Plain lexicographic ordering puts `10.10.0.0/16` before `10.2.0.0/16`
//! because `1` < `2` byte-wise. The comparator here treats digit runs as
//! numbers and everything else case-insensitively, so multi-digit octets and
//! hextets order the way a human reads them.

use std::cmp::Ordering;

use crate::family::AddressFamily;

/// Compares two strings with numeric collation.
///
/// Digit runs are compared by numeric value (arbitrary length, no overflow),
/// all other bytes case-insensitively. Ties fall back to the shorter string.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(a, i);
            let end_b = digit_run_end(b, j);
            match cmp_digit_runs(&a[i..end_a], &b[j..end_b]) {
                Ordering::Equal => {
                    i = end_a;
                    j = end_b;
                },
                other => return other,
            }
        } else {
            match a[i].to_ascii_lowercase().cmp(&b[j].to_ascii_lowercase()) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                },
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Sorts a prefix list in ascending numeric-aware order.
///
/// IPv6 entries are compared in URL-literal form (`[2001:db8::/32]`); the
/// brackets exist only during comparison and never appear in the list itself.
pub fn sort_prefixes(prefixes: &mut [String], family: AddressFamily) {
    match family {
        AddressFamily::Ipv4 => prefixes.sort_by(|a, b| natural_cmp(a, b)),
        AddressFamily::Ipv6 => {
            prefixes.sort_by(|a, b| natural_cmp(&format!("[{a}]"), &format!("[{b}]")));
        },
    }
}

fn digit_run_end(s: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a_sig = strip_leading_zeros(a);
    let b_sig = strip_leading_zeros(b);

    // More significant digits means a larger number; equal lengths compare
    // digit-wise. Runs equal in value order by length (fewer leading zeros
    // first).
    a_sig
        .len()
        .cmp(&b_sig.len())
        .then_with(|| a_sig.cmp(b_sig))
        .then_with(|| a.len().cmp(&b.len()))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let first = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[first..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_digit_octets_order_numerically() {
        let mut prefixes = vec![
            "10.2.0.0/16".to_string(),
            "10.10.0.0/16".to_string(),
            "10.1.0.0/16".to_string(),
        ];
        sort_prefixes(&mut prefixes, AddressFamily::Ipv4);
        assert_eq!(prefixes, ["10.1.0.0/16", "10.2.0.0/16", "10.10.0.0/16"]);
    }

    #[test]
    fn ipv6_hextets_order_numerically() {
        let mut prefixes = vec![
            "2001:db8:10::/32".to_string(),
            "2001:db8:2::/32".to_string(),
        ];
        sort_prefixes(&mut prefixes, AddressFamily::Ipv6);
        assert_eq!(prefixes, ["2001:db8:2::/32", "2001:db8:10::/32"]);
        assert!(prefixes.iter().all(|p| !p.contains('[') && !p.contains(']')));
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(natural_cmp("2001:DB8::/32", "2001:db8::/32"), Ordering::Equal);
        assert_eq!(natural_cmp("2001:db8::/32", "2001:DC8::/32"), Ordering::Less);
    }

    #[test]
    fn prefix_length_participates_in_ordering() {
        assert_eq!(natural_cmp("10.0.0.0/8", "10.0.0.0/16"), Ordering::Less);
        assert_eq!(natural_cmp("10.0.0.0/24", "10.0.0.0/9"), Ordering::Greater);
    }

    #[test]
    fn shorter_string_wins_ties() {
        assert_eq!(natural_cmp("10.0.0.0", "10.0.0.0/8"), Ordering::Less);
    }

    #[test]
    fn large_digit_runs_do_not_overflow() {
        let a = format!("{}a", "9".repeat(40));
        let b = format!("{}b", "9".repeat(40));
        assert_eq!(natural_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn leading_zeros_compare_by_value_first() {
        assert_eq!(natural_cmp("a010", "a9"), Ordering::Greater);
        assert_eq!(natural_cmp("a1", "a01"), Ordering::Less);
    }
}
