//! Deterministic ordering for scanned entries

use std::cmp::Ordering;

/// Compare two file names naturally: runs of ASCII digits compare by
/// numeric value, everything else compares byte-wise. `ep2` sorts before
/// `ep10`, where plain lexicographic order would reverse them.
///
/// Digit runs are compared without parsing, so arbitrarily long runs
/// cannot overflow. Names that differ only in zero padding (`01` vs `1`)
/// fall back to byte order to keep the ordering total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.as_bytes();
    let mut right = b.as_bytes();

    loop {
        match (left.first(), right.first()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&x), Some(&y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let (run_a, rest_a) = split_digit_run(left);
                    let (run_b, rest_b) = split_digit_run(right);
                    match cmp_digit_runs(run_a, run_b) {
                        Ordering::Equal => {
                            left = rest_a;
                            right = rest_b;
                        }
                        other => return other,
                    }
                } else {
                    match x.cmp(&y) {
                        Ordering::Equal => {
                            left = &left[1..];
                            right = &right[1..];
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

/// Split a byte slice at the end of its leading digit run
fn split_digit_run(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two digit runs by numeric value: ignore leading zeros, then a
/// longer run is larger, then compare digits byte-wise
fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(run: &[u8]) -> &[u8] {
    let start = run.iter().position(|&b| b != b'0').unwrap_or(run.len());
    &run[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(
            sorted(vec!["ep10.mp4", "ep2.mp4", "ep1.mp4"]),
            vec!["ep1.mp4", "ep2.mp4", "ep10.mp4"]
        );
    }

    #[test]
    fn test_plain_names_stay_lexicographic() {
        assert_eq!(sorted(vec!["beta", "alpha", "gamma"]), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_mixed_prefixes() {
        assert_eq!(
            sorted(vec!["b1", "a10", "a2", "b0"]),
            vec!["a2", "a10", "b0", "b1"]
        );
    }

    #[test]
    fn test_zero_padding_compares_by_value_first() {
        assert_eq!(natural_cmp("ep002", "ep10"), Ordering::Less);
        assert_eq!(natural_cmp("ep010", "ep2"), Ordering::Greater);
    }

    #[test]
    fn test_equal_values_with_different_padding_stay_ordered() {
        // "01" and "1" are numerically equal; byte order breaks the tie
        assert_eq!(natural_cmp("ep01", "ep1"), Ordering::Less);
        assert_eq!(natural_cmp("ep1", "ep01"), Ordering::Greater);
        assert_eq!(natural_cmp("ep01", "ep01"), Ordering::Equal);
    }

    #[test]
    fn test_long_digit_runs_do_not_overflow() {
        let small = "v99999999999999999998";
        let large = "v99999999999999999999";
        assert_eq!(natural_cmp(small, large), Ordering::Less);
    }

    #[test]
    fn test_digits_inside_longer_names() {
        assert_eq!(
            sorted(vec!["S01E10.mkv", "S01E9.mkv", "S01E2.mkv"]),
            vec!["S01E2.mkv", "S01E9.mkv", "S01E10.mkv"]
        );
    }
}
