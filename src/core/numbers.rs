/// Strips trailing decimal zeros, keeping the sign. Zero stays zero.
pub fn no_boring_zeros(n: i64) -> i64 {
    let mut trimmed = n;
    while trimmed != 0 && trimmed % 10 == 0 {
        trimmed /= 10;
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_boring_zeros() {
        assert_eq!(no_boring_zeros(1050), 105);
        assert_eq!(no_boring_zeros(-1050), -105);
        assert_eq!(no_boring_zeros(1_000_000), 1);
        assert_eq!(no_boring_zeros(101), 101);
    }

    #[test]
    fn test_no_boring_zeros_fixed_points() {
        assert_eq!(no_boring_zeros(0), 0);
        for digit in -9..=9 {
            assert_eq!(no_boring_zeros(digit), digit);
        }
    }

    #[test]
    fn test_no_boring_zeros_extremes() {
        assert_eq!(no_boring_zeros(i64::MIN), i64::MIN);
        assert_eq!(no_boring_zeros(-9_000_000_000_000_000_000), -9);
    }
}
