//! One-pass extremum scans

/// Best gain from buying at one price and selling at a later one
///
/// Keeps the lowest price seen so far and compares every later price against
/// it. Returns `0` when there are fewer than two prices or prices never rise.
pub fn max_profit(prices: &[i64]) -> i64 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0;
    };

    let mut lowest = first;
    let mut best = 0i64;

    for &price in rest {
        lowest = lowest.min(price);
        best = best.max(price.saturating_sub(lowest));
    }

    best
}

/// Largest value strictly smaller than the maximum
///
/// Returns `None` when the sequence holds fewer than two distinct values.
pub fn second_largest(seq: &[i32]) -> Option<i32> {
    let mut first: Option<i32> = None;
    let mut second: Option<i32> = None;

    for &value in seq {
        match first {
            None => first = Some(value),
            Some(top) if value > top => {
                second = first;
                first = Some(value);
            }
            Some(top) if value < top && second.map_or(true, |runner| value > runner) => {
                second = Some(value);
            }
            _ => {}
        }
    }

    second
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_profit() {
        assert_eq!(max_profit(&[100, 180, 260, 310, 40, 695]), 655);
        assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
        assert_eq!(max_profit(&[5]), 0);
        assert_eq!(max_profit(&[]), 0);
    }

    #[test]
    fn test_max_profit_extremes_saturate() {
        assert_eq!(max_profit(&[i64::MIN, i64::MAX]), i64::MAX);
    }

    #[test]
    fn test_second_largest() {
        assert_eq!(second_largest(&[1, 8, 4, 3, 7, 5]), Some(7));
        assert_eq!(second_largest(&[8, 8, 3]), Some(3));
        assert_eq!(second_largest(&[-5, -2]), Some(-5));
    }

    #[test]
    fn test_second_largest_missing() {
        assert_eq!(second_largest(&[]), None);
        assert_eq!(second_largest(&[4]), None);
        assert_eq!(second_largest(&[4, 4, 4]), None);
    }

    #[test]
    fn test_second_largest_minimum_value_is_found() {
        assert_eq!(second_largest(&[i32::MIN, 0]), Some(i32::MIN));
    }
}
