//! Money arithmetic used for totals shown before the server recalculates them.

/// Rounds to 2 decimals, half away from zero.
///
/// Values such as `1.005` are stored a hair below the half; the scaled value
/// is nudged by a few ulps so the decimal the user typed wins.
pub fn round_money(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * 100.0;
    let nudged = scaled + scaled.signum() * scaled.abs() * f64::EPSILON * 4.0;
    nudged.round() / 100.0
}

/// Total of one document line.
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    round_money(quantity * unit_price)
}

/// Sum of already rounded line totals.
pub fn sum_money<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    round_money(values.into_iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(1.005), 1.01);
        assert_eq!(round_money(1.115), 1.12);
        assert_eq!(round_money(2.345), 2.35);
        assert_eq!(round_money(-1.005), -1.01);
        assert_eq!(round_money(1.004_9), 1.0);
        assert_eq!(round_money(2.344), 2.34);
        assert_eq!(round_money(-2.345_1), -2.35);
        assert_eq!(round_money(f64::NAN), 0.0);
        assert_eq!(round_money(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(3.0, 19.99), 59.97);
        assert_eq!(line_total(0.0, 10.0), 0.0);
        assert_eq!(line_total(3.0, 0.335), 1.01);
    }

    #[test]
    fn test_sum_money() {
        assert_eq!(sum_money(vec![0.1, 0.2]), 0.3);
        assert_eq!(sum_money(Vec::<f64>::new()), 0.0);
    }
}
