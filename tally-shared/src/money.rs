use rust_decimal::Decimal;

/// Monetary amount in the store's currency.
pub type Money = Decimal;

/// Fraction in `[0, 1]` (tax rate, discount).
pub type Rate = Decimal;

/// Convert a caller-facing percentage (e.g. `10`) to a fraction (`0.10`).
pub fn percent_to_fraction(percent: Decimal) -> Rate {
    percent / Decimal::ONE_HUNDRED
}

/// `price * quantity`, or `None` if the product does not fit in a `Decimal`.
pub fn line_total(price: Money, quantity: u32) -> Option<Money> {
    price.checked_mul(Decimal::from(quantity))
}

/// Sum of line totals; `None` if any line or the running sum overflows.
pub fn checked_sum<I>(lines: I) -> Option<Money>
where
    I: IntoIterator<Item = Option<Money>>,
{
    lines
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_fraction() {
        assert_eq!(percent_to_fraction(Decimal::from(10)), Decimal::new(1, 1));
        assert_eq!(percent_to_fraction(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_to_fraction(Decimal::ONE_HUNDRED), Decimal::ONE);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(Decimal::from(1500), 2), Some(Decimal::from(3000)));
        assert_eq!(line_total(Decimal::from(1500), 0), Some(Decimal::ZERO));
        assert_eq!(line_total(Decimal::MAX, 2), None);
    }

    #[test]
    fn test_checked_sum() {
        let lines = vec![Some(Decimal::from(10)), Some(Decimal::from(5))];
        assert_eq!(checked_sum(lines), Some(Decimal::from(15)));

        assert_eq!(checked_sum(vec![Some(Decimal::ONE), None]), None);
        assert_eq!(checked_sum(vec![Some(Decimal::MAX), Some(Decimal::MAX)]), None);
        assert_eq!(checked_sum(Vec::new()), Some(Decimal::ZERO));
    }
}
