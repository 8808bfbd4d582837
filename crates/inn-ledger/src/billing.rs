/// Tax applied to every room bill.
pub const DEFAULT_TAX_RATE: f64 = 0.12;

/// Amounts computed for one stay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charges {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Compute the charges for `days` at `rate` per day.
///
/// Plain multiply-then-add in `f64`; nothing is rounded along the way.
pub fn settle(rate: f64, days: u32, tax_rate: f64) -> Charges {
    let subtotal = rate * f64::from(days);
    let tax = subtotal * tax_rate;
    Charges {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_days_of_ac() {
        let charges = settle(2000.0, 3, DEFAULT_TAX_RATE);
        assert_eq!(charges.subtotal, 6000.0);
        assert_eq!(charges.tax, 720.0);
        assert_eq!(charges.total, 6720.0);
    }

    #[test]
    fn premium_week() {
        let charges = settle(3000.0, 7, DEFAULT_TAX_RATE);
        assert_eq!(charges.subtotal, 21000.0);
        assert_eq!(charges.total, charges.subtotal + charges.subtotal * 0.12);
    }

    #[test]
    fn zero_days_is_free() {
        let charges = settle(2500.0, 0, DEFAULT_TAX_RATE);
        assert_eq!(charges, Charges { subtotal: 0.0, tax: 0.0, total: 0.0 });
    }

    #[test]
    fn custom_tax_rate() {
        let charges = settle(1000.0, 2, 0.05);
        assert_eq!(charges.subtotal, 2000.0);
        assert_eq!(charges.tax, 100.0);
        assert_eq!(charges.total, 2100.0);
    }
}
