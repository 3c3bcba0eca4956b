//! # Bill Splitting
//!
//! Pure arithmetic behind the split-bill form.
//!
//! ```text
//! friend_expense = bill_total - your_expense   (0 while bill_total is 0)
//!
//! payer == You     → delta = +friend_expense   (they owe you their share)
//! payer == Friend  → delta = -your_expense     (you owe them your share)
//! ```
//!
//! Inputs are not bounds-checked: negative or fractional values pass
//! through unchanged.

/// Who fronted the whole bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    You,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::You => Payer::Friend,
            Payer::Friend => Payer::You,
        }
    }

    /// Label shown in the selector; the friend option uses the friend's name.
    pub fn label(self, friend_name: &str) -> &str {
        match self {
            Payer::You => "You",
            Payer::Friend => friend_name,
        }
    }
}

/// Current values of the split-bill form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitBill {
    pub bill_total: f64,
    pub your_expense: f64,
    pub payer: Payer,
}

impl SplitBill {
    pub fn friend_expense(&self) -> f64 {
        if self.bill_total != 0.0 {
            self.bill_total - self.your_expense
        } else {
            0.0
        }
    }

    /// The balance change to apply, or `None` when a required value is missing.
    pub fn delta(&self) -> Option<f64> {
        if self.bill_total == 0.0 || self.your_expense == 0.0 {
            return None;
        }
        Some(match self.payer {
            Payer::You => self.friend_expense(),
            Payer::Friend => -self.your_expense,
        })
    }
}

/// Parse a numeric field the lenient way: blank or garbage reads as 0.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(bill_total: f64, your_expense: f64, payer: Payer) -> SplitBill {
        SplitBill {
            bill_total,
            your_expense,
            payer,
        }
    }

    #[test]
    fn test_you_pay() {
        let bill = split(100.0, 30.0, Payer::You);
        assert_eq!(bill.friend_expense(), 70.0);
        assert_eq!(bill.delta(), Some(70.0));
    }

    #[test]
    fn test_friend_pays() {
        let bill = split(100.0, 30.0, Payer::Friend);
        assert_eq!(bill.delta(), Some(-30.0));
    }

    #[test]
    fn test_friend_expense_zero_without_bill() {
        assert_eq!(split(0.0, 30.0, Payer::You).friend_expense(), 0.0);
    }

    #[test]
    fn test_missing_values_reject() {
        assert_eq!(split(0.0, 30.0, Payer::You).delta(), None);
        assert_eq!(split(100.0, 0.0, Payer::You).delta(), None);
        assert_eq!(SplitBill::default().delta(), None);
    }

    #[test]
    fn test_no_bounds_checking() {
        // Expense larger than the bill yields a negative share as-is
        let bill = split(10.0, 25.5, Payer::You);
        assert_eq!(bill.delta(), Some(-15.5));
    }

    #[test]
    fn test_payer_toggle_and_label() {
        assert_eq!(Payer::default(), Payer::You);
        assert_eq!(Payer::You.toggle(), Payer::Friend);
        assert_eq!(Payer::Friend.toggle(), Payer::You);
        assert_eq!(Payer::Friend.label("Sarah"), "Sarah");
        assert_eq!(Payer::You.label("Sarah"), "You");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("  42 "), 42.0);
        assert_eq!(parse_amount("-3.5"), -3.5);
        assert_eq!(parse_amount("1.2.3"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }
}
