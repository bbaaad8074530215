use serde::{Deserialize, Serialize};

/// A named, amount-bearing entry in the ledger, unique by normalized
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(description: impl AsRef<str>, amount: f64) -> Self {
        Self {
            description: normalize_description(description.as_ref()),
            amount,
        }
    }
}

/// Canonical storage form for descriptions: trimmed and upper-cased.
pub fn normalize_description(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_description() {
        let expense = Expense::new("  food ", 12.5);
        assert_eq!(expense.description, "FOOD");
        assert_eq!(expense.amount, 12.5);
    }
}
