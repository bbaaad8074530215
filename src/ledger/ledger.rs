use serde::{Deserialize, Serialize};

use super::expense::{normalize_description, Expense};

/// In-memory collection of the budget and its expenses for the current
/// session. The initial budget is fixed at session start; only
/// [`Ledger::add_expense`] mutates the expense list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub initial_budget: f64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// Result of recording an expense. The caller owns the console, so the
/// confirmation text is rendered from this rather than printed here.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new expense was appended.
    Added { description: String, amount: f64 },
    /// An existing expense with the same description absorbed the amount.
    Accumulated { description: String, total: f64 },
}

impl Ledger {
    pub fn new(initial_budget: f64) -> Self {
        Self {
            initial_budget,
            expenses: Vec::new(),
        }
    }

    /// Records an expense. Repeated descriptions accumulate into the
    /// existing entry; new descriptions are appended in insertion order.
    /// Callers validate the description and amount before this point.
    pub fn add_expense(&mut self, description: &str, amount: f64) -> AddOutcome {
        let description = normalize_description(description);
        if let Some(existing) = self
            .expenses
            .iter_mut()
            .find(|expense| expense.description == description)
        {
            existing.amount += amount;
            return AddOutcome::Accumulated {
                description,
                total: existing.amount,
            };
        }
        self.expenses.push(Expense {
            description: description.clone(),
            amount,
        });
        AddOutcome::Added {
            description,
            amount,
        }
    }

    /// Sum of all expense amounts; zero for an empty ledger.
    pub fn total_expenses(&self) -> f64 {
        // std's empty f64 sum is -0.0, which Display renders with a sign;
        // fold from +0.0 so an empty ledger reports exactly 0.0.
        self.expenses
            .iter()
            .fold(0.0, |total, expense| total + expense.amount)
    }

    /// Remaining budget. Overspending is permitted, so this may go negative.
    pub fn balance(&self) -> f64 {
        self.initial_budget - self.total_expenses()
    }

    /// Renders the budget details report: budget, each expense in insertion
    /// order, total spend, and remaining balance.
    pub fn format_summary(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("Total budget: ${:.2}\n", self.initial_budget));
        report.push_str("Expenses:\n");
        for expense in &self.expenses {
            report.push_str(&format!(
                "  {}: ${:.2}\n",
                expense.description, expense.amount
            ));
        }
        report.push_str(&format!("Total spend: ${:.2}\n", self.total_expenses()));
        report.push_str(&format!("Remaining budget: ${:.2}", self.balance()));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_description_accumulates() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_expense("FOOD", 20.0);
        let outcome = ledger.add_expense("FOOD", 5.0);

        assert_eq!(
            outcome,
            AddOutcome::Accumulated {
                description: "FOOD".into(),
                total: 25.0,
            }
        );
        assert_eq!(ledger.expenses.len(), 1);
        assert_eq!(ledger.expenses[0], Expense::new("FOOD", 25.0));
        assert_eq!(ledger.total_expenses(), 25.0);
        assert_eq!(ledger.balance(), 75.0);
    }

    #[test]
    fn accumulation_is_case_insensitive() {
        let mut ledger = Ledger::new(50.0);
        ledger.add_expense("food", 10.0);
        ledger.add_expense("Food", 2.5);

        assert_eq!(ledger.expenses.len(), 1);
        assert_eq!(ledger.expenses[0].description, "FOOD");
        assert_eq!(ledger.expenses[0].amount, 12.5);
    }

    #[test]
    fn distinct_descriptions_preserve_insertion_order() {
        let mut ledger = Ledger::new(200.0);
        let first = ledger.add_expense("RENT", 50.0);
        ledger.add_expense("FOOD", 30.0);

        assert_eq!(
            first,
            AddOutcome::Added {
                description: "RENT".into(),
                amount: 50.0,
            }
        );
        let descriptions: Vec<&str> = ledger
            .expenses
            .iter()
            .map(|expense| expense.description.as_str())
            .collect();
        assert_eq!(descriptions, ["RENT", "FOOD"]);
        assert_eq!(ledger.total_expenses(), 80.0);
    }

    #[test]
    fn empty_ledger_totals_zero() {
        let ledger = Ledger::default();
        assert_eq!(ledger.total_expenses(), 0.0);
        assert_eq!(ledger.balance(), 0.0);
    }

    #[test]
    fn overspending_yields_negative_balance() {
        let mut ledger = Ledger::new(10.0);
        ledger.add_expense("X", 50.0);
        assert_eq!(ledger.balance(), -40.0);
    }

    #[test]
    fn balance_tracks_budget_minus_total() {
        let mut ledger = Ledger::new(120.0);
        ledger.add_expense("RENT", 80.0);
        ledger.add_expense("FOOD", 15.0);
        ledger.add_expense("FOOD", 5.0);
        assert_eq!(ledger.balance(), ledger.initial_budget - ledger.total_expenses());
        assert_eq!(ledger.balance(), 20.0);
    }

    #[test]
    fn summary_lists_expenses_in_order() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_expense("RENT", 50.0);
        ledger.add_expense("FOOD", 25.0);

        let summary = ledger.format_summary();
        assert!(summary.contains("Total budget: $100.00"));
        assert!(summary.contains("Total spend: $75.00"));
        assert!(summary.contains("Remaining budget: $25.00"));

        let rent = summary.find("RENT: $50.00").expect("rent line");
        let food = summary.find("FOOD: $25.00").expect("food line");
        assert!(rent < food, "summary must preserve insertion order");
    }

    #[test]
    fn summary_of_empty_ledger_reports_zero_spend() {
        let ledger = Ledger::new(40.0);
        let summary = ledger.format_summary();
        assert!(summary.contains("Total spend: $0.00"));
        assert!(summary.contains("Remaining budget: $40.00"));
    }
}
