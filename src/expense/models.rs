//! The expense record shown on the dashboard and its amount value.

use serde::{Deserialize, Serialize};

use super::amount::{format_ringgit, parse_amount};

/// A single expense incurred by a production department.
///
/// Fields are declared in the order they are serialized, which is also the
/// column order of the spreadsheet export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The date the expense was incurred, usually formatted as `YYYY-MM-DD`.
    pub date: String,
    /// The name of the department that incurred the expense.
    pub department: String,
    /// Free text describing the expense.
    pub description: String,
    /// The amount spent, exactly as supplied.
    pub amount: Amount,
    /// A label for the day, e.g. "Mon" or "Day 3".
    pub day: String,
}

impl Expense {
    /// Create an expense with a text amount, for test fixtures.
    #[cfg(test)]
    pub fn build(date: &str, department: &str, description: &str, amount: &str, day: &str) -> Self {
        Self {
            date: date.to_owned(),
            department: department.to_owned(),
            description: description.to_owned(),
            amount: Amount::Text(amount.to_owned()),
            day: day.to_owned(),
        }
    }

    /// The amount formatted for display, e.g. "RM 1,234.5".
    pub fn display_amount(&self) -> String {
        format_ringgit(self.amount.value())
    }
}

/// An expense amount as it was supplied: either a number or a piece of text.
///
/// Text amounts are not validated. [Amount::value] interprets them leniently
/// and yields NaN when no number can be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A numeric amount.
    Number(f64),
    /// An amount given as text, e.g. "50" or "1,200".
    Text(String),
}

impl Amount {
    /// Interpret the amount as a number.
    pub fn value(&self) -> f64 {
        match self {
            Amount::Number(number) => *number,
            Amount::Text(text) => parse_amount(text),
        }
    }

    /// Build an amount from a raw text field, e.g. a CSV cell.
    ///
    /// Text that is entirely a number becomes [Amount::Number], anything else
    /// is kept verbatim as [Amount::Text].
    pub fn from_field(field: &str) -> Self {
        match field.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Amount::Number(number),
            _ => Amount::Text(field.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, Expense};

    #[test]
    fn deserializes_numeric_and_text_amounts() {
        let json = r#"[
            {"date": "2024-01-01", "department": "Props", "description": "Tape", "amount": 50, "day": "Mon"},
            {"date": "2024-01-02", "department": "Props", "description": "Glue", "amount": "12.5", "day": "Tue"}
        ]"#;

        let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();

        assert_eq!(expenses[0].amount, Amount::Number(50.0));
        assert_eq!(expenses[1].amount, Amount::Text("12.5".to_owned()));
    }

    #[test]
    fn serializes_fields_in_declaration_order() {
        let expense = Expense::build("2024-01-01", "Props", "Tape", "50", "Mon");

        let json = serde_json::to_string(&expense).unwrap();

        assert_eq!(
            json,
            r#"{"date":"2024-01-01","department":"Props","description":"Tape","amount":"50","day":"Mon"}"#
        );
    }

    #[test]
    fn display_amount_uses_ringgit_prefix() {
        let expense = Expense::build("2024-01-01", "Props", "Tape", "1234.5", "Mon");

        assert_eq!(expense.display_amount(), "RM 1,234.5");
    }

    #[test]
    fn non_numeric_amount_displays_as_nan() {
        let expense = Expense::build("2024-01-01", "Props", "Tape", "fifty", "Mon");

        assert_eq!(expense.display_amount(), "RM NaN");
    }

    #[test]
    fn from_field_keeps_partial_numbers_as_text() {
        assert_eq!(Amount::from_field("42"), Amount::Number(42.0));
        assert_eq!(Amount::from_field(" 7.25 "), Amount::Number(7.25));
        assert_eq!(Amount::from_field("42abc"), Amount::Text("42abc".to_owned()));
        assert_eq!(Amount::from_field(""), Amount::Text("".to_owned()));
    }
}
