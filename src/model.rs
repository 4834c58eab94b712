use serde::Deserialize;

use crate::format::{format_date, format_value};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    pub fn css_class(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Category {
    pub title: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub created_at: String,
}

#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
pub struct RawBalance {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: RawBalance,
}

#[derive(Clone, PartialEq, Debug)]
pub struct DisplayTransaction {
    pub id: String,
    pub title: String,
    pub kind: TransactionType,
    pub category: String,
    pub value: String,
    pub date: String,
}

impl DisplayTransaction {
    pub fn from_raw(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            title: tx.title.clone(),
            kind: tx.kind,
            category: tx.category.title.clone(),
            value: format_value(tx.value),
            date: format_date(&tx.created_at),
        }
    }

    /// Value as shown in the table: outcome rows carry a leading "- ",
    /// income rows never do.
    pub fn signed_value(&self) -> String {
        match self.kind {
            TransactionType::Income => self.value.clone(),
            TransactionType::Outcome => format!("- {}", self.value),
        }
    }
}

// Blank until the first successful fetch; the cards render the empty
// strings as-is.
#[derive(Clone, PartialEq, Debug)]
pub struct DisplayBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl DisplayBalance {
    pub fn empty() -> Self {
        Self {
            income: String::new(),
            outcome: String::new(),
            total: String::new(),
        }
    }

    pub fn from_raw(balance: &RawBalance) -> Self {
        Self {
            income: format_value(balance.income),
            outcome: format_value(balance.outcome),
            total: format_value(balance.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALARY_RESPONSE: &str = r#"{
        "transactions": [{
            "id": "1",
            "title": "Salary",
            "value": 5000,
            "type": "income",
            "category": { "title": "Job" },
            "created_at": "2020-05-01"
        }],
        "balance": { "income": 5000, "outcome": 0, "total": 5000 }
    }"#;

    #[test]
    fn deserializes_the_envelope() {
        let resp: TransactionsResponse = serde_json::from_str(SALARY_RESPONSE).unwrap();
        assert_eq!(resp.transactions.len(), 1);
        let tx = &resp.transactions[0];
        assert_eq!(tx.id, "1");
        assert_eq!(tx.title, "Salary");
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.category.title, "Job");
        assert_eq!(resp.balance.total, 5000.0);
    }

    #[test]
    fn rejects_unknown_type_tags() {
        let raw = r#"{
            "id": "1",
            "title": "x",
            "value": 1,
            "type": "transfer",
            "category": { "title": "y" },
            "created_at": "2020-05-01"
        }"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn projects_a_transaction_for_display() {
        let resp: TransactionsResponse = serde_json::from_str(SALARY_RESPONSE).unwrap();
        let display = DisplayTransaction::from_raw(&resp.transactions[0]);
        assert_eq!(display.title, "Salary");
        assert_eq!(display.value, "5.000");
        assert_eq!(display.date, "01/05/2020");
        assert_eq!(display.category, "Job");
        assert_eq!(display.kind.css_class(), "income");
    }

    #[test]
    fn projects_the_balance_for_display() {
        let balance = RawBalance {
            income: 5000.0,
            outcome: 0.0,
            total: 5000.0,
        };
        let display = DisplayBalance::from_raw(&balance);
        assert_eq!(display.income, "5.000");
        assert_eq!(display.outcome, "0");
        assert_eq!(display.total, "5.000");
    }

    #[test]
    fn only_outcome_values_carry_a_minus_prefix() {
        let resp: TransactionsResponse = serde_json::from_str(SALARY_RESPONSE).unwrap();
        let income = DisplayTransaction::from_raw(&resp.transactions[0]);
        assert_eq!(income.signed_value(), "5.000");

        let rent = Transaction {
            id: "2".to_string(),
            title: "Rent".to_string(),
            value: 1200.0,
            kind: TransactionType::Outcome,
            category: Category {
                title: "Housing".to_string(),
            },
            created_at: "2020-05-02".to_string(),
        };
        let outcome = DisplayTransaction::from_raw(&rent);
        assert_eq!(outcome.signed_value(), "- 1.200");
        assert_eq!(outcome.kind.css_class(), "outcome");
    }

    #[test]
    fn projection_is_idempotent() {
        let resp: TransactionsResponse = serde_json::from_str(SALARY_RESPONSE).unwrap();
        let first = DisplayTransaction::from_raw(&resp.transactions[0]);
        let second = DisplayTransaction::from_raw(&resp.transactions[0]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_balance_renders_blank() {
        let blank = DisplayBalance::empty();
        assert_eq!(blank.income, "");
        assert_eq!(blank.outcome, "");
        assert_eq!(blank.total, "");
    }
}
