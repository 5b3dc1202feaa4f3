use actor_framework::FieldValue;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for expenses.
    ExpenseId,
    "expense"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Ingredients,
    Payroll,
    Rent,
    Utilities,
    Maintenance,
    Marketing,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Ingredients => "ingredients",
            ExpenseCategory::Payroll => "payroll",
            ExpenseCategory::Rent => "rent",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::Marketing => "marketing",
            ExpenseCategory::Other => "other",
        }
    }
}

impl From<ExpenseCategory> for FieldValue {
    fn from(category: ExpenseCategory) -> Self {
        category.as_str().into()
    }
}

/// Money paid out by the restaurant, booked on the day it was incurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: String,
    pub incurred_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: String,
    pub incurred_on: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub category: Option<ExpenseCategory>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub incurred_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Category,
    Amount,
    Description,
    IncurredOn,
}
