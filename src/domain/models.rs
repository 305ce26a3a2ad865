//! Domain models for expenses, budgets and the aggregate rows behind charts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded expense, owned by one conversation.
///
/// The amount is immutable after creation; only category and date can be
/// changed through the edit interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identity.
    pub id: i64,
    /// Conversation/user the expense belongs to.
    pub owner: i64,
    pub amount: f64,
    /// Free-text label, e.g. "Transporte".
    pub category: String,
    /// Calendar date only, no time-of-day semantics.
    pub date: NaiveDate,
}

/// Monthly spending limit. One row per owner, upserted on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub owner: i64,
    pub limit_amount: f64,
}

/// Per-category total, used by `/gastos_categoria` and the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Per-day total, backing the time-series chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Per-month total, backing the bar chart. The month is kept in the
/// `YYYY-MM` form the store groups by.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: f64,
}
