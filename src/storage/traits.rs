//! # Storage Traits
//!
//! Defines the storage abstraction the dispatcher works against, so the
//! persistence backend can be swapped without touching the bot layer.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CategoryTotal, DailyTotal, Expense, MonthlyTotal};

/// Durable record of expenses and per-owner budgets.
///
/// Every operation is scoped to one owner (conversation id); no call ever
/// sees another owner's rows.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Record a new expense. The store assigns the id.
    async fn create_expense(
        &self,
        owner: i64,
        amount: f64,
        category: &str,
        date: NaiveDate,
    ) -> Result<()>;

    /// All expenses for an owner, newest date first; same-date rows come
    /// back newest-insert-first.
    async fn list_expenses(&self, owner: i64) -> Result<Vec<Expense>>;

    /// Expenses with `start <= date <= end`, newest first. Covers the
    /// day/week/month listings.
    async fn list_expenses_between(
        &self,
        owner: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;

    /// Total spent per category.
    async fn sum_by_category(&self, owner: i64) -> Result<Vec<CategoryTotal>>;

    /// Total spent per calendar date, oldest first (time-series chart).
    async fn totals_by_date(&self, owner: i64) -> Result<Vec<DailyTotal>>;

    /// Total spent per `YYYY-MM` month, oldest first (bar chart).
    async fn totals_by_month(&self, owner: i64) -> Result<Vec<MonthlyTotal>>;

    /// Delete one expense by id. Returns whether a row was removed.
    async fn delete_expense(&self, owner: i64, id: i64) -> Result<bool>;

    /// Delete every expense in a category. Returns the number removed.
    async fn delete_by_category(&self, owner: i64, category: &str) -> Result<u32>;

    /// Delete all of an owner's expenses. Returns the number removed.
    async fn delete_all(&self, owner: i64) -> Result<u32>;

    /// Replace category and date of an existing expense. The amount is
    /// immutable.
    async fn update_expense(
        &self,
        owner: i64,
        id: i64,
        category: &str,
        date: NaiveDate,
    ) -> Result<()>;

    /// The owner's budget limit, if one was ever set.
    async fn get_budget(&self, owner: i64) -> Result<Option<f64>>;

    /// Insert or replace the owner's budget limit.
    async fn set_budget(&self, owner: i64, limit: f64) -> Result<()>;

    /// Sum of expenses from the first of `today`'s month through `today`.
    async fn month_to_date_total(&self, owner: i64, today: NaiveDate) -> Result<f64>;
}
