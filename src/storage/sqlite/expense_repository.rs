//! SQLite implementation of the expense store.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;

use crate::domain::dates::month_start;
use crate::domain::{CategoryTotal, DailyTotal, Expense, MonthlyTotal};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::ExpenseStore;

/// Repository for expense and budget operations
#[derive(Clone)]
pub struct SqliteExpenseStore {
    db: DbConnection,
}

impl SqliteExpenseStore {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_expense(row: &sqlx::sqlite::SqliteRow) -> Expense {
        Expense {
            id: row.get("id"),
            owner: row.get("user_id"),
            amount: row.get("amount"),
            category: row.get("category"),
            date: row.get("date"),
        }
    }
}

#[async_trait]
impl ExpenseStore for SqliteExpenseStore {
    async fn create_expense(
        &self,
        owner: i64,
        amount: f64,
        category: &str,
        date: NaiveDate,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (user_id, amount, category, date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(owner)
        .bind(amount)
        .bind(category)
        .bind(date)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_expenses(&self, owner: i64) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, amount, category, date
            FROM expenses
            WHERE user_id = ?
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(owner)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_expense).collect())
    }

    async fn list_expenses_between(
        &self,
        owner: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, amount, category, date
            FROM expenses
            WHERE user_id = ? AND date BETWEEN ? AND ?
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(owner)
        .bind(start)
        .bind(end)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_expense).collect())
    }

    async fn sum_by_category(&self, owner: i64) -> Result<Vec<CategoryTotal>> {
        let rows = sqlx::query(
            r#"
            SELECT category, SUM(amount) AS total
            FROM expenses
            WHERE user_id = ?
            GROUP BY category
            "#,
        )
        .bind(owner)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| CategoryTotal {
                category: row.get("category"),
                total: row.get("total"),
            })
            .collect())
    }

    async fn totals_by_date(&self, owner: i64) -> Result<Vec<DailyTotal>> {
        let rows = sqlx::query(
            r#"
            SELECT date, SUM(amount) AS total
            FROM expenses
            WHERE user_id = ?
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(owner)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| DailyTotal {
                date: row.get("date"),
                total: row.get("total"),
            })
            .collect())
    }

    async fn totals_by_month(&self, owner: i64) -> Result<Vec<MonthlyTotal>> {
        let rows = sqlx::query(
            r#"
            SELECT strftime('%Y-%m', date) AS month, SUM(amount) AS total
            FROM expenses
            WHERE user_id = ?
            GROUP BY month
            ORDER BY month ASC
            "#,
        )
        .bind(owner)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| MonthlyTotal {
                month: row.get("month"),
                total: row.get("total"),
            })
            .collect())
    }

    async fn delete_expense(&self, owner: i64, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_category(&self, owner: i64, category: &str) -> Result<u32> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE user_id = ? AND category = ?
            "#,
        )
        .bind(owner)
        .bind(category)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() as u32)
    }

    async fn delete_all(&self, owner: i64) -> Result<u32> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE user_id = ?
            "#,
        )
        .bind(owner)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() as u32)
    }

    async fn update_expense(
        &self,
        owner: i64,
        id: i64,
        category: &str,
        date: NaiveDate,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE expenses
            SET category = ?, date = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(category)
        .bind(date)
        .bind(id)
        .bind(owner)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_budget(&self, owner: i64) -> Result<Option<f64>> {
        let row = sqlx::query(
            r#"
            SELECT limit_amount
            FROM budgets
            WHERE user_id = ?
            "#,
        )
        .bind(owner)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| r.get("limit_amount")))
    }

    async fn set_budget(&self, owner: i64, limit: f64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO budgets (user_id, limit_amount)
            VALUES (?, ?)
            "#,
        )
        .bind(owner)
        .bind(limit)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn month_to_date_total(&self, owner: i64, today: NaiveDate) -> Result<f64> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(amount), 0.0) AS total
            FROM expenses
            WHERE user_id = ? AND date BETWEEN ? AND ?
            "#,
        )
        .bind(owner)
        .bind(month_start(today))
        .bind(today)
        .fetch_one(self.db.pool())
        .await?;

        Ok(row.get("total"))
    }
}
