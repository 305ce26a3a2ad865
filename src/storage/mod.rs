//! Storage layer: the `ExpenseStore` abstraction and its SQLite backend.

pub mod sqlite;
pub mod traits;

pub use sqlite::{DbConnection, SqliteExpenseStore};
pub use traits::ExpenseStore;
