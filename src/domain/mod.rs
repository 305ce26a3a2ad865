//! Domain layer: expense/budget models, date handling and the command grammar.

pub mod commands;
pub mod dates;
pub mod models;

pub use commands::{ChartKind, Command, CommandError};
pub use models::{Budget, CategoryTotal, DailyTotal, Expense, MonthlyTotal};
