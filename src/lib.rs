//! Expense-tracking chat bot.
//!
//! The core is a conversational command dispatcher: inbound text messages
//! and button-click callbacks are turned into structured commands, run
//! against the expense store or chart renderer, and answered with exactly
//! one reply each. Multi-turn edits are tracked per conversation in the
//! pending-interaction tracker.

pub mod bot;
pub mod charts;
pub mod config;
pub mod domain;
pub mod storage;

pub use bot::{Choice, Dispatcher, Event, PendingInteractions, Reply};
pub use charts::{ChartRenderer, PlottersChartRenderer};
pub use config::Config;
pub use domain::{Budget, ChartKind, Command, CommandError, Expense};
pub use storage::{DbConnection, ExpenseStore, SqliteExpenseStore};
