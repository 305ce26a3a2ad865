//! The command dispatcher: one inbound event in, one reply out.
//!
//! Events are handled strictly in arrival order. Before anything is parsed
//! as a command, the pending-interaction tracker is consulted: a
//! conversation that is mid-edit has its next message interpreted as the
//! edit payload. No handling failure ever propagates out of `dispatch`;
//! every outcome, including store errors, becomes a reply.

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::bot::event::{Choice, Event, Reply};
use crate::bot::pending::PendingInteractions;
use crate::bot::replies;
use crate::charts::ChartRenderer;
use crate::domain::dates::{month_start, week_start, USER_DATE_FMT};
use crate::domain::{ChartKind, Command, CommandError, Expense};
use crate::storage::ExpenseStore;

pub struct Dispatcher<S, R> {
    store: S,
    renderer: R,
    pending: PendingInteractions,
}

impl<S: ExpenseStore, R: ChartRenderer> Dispatcher<S, R> {
    pub fn new(store: S, renderer: R) -> Self {
        Self {
            store,
            renderer,
            pending: PendingInteractions::new(),
        }
    }

    /// Dispatcher whose pending edits expire after `ttl`.
    pub fn with_pending_ttl(store: S, renderer: R, ttl: std::time::Duration) -> Self {
        Self {
            store,
            renderer,
            pending: PendingInteractions::with_ttl(ttl),
        }
    }

    /// Handle one event against the current local date.
    pub async fn dispatch(&mut self, event: Event) -> Reply {
        let today = Local::now().date_naive();
        self.dispatch_at(event, today).await
    }

    /// Handle one event with an explicit processing date. This is the
    /// deterministic entry point used by tests.
    pub async fn dispatch_at(&mut self, event: Event, today: NaiveDate) -> Reply {
        match event {
            Event::Message { chat, text } => self.handle_message(chat, &text, today).await,
            Event::Callback { chat, data } => self.handle_callback(chat, &data).await,
        }
    }

    async fn handle_message(&mut self, chat: i64, text: &str, today: NaiveDate) -> Reply {
        if let Some(expense_id) = self.pending.get(chat) {
            return self.continue_edit(chat, expense_id, text).await;
        }

        match Command::parse(text, today) {
            Ok(command) => self.run_command(chat, command, today).await,
            Err(err) => Reply::text(err.to_string()),
        }
    }

    /// Second step of the edit interaction: the message is the replacement
    /// `<category> <DD-MM-YYYY>` payload. Format errors leave the pending
    /// edit armed; it is only cleared once the store update succeeds, so a
    /// transient failure does not force the user to restart from the
    /// choice list.
    async fn continue_edit(&mut self, chat: i64, expense_id: i64, text: &str) -> Reply {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 2 {
            return Reply::text(replies::EDIT_FORMAT_ERROR);
        }

        let category = tokens[0];
        let date = match NaiveDate::parse_from_str(tokens[1], USER_DATE_FMT) {
            Ok(date) => date,
            Err(_) => return Reply::text(replies::EDIT_DATE_ERROR),
        };

        match self
            .store
            .update_expense(chat, expense_id, category, date)
            .await
        {
            Ok(()) => {
                self.pending.clear(chat);
                Reply::text(replies::edit_confirmation(category, date))
            }
            Err(err) => {
                warn!(chat, expense_id, error = %err, "expense update failed");
                Reply::text(replies::EDIT_FAILED)
            }
        }
    }

    async fn handle_callback(&mut self, chat: i64, data: &str) -> Reply {
        if let Some(id) = data.strip_prefix("remover_") {
            let Ok(id) = id.parse::<i64>() else {
                return Reply::text(replies::CALLBACK_FAILED);
            };
            return match self.store.delete_expense(chat, id).await {
                Ok(true) => Reply::text(replies::REMOVED_ONE),
                Ok(false) => Reply::text(replies::REMOVE_NOT_FOUND),
                Err(err) => {
                    warn!(chat, id, error = %err, "expense removal failed");
                    Reply::text(replies::REMOVE_FAILED)
                }
            };
        }

        if let Some(id) = data.strip_prefix("editar_") {
            let Ok(id) = id.parse::<i64>() else {
                return Reply::text(replies::CALLBACK_FAILED);
            };
            self.pending.begin(chat, id);
            return Reply::text(replies::EDIT_INSTRUCTIONS);
        }

        Reply::text(CommandError::Unknown.to_string())
    }

    async fn run_command(&mut self, chat: i64, command: Command, today: NaiveDate) -> Reply {
        match command {
            Command::Add {
                amount,
                category,
                date,
            } => self.add_expense(chat, amount, &category, date, today).await,
            Command::ListAll => self.list_reply(
                self.store.list_expenses(chat).await,
                replies::NO_EXPENSES,
                replies::expense_list,
                chat,
            ),
            Command::ListDay => self.list_reply(
                self.store.list_expenses_between(chat, today, today).await,
                replies::NO_EXPENSES_TODAY,
                replies::day_list,
                chat,
            ),
            Command::ListWeek => self.list_reply(
                self.store
                    .list_expenses_between(chat, week_start(today), today)
                    .await,
                replies::NO_EXPENSES_WEEK,
                replies::week_list,
                chat,
            ),
            Command::ListMonth => self.list_reply(
                self.store
                    .list_expenses_between(chat, month_start(today), today)
                    .await,
                replies::NO_EXPENSES_MONTH,
                replies::month_list,
                chat,
            ),
            Command::SumByCategory => match self.store.sum_by_category(chat).await {
                Ok(totals) if !totals.is_empty() => Reply::text(replies::category_totals(&totals)),
                Ok(_) => Reply::text(replies::NO_EXPENSES_FOR_CATEGORIES),
                Err(err) => {
                    warn!(chat, error = %err, "category aggregation failed");
                    Reply::text(replies::NO_EXPENSES_FOR_CATEGORIES)
                }
            },
            Command::SetBudget { limit } => match self.store.set_budget(chat, limit).await {
                Ok(()) => Reply::text(replies::budget_confirmation(limit)),
                Err(err) => {
                    warn!(chat, error = %err, "budget upsert failed");
                    Reply::text(replies::BUDGET_FAILED)
                }
            },
            Command::RemoveInteractive => {
                self.choice_list(
                    chat,
                    replies::REMOVE_PROMPT,
                    replies::NO_EXPENSES_TO_REMOVE,
                    "remover_",
                    replies::remove_choice_label,
                )
                .await
            }
            Command::RemoveAll => match self.store.delete_all(chat).await {
                Ok(0) => Reply::text(replies::NO_EXPENSES_TO_REMOVE),
                Ok(_) => Reply::text(replies::REMOVED_ALL),
                Err(err) => {
                    warn!(chat, error = %err, "bulk removal failed");
                    Reply::text(replies::REMOVE_FAILED)
                }
            },
            Command::RemoveCategory { category } => {
                match self.store.delete_by_category(chat, &category).await {
                    Ok(0) => Reply::text(replies::category_not_found(&category)),
                    Ok(_) => Reply::text(replies::removed_category(&category)),
                    Err(err) => {
                        warn!(chat, category, error = %err, "category removal failed");
                        Reply::text(replies::REMOVE_FAILED)
                    }
                }
            }
            Command::EditInteractive => {
                self.choice_list(
                    chat,
                    replies::EDIT_PROMPT,
                    replies::NO_EXPENSES_TO_EDIT,
                    "editar_",
                    replies::edit_choice_label,
                )
                .await
            }
            Command::Chart { kind } => self.render_chart(chat, kind).await,
            Command::Help => Reply::text(replies::help_text()),
            Command::Start => Reply::text(replies::start_text()),
        }
    }

    async fn add_expense(
        &mut self,
        chat: i64,
        amount: f64,
        category: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Reply {
        if let Err(err) = self.store.create_expense(chat, amount, category, date).await {
            warn!(chat, error = %err, "expense insert failed");
            return Reply::text(replies::ADD_FAILED);
        }

        // Budget check is best-effort: a failure here must not suppress
        // the confirmation for an expense that was already recorded.
        let exceeded = self.budget_exceeded(chat, today).await;
        Reply::text(replies::add_confirmation(amount, category, date, exceeded))
    }

    /// `(limit, month_to_date)` when a positive budget is set and exceeded.
    async fn budget_exceeded(&self, chat: i64, today: NaiveDate) -> Option<(f64, f64)> {
        let limit = match self.store.get_budget(chat).await {
            Ok(Some(limit)) if limit > 0.0 => limit,
            Ok(_) => return None,
            Err(err) => {
                warn!(chat, error = %err, "budget lookup failed");
                return None;
            }
        };
        match self.store.month_to_date_total(chat, today).await {
            Ok(total) if total > limit => Some((limit, total)),
            Ok(_) => None,
            Err(err) => {
                warn!(chat, error = %err, "month-to-date total failed");
                None
            }
        }
    }

    /// Read-path listings collapse both "empty" and "store error" into the
    /// same no-data reply; the error itself only goes to the log.
    fn list_reply(
        &self,
        result: anyhow::Result<Vec<Expense>>,
        empty_message: &str,
        format: impl Fn(&[Expense]) -> String,
        chat: i64,
    ) -> Reply {
        match result {
            Ok(expenses) if !expenses.is_empty() => Reply::text(format(&expenses)),
            Ok(_) => Reply::text(empty_message),
            Err(err) => {
                warn!(chat, error = %err, "expense listing failed");
                Reply::text(empty_message)
            }
        }
    }

    async fn choice_list(
        &self,
        chat: i64,
        prompt: &str,
        empty_message: &str,
        token_prefix: &str,
        label: impl Fn(&Expense) -> String,
    ) -> Reply {
        match self.store.list_expenses(chat).await {
            Ok(expenses) if !expenses.is_empty() => Reply::Choices {
                text: prompt.to_string(),
                options: expenses
                    .iter()
                    .map(|e| Choice {
                        label: label(e),
                        data: format!("{}{}", token_prefix, e.id),
                    })
                    .collect(),
            },
            Ok(_) => Reply::text(empty_message),
            Err(err) => {
                warn!(chat, error = %err, "expense listing failed");
                Reply::text(empty_message)
            }
        }
    }

    async fn render_chart(&self, chat: i64, kind: ChartKind) -> Reply {
        let result = match kind {
            ChartKind::Pizza => {
                let totals = self.store.sum_by_category(chat).await.unwrap_or_else(|err| {
                    warn!(chat, error = %err, "category aggregation failed");
                    Vec::new()
                });
                self.renderer.render_category_breakdown(chat, &totals)
            }
            ChartKind::Linha => {
                let totals = self.store.totals_by_date(chat).await.unwrap_or_else(|err| {
                    warn!(chat, error = %err, "daily aggregation failed");
                    Vec::new()
                });
                self.renderer.render_time_series(chat, &totals)
            }
            ChartKind::Barras => {
                let totals = self.store.totals_by_month(chat).await.unwrap_or_else(|err| {
                    warn!(chat, error = %err, "monthly aggregation failed");
                    Vec::new()
                });
                self.renderer.render_monthly_totals(chat, &totals)
            }
        };

        match result {
            Ok(path) => Reply::Photo {
                path,
                caption: None,
            },
            Err(err) => Reply::text(replies::chart_failed(&err)),
        }
    }
}
