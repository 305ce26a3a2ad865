//! The textual command grammar.
//!
//! Incoming text is parsed into a closed [`Command`] value before any
//! dispatching happens, so the dispatcher matches on structure instead of
//! running prefix tests against the raw message.

use chrono::NaiveDate;
use thiserror::Error;

use super::dates::parse_user_date;

/// Chart mode requested through `/grafico`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Category breakdown.
    Pizza,
    /// Spending over time.
    Linha,
    /// Totals per month.
    Barras,
}

/// A fully parsed user command. Relative dates are resolved at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        amount: f64,
        category: String,
        date: NaiveDate,
    },
    ListAll,
    SumByCategory,
    ListDay,
    ListWeek,
    ListMonth,
    SetBudget {
        limit: f64,
    },
    /// `/remover` with no argument: offer the interactive choice list.
    RemoveInteractive,
    /// `/remover tudo`.
    RemoveAll,
    /// `/remover <categoria>`, category may contain spaces.
    RemoveCategory {
        category: String,
    },
    EditInteractive,
    Chart {
        kind: ChartKind,
    },
    Help,
    Start,
}

/// User-input errors produced while parsing a command. Each variant renders
/// as the corrective reply sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Formato inválido! Use: `/add VALOR CATEGORIA [DATA]`\nExemplo:\n`/add 50 Transporte hoje`\n`/add 30 Alimentação 10-03-2025`")]
    AddUsage,

    #[error("Erro ao converter o valor. Use um número válido.")]
    InvalidAmount,

    #[error("Formato de data inválido! Use `hoje`, `ontem` ou `DD-MM-YYYY`.")]
    InvalidDate,

    #[error("Formato inválido! Use: `/definir_orcamento VALOR`\nExemplo: `/definir_orcamento 1000`")]
    BudgetUsage,

    #[error("📊 *Escolha um tipo de gráfico:*\n- `/grafico pizza` *(Gastos por categoria)*\n- `/grafico linha` *(Evolução dos gastos)*\n- `/grafico barras` *(Total por mês)*")]
    ChartMenu,

    #[error("❌ Comando não reconhecido. Use /help para ver a lista de comandos disponíveis.")]
    Unknown,
}

impl Command {
    /// Parse a message into a command. `today` anchors the relative date
    /// keywords and the default `/add` date.
    pub fn parse(text: &str, today: NaiveDate) -> Result<Command, CommandError> {
        let mut tokens = text.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Unknown)?;
        let rest: Vec<&str> = tokens.collect();

        match head {
            "/add" => parse_add(&rest, today),
            "/gastos" => Ok(Command::ListAll),
            "/gastos_categoria" => Ok(Command::SumByCategory),
            "/gastos_dia" => Ok(Command::ListDay),
            "/gastos_semana" => Ok(Command::ListWeek),
            "/gastos_mes" => Ok(Command::ListMonth),
            "/definir_orcamento" => parse_set_budget(&rest),
            "/remover" => Ok(parse_remove(&rest)),
            "/editar_gastos" => Ok(Command::EditInteractive),
            "/grafico" => parse_chart(&rest),
            "/help" => Ok(Command::Help),
            "/start" => Ok(Command::Start),
            _ => Err(CommandError::Unknown),
        }
    }
}

fn parse_add(args: &[&str], today: NaiveDate) -> Result<Command, CommandError> {
    if args.len() < 2 {
        return Err(CommandError::AddUsage);
    }
    let amount: f64 = args[0].parse().map_err(|_| CommandError::InvalidAmount)?;
    let category = args[1].to_string();
    let date = match args.get(2) {
        Some(token) => parse_user_date(token, today).ok_or(CommandError::InvalidDate)?,
        None => today,
    };
    Ok(Command::Add {
        amount,
        category,
        date,
    })
}

fn parse_set_budget(args: &[&str]) -> Result<Command, CommandError> {
    let token = args.first().ok_or(CommandError::BudgetUsage)?;
    let limit: f64 = token.parse().map_err(|_| CommandError::InvalidAmount)?;
    Ok(Command::SetBudget { limit })
}

fn parse_remove(args: &[&str]) -> Command {
    match args {
        [] => Command::RemoveInteractive,
        ["tudo"] => Command::RemoveAll,
        rest => Command::RemoveCategory {
            category: rest.join(" "),
        },
    }
}

fn parse_chart(args: &[&str]) -> Result<Command, CommandError> {
    let kind = match args.first() {
        Some(&"pizza") => ChartKind::Pizza,
        Some(&"linha") => ChartKind::Linha,
        Some(&"barras") => ChartKind::Barras,
        // missing and unrecognized modes both get the menu back
        _ => return Err(CommandError::ChartMenu),
    };
    Ok(Command::Chart { kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).expect("valid date")
    }

    #[test]
    fn parses_add_with_default_date() {
        let cmd = Command::parse("/add 50 Transporte", today()).expect("parses");
        assert_eq!(
            cmd,
            Command::Add {
                amount: 50.0,
                category: "Transporte".to_string(),
                date: today(),
            }
        );
    }

    #[test]
    fn parses_add_with_explicit_date() {
        let cmd = Command::parse("/add 30 Alimentação 10-03-2025", today()).expect("parses");
        assert_eq!(
            cmd,
            Command::Add {
                amount: 30.0,
                category: "Alimentação".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            }
        );
    }

    #[test]
    fn parses_add_with_relative_date() {
        let cmd = Command::parse("/add 10 Lazer ontem", today()).expect("parses");
        assert_eq!(
            cmd,
            Command::Add {
                amount: 10.0,
                category: "Lazer".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 19).unwrap(),
            }
        );
    }

    #[test]
    fn add_missing_category_is_usage_error() {
        assert_eq!(
            Command::parse("/add 50", today()),
            Err(CommandError::AddUsage)
        );
    }

    #[test]
    fn add_bad_amount_is_amount_error() {
        assert_eq!(
            Command::parse("/add abc Transporte", today()),
            Err(CommandError::InvalidAmount)
        );
    }

    #[test]
    fn add_invalid_calendar_date_is_date_error() {
        assert_eq!(
            Command::parse("/add 10 Lazer 31-13-2025", today()),
            Err(CommandError::InvalidDate)
        );
    }

    #[test]
    fn parses_listing_commands() {
        assert_eq!(Command::parse("/gastos", today()), Ok(Command::ListAll));
        assert_eq!(
            Command::parse("/gastos_categoria", today()),
            Ok(Command::SumByCategory)
        );
        assert_eq!(Command::parse("/gastos_dia", today()), Ok(Command::ListDay));
        assert_eq!(
            Command::parse("/gastos_semana", today()),
            Ok(Command::ListWeek)
        );
        assert_eq!(
            Command::parse("/gastos_mes", today()),
            Ok(Command::ListMonth)
        );
    }

    #[test]
    fn parses_budget_command() {
        assert_eq!(
            Command::parse("/definir_orcamento 1000", today()),
            Ok(Command::SetBudget { limit: 1000.0 })
        );
        assert_eq!(
            Command::parse("/definir_orcamento", today()),
            Err(CommandError::BudgetUsage)
        );
        assert_eq!(
            Command::parse("/definir_orcamento mil", today()),
            Err(CommandError::InvalidAmount)
        );
    }

    #[test]
    fn parses_remove_forms() {
        assert_eq!(
            Command::parse("/remover", today()),
            Ok(Command::RemoveInteractive)
        );
        assert_eq!(Command::parse("/remover tudo", today()), Ok(Command::RemoveAll));
        assert_eq!(
            Command::parse("/remover Fast Food", today()),
            Ok(Command::RemoveCategory {
                category: "Fast Food".to_string()
            })
        );
    }

    #[test]
    fn parses_chart_modes() {
        assert_eq!(
            Command::parse("/grafico pizza", today()),
            Ok(Command::Chart {
                kind: ChartKind::Pizza
            })
        );
        assert_eq!(
            Command::parse("/grafico", today()),
            Err(CommandError::ChartMenu)
        );
        assert_eq!(
            Command::parse("/grafico rosquinha", today()),
            Err(CommandError::ChartMenu)
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert_eq!(
            Command::parse("/saldo", today()),
            Err(CommandError::Unknown)
        );
        assert_eq!(Command::parse("oi", today()), Err(CommandError::Unknown));
    }
}
