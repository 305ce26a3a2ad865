//! User-facing reply texts and formatting.
//!
//! All strings are Portuguese, matching the command vocabulary. Light
//! Markdown markup (asterisks, backticks) is part of the reply contract.

use crate::domain::dates::format_user_date;
use crate::domain::{CategoryTotal, Expense};

pub fn help_text() -> &'static str {
    "📌 *Comandos disponíveis:*\n\n\
     💰 *Gerenciar Despesas:*\n\
     ➖ `/add VALOR CATEGORIA [DATA]` → Adicionar uma despesa\n\
     Exemplo: `/add 50 Transporte hoje` ou `/add 100 Lazer 15-03-2025`\n\
     ➖ `/gastos` → Listar todas as suas despesas\n\
     ➖ `/gastos_categoria` → Ver o total gasto por categoria\n\
     ➖ `/gastos_dia` → Listar despesas de hoje\n\
     ➖ `/gastos_semana` → Listar despesas da última semana\n\
     ➖ `/gastos_mes` → Listar despesas do mês atual\n\n\
     🗑 *Remover Despesas:*\n\
     ➖ `/remover` → Exibir despesas e remover interativamente\n\
     ➖ `/remover tudo` → Remover todas as suas despesas\n\
     ➖ `/remover CATEGORIA` → Remover todas as despesas de uma categoria\n\n\
     ✏️ *Editar Despesas:*\n\
     ➖ `/editar_gastos` → Escolher uma despesa e alterar categoria e data\n\n\
     🔔 *Orçamentos e Alertas:*\n\
     ➖ `/definir_orcamento VALOR` → Definir um limite de gastos mensais\n\
     Exemplo: `/definir_orcamento 1000`\n\n\
     📊 *Gráficos de Despesas:*\n\
     ➖ `/grafico pizza` → Gráfico de gastos por categoria\n\
     ➖ `/grafico linha` → Evolução dos gastos ao longo do tempo\n\
     ➖ `/grafico barras` → Total de gastos por mês\n\n\
     ℹ️ *Outros Comandos:*\n\
     ➖ `/help` → Mostrar esta lista de comandos\n\n\
     ✅ *Dica:* Antes de remover uma despesa, use `/gastos` para visualizar seus gastos."
}

pub fn start_text() -> &'static str {
    "Olá! Eu sou seu bot financeiro. Você pode usar:\n\
     /add valor categoria - Adicionar despesa\n\
     /gastos - Listar despesas\n\
     /remover - Remover uma despesa interativamente\n\
     Para mais detalhes /help."
}

/// `/add` confirmation; the budget warning, when present, is appended to
/// the same single reply.
pub fn add_confirmation(
    amount: f64,
    category: &str,
    date: chrono::NaiveDate,
    budget_exceeded: Option<(f64, f64)>,
) -> String {
    let mut reply = format!(
        "✅ Despesa de R${:.2} em {} registrada para {}!",
        amount,
        category,
        format_user_date(date)
    );
    if let Some((limit, total)) = budget_exceeded {
        reply.push_str(&format!(
            "\n\n🚨 *Atenção!* Você ultrapassou seu orçamento mensal de R${:.2}.\nGasto atual: R${:.2}",
            limit, total
        ));
    }
    reply
}

pub fn budget_confirmation(limit: f64) -> String {
    format!("✅ Orçamento mensal definido para R${:.2}!", limit)
}

/// Full listing for `/gastos`.
pub fn expense_list(expenses: &[Expense]) -> String {
    let mut reply = String::from("📊 *Suas despesas:*\n\n");
    for e in expenses {
        reply.push_str(&format!(
            "- *{}*: R${:.2} | *{}*\n",
            format_user_date(e.date),
            e.amount,
            e.category
        ));
    }
    reply
}

/// Today's listing; dates are all the same so only categories are shown.
pub fn day_list(expenses: &[Expense]) -> String {
    let mut reply = String::from("📅 *Gastos de Hoje:*\n\n");
    for e in expenses {
        reply.push_str(&format!("- *{}*: R${:.2}\n", e.category, e.amount));
    }
    reply
}

pub fn week_list(expenses: &[Expense]) -> String {
    dated_list("📆 *Gastos da Última Semana:*", expenses)
}

pub fn month_list(expenses: &[Expense]) -> String {
    dated_list("📅 *Gastos do Mês Atual:*", expenses)
}

fn dated_list(header: &str, expenses: &[Expense]) -> String {
    let mut reply = format!("{}\n\n", header);
    for e in expenses {
        reply.push_str(&format!(
            "- *{}*: R${:.2} ({})\n",
            e.category,
            e.amount,
            format_user_date(e.date)
        ));
    }
    reply
}

pub fn category_totals(totals: &[CategoryTotal]) -> String {
    let mut reply = String::from("📊 *Total de Gastos por Categoria:*\n\n");
    for t in totals {
        reply.push_str(&format!("- *{}:* R${:.2}\n", t.category, t.total));
    }
    reply
}

/// Label for one expense in the interactive remove list.
pub fn remove_choice_label(e: &Expense) -> String {
    format!(
        "🗑 R${:.2} | {} ({})",
        e.amount,
        e.category,
        format_user_date(e.date)
    )
}

/// Label for one expense in the interactive edit list.
pub fn edit_choice_label(e: &Expense) -> String {
    format!(
        "✏️ {} - R${:.2} ({})",
        e.category,
        e.amount,
        format_user_date(e.date)
    )
}

pub const NO_EXPENSES: &str = "Nenhuma despesa cadastrada ainda para você.";
pub const NO_EXPENSES_TODAY: &str = "Nenhuma despesa registrada hoje.";
pub const NO_EXPENSES_WEEK: &str = "Nenhuma despesa registrada nos últimos 7 dias.";
pub const NO_EXPENSES_MONTH: &str = "Nenhuma despesa registrada neste mês.";
pub const NO_EXPENSES_FOR_CATEGORIES: &str = "Nenhuma despesa registrada ainda.";
pub const NO_EXPENSES_TO_REMOVE: &str = "Você não tem despesas cadastradas.";
pub const NO_EXPENSES_TO_EDIT: &str = "Você não tem despesas cadastradas para editar.";

pub const REMOVE_PROMPT: &str = "Selecione a despesa para remover:";
pub const EDIT_PROMPT: &str = "Selecione a despesa que deseja editar:";
pub const EDIT_INSTRUCTIONS: &str =
    "✏️ Envie a nova categoria e a nova data no formato:\n`NovaCategoria DD-MM-YYYY`";

pub const EDIT_FORMAT_ERROR: &str = "Formato inválido! Use: `NovaCategoria DD-MM-YYYY`";
pub const EDIT_DATE_ERROR: &str = "Formato de data inválido! Use `DD-MM-YYYY`.";

pub const ADD_FAILED: &str = "Erro ao adicionar despesa.";
pub const EDIT_FAILED: &str = "Erro ao editar despesa. Tente novamente.";
pub const BUDGET_FAILED: &str = "Erro ao definir orçamento.";
pub const REMOVE_FAILED: &str = "Erro ao remover despesa.";
pub const REMOVED_ONE: &str = "✅ Despesa removida com sucesso!";
pub const REMOVED_ALL: &str = "✅ Todas as suas despesas foram removidas!";
pub const REMOVE_NOT_FOUND: &str = "Nenhuma despesa encontrada para remover.";
pub const CALLBACK_FAILED: &str = "Erro ao processar a despesa selecionada.";

pub fn removed_category(category: &str) -> String {
    format!(
        "✅ Todas as despesas da categoria '{}' foram removidas!",
        category
    )
}

pub fn category_not_found(category: &str) -> String {
    format!("Nenhuma despesa encontrada na categoria '{}'.", category)
}

pub fn edit_confirmation(category: &str, date: chrono::NaiveDate) -> String {
    format!(
        "✅ Despesa atualizada: {} - {}",
        category,
        format_user_date(date)
    )
}

pub fn chart_failed(err: &anyhow::Error) -> String {
    format!("❌ Erro ao gerar gráfico: {}", err)
}
