//! Summary cards for the yearly income and expense totals.

use maud::{Markup, html};

use crate::{
    dashboard::data::MonthlyData,
    html::{CARD_STYLE, format_currency_rounded},
};

/// Renders cards for total income, total expenses and the difference between them.
pub(super) fn summary_cards_view(monthly: &MonthlyData) -> Markup {
    let income = monthly.total_income();
    let expense = monthly.total_expense();
    let net = income - expense;

    let net_style = if net < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-blue-600 dark:text-blue-400"
    };

    html! {
        section
            id="summary"
            class="w-full mx-auto mb-4 grid grid-cols-1 md:grid-cols-3 gap-4"
        {
            (summary_card("Total Income", income, "text-green-600 dark:text-green-400"))
            (summary_card("Total Expenses", expense, "text-orange-600 dark:text-orange-400"))
            (summary_card("Net Savings", net, net_style))
        }
    }
}

fn summary_card(title: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) aria-label=(title)
        {
            p class="text-sm text-gray-600 dark:text-gray-400" { (title) }
            p class={ "text-2xl font-bold " (amount_style) } { (format_currency_rounded(amount)) }
        }
    }
}
