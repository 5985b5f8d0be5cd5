//! The transaction list on the dashboard and the fragments that keep it in
//! step with the ledger.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE,
        STATUS_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
    ledger::{LedgerEvent, TransactionRecord},
};

/// The ID of the table body that holds one row per ledger record.
pub const TRANSACTIONS_BODY_ID: &str = "transactions-body";

/// The ID of the table row for the record at `index` in the ledger.
pub fn transaction_row_id(index: usize) -> String {
    format!("transaction-row-{index}")
}

/// Renders the transaction list with the buttons for adding, removing and
/// exporting transactions.
pub fn transactions_view(records: &[TransactionRecord]) -> Markup {
    html! {
        section
            id="transactions"
            class={ "w-full mx-auto mb-8 " (CARD_STYLE) }
        {
            div class="flex flex-wrap items-center justify-between gap-2 mb-4"
            {
                h3 class="text-xl font-semibold" { "Recent Transactions" }

                div class="flex flex-wrap gap-2"
                {
                    button
                        type="button"
                        hx-get=(endpoints::NEW_TRANSACTION_VIEW)
                        hx-target="#modal-container"
                        hx-swap="innerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add Transaction"
                    }

                    button
                        type="button"
                        hx-delete=(endpoints::LAST_TRANSACTION)
                        hx-target="#alert-container"
                        hx-swap="innerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Remove Last"
                    }

                    a
                        href=(endpoints::EXPORT_TRANSACTIONS)
                        download
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Export CSV"
                    }
                }
            }

            div class="relative overflow-x-auto rounded"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        }
                    }

                    tbody id=(TRANSACTIONS_BODY_ID)
                    {
                        @for (index, record) in records.iter().enumerate() {
                            (transaction_row(index, record))
                        }
                    }
                }
            }
        }
    }
}

/// Renders the table row for the `record` at `index` in the ledger.
pub fn transaction_row(index: usize, record: &TransactionRecord) -> Markup {
    html! {
        tr id=(transaction_row_id(index)) class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (record.date) }
            td class=(TABLE_CELL_STYLE) { (record.category) }
            td class={ (TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white" }
            {
                (format_currency(record.amount.value()))
            }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(STATUS_BADGE_STYLE) { (record.status) }
            }
            td class=(TABLE_CELL_STYLE) { (record.description) }
        }
    }
}

/// Renders the out-of-band update that applies `event` to the transaction table.
///
/// `record` is the record that was appended or removed. The fragment is
/// wrapped in a template so that the table elements survive parsing
/// outside of a table.
pub fn ledger_event_view(event: LedgerEvent, record: &TransactionRecord) -> Markup {
    match event {
        LedgerEvent::Appended { index } => html! {
            template
            {
                tbody hx-swap-oob={ "beforeend:#" (TRANSACTIONS_BODY_ID) }
                {
                    (transaction_row(index, record))
                }
            }
        },
        LedgerEvent::Removed { index } => html! {
            template
            {
                tr id=(transaction_row_id(index)) hx-swap-oob="delete" {}
            }
        },
    }
}
