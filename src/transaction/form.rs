//! The modal form for adding a transaction.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    ledger::CATEGORIES,
};

/// The form data for adding a transaction.
///
/// The fields are kept as text so that invalid input can be shown back to
/// the user along with the error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TransactionForm {
    /// The date picked in the form, e.g. "2025-04-01".
    pub date: String,
    /// One of [CATEGORIES].
    pub category: String,
    /// The amount as typed by the user.
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

/// Renders the modal form for adding a transaction.
///
/// `values` prefill the inputs and `error_message` is shown above the
/// submit button when set.
pub fn transaction_modal(values: &TransactionForm, error_message: Option<&str>) -> Markup {
    html! {
        div
            id="transaction-modal"
            class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50"
            role="dialog"
            aria-modal="true"
            aria-labelledby="transaction-modal-title"
        {
            div class="w-full max-w-md p-6 mx-4 bg-white rounded-lg shadow dark:bg-gray-800 text-gray-900 dark:text-white"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h2 id="transaction-modal-title" class="text-xl font-bold" { "Add Transaction" }

                    button
                        type="button"
                        aria-label="Close"
                        class="text-2xl leading-none text-gray-500 hover:text-gray-900 dark:hover:text-white"
                        onclick="document.getElementById('modal-container').replaceChildren()"
                    {
                        "×"
                    }
                }

                form
                    hx-post=(endpoints::TRANSACTIONS_API)
                    hx-target="#modal-container"
                    hx-swap="innerHTML"
                    hx-target-error="#alert-container"
                    class="space-y-4"
                {
                    div
                    {
                        label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                        input
                            name="date"
                            id="date"
                            type="date"
                            value=(values.date)
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                        select
                            name="category"
                            id="category"
                            required
                            class=(FORM_TEXT_INPUT_STYLE)
                        {
                            @for category in CATEGORIES {
                                option value=(category) selected[values.category == category]
                                {
                                    (category)
                                }
                            }
                        }
                    }

                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            value=(values.amount)
                            required
                            autofocus
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                        input
                            name="description"
                            id="description"
                            type="text"
                            placeholder="Description"
                            value=(values.description)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    @if let Some(error_message) = error_message {
                        p class="text-sm text-red-600 dark:text-red-400" { (error_message) }
                    }

                    div class="flex justify-end gap-2"
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }

                        button
                            type="button"
                            class=(BUTTON_SECONDARY_STYLE)
                            onclick="document.getElementById('modal-container').replaceChildren()"
                        {
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
