//! Alert system for displaying success and error messages to users.
//!
//! Alerts are HTML fragments that htmx swaps into the `#alert-container`
//! element rendered by [crate::html::base].

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An alert message to show the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message with a line of extra detail.
    Success { message: String, details: String },
    /// An error message with a line explaining what to do about it.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_STYLE, message, details),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
        };

        html! {
            div
                role="alert"
                class=(container_style)
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-semibold" { (message) }

                        @if !details.is_empty() {
                            p class="text-sm" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="text-lg leading-none bg-transparent border-none cursor-pointer"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

const SUCCESS_STYLE: &str = "p-4 mb-4 rounded-lg border text-green-800 bg-green-50 \
    border-green-300 dark:bg-gray-800 dark:text-green-400 dark:border-green-800";

const ERROR_STYLE: &str = "p-4 mb-4 rounded-lg border text-red-800 bg-red-50 \
    border-red-300 dark:bg-gray-800 dark:text-red-400 dark:border-red-800";

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
