//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page with the charts and the transaction list.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The modal form for adding a transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to add a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to remove the most recently added transaction.
pub const LAST_TRANSACTION: &str = "/api/transactions/last";
/// The route to download the transactions as a CSV file.
pub const EXPORT_TRANSACTIONS: &str = "/api/transactions/export";
/// The route to switch between the light and dark themes.
pub const THEME: &str = "/api/theme";
