//! Dashboard module
//!
//! Provides the main page: yearly income and expense summaries, charts
//! coloured for the current theme and the transaction list.

mod cards;
mod charts;
mod data;
mod handlers;
mod palette;

use maud::Markup;

pub use handlers::get_dashboard_page;

use crate::theme::Theme;

use self::{
    charts::{charts_view, render_charts},
    data::{CategoryData, MonthlyData},
};

/// Renders the chart section coloured for `theme`.
///
/// The section has the ID `charts` and is what the theme toggle replaces.
pub fn charts_section(theme: Theme) -> Markup {
    let categories = CategoryData::example();
    let charts = render_charts(&MonthlyData::example(), &categories, theme);

    charts_view(&charts, &categories, theme)
}
