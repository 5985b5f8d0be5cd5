//! Chart generation and rendering for the dashboard.
//!
//! This module creates ECharts visualizations from the dashboard datasets:
//! - **Overview Chart**: Monthly income and expenses as grouped bars
//! - **Expenses Chart**: A donut chart of expenses by category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a container and an initialisation script. The script disposes
//! any chart previously drawn under the same ID first, so the chart section can
//! be re-rendered (e.g., after a theme change) without leaking chart instances.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction,
        LineStyle, SplitLine, Tooltip, Trigger,
    },
    series::{Pie, bar::Bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::{
        data::{CategoryData, MonthlyData},
        palette::ChartPalette,
    },
    html::{CARD_STYLE, format_currency},
    theme::{Theme, apply_theme_script},
};

/// The HTML element ID of the monthly income and expenses chart.
pub(super) const OVERVIEW_CHART_ID: &str = "overview-chart";
/// The HTML element ID of the expenses by category chart.
pub(super) const CATEGORY_CHART_ID: &str = "category-chart";

const INCOME_COLOR: &str = "rgba(34, 197, 94, 0.8)";
const EXPENSE_COLOR: &str = "rgba(249, 115, 22, 0.8)";
const INCOME_BORDER_COLOR: &str = "rgba(34, 197, 94, 1)";
const EXPENSE_BORDER_COLOR: &str = "rgba(249, 115, 22, 1)";

/// A dashboard chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build both dashboard charts coloured for `theme`.
pub(super) fn render_charts(
    monthly: &MonthlyData,
    categories: &CategoryData,
    theme: Theme,
) -> [DashboardChart; 2] {
    let palette = ChartPalette::for_theme(theme);

    [
        DashboardChart {
            id: OVERVIEW_CHART_ID,
            options: overview_chart(monthly, &palette).to_string(),
        },
        DashboardChart {
            id: CATEGORY_CHART_ID,
            options: category_chart(categories, &palette).to_string(),
        },
    ]
}

/// Renders the chart section: chart containers, the category legend and
/// the script that applies `theme` to the page and draws the charts.
///
/// The section has the ID `charts` so that it can be swapped out as a whole.
pub(super) fn charts_view(
    charts: &[DashboardChart],
    categories: &CategoryData,
    theme: Theme,
) -> Markup {
    html!(
        section
            id="charts"
            data-theme=(theme.as_str())
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-3 gap-4"
            {
                @for chart in charts {
                    div class={ (CARD_STYLE) " " (chart_span_class(chart.id)) }
                    {
                        h3 class="text-lg font-semibold mb-2" { (chart_title(chart.id)) }
                        div
                            id=(chart.id)
                            class="min-h-[340px]"
                        {}

                        @if chart.id == CATEGORY_CHART_ID {
                            (category_legend(categories))
                        }
                    }
                }
            }

            script { (apply_theme_script(theme)) (charts_script(charts)) }
        }
    )
}

fn chart_title(id: &str) -> &'static str {
    match id {
        OVERVIEW_CHART_ID => "Overview",
        CATEGORY_CHART_ID => "Expenses by Category",
        _ => "",
    }
}

fn chart_span_class(id: &str) -> &'static str {
    if id == OVERVIEW_CHART_ID {
        "xl:col-span-2"
    } else {
        ""
    }
}

/// A list of the expense categories with their colour, amount and share of the total.
fn category_legend(categories: &CategoryData) -> Markup {
    let percentages = categories.percentages();

    html!(
        ul class="mt-4 space-y-2 text-sm"
        {
            @for (((label, value), color), percentage) in categories.labels.iter()
                .zip(&categories.values)
                .zip(&categories.colors)
                .zip(&percentages)
            {
                li class="flex items-center justify-between"
                {
                    span class="flex items-center gap-2"
                    {
                        span
                            class="inline-block w-3 h-3 rounded-full"
                            style={ "background-color: " (color) ";" }
                        {}
                        (label)
                    }

                    span
                    {
                        (format_currency(*value))
                        " (" (format!("{percentage:.1}")) "%)"
                    }
                }
            }
        }
    )
}

/// The global object that holds each drawn chart and its resize listener, keyed by container ID.
const CHART_REGISTRY: &str = "window.dashboardCharts";

/// Generates JavaScript that draws `charts`.
///
/// Charts are tracked in [CHART_REGISTRY] rather than on their container,
/// since re-rendering the chart section replaces the containers. Before a
/// chart is drawn, any chart registered under the same ID is disposed of and
/// its window resize listener is removed.
pub(super) fn charts_script(charts: &[DashboardChart]) -> PreEscaped<String> {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const registry = {registry} = {registry} || {{}};
                    const previous = registry["{id}"];
                    if (previous) {{
                        window.removeEventListener('resize', previous.onResize);
                        previous.chart.dispose();
                        delete registry["{id}"];
                    }}

                    const chartDom = document.getElementById("{id}");
                    const chart = echarts.init(chartDom);
                    const option = {options};
                    chart.setOption(option);

                    const onResize = () => chart.resize();
                    window.addEventListener('resize', onResize);
                    registry["{id}"] = {{ chart, onResize }};
                }})();"#,
                registry = CHART_REGISTRY,
                id = chart.id,
                options = chart.options,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    PreEscaped(script_content)
}

/// Grouped bars of income and expenses for each month.
pub(super) fn overview_chart(monthly: &MonthlyData, palette: &ChartPalette) -> Chart {
    Chart::new()
        .legend(Legend::new().show(false))
        .tooltip(
            themed_tooltip(palette)
                .trigger(Trigger::Axis)
                .value_formatter(rounded_currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(monthly.labels.clone())
                .split_line(SplitLine::new().show(false))
                .axis_label(AxisLabel::new().color(palette.text)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .split_line(SplitLine::new().line_style(LineStyle::new().color(palette.grid)))
                .axis_label(
                    AxisLabel::new()
                        .color(palette.text)
                        .formatter(rounded_currency_formatter()),
                ),
        )
        .series(
            Bar::new()
                .name("Income")
                .item_style(
                    ItemStyle::new()
                        .color(INCOME_COLOR)
                        .border_color(INCOME_BORDER_COLOR)
                        .border_width(1),
                )
                .data(monthly.income.clone()),
        )
        .series(
            Bar::new()
                .name("Expense")
                .item_style(
                    ItemStyle::new()
                        .color(EXPENSE_COLOR)
                        .border_color(EXPENSE_BORDER_COLOR)
                        .border_width(1),
                )
                .data(monthly.expense.clone()),
        )
}

/// A donut chart of each category's share of total expenses.
pub(super) fn category_chart(categories: &CategoryData, palette: &ChartPalette) -> Chart {
    let data: Vec<(f64, &str)> = categories
        .values
        .iter()
        .copied()
        .zip(categories.labels.iter().copied())
        .collect();

    Chart::new()
        .color(
            categories
                .colors
                .iter()
                .map(|color| Color::from(*color))
                .collect(),
        )
        .legend(Legend::new().show(false))
        .tooltip(
            themed_tooltip(palette)
                .trigger(Trigger::Item)
                .formatter(category_tooltip_formatter(categories)),
        )
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["60%", "90%"])
                .item_style(
                    ItemStyle::new()
                        .border_color(palette.slice_border)
                        .border_width(3),
                )
                .data(data),
        )
}

fn themed_tooltip(palette: &ChartPalette) -> Tooltip {
    Tooltip::new()
        .background_color(palette.tooltip_background)
        .border_color(palette.tooltip_border)
        .border_width(1)
}

/// Formats a number as whole rupees with the browser's thousands separators.
#[inline]
fn rounded_currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "value",
        "return '₹' + Math.round(value).toLocaleString();",
    )
}

/// Formats a category as its amount with two decimal places and its share of
/// the total, e.g. "Food: ₹978.00 (30.8%)".
///
/// The percentages are calculated on the server so that the tooltip matches
/// the category legend.
fn category_tooltip_formatter(categories: &CategoryData) -> JsFunction {
    let percentages = categories
        .labels
        .iter()
        .zip(categories.percentages())
        .map(|(label, percentage)| format!("'{label}': '{percentage:.1}'"))
        .collect::<Vec<_>>()
        .join(", ");

    JsFunction::new_with_args(
        "params",
        &format!(
            "const percentages = {{ {percentages} }}; \
            return params.name + ': ₹' + params.value.toFixed(2) + ' (' + percentages[params.name] + '%)';"
        ),
    )
}
