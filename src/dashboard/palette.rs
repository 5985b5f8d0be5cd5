//! Chart colours for each theme.

use crate::theme::Theme;

/// The colours used to draw chart text, grid lines and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub text: &'static str,
    pub grid: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    /// The border drawn between slices of the donut chart.
    pub slice_border: &'static str,
}

impl ChartPalette {
    /// Light text and grid lines on dark backgrounds, and the reverse for the light theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::DarkMode => Self {
                text: "#f3f4f6",
                grid: "rgba(255, 255, 255, 0.1)",
                tooltip_background: "#1e293b",
                tooltip_border: "#374151",
                slice_border: "#1e293b",
            },
            Theme::Light => Self {
                text: "#212c3e",
                grid: "rgba(0, 0, 0, 0.1)",
                tooltip_background: "white",
                tooltip_border: "#e3e8f0",
                slice_border: "white",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::theme::Theme;

    use super::ChartPalette;

    #[test]
    fn dark_theme_uses_light_text() {
        assert_eq!(ChartPalette::for_theme(Theme::DarkMode).text, "#f3f4f6");
        assert_eq!(ChartPalette::for_theme(Theme::Light).text, "#212c3e");
    }

    #[test]
    fn toggling_twice_gives_the_same_palette() {
        let theme = Theme::Light;

        assert_eq!(
            ChartPalette::for_theme(theme.toggled().toggled()),
            ChartPalette::for_theme(theme)
        );
        assert_ne!(
            ChartPalette::for_theme(theme.toggled()),
            ChartPalette::for_theme(theme)
        );
    }
}
