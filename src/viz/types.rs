//! Public types and constants for the visualization module.

use plotters::style::RGBColor;

/// Chart styles supported by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// One bar per row, value labels above the bars.
    Bar,
    /// One line vertex per row.
    Line,
    /// Filled area from the zero baseline to the values.
    Area,
    /// One slice per distinct category, sized by the category's total.
    Pie,
    /// Markers only, colored per category.
    Scatter,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 5] = [
        ChartStyle::Bar,
        ChartStyle::Line,
        ChartStyle::Area,
        ChartStyle::Pie,
        ChartStyle::Scatter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartStyle::Bar => "Bar",
            ChartStyle::Line => "Line",
            ChartStyle::Area => "Area",
            ChartStyle::Pie => "Pie",
            ChartStyle::Scatter => "Scatter",
        }
    }
}

/// Fixed color presets for the chart canvas. The same two modes the GUI
/// offers as its theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn background(self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(245, 246, 248), // #f5f6f8
            Theme::Dark => RGBColor(31, 31, 46),     // #1f1f2e
        }
    }

    pub fn text(self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(0, 0, 0),
            Theme::Dark => RGBColor(255, 255, 255),
        }
    }

    pub fn accent(self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(79, 141, 247),  // #4f8df7
            Theme::Dark => RGBColor(140, 193, 247),  // #8cc1f7
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}
