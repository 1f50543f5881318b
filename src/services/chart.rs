//! Chart builder for the ownership analysis.
//!
//! Builds a plotly-shaped `{data, layout}` specification from the ownership
//! table. The builder is a pure function of the table and the mode: it never
//! mutates its input, so toggling between modes is idempotent.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::constants::CHART_WIDTH;
use crate::models::{CategoryColorMap, OwnershipTable};

/// Which of the two chart renderings to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Donut chart of percentage shares per category.
    #[default]
    Proportion,
    /// Bar chart of absolute areas, sorted by descending total.
    Magnitude,
}

/// A renderable chart specification in the plotly `{data, layout}` shape.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    /// Chart traces (always exactly one).
    pub data: Vec<Trace>,
    /// Chart layout options.
    pub layout: ChartLayout,
}

/// A single chart trace.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    /// Trace type ("pie" or "bar").
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Slice labels (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Slice values (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    /// Ring hole fraction (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    /// Category axis values (bar only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<String>>,
    /// Numeric axis values (bar only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    /// Per-bar annotations (bar only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    /// Where labels are positioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<&'static str>,
    /// What the in-slice labels show (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textinfo: Option<&'static str>,
    /// Slice/bar colors.
    pub marker: Marker,
}

/// Trace color options.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    /// Slice colors (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<&'static str>>,
    /// Bar colors (bar only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<&'static str>>,
}

/// Chart layout options.
#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    /// Centered chart title.
    pub title: Title,
    /// Whether the legend is shown.
    pub showlegend: bool,
    /// Legend options (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// Category axis title (bar only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Numeric axis title (bar only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// Fixed chart width in pixels.
    pub width: u32,
}

/// Chart or axis title.
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    /// Title text.
    pub text: String,
    /// Horizontal position (0.5 = centered); only meaningful on the chart title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
}

impl Title {
    fn centered(text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: Some(0.5),
        }
    }

    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: None,
        }
    }
}

/// Legend options.
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    /// Legend title.
    pub title: Title,
}

/// Axis options.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    /// Axis title.
    pub title: Title,
}

/// Builds the chart specification for the given mode.
#[must_use]
pub fn build_chart(table: &OwnershipTable, mode: ChartMode) -> ChartSpec {
    let colors = CategoryColorMap::new();
    match mode {
        ChartMode::Proportion => proportion_chart(table, &colors),
        ChartMode::Magnitude => magnitude_chart(table, &colors),
    }
}

/// Donut chart of percentage shares, with in-slice percent + label text and a
/// titled legend.
fn proportion_chart(table: &OwnershipTable, colors: &CategoryColorMap) -> ChartSpec {
    let categories: Vec<String> = table.rows.iter().map(|r| r.category.clone()).collect();
    let slice_colors = colors.colors_for(categories.iter().map(String::as_str));

    ChartSpec {
        data: vec![Trace {
            kind: "pie",
            labels: Some(categories),
            values: Some(table.totals()),
            hole: Some(0.4),
            x: None,
            y: None,
            text: None,
            textposition: Some("inside"),
            textinfo: Some("percent+label"),
            marker: Marker {
                colors: Some(slice_colors),
                color: None,
            },
        }],
        layout: ChartLayout {
            title: Title::centered("Podiel výmery podľa druhu vlastníctva"),
            showlegend: true,
            legend: Some(Legend {
                title: Title::plain(&table.index_column),
            }),
            xaxis: None,
            yaxis: None,
            width: CHART_WIDTH,
        },
    }
}

/// Bar chart of absolute areas, sorted by descending total. The sort is
/// stable, so equal totals keep their workbook order.
fn magnitude_chart(table: &OwnershipTable, colors: &CategoryColorMap) -> ChartSpec {
    let mut sorted: Vec<(&str, f64)> = table
        .rows
        .iter()
        .map(|row| (row.category.as_str(), row.total))
        .collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let categories: Vec<String> = sorted.iter().map(|(c, _)| (*c).to_string()).collect();
    let totals: Vec<f64> = sorted.iter().map(|(_, t)| *t).collect();
    let annotations: Vec<String> = totals.iter().map(|t| format!("{t:.2}")).collect();
    let bar_colors = colors.colors_for(sorted.iter().map(|(c, _)| *c));

    ChartSpec {
        data: vec![Trace {
            kind: "bar",
            labels: None,
            values: None,
            hole: None,
            x: Some(categories),
            y: Some(totals),
            text: Some(annotations),
            textposition: Some("auto"),
            textinfo: None,
            marker: Marker {
                colors: None,
                color: Some(bar_colors),
            },
        }],
        layout: ChartLayout {
            title: Title::centered("Výmery podľa druhu vlastníctva (ha)"),
            showlegend: false,
            legend: None,
            xaxis: Some(Axis {
                title: Title::plain(&table.index_column),
            }),
            yaxis: Some(Axis {
                title: Title::plain("Výmera (ha)"),
            }),
            width: CHART_WIDTH,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnershipRow;

    fn table() -> OwnershipTable {
        OwnershipTable::new(
            "Druh vlastníctva".to_string(),
            vec!["orná pôda".to_string()],
            vec![
                OwnershipRow::new("cirkevné".to_string(), vec![Some(2.0)]),
                OwnershipRow::new("štátne".to_string(), vec![Some(8.0)]),
                OwnershipRow::new("zmiešané".to_string(), vec![Some(2.0)]),
                OwnershipRow::new("Celkový súčet".to_string(), vec![Some(12.0)]),
            ],
        )
    }

    #[test]
    fn test_proportion_chart_shape() {
        let spec = build_chart(&table(), ChartMode::Proportion);
        let trace = &spec.data[0];
        assert_eq!(trace.kind, "pie");
        assert_eq!(trace.hole, Some(0.4));
        assert_eq!(trace.textinfo, Some("percent+label"));
        assert!(spec.layout.showlegend);
        assert_eq!(spec.layout.width, CHART_WIDTH);
        // Totals row never reaches chart input
        assert!(!trace
            .labels
            .as_ref()
            .unwrap()
            .iter()
            .any(|l| l.to_lowercase().contains("celkový")));
    }

    #[test]
    fn test_magnitude_chart_sorted_descending_stable() {
        let spec = build_chart(&table(), ChartMode::Magnitude);
        let trace = &spec.data[0];
        assert_eq!(trace.kind, "bar");
        // štátne (8.0) first; the 2.0 tie keeps workbook order
        assert_eq!(
            trace.x.as_ref().unwrap(),
            &vec![
                "štátne".to_string(),
                "cirkevné".to_string(),
                "zmiešané".to_string()
            ]
        );
        let y = trace.y.as_ref().unwrap();
        assert!(y.windows(2).all(|w| w[0] >= w[1]));
        assert!(!spec.layout.showlegend);
    }

    #[test]
    fn test_magnitude_annotations_two_decimals() {
        let spec = build_chart(&table(), ChartMode::Magnitude);
        assert_eq!(
            spec.data[0].text.as_ref().unwrap(),
            &vec!["8.00".to_string(), "2.00".to_string(), "2.00".to_string()]
        );
    }

    #[test]
    fn test_build_chart_does_not_mutate_table() {
        let table = table();
        let before = table.clone();
        let _ = build_chart(&table, ChartMode::Proportion);
        let _ = build_chart(&table, ChartMode::Magnitude);
        let _ = build_chart(&table, ChartMode::Proportion);
        assert_eq!(table, before);
    }
}
