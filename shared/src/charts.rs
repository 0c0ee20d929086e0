use crate::aggregate::{by_area, by_category, by_month, top_sales_reps, GroupTotal};
use crate::config::DashboardConfig;
use crate::record::{LoadedRecord, SalesRecord};

pub const SERIES_LABEL: &str = "Sales Value ($)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Area,
    Month,
    Category,
    SalesRep,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Area,
        ChartKind::Month,
        ChartKind::Category,
        ChartKind::SalesRep,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Area => "Sales by Area",
            ChartKind::Month => "Sales Trend by Month",
            ChartKind::Category => "OTC vs HW Sales",
            ChartKind::SalesRep => "Top 10 Sales Representatives",
        }
    }

    /// DOM id of the canvas the chart is drawn on.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::Area => "areaChart",
            ChartKind::Month => "monthChart",
            ChartKind::Category => "categoryChart",
            ChartKind::SalesRep => "salesRepChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

pub const AREA_COLOR: Rgba = Rgba::new(37, 99, 235, 0.8);
pub const MONTH_COLOR: Rgba = Rgba::new(5, 150, 105, 1.0);
pub const SALES_REP_COLOR: Rgba = Rgba::new(220, 38, 38, 0.8);

/// Donut slices cycle through these when there are more groups than colors.
pub const CATEGORY_PALETTE: [Rgba; 3] = [
    Rgba::new(37, 99, 235, 0.8),
    Rgba::new(217, 119, 6, 0.8),
    Rgba::new(107, 114, 128, 0.8),
];

#[derive(Debug, Clone, PartialEq)]
pub enum ChartStyle {
    Bar { rotate_labels: bool },
    Line { fill: Rgba },
    Donut,
}

/// Everything needed to draw one chart, independent of the drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub style: ChartStyle,
    pub points: Vec<GroupTotal>,
    /// One color per point for donuts, a single series color otherwise.
    pub colors: Vec<Rgba>,
}

impl ChartSpec {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest group total, never below zero.
    pub fn max_total(&self) -> f64 {
        self.points.iter().map(|(_, total)| *total).fold(0.0, f64::max)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|(label, _)| label.as_str()).collect()
    }
}

/// Palette colors for `count` slices, reused cyclically.
pub fn palette_cycle(count: usize) -> Vec<Rgba> {
    (0..count)
        .map(|i| CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()])
        .collect()
}

/// Builds one chart spec per [`ChartKind`] from the visible records.
pub fn build_charts(visible: &[LoadedRecord], config: &DashboardConfig) -> Vec<ChartSpec> {
    ChartKind::ALL
        .iter()
        .map(|kind| build_chart(*kind, visible, config))
        .collect()
}

pub fn build_chart(
    kind: ChartKind,
    visible: &[LoadedRecord],
    config: &DashboardConfig,
) -> ChartSpec {
    let records = || visible.iter().map(|loaded| &loaded.record);

    match kind {
        ChartKind::Area => series(
            kind,
            ChartStyle::Bar { rotate_labels: false },
            by_area(records()),
            AREA_COLOR,
        ),
        ChartKind::Month => series(
            kind,
            ChartStyle::Line {
                fill: MONTH_COLOR.with_alpha(0.1),
            },
            by_month(records(), config.month_order),
            MONTH_COLOR,
        ),
        ChartKind::Category => {
            let points = by_category(records());
            let colors = palette_cycle(points.len());
            ChartSpec {
                kind,
                style: ChartStyle::Donut,
                points,
                colors,
            }
        }
        ChartKind::SalesRep => series(
            kind,
            ChartStyle::Bar { rotate_labels: true },
            top_sales_reps(records(), config.top_reps),
            SALES_REP_COLOR,
        ),
    }
}

fn series(kind: ChartKind, style: ChartStyle, points: Vec<GroupTotal>, color: Rgba) -> ChartSpec {
    ChartSpec {
        kind,
        style,
        points,
        colors: vec![color],
    }
}

/// Total sales value of a record sequence.
pub fn total_value<'a>(records: impl IntoIterator<Item = &'a SalesRecord>) -> f64 {
    records.into_iter().map(|r| r.value.value()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NumericCell;

    fn visible() -> Vec<LoadedRecord> {
        let categories = ["OTC", "HW", "SVC", "LAB", "OTC"];
        LoadedRecord::from_response(
            categories
                .iter()
                .enumerate()
                .map(|(i, category)| SalesRecord {
                    area: if i % 2 == 0 { "North" } else { "South" }.to_string(),
                    category: category.to_string(),
                    month: "Jan".to_string(),
                    sales_rep: format!("rep{}", i),
                    value: NumericCell::Number(100.0 * (i + 1) as f64),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_builds_all_four_charts() {
        let charts = build_charts(&visible(), &DashboardConfig::default());
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, ChartKind::ALL.to_vec());
        assert_eq!(charts[0].title(), "Sales by Area");
        assert_eq!(charts[0].labels(), vec!["North", "South"]);
        assert_eq!(charts[1].points, vec![("Jan".to_string(), 1500.0)]);
        assert_eq!(charts[3].style, ChartStyle::Bar { rotate_labels: true });
    }

    #[test]
    fn test_category_palette_is_reused_cyclically() {
        let chart = build_chart(ChartKind::Category, &visible(), &DashboardConfig::default());
        assert_eq!(chart.labels(), vec!["OTC", "HW", "SVC", "LAB"]);
        assert_eq!(chart.colors.len(), 4);
        assert_eq!(chart.colors[3], CATEGORY_PALETTE[0]);
    }

    #[test]
    fn test_top_reps_respects_config_limit() {
        let config = DashboardConfig {
            top_reps: 2,
            ..Default::default()
        };
        let chart = build_chart(ChartKind::SalesRep, &visible(), &config);
        assert_eq!(chart.labels(), vec!["rep4", "rep3"]);
    }

    #[test]
    fn test_chart_totals_match_visible_total() {
        let visible = visible();
        let expected = total_value(visible.iter().map(|l| &l.record));
        for chart in build_charts(&visible, &DashboardConfig::default()).iter().take(3) {
            let sum: f64 = chart.points.iter().map(|(_, t)| t).sum();
            assert_eq!(sum, expected);
        }
    }

    #[test]
    fn test_empty_input_gives_empty_charts() {
        let charts = build_charts(&[], &DashboardConfig::default());
        assert!(charts.iter().all(ChartSpec::is_empty));
        assert_eq!(charts[0].max_total(), 0.0);
    }
}
