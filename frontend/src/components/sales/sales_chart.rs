use std::f64::consts::PI;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use shared::format::{format_axis_currency, format_currency};
use shared::{ChartSpec, ChartStyle, Rgba};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 560;
const CANVAS_HEIGHT: u32 = 320;
const DONUT_CUTOUT: f64 = 0.5;

const LABEL_COLOR: RGBColor = RGBColor(75, 85, 99);

#[derive(Properties, PartialEq)]
pub struct SalesChartProps {
    pub spec: ChartSpec,
    pub loading: bool,
}

pub struct SalesChart {
    canvas_ref: NodeRef,
    needs_redraw: bool,
}

impl Component for SalesChart {
    type Message = ();
    type Properties = SalesChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            needs_redraw: true,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let change = props_change(old_props, ctx.props());
        self.needs_redraw |= change.redraw;
        change.rerender
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.needs_redraw {
            self.draw_chart(&ctx.props().spec);
            self.needs_redraw = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let spec = &ctx.props().spec;

        html! {
            <div class={classes!("chart-card", ctx.props().loading.then_some("loading"))}>
                <h3 class="chart-title">{spec.title()}</h3>
                <div class="chart-content">
                    <canvas
                        id={spec.kind.canvas_id()}
                        ref={self.canvas_ref.clone()}
                        class="sales-chart-canvas"
                        width={CANVAS_WIDTH.to_string()}
                        height={CANVAS_HEIGHT.to_string()}
                    ></canvas>
                </div>
            </div>
        }
    }
}

impl SalesChart {
    fn draw_chart(&self, spec: &ChartSpec) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();

        // Clear whatever the previous data set left behind
        if root.fill(&WHITE).is_err() {
            return;
        }

        let drawn = if spec.is_empty() {
            draw_empty(&root)
        } else {
            match &spec.style {
                ChartStyle::Bar { rotate_labels } => draw_bars(&root, spec, *rotate_labels),
                ChartStyle::Line { fill } => draw_line(&root, spec, *fill),
                ChartStyle::Donut => draw_donut(&root, spec),
            }
        };

        if drawn.is_err() {
            crate::services::logging::Logger::warn_with_component(
                "SalesChart",
                &format!("failed to draw {}", spec.title()),
            );
            return;
        }

        let _ = root.present();
    }
}

/// What new props require of the chart card.
#[derive(Debug, PartialEq)]
struct PropsChange {
    /// Clear the canvas and draw the new data set.
    redraw: bool,
    rerender: bool,
}

/// Only a different data set redraws the canvas; a loading toggle just
/// re-renders the card around it.
fn props_change(old: &SalesChartProps, new: &SalesChartProps) -> PropsChange {
    let redraw = old.spec != new.spec;
    PropsChange {
        redraw,
        rerender: redraw || old.loading != new.loading,
    }
}

type DrawResult = Result<(), Box<dyn std::error::Error>>;

fn to_color(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

/// Upper bound of the value axis. Starts at zero and leaves headroom above the
/// tallest group.
fn y_axis_max(spec: &ChartSpec) -> f64 {
    (spec.max_total() * 1.1).max(1.0)
}

/// Text for a tick of the category axis.
fn segment_label(labels: &[String], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            labels.get(*i as usize).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

fn last_segment(spec: &ChartSpec) -> u32 {
    spec.points.len().saturating_sub(1) as u32
}

fn draw_empty(root: &DrawingArea<CanvasBackend, Shift>) -> DrawResult {
    let style = ("sans-serif", 14)
        .into_font()
        .color(&LABEL_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        "No data",
        (CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 / 2),
        style,
    ))?;
    Ok(())
}

fn draw_bars(
    root: &DrawingArea<CanvasBackend, Shift>,
    spec: &ChartSpec,
    rotate_labels: bool,
) -> DrawResult {
    let labels: Vec<String> = spec.points.iter().map(|(label, _)| label.clone()).collect();
    let color = spec.colors.first().copied().map(to_color).unwrap_or(BLUE.to_rgba());

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(if rotate_labels { 110 } else { 40 })
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..last_segment(spec)).into_segmented(), 0.0..y_axis_max(spec))?;

    let x_label_style = if rotate_labels {
        ("sans-serif", 12)
            .into_font()
            .transform(FontTransform::Rotate90)
            .color(&LABEL_COLOR)
    } else {
        ("sans-serif", 12).into_font().color(&LABEL_COLOR)
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(shared::charts::SERIES_LABEL)
        .y_label_formatter(&|v| format_axis_currency(*v))
        .x_label_formatter(&|v| segment_label(&labels, v))
        .x_labels(labels.len())
        .x_label_style(x_label_style)
        .y_label_style(("sans-serif", 12).into_font().color(&LABEL_COLOR))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(240, 240, 240))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(8)
            .data(spec.points.iter().enumerate().map(|(i, (_, total))| (i as u32, *total))),
    )?;

    Ok(())
}

fn draw_line(root: &DrawingArea<CanvasBackend, Shift>, spec: &ChartSpec, fill: Rgba) -> DrawResult {
    let labels: Vec<String> = spec.points.iter().map(|(label, _)| label.clone()).collect();
    let line_color = spec.colors.first().copied().map(to_color).unwrap_or(GREEN.to_rgba());

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..last_segment(spec)).into_segmented(), 0.0..y_axis_max(spec))?;

    chart
        .configure_mesh()
        .y_desc(shared::charts::SERIES_LABEL)
        .y_label_formatter(&|v| format_axis_currency(*v))
        .x_label_formatter(&|v| segment_label(&labels, v))
        .x_labels(labels.len())
        .label_style(("sans-serif", 12).into_font().color(&LABEL_COLOR))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(240, 240, 240))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()?;

    let points: Vec<(SegmentValue<u32>, f64)> = spec
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, total))| (SegmentValue::CenterOf(i as u32), *total))
        .collect();

    chart.draw_series(
        AreaSeries::new(points.iter().cloned(), 0.0, to_color(fill).filled())
            .border_style(line_color.stroke_width(3)),
    )?;

    for point in points.iter() {
        chart.draw_series(std::iter::once(Circle::new(point.clone(), 4, line_color.filled())))?;
        chart.draw_series(std::iter::once(Circle::new(point.clone(), 4, WHITE.stroke_width(2))))?;
    }

    Ok(())
}

/// Start and end angle of each slice, clockwise from twelve o'clock.
fn slice_angles(totals: &[f64]) -> Vec<(f64, f64)> {
    let sum: f64 = totals.iter().map(|t| t.max(0.0)).sum();
    if sum <= 0.0 {
        return totals.iter().map(|_| (-PI / 2.0, -PI / 2.0)).collect();
    }

    let mut start = -PI / 2.0;
    totals
        .iter()
        .map(|total| {
            let end = start + total.max(0.0) / sum * 2.0 * PI;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// Outline of a ring segment as a closed polygon.
fn ring_segment(
    center: (i32, i32),
    outer: f64,
    inner: f64,
    (start, end): (f64, f64),
) -> Vec<(i32, i32)> {
    let steps = (((end - start) / (2.0 * PI)) * 120.0).ceil().max(1.0) as usize;
    let point = |radius: f64, angle: f64| {
        (
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        )
    };

    let angle_at = |s: usize| start + (end - start) * s as f64 / steps as f64;
    let outer_arc = (0..=steps).map(|s| point(outer, angle_at(s)));
    let inner_arc = (0..=steps).rev().map(|s| point(inner, angle_at(s)));
    outer_arc.chain(inner_arc).collect()
}

fn draw_donut(root: &DrawingArea<CanvasBackend, Shift>, spec: &ChartSpec) -> DrawResult {
    let (width, height) = root.dim_in_pixel();
    let center = ((width as i32) / 3, (height as i32) / 2);
    let outer = (height.min(width) as f64) / 2.0 - 20.0;
    let inner = outer * DONUT_CUTOUT;

    let totals: Vec<f64> = spec.points.iter().map(|(_, total)| *total).collect();
    let angles = slice_angles(&totals);

    for (i, slice) in angles.iter().enumerate() {
        if slice.1 <= slice.0 {
            continue;
        }
        let color = spec.colors.get(i).copied().map(to_color).unwrap_or(BLUE.to_rgba());
        root.draw(&Polygon::new(ring_segment(center, outer, inner, *slice), color.filled()))?;
    }

    // Legend
    let legend_x = center.0 + outer as i32 + 40;
    let legend_top = center.1 - (spec.points.len() as i32 * 24) / 2;
    for (i, (label, total)) in spec.points.iter().enumerate() {
        let y = legend_top + i as i32 * 24;
        let color = spec.colors.get(i).copied().map(to_color).unwrap_or(BLUE.to_rgba());
        root.draw(&Rectangle::new([(legend_x, y), (legend_x + 14, y + 14)], color.filled()))?;
        root.draw(&Text::new(
            format!("{} ({})", label, format_currency(*total)),
            (legend_x + 22, y),
            ("sans-serif", 13).into_font().color(&LABEL_COLOR),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChartKind;

    fn spec(points: Vec<(&str, f64)>) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Area,
            style: ChartStyle::Bar { rotate_labels: false },
            points: points.into_iter().map(|(l, v)| (l.to_string(), v)).collect(),
            colors: vec![Rgba::new(37, 99, 235, 0.8)],
        }
    }

    #[test]
    fn test_identical_data_set_is_not_redrawn() {
        let old = SalesChartProps {
            spec: spec(vec![("North", 10.0)]),
            loading: false,
        };
        let same = SalesChartProps {
            spec: spec(vec![("North", 10.0)]),
            loading: false,
        };
        assert_eq!(
            props_change(&old, &same),
            PropsChange { redraw: false, rerender: false }
        );

        let loading = SalesChartProps {
            spec: spec(vec![("North", 10.0)]),
            loading: true,
        };
        assert_eq!(
            props_change(&old, &loading),
            PropsChange { redraw: false, rerender: true }
        );
    }

    #[test]
    fn test_changed_data_set_is_redrawn() {
        let old = SalesChartProps {
            spec: spec(vec![("North", 10.0)]),
            loading: true,
        };
        let new = SalesChartProps {
            spec: spec(vec![("North", 10.0), ("South", 4.0)]),
            loading: true,
        };
        assert_eq!(
            props_change(&old, &new),
            PropsChange { redraw: true, rerender: true }
        );
    }

    #[test]
    fn test_color_conversion() {
        let color = to_color(Rgba::new(220, 38, 38, 0.8));
        assert_eq!(color.0, 220);
        assert_eq!(color.1, 38);
        assert_eq!(color.2, 38);
        assert_eq!(color.3, 0.8);
    }

    #[test]
    fn test_y_axis_has_headroom_and_floor() {
        assert_eq!(y_axis_max(&spec(vec![])), 1.0);
        let max = y_axis_max(&spec(vec![("North", 1000.0), ("South", 200.0)]));
        assert!(max > 1000.0);
    }

    #[test]
    fn test_segment_labels() {
        let labels = vec!["North".to_string(), "South".to_string()];
        assert_eq!(segment_label(&labels, &SegmentValue::CenterOf(1)), "South");
        assert_eq!(segment_label(&labels, &SegmentValue::Exact(0)), "North");
        assert_eq!(segment_label(&labels, &SegmentValue::CenterOf(7)), "");
        assert_eq!(segment_label(&labels, &SegmentValue::Last), "");
    }

    #[test]
    fn test_slices_cover_full_circle() {
        let angles = slice_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);
        assert_eq!(angles[0].0, -PI / 2.0);
        assert!((angles[2].1 - 3.0 * PI / 2.0).abs() < 1e-9);
        assert!((angles[2].1 - angles[2].0 - PI).abs() < 1e-9);
    }

    #[test]
    fn test_slices_of_zero_totals_are_empty() {
        let angles = slice_angles(&[0.0, -5.0]);
        assert!(angles.iter().all(|(start, end)| start == end));
    }

    #[test]
    fn test_ring_segment_is_closed_outline() {
        let outline = ring_segment((100, 100), 50.0, 25.0, (0.0, PI / 2.0));
        assert_eq!(outline.first(), Some(&(150, 100)));
        assert_eq!(outline.last(), Some(&(125, 100)));
    }

    #[test]
    fn test_draw_chart_without_canvas() {
        let chart = SalesChart {
            canvas_ref: NodeRef::default(),
            needs_redraw: true,
        };
        // No canvas is mounted, so nothing is drawn
        chart.draw_chart(&spec(vec![("North", 10.0)]));
    }
}
