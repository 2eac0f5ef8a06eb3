//! Chart Component
//!
//! Progress line chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use vitals::{ChartScale, ChartSpec, PlotArea};

const CANVAS_WIDTH: u32 = 800;
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";

/// Chart panel with title and canvas
#[component]
pub fn LineChart(chart: ChartSpec) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let title = chart.title.clone();
    let height = chart.height;

    // Draw once the canvas is in the DOM
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &chart);
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-8">
            <h2 class="text-gray-900 font-semibold mb-4">{title}</h2>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=height
                class="w-full"
            />
        </div>
    }
}

/// Number of x-axis intervals for `len` points
fn x_intervals(len: usize) -> usize {
    len.saturating_sub(1).clamp(1, 10)
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &ChartSpec) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => {
            web_sys::console::error_1(&"[vitals] 2d canvas context unavailable".into());
            return;
        }
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::with_margins(width, height);
    let scale = ChartScale::from_points(&chart.points);

    ctx.clear_rect(0.0, 0.0, width, height);

    // Dashed grid
    let dash = js_sys::Array::of2(&JsValue::from(3.0), &JsValue::from(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");

    let y_ticks = scale.y_ticks(5);
    let rows = (y_ticks.len() - 1) as f64;
    for (i, value) in y_ticks.iter().enumerate() {
        let y = area.top + (i as f64 / rows) * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let x_ticks = scale.x_ticks(x_intervals(chart.points.len()));
    let columns = (x_ticks.len() - 1) as f64;
    for (i, value) in x_ticks.iter().enumerate() {
        let x = area.left + (i as f64 / columns) * area.width;
        ctx.begin_path();
        ctx.move_to(x, area.top);
        ctx.line_to(x, area.top + area.height);
        ctx.stroke();

        let _ = ctx.fill_text(&format!("{:.0}", value), x - 6.0, height - 10.0);
    }

    if chart.points.is_empty() {
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Series line
    let _ = ctx.set_line_dash(&js_sys::Array::new());
    ctx.set_stroke_style(&chart.stroke.as_str().into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in chart.points.iter().enumerate() {
        let (x, y) = scale.project(*point, area);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();
}
