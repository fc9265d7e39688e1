//! Quarterly play-count chart.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::data::GameStat;
use crate::data::stats::{PivotedStats, pivot_quarterly};

const SERIES_COLORS: &[&str] = &["#ff4500", "#3b82f6", "#8b5cf6", "#ec4899", "#dc2626"];

const MARGIN_LEFT: f64 = 16.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// Compact count label: `9.1M`, `25.1K`, `640`.
pub fn format_count(value: u64) -> String {
	if value >= 1_000_000 {
		format!("{:.1}M", value as f64 / 1_000_000.0)
	} else if value >= 1_000 {
		format!("{:.1}K", value as f64 / 1_000.0)
	} else {
		value.to_string()
	}
}

/// Period index nearest to mouse position `x` on a chart of `width` pixels,
/// with a small slack band past the plot edges. `None` outside the plot or
/// when there are no periods.
pub fn nearest_period(count: usize, width: f64, x: f64) -> Option<usize> {
	if count == 0 {
		return None;
	}
	let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
	if plot_w <= 0.0 {
		return None;
	}
	let rel = (x - MARGIN_LEFT) / plot_w;
	if !(-0.05..=1.05).contains(&rel) {
		return None;
	}
	let steps = (count - 1).max(1) as f64;
	Some(((rel * steps).round() as isize).clamp(0, count as isize - 1) as usize)
}

/// Multi-series line chart of the quarterly pivot.
///
/// Each series is normalized to its own peak so streaming plays in the
/// millions and concurrent players in the tens of thousands share one plot;
/// the legend carries the per-series peak and hovering a period shows its
/// exact counts.
#[component]
pub fn GameStatsChart(stats: Vec<GameStat>) -> impl IntoView {
	let pivot = pivot_quarterly(&stats);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let legend = pivot
		.series
		.iter()
		.enumerate()
		.map(|(idx, name)| {
			let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
			let peak = format_count(pivot.series_peak(idx));
			view! {
				<span class="legend-entry">
					<span class="legend-swatch" style:background-color=color></span>
					{format!("{name} (peak {peak})")}
				</span>
			}
		})
		.collect_view();

	let hovered = RwSignal::new(None::<usize>);
	let row_count = pivot.rows.len();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let x = ev.client_x() as f64 - rect.left();
		hovered.set(nearest_period(row_count, rect.width(), x));
	};

	let pivot_for_draw = pivot.clone();
	Effect::new(move |_| {
		let hover = hovered.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(560.0);
		let height = 260.0;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		draw_chart(&ctx, &pivot_for_draw, width, height, hover);
	});

	view! {
		<div class="card stats-card">
			<h2 class="card-title">"Paranoid in Gaming Culture"</h2>
			<p class="card-subtitle">
				"Quarterly discovery across streaming and the Helldivers 2 soundtrack"
			</p>
			<canvas
				node_ref=canvas_ref
				class="stats-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=move |_| hovered.set(None)
			></canvas>
			<div class="chart-legend">{legend}</div>
		</div>
	}
}

fn draw_chart(
	ctx: &CanvasRenderingContext2d,
	pivot: &PivotedStats,
	width: f64,
	height: f64,
	hovered: Option<usize>,
) {
	ctx.set_fill_style_str("#0a0a0a");
	ctx.fill_rect(0.0, 0.0, width, height);
	if pivot.rows.is_empty() {
		return;
	}

	let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
	let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
	let x_of = |i: usize| {
		let steps = (pivot.rows.len() - 1).max(1) as f64;
		MARGIN_LEFT + plot_w * i as f64 / steps
	};

	// Horizontal grid at quarter heights
	ctx.set_stroke_style_str("#333333");
	ctx.set_line_width(1.0);
	for step in 0..=4 {
		let y = MARGIN_TOP + plot_h * step as f64 / 4.0;
		ctx.begin_path();
		ctx.move_to(MARGIN_LEFT, y);
		ctx.line_to(width - MARGIN_RIGHT, y);
		ctx.stroke();
	}

	// Period labels, every other one to stay readable
	ctx.set_fill_style_str("#ffffff");
	ctx.set_font("11px monospace");
	for (i, row) in pivot.rows.iter().enumerate() {
		if i % 2 != 0 {
			continue;
		}
		let _ = ctx.fill_text(&row.label(), x_of(i) - 24.0, height - 12.0);
	}

	for (series_idx, _) in pivot.series.iter().enumerate() {
		let peak = pivot.series_peak(series_idx).max(1) as f64;
		let color = SERIES_COLORS[series_idx % SERIES_COLORS.len()];

		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		ctx.begin_path();
		for (i, row) in pivot.rows.iter().enumerate() {
			let y = MARGIN_TOP + plot_h * (1.0 - row.values[series_idx] as f64 / peak);
			if i == 0 {
				ctx.move_to(x_of(i), y);
			} else {
				ctx.line_to(x_of(i), y);
			}
		}
		ctx.stroke();

		ctx.set_fill_style_str(color);
		for (i, row) in pivot.rows.iter().enumerate() {
			let y = MARGIN_TOP + plot_h * (1.0 - row.values[series_idx] as f64 / peak);
			ctx.begin_path();
			let _ = ctx.arc(x_of(i), y, 3.0, 0.0, 2.0 * std::f64::consts::PI);
			ctx.fill();
		}
	}

	// Hover readout: guide line plus the exact count of every series
	if let Some(i) = hovered.filter(|i| *i < pivot.rows.len()) {
		let x = x_of(i);
		ctx.set_stroke_style_str("#555555");
		ctx.set_line_width(1.0);
		ctx.begin_path();
		ctx.move_to(x, MARGIN_TOP);
		ctx.line_to(x, height - MARGIN_BOTTOM);
		ctx.stroke();

		let row = &pivot.rows[i];
		let box_w = 160.0;
		let box_h = 16.0 * (pivot.series.len() as f64 + 1.0) + 10.0;
		let bx = if x + 8.0 + box_w > width - MARGIN_RIGHT {
			x - 8.0 - box_w
		} else {
			x + 8.0
		};
		ctx.set_fill_style_str("#1a1a1a");
		ctx.fill_rect(bx, MARGIN_TOP, box_w, box_h);
		ctx.set_stroke_style_str("#ff4500");
		ctx.stroke_rect(bx, MARGIN_TOP, box_w, box_h);

		ctx.set_fill_style_str("#f5f5f5");
		ctx.set_font("11px monospace");
		let _ = ctx.fill_text(&row.label(), bx + 8.0, MARGIN_TOP + 16.0);
		for (s, name) in pivot.series.iter().enumerate() {
			ctx.set_fill_style_str(SERIES_COLORS[s % SERIES_COLORS.len()]);
			let _ = ctx.fill_text(
				&format!("{name}: {}", format_count(row.values[s])),
				bx + 8.0,
				MARGIN_TOP + 16.0 * (s as f64 + 2.0),
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_abbreviate_by_magnitude() {
		assert_eq!(format_count(0), "0");
		assert_eq!(format_count(640), "640");
		assert_eq!(format_count(25_100), "25.1K");
		assert_eq!(format_count(9_100_000), "9.1M");
	}

	#[test]
	fn hover_maps_x_to_the_nearest_period() {
		// width 432 leaves a 400px plot: nine periods, 50px apart
		assert_eq!(nearest_period(9, 432.0, MARGIN_LEFT), Some(0));
		assert_eq!(nearest_period(9, 432.0, 432.0 - MARGIN_RIGHT), Some(8));
		assert_eq!(nearest_period(9, 432.0, MARGIN_LEFT + 200.0), Some(4));
		assert_eq!(nearest_period(9, 432.0, MARGIN_LEFT + 230.0), Some(5));
		assert_eq!(nearest_period(1, 432.0, 216.0), Some(0));
	}

	#[test]
	fn hover_ignores_positions_off_the_plot() {
		assert_eq!(nearest_period(0, 432.0, 100.0), None);
		assert_eq!(nearest_period(9, 432.0, 500.0), None);
		assert_eq!(nearest_period(9, 432.0, -40.0), None);
		assert_eq!(nearest_period(9, 20.0, 10.0), None);
	}
}
