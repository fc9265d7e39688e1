//! Audio playback with annotated wave regions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement};

use crate::data::{TimelineEvent, WaveRegion};
use crate::error::Error;
use crate::events::TimelineBus;

/// Index of the region a timeline event jumps playback to.
///
/// Resolution is declared in the data (`linked_region` names a region label);
/// events without a link, or whose link no longer matches a label, resolve to
/// nothing.
pub fn linked_region_index(event: &TimelineEvent, regions: &[WaveRegion]) -> Option<usize> {
	let label = event.linked_region.as_deref()?;
	regions.iter().position(|region| region.label == label)
}

/// Color of the region containing `seconds`, if any. Region intervals are
/// half-open, so a shared boundary belongs to the later region.
pub fn region_color_at(regions: &[WaveRegion], seconds: f64) -> Option<&str> {
	regions
		.iter()
		.find(|r| seconds >= r.start && seconds < r.end)
		.map(|r| r.color.as_str())
}

/// Bar height for the stylized waveform, stable per bar index so the display
/// does not shimmer across redraws. Stays inside `0.1..=1.0`.
fn waveform_amplitude(i: usize) -> f64 {
	let x = i as f64;
	0.55 + 0.45 * (x * 0.83).sin() * (x * 0.19).cos()
}

/// `m:ss` clock readout; non-finite input renders as zero.
pub fn format_clock(seconds: f64) -> String {
	if !seconds.is_finite() || seconds < 0.0 {
		return "0:00".into();
	}
	let whole = seconds as u64;
	format!("{}:{:02}", whole / 60, whole % 60)
}

/// Record player: spinning vinyl, play/pause transport, clock, a stylized
/// waveform with playhead, a proportional region strip, and a region card
/// grid.
///
/// Audio failure is local and non-terminal: the transport disables and an
/// error banner shows, while region navigation keeps working with the seek
/// side effect skipped. Subscribes to the [`TimelineBus`] and jumps to the
/// region an event declares through `linked_region`.
#[component]
pub fn RecordPlayer(audio_url: String, regions: Vec<WaveRegion>) -> impl IntoView {
	let audio_ref = NodeRef::<leptos::html::Audio>::new();
	let playing = RwSignal::new(false);
	let ready = RwSignal::new(false);
	let current_time = RwSignal::new(0.0f64);
	let duration = RwSignal::new(0.0f64);
	let audio_error = RwSignal::new(None::<String>);
	let selected = RwSignal::new(None::<usize>);

	let regions = StoredValue::new(regions);
	let track_span = regions.with_value(|regions| {
		regions.iter().map(|r| r.end).fold(0.0f64, f64::max)
	});

	// Select a region and, when playback is available, seek to its start.
	let select_region = move |idx: usize| {
		let Some(start) = regions.with_value(|regions| regions.get(idx).map(|r| r.start)) else {
			return;
		};
		selected.set(Some(idx));
		if audio_error.get_untracked().is_some() {
			return;
		}
		if let Some(audio) = audio_ref.get_untracked() {
			let audio: HtmlAudioElement = audio.into();
			audio.set_current_time(start);
		}
	};

	let bus = expect_context::<TimelineBus>();
	let subscription = bus.subscribe(move |event: &TimelineEvent| {
		let target = regions.with_value(|regions| linked_region_index(event, regions));
		if let Some(idx) = target {
			select_region(idx);
		}
	});
	on_cleanup(move || drop(subscription));

	let toggle_playback = move |_| {
		let Some(audio) = audio_ref.get_untracked() else {
			return;
		};
		let audio: HtmlAudioElement = audio.into();
		if playing.get_untracked() {
			let _ = audio.pause();
			return;
		}
		match audio.play() {
			Ok(promise) => {
				spawn_local(async move {
					if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
						let err = Error::AudioUnavailable("playback was rejected".into());
						warn!("{err}");
						audio_error.set(Some(err.to_string()));
					}
				});
			}
			Err(_) => {
				let err = Error::AudioUnavailable("playback could not start".into());
				warn!("{err}");
				audio_error.set(Some(err.to_string()));
			}
		}
	};

	let on_audio_error = move |_| {
		let err = Error::AudioUnavailable("the track failed to load".into());
		warn!("{err}");
		audio_error.set(Some(err.to_string()));
		playing.set(false);
		ready.set(false);
	};

	let on_metadata = move |_| {
		if let Some(audio) = audio_ref.get_untracked() {
			let audio: HtmlAudioElement = audio.into();
			duration.set(audio.duration());
			ready.set(true);
		}
	};

	let on_timeupdate = move |_| {
		if let Some(audio) = audio_ref.get_untracked() {
			let audio: HtmlAudioElement = audio.into();
			current_time.set(audio.current_time());
		}
	};

	let transport_disabled = move || audio_error.get().is_some() || !ready.get();

	let waveform_ref = NodeRef::<leptos::html::Canvas>::new();
	Effect::new(move |_| {
		let progress = current_time.get();
		let Some(canvas) = waveform_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(560.0);
		let height = 72.0;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		regions.with_value(|regions| {
			draw_waveform(&ctx, regions, track_span, progress, width, height);
		});
	});

	let strip = regions.with_value(|regions| {
		regions
			.iter()
			.enumerate()
			.map(|(idx, region)| {
				let width = if track_span > 0.0 {
					(region.end - region.start) / track_span * 100.0
				} else {
					0.0
				};
				view! {
					<button
						class="region-segment"
						class:selected=move || selected.get() == Some(idx)
						style:width=format!("{width:.2}%")
						style:background-color=region.color.clone()
						title=region.label.clone()
						on:click=move |_| select_region(idx)
					></button>
				}
			})
			.collect_view()
	});

	let cards = regions.with_value(|regions| {
		regions
			.iter()
			.enumerate()
			.map(|(idx, region)| {
				let range = format!(
					"{} - {}",
					format_clock(region.start),
					format_clock(region.end)
				);
				view! {
					<button
						class="region-card"
						class:selected=move || selected.get() == Some(idx)
						on:click=move |_| select_region(idx)
					>
						<span class="region-swatch" style:background-color=region.color.clone()></span>
						<span class="region-label">{region.label.clone()}</span>
						<span class="region-range">{range}</span>
					</button>
				}
			})
			.collect_view()
	});

	view! {
		<div class="card player-card">
			<h2 class="card-title">"Paranoid Audio Analysis"</h2>
			<audio
				node_ref=audio_ref
				src=audio_url
				preload="metadata"
				on:error=on_audio_error
				on:loadedmetadata=on_metadata
				on:timeupdate=on_timeupdate
				on:play=move |_| playing.set(true)
				on:pause=move |_| playing.set(false)
				on:ended=move |_| playing.set(false)
			></audio>

			{move || {
				audio_error
					.get()
					.map(|msg| view! { <div class="audio-error">{msg}</div> })
			}}

			<div class="transport">
				<div class="vinyl" class:spinning=move || playing.get()>
					<div class="vinyl-label"></div>
				</div>
				<button
					class="play-button"
					prop:disabled=transport_disabled
					on:click=toggle_playback
				>
					{move || if playing.get() { "⏸" } else { "▶" }}
				</button>
				<span class="clock">
					{move || format!("{} / {}", format_clock(current_time.get()), format_clock(duration.get()))}
				</span>
			</div>

			<canvas node_ref=waveform_ref class="waveform-canvas"></canvas>
			<div class="region-strip">{strip}</div>
			<div class="region-grid">{cards}</div>

			{move || {
				selected
					.get()
					.and_then(|idx| regions.with_value(|regions| regions.get(idx).cloned()))
					.map(|region| {
						view! {
							<div class="region-detail">
								<h3>{region.label}</h3>
								{region.description.map(|text| view! { <p>{text}</p> })}
							</div>
						}
					})
			}}
		</div>
	}
}

fn draw_waveform(
	ctx: &CanvasRenderingContext2d,
	regions: &[WaveRegion],
	track_span: f64,
	progress: f64,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str("#0a0a0a");
	ctx.fill_rect(0.0, 0.0, width, height);
	if track_span <= 0.0 {
		return;
	}

	const BAR_W: f64 = 3.0;
	const GAP: f64 = 1.0;
	let mid = height / 2.0;
	let bars = (width / (BAR_W + GAP)) as usize;
	for i in 0..bars {
		let x = i as f64 * (BAR_W + GAP);
		let t = (x + BAR_W / 2.0) / width * track_span;
		let color = region_color_at(regions, t).unwrap_or("#2a2a2a");
		let h = waveform_amplitude(i) * (height - 8.0);
		// Played bars at full strength, the rest dimmed
		ctx.set_global_alpha(if t <= progress { 1.0 } else { 0.45 });
		ctx.set_fill_style_str(color);
		ctx.fill_rect(x, mid - h / 2.0, BAR_W, h);
	}
	ctx.set_global_alpha(1.0);

	let px = (progress / track_span).clamp(0.0, 1.0) * width;
	ctx.set_stroke_style_str("#f5f5f5");
	ctx.set_line_width(1.5);
	ctx.begin_path();
	ctx.move_to(px, 0.0);
	ctx.line_to(px, height);
	ctx.stroke();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::seed;

	#[test]
	fn linked_events_resolve_to_their_region() {
		let data = seed::research_data();
		let event = data
			.timeline_events
			.iter()
			.find(|e| e.title == "Megadeth Thrash Cover")
			.unwrap();
		let idx = linked_region_index(event, &data.wave_regions).unwrap();
		assert_eq!(data.wave_regions[idx].label, "Solo");
		assert_eq!(data.wave_regions[idx].start, 90.0);
	}

	#[test]
	fn unlinked_events_resolve_to_nothing() {
		let data = seed::research_data();
		let event = data
			.timeline_events
			.iter()
			.find(|e| e.linked_region.is_none())
			.unwrap();
		assert_eq!(linked_region_index(event, &data.wave_regions), None);
	}

	#[test]
	fn dangling_links_resolve_to_nothing() {
		let data = seed::research_data();
		let event = TimelineEvent {
			time: "1970".into(),
			title: "x".into(),
			description: "y".into(),
			linked_region: Some("Bridge".into()),
		};
		assert_eq!(linked_region_index(&event, &data.wave_regions), None);
	}

	#[test]
	fn waveform_colors_follow_the_region_under_the_playhead() {
		let data = seed::research_data();
		assert_eq!(region_color_at(&data.wave_regions, 5.0), Some("#ff4500"));
		assert_eq!(region_color_at(&data.wave_regions, 100.0), Some("#3b82f6"));
		// A shared boundary belongs to the later region.
		assert_eq!(region_color_at(&data.wave_regions, 38.0), Some("#8b5cf6"));
		assert_eq!(region_color_at(&data.wave_regions, 500.0), None);
	}

	#[test]
	fn waveform_bars_stay_in_band_and_vary() {
		for i in 0..400 {
			let a = waveform_amplitude(i);
			assert!((0.1..=1.0).contains(&a), "bar {i} out of band: {a}");
		}
		assert_ne!(waveform_amplitude(3), waveform_amplitude(17));
	}

	#[test]
	fn clock_formats_minutes_and_seconds() {
		assert_eq!(format_clock(0.0), "0:00");
		assert_eq!(format_clock(9.4), "0:09");
		assert_eq!(format_clock(90.0), "1:30");
		assert_eq!(format_clock(168.0), "2:48");
	}

	#[test]
	fn clock_tolerates_unloaded_durations() {
		assert_eq!(format_clock(f64::NAN), "0:00");
		assert_eq!(format_clock(f64::INFINITY), "0:00");
		assert_eq!(format_clock(-1.0), "0:00");
	}
}
