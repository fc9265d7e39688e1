//! Horizontal timeline of historical events.

use leptos::prelude::*;

use crate::data::TimelineEvent;
use crate::events::TimelineBus;

/// Timeline markers in source order; no date parsing.
///
/// Clicking a marker selects exactly that event, shows its description, and
/// publishes it on the [`TimelineBus`] for other components to observe.
#[component]
pub fn Timeline(events: Vec<TimelineEvent>) -> impl IntoView {
	let bus = expect_context::<TimelineBus>();
	let selected = RwSignal::new(None::<usize>);
	let events = StoredValue::new(events);

	let markers = events.with_value(|events| {
		events
			.iter()
			.enumerate()
			.map(|(i, event)| {
				let bus = bus.clone();
				let payload = event.clone();
				let on_click = move |_| {
					selected.set(Some(i));
					bus.publish(&payload);
				};
				view! {
					<button class="timeline-marker" on:click=on_click>
						<span
							class="marker-dot"
							class:active=move || selected.get() == Some(i)
						></span>
						<span class="marker-time">{event.time.clone()}</span>
						<span class="marker-title">{event.title.clone()}</span>
					</button>
				}
			})
			.collect_view()
	});

	view! {
		<div class="card timeline-card">
			<h2 class="card-title">"Historical Timeline"</h2>
			<div class="timeline-track">{markers}</div>
			{move || {
				selected
					.get()
					.and_then(|i| events.with_value(|events| events.get(i).cloned()))
					.map(|event| {
						view! {
							<div class="timeline-detail">
								<h3>{event.title}</h3>
								<p>{event.description}</p>
							</div>
						}
					})
			}}
		</div>
	}
}
