//! Static reflection prompts behind one expand/collapse toggle.

use leptos::prelude::*;

const PROMPTS: &[(&str, &str)] = &[
	(
		"What does it mean for art to emerge from industrial decay?",
		"Consider how Black Sabbath transformed Birmingham's post-war industrial \
		 decline into heavy metal's foundation. What does this teach us about \
		 creativity arising from adversity?",
	),
	(
		"How does music reflect the collective unconscious of its time?",
		"Paranoid captured 1970's Cold War paranoia, Vietnam anxiety, and social \
		 unrest. How do we recognize when art becomes a mirror of societal fears?",
	),
	(
		"What is the relationship between authenticity and influence?",
		"Written hastily in 20 minutes to fill album space, Paranoid became more \
		 influential than carefully crafted compositions. What does this reveal \
		 about artistic authenticity?",
	),
	(
		"How do working-class voices shape cultural narratives?",
		"Four Birmingham factory workers' sons created a genre that spoke to \
		 millions. What responsibility do artists have when their personal \
		 expression becomes universal language?",
	),
	(
		"What endures when technology transforms how we experience art?",
		"From vinyl to streaming to gaming soundtracks, Paranoid has found new \
		 contexts for 50+ years. What qualities make art resilient across \
		 technological change?",
	),
];

/// Contemplation prompts on the album's cultural impact. Purely
/// presentational.
#[component]
pub fn ReflectionPanel() -> impl IntoView {
	let expanded = RwSignal::new(false);

	view! {
		<div class="card reflection-card">
			<div class="reflection-header">
				<h2 class="card-title">"Philosophical Reflections"</h2>
				<button class="reflection-toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
					{move || if expanded.get() { "Collapse" } else { "Expand" }}
				</button>
			</div>
			<p class="card-subtitle">"Contemplations on art, authenticity, and cultural impact"</p>
			{move || {
				expanded
					.get()
					.then(|| {
						view! {
							<div class="reflection-body">
								<blockquote>
									"\"The universe is change; our life is what our thoughts make it.\" — Marcus Aurelius"
								</blockquote>
								{PROMPTS
									.iter()
									.enumerate()
									.map(|(i, (question, context))| {
										view! {
											<div class="reflection-prompt">
												<h4>{format!("Reflection {}", i + 1)}</h4>
												<p class="prompt-question">{*question}</p>
												<p class="prompt-context">{*context}</p>
											</div>
										}
									})
									.collect_view()}
							</div>
						}
					})
			}}
		</div>
	}
}
