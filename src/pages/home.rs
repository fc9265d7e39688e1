use leptos::prelude::*;

use crate::components::influence_graph::InfluenceGraph;
use crate::components::record_player::RecordPlayer;
use crate::components::reflection::ReflectionPanel;
use crate::components::stats_chart::GameStatsChart;
use crate::components::timeline::Timeline;
use crate::data::{DataSource, LoadState, use_research_data};
use crate::events::TimelineBus;

/// Main page: loads the research aggregate and composes every visualization.
///
/// Data failures are terminal: no component renders without data. The
/// timeline bus is provided here so the timeline and the record player can
/// talk without referencing each other.
#[component]
pub fn Home() -> impl IntoView {
	provide_context(TimelineBus::new());
	let state = use_research_data(DataSource::Seed);

	view! {
		<div class="page">
			{move || match state.get() {
				LoadState::Loading => {
					view! {
						<div class="page-splash">
							<p>"Loading Paranoid research data..."</p>
						</div>
					}
						.into_any()
				}
				LoadState::Failed(message) => {
					view! {
						<div class="page-splash page-error">
							<p>"Error: " {message}</p>
							<p class="splash-hint">"Reload the page to try again."</p>
						</div>
					}
						.into_any()
				}
				LoadState::Ready(data) => {
					view! {
						<header class="page-header">
							<h1>"PARANOID VISUALIZER"</h1>
							<p>
								"Exploring the cultural impact and musical influences of Black Sabbath's \"Paranoid\""
							</p>
						</header>
						<main class="page-main">
							<section>
								<InfluenceGraph nodes=data.nodes.clone() links=data.links.clone() />
							</section>
							<section>
								<Timeline events=data.timeline_events.clone() />
							</section>
							<section class="page-grid">
								<RecordPlayer
									audio_url=data.audio_url.clone()
									regions=data.wave_regions.clone()
								/>
								<GameStatsChart stats=data.game_stats.clone() />
							</section>
							<section>
								<ReflectionPanel />
							</section>
						</main>
						<footer class="page-footer">
							<p>"Built with Leptos, force_graph, and web-sys"</p>
						</footer>
					}
						.into_any()
				}
			}}
		</div>
	}
}
