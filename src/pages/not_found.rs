use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page-splash">
			<h1>"404"</h1>
			<p>"This page does not exist."</p>
			<a href="/">"Back to the visualizer"</a>
		</div>
	}
}
