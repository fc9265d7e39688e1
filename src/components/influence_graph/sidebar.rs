use std::collections::BTreeMap;

use leptos::prelude::*;

use super::state::group_color;
use crate::data::GraphNode;

/// Display name of a node group.
pub fn group_name(group: u32) -> String {
	match group {
		1 => "Core Band".into(),
		2 => "Historical Context".into(),
		3 => "Musical Influences".into(),
		4 => "Cultural Legacy".into(),
		5 => "Modern Impact".into(),
		other => format!("Group {other}"),
	}
}

/// Sidebar library: nodes grouped into named collapsible sections, with a
/// detail panel under the selected node.
#[component]
pub fn NodeLibrary(
	nodes: Vec<GraphNode>,
	selected: RwSignal<Option<String>>,
	expanded: RwSignal<std::collections::BTreeSet<u32>>,
	#[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
	// Grouping derives purely from `node.group`, in ascending group order.
	let mut groups: BTreeMap<u32, Vec<GraphNode>> = BTreeMap::new();
	for node in nodes {
		groups.entry(node.group).or_default().push(node);
	}

	view! {
		<aside class="card node-library">
			<h2 class="card-title">"Node Library"</h2>
			<p class="card-subtitle">"Explore influence groups and connections"</p>
			{groups
				.into_iter()
				.map(|(group, members)| {
					view! {
						<GroupSection group members selected expanded on_select />
					}
				})
				.collect_view()}
		</aside>
	}
}

#[component]
fn GroupSection(
	group: u32,
	members: Vec<GraphNode>,
	selected: RwSignal<Option<String>>,
	expanded: RwSignal<std::collections::BTreeSet<u32>>,
	on_select: Callback<String>,
) -> impl IntoView {
	let count = members.len();
	let is_open = Memo::new(move |_| expanded.with(|open| open.contains(&group)));
	let toggle = move |_| {
		expanded.update(|open| {
			if !open.remove(&group) {
				open.insert(group);
			}
		});
	};
	let members = StoredValue::new(members);

	view! {
		<section class="library-group">
			<button class="group-header" on:click=toggle>
				<span class="group-swatch" style:background-color=group_color(group)></span>
				<span class="group-name">{group_name(group)}</span>
				<span class="group-count">"(" {count} ")"</span>
				<span class="group-toggle">{move || if is_open.get() { "−" } else { "+" }}</span>
			</button>
			{move || {
				is_open
					.get()
					.then(|| {
						members
							.with_value(|members| {
								members
									.iter()
									.cloned()
									.map(|node| view! { <NodeRow node selected on_select /> })
									.collect_view()
							})
					})
			}}
		</section>
	}
}

#[component]
fn NodeRow(
	node: GraphNode,
	selected: RwSignal<Option<String>>,
	on_select: Callback<String>,
) -> impl IntoView {
	let id = node.id.clone();
	let id_for_memo = node.id.clone();
	let label = node.label.clone();
	let is_selected =
		Memo::new(move |_| selected.with(|sel| sel.as_deref() == Some(id_for_memo.as_str())));
	let details = node
		.details
		.clone()
		.unwrap_or_else(|| "No additional details available.".into());

	view! {
		<div class="library-node">
			<button
				class="node-row"
				class:selected=move || is_selected.get()
				on:click=move |_| on_select.run(id.clone())
			>
				<span class="node-label">{label}</span>
				<span class="node-toggle">{move || if is_selected.get() { "−" } else { "+" }}</span>
			</button>
			{move || {
				is_selected
					.get()
					.then(|| {
						view! {
							<div class="node-details">
								<h4>{node.label.clone()}</h4>
								<p>{details.clone()}</p>
							</div>
						}
					})
			}}
		</div>
	}
}
