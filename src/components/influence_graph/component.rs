use std::collections::{BTreeSet, HashMap};

use leptos::prelude::*;

use super::canvas::GraphCanvas;
use super::sidebar::NodeLibrary;
use crate::data::{GraphLink, GraphNode};

/// Influence network: force-directed diagram plus a grouped sidebar library.
///
/// Selection is shared between the two halves: clicking a node in either
/// place selects it and expands its library group, clicking the selected node
/// again closes its detail panel.
#[component]
pub fn InfluenceGraph(nodes: Vec<GraphNode>, links: Vec<GraphLink>) -> impl IntoView {
	let selected = RwSignal::new(None::<String>);
	let expanded = RwSignal::new(BTreeSet::<u32>::new());

	let group_of: HashMap<String, u32> =
		nodes.iter().map(|n| (n.id.clone(), n.group)).collect();
	let on_select = Callback::new(move |id: String| {
		if selected.with_untracked(|sel| sel.as_deref() == Some(id.as_str())) {
			selected.set(None);
			return;
		}
		if let Some(&group) = group_of.get(&id) {
			expanded.update(|open| {
				open.insert(group);
			});
		}
		selected.set(Some(id));
	});

	view! {
		<div class="graph-layout">
			<div class="card graph-card">
				<h2 class="card-title">"Paranoid Influence Network"</h2>
				<p class="card-subtitle">
					"Click nodes for information. Drag to reposition, scroll to zoom, drag the background to pan."
				</p>
				<div class="graph-frame">
					<GraphCanvas nodes=nodes.clone() links=links selected=selected on_select=on_select />
				</div>
			</div>
			<NodeLibrary nodes=nodes selected=selected expanded=expanded on_select=on_select />
		</div>
	}
}
