use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::data::{GraphLink, GraphNode};

/// Palette indexed by `GraphNode::group` (1-based): orange, pink, purple,
/// blue, red.
const GROUP_COLORS: &[&str] = &["#ff4500", "#ec4899", "#8b5cf6", "#3b82f6", "#dc2626"];

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 14.0;

/// Color assigned to a node group.
pub fn group_color(group: u32) -> &'static str {
	GROUP_COLORS[group.saturating_sub(1) as usize % GROUP_COLORS.len()]
}

#[derive(Clone, Debug, Default)]
pub struct NodeDatum {
	pub id: String,
	pub label: String,
	pub color: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// An edge between two simulation nodes with its visual weight.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub strength: f64,
}

/// Simulation plus view state behind the influence diagram canvas.
pub struct LayoutState {
	pub graph: ForceGraph<NodeDatum, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<Edge>,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

impl LayoutState {
	pub fn new(nodes: &[GraphNode], links: &[GraphLink], width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 180.0,
			force_spring: 0.04,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 120.0 * angle.cos()) as f32,
				(height / 2.0 + 120.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeDatum {
					id: node.id.clone(),
					label: node.label.clone(),
					color: group_color(node.group).into(),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in links {
			if let (Some(&source), Some(&target)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(source, target, EdgeData::default());
				edges.push(Edge {
					source,
					target,
					strength: link.strength,
				});
			}
		}

		Self {
			graph,
			edges,
			id_to_idx,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node_count(&self) -> usize {
		self.id_to_idx.len()
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	/// Id of the node at `idx`, if it exists.
	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	pub fn set_selected(&mut self, id: Option<&str>) {
		self.selected = id.and_then(|id| self.index_of(id));
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Pin a node at a dragged position.
	pub fn pin_node(&mut self, idx: DefaultNodeIdx, x: f32, y: f32) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
			}
		});
	}

	/// Hand a previously pinned node back to the simulation.
	pub fn release_node(&mut self, idx: DefaultNodeIdx) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = false;
			}
		});
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::seed;

	#[test]
	fn layout_keeps_every_node_and_resolvable_edge() {
		let data = seed::research_data();
		let layout = LayoutState::new(&data.nodes, &data.links, 1200.0, 800.0);
		assert_eq!(layout.node_count(), data.nodes.len());
		assert_eq!(layout.edges().len(), data.links.len());
		for node in &data.nodes {
			assert!(layout.index_of(&node.id).is_some());
		}
	}

	#[test]
	fn dangling_links_are_dropped_not_panicked() {
		let data = seed::research_data();
		let mut links = data.links.clone();
		links.push(GraphLink {
			source: "Paranoid".into(),
			target: "missing".into(),
			strength: 1.0,
		});
		let layout = LayoutState::new(&data.nodes, &links, 800.0, 600.0);
		assert_eq!(layout.edges().len(), data.links.len());
	}

	#[test]
	fn node_ids_round_trip_through_indices() {
		let data = seed::research_data();
		let layout = LayoutState::new(&data.nodes, &data.links, 800.0, 600.0);
		let idx = layout.index_of("Tony Iommi").unwrap();
		assert_eq!(layout.node_id(idx).as_deref(), Some("Tony Iommi"));
	}

	#[test]
	fn selection_tracks_known_ids_only() {
		let data = seed::research_data();
		let mut layout = LayoutState::new(&data.nodes, &data.links, 800.0, 600.0);
		layout.set_selected(Some("Paranoid"));
		assert!(layout.selected.is_some());
		layout.set_selected(Some("nope"));
		assert!(layout.selected.is_none());
	}

	#[test]
	fn hover_collects_direct_neighbors() {
		let data = seed::research_data();
		let mut layout = LayoutState::new(&data.nodes, &data.links, 800.0, 600.0);
		let idx = layout.index_of("Black Sabbath").unwrap();
		layout.set_hover(Some(idx));
		// Paranoid plus the four influence nodes link to Black Sabbath.
		assert_eq!(layout.hover.neighbors.len(), 5);
		assert!(layout.is_highlighted(layout.index_of("Paranoid").unwrap()));
	}

	#[test]
	fn group_colors_cycle_past_the_palette() {
		assert_eq!(group_color(1), "#ff4500");
		assert_eq!(group_color(5), "#dc2626");
		assert_eq!(group_color(6), group_color(1));
	}

	#[test]
	fn ticking_advances_without_pinned_nodes_drifting() {
		let data = seed::research_data();
		let mut layout = LayoutState::new(&data.nodes, &data.links, 800.0, 600.0);
		let idx = layout.index_of("Paranoid").unwrap();
		layout.pin_node(idx, 100.0, 100.0);
		for _ in 0..30 {
			layout.tick(0.016);
		}
		let mut pos = None;
		layout.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x(), node.y()));
			}
		});
		assert_eq!(pos, Some((100.0, 100.0)));
		layout.release_node(idx);
	}
}
