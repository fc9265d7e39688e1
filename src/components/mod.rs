//! Visualization components, one module each.

pub mod influence_graph;
pub mod record_player;
pub mod reflection;
pub mod stats_chart;
pub mod timeline;
