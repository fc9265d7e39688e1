mod canvas;
mod component;
mod render;
mod sidebar;
mod state;

pub use component::InfluenceGraph;
