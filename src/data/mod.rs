//! Research dataset: domain types, seed, providers, loading hook, stats pivot.

pub mod hook;
pub mod seed;
pub mod source;
pub mod stats;
pub mod types;

pub use hook::{LoadState, use_research_data};
pub use source::DataSource;
pub use types::{GameStat, GraphLink, GraphNode, Quarter, ResearchData, TimelineEvent, WaveRegion};
