//! Domain types for the research dataset.
//!
//! The whole aggregate is produced once by the data source and treated as
//! read-only for the rest of the session; components only hold transient
//! selection state keyed by id or index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root aggregate backing the whole page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchData {
	/// URL of the audio track.
	pub audio_url: String,
	/// Nodes of the influence graph.
	pub nodes: Vec<GraphNode>,
	/// Weighted links between graph nodes.
	pub links: Vec<GraphLink>,
	/// Annotated regions over the audio track.
	pub wave_regions: Vec<WaveRegion>,
	/// Historical events, displayed in source order.
	pub timeline_events: Vec<TimelineEvent>,
	/// Quarterly gaming/streaming statistics.
	pub game_stats: Vec<GameStat>,
}

/// A node in the influence graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique identifier.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Cluster/color group, 1-based.
	pub group: u32,
	/// Free text shown in the detail panel on selection.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
}

/// A weighted directed link between two graph nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Positive weight controlling visual thickness.
	pub strength: f64,
}

/// A labeled time interval over the audio track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveRegion {
	/// Start of the interval in seconds.
	pub start: f64,
	/// End of the interval in seconds, strictly after `start`.
	pub end: f64,
	/// Annotation label, unique enough to be referenced by timeline events.
	pub label: String,
	/// CSS color for the region swatch.
	pub color: String,
	/// Optional analysis notes shown on selection.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// A historical event on the timeline.
///
/// `time` is an opaque ordering key (bare year or ISO date); events render in
/// source array order and the string is never parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
	/// Display time/date string.
	pub time: String,
	/// Event title.
	pub title: String,
	/// Event description.
	pub description: String,
	/// Label of the wave region this event jumps playback to, if any.
	///
	/// Declared in the data rather than inferred from the title text, so the
	/// timeline-to-audio bridge survives label edits.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub linked_region: Option<String>,
}

/// Calendar quarter, ordered `Q1 < Q2 < Q3 < Q4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
	/// January through March.
	Q1,
	/// April through June.
	Q2,
	/// July through September.
	Q3,
	/// October through December.
	Q4,
}

impl fmt::Display for Quarter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Quarter::Q1 => write!(f, "Q1"),
			Quarter::Q2 => write!(f, "Q2"),
			Quarter::Q3 => write!(f, "Q3"),
			Quarter::Q4 => write!(f, "Q4"),
		}
	}
}

/// One play-count observation for a source (game or streaming platform).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStat {
	/// Observation year.
	pub year: i32,
	/// Calendar quarter, absent for whole-year observations.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quarter: Option<Quarter>,
	/// Series name, e.g. a game title or the streaming platform.
	pub game: String,
	/// Plays observed in the period.
	pub play_count: u64,
}

impl ResearchData {
	/// Check the aggregate's structural invariants.
	///
	/// Every link endpoint must resolve to a node id, every region must span a
	/// non-empty forward interval, and every `linked_region` must name an
	/// existing region label.
	pub fn validate(&self) -> std::result::Result<(), String> {
		for link in &self.links {
			if !self.nodes.iter().any(|n| n.id == link.source) {
				return Err(format!("link source {:?} is not a node", link.source));
			}
			if !self.nodes.iter().any(|n| n.id == link.target) {
				return Err(format!("link target {:?} is not a node", link.target));
			}
		}
		for region in &self.wave_regions {
			if !(region.start >= 0.0 && region.start < region.end) {
				return Err(format!(
					"region {:?} has invalid interval {}..{}",
					region.label, region.start, region.end
				));
			}
		}
		for event in &self.timeline_events {
			if let Some(label) = &event.linked_region {
				if !self.wave_regions.iter().any(|r| &r.label == label) {
					return Err(format!(
						"event {:?} links to unknown region {:?}",
						event.title, label
					));
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn minimal_data() -> ResearchData {
		ResearchData {
			audio_url: "/audio/track.mp3".into(),
			nodes: vec![
				GraphNode {
					id: "a".into(),
					label: "A".into(),
					group: 1,
					details: None,
				},
				GraphNode {
					id: "b".into(),
					label: "B".into(),
					group: 2,
					details: Some("about b".into()),
				},
			],
			links: vec![GraphLink {
				source: "a".into(),
				target: "b".into(),
				strength: 0.8,
			}],
			wave_regions: vec![WaveRegion {
				start: 0.0,
				end: 12.0,
				label: "Intro".into(),
				color: "#ff4500".into(),
				description: None,
			}],
			timeline_events: vec![TimelineEvent {
				time: "1970".into(),
				title: "Release".into(),
				description: "Out in the world.".into(),
				linked_region: Some("Intro".into()),
			}],
			game_stats: vec![],
		}
	}

	#[test]
	fn valid_aggregate_passes() {
		assert_eq!(minimal_data().validate(), Ok(()));
	}

	#[test]
	fn dangling_link_endpoint_fails() {
		let mut data = minimal_data();
		data.links.push(GraphLink {
			source: "a".into(),
			target: "missing".into(),
			strength: 1.0,
		});
		assert!(data.validate().is_err());
	}

	#[test]
	fn inverted_region_fails() {
		let mut data = minimal_data();
		data.wave_regions[0].end = data.wave_regions[0].start;
		assert!(data.validate().is_err());
	}

	#[test]
	fn dangling_linked_region_fails() {
		let mut data = minimal_data();
		data.timeline_events[0].linked_region = Some("Outro".into());
		assert!(data.validate().is_err());
	}

	#[test]
	fn deserializes_camel_case_document() {
		let doc = r##"{
			"audioUrl": "/audio/track.mp3",
			"nodes": [{"id": "a", "label": "A", "group": 1}],
			"links": [],
			"waveRegions": [
				{"start": 0, "end": 5.5, "label": "Intro", "color": "#ff4500"}
			],
			"timelineEvents": [
				{"time": "1970-09-18", "title": "Release", "description": "Out.",
				 "linkedRegion": "Intro"}
			],
			"gameStats": [
				{"year": 2024, "quarter": "Q1", "game": "Spotify", "playCount": 8200000}
			]
		}"##;
		let data: ResearchData = serde_json::from_str(doc).unwrap();
		assert_eq!(data.nodes.len(), 1);
		assert_eq!(data.wave_regions[0].end, 5.5);
		assert_eq!(data.timeline_events[0].linked_region.as_deref(), Some("Intro"));
		assert_eq!(data.game_stats[0].quarter, Some(Quarter::Q1));
		assert_eq!(data.game_stats[0].play_count, 8_200_000);
		assert_eq!(data.validate(), Ok(()));
	}

	#[test]
	fn quarters_order_by_calendar() {
		assert!(Quarter::Q1 < Quarter::Q2);
		assert!(Quarter::Q3 < Quarter::Q4);
		assert_eq!(Quarter::Q2.to_string(), "Q2");
	}
}
