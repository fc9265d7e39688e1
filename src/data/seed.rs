//! Compiled-in research dataset about Black Sabbath's "Paranoid".
//!
//! This is the static provider's document: the same shape the remote store
//! serves, baked into the bundle.

use super::types::{
	GameStat, GraphLink, GraphNode, Quarter, ResearchData, TimelineEvent, WaveRegion,
};

fn node(id: &str, label: &str, group: u32, details: &str) -> GraphNode {
	GraphNode {
		id: id.into(),
		label: label.into(),
		group,
		details: Some(details.into()),
	}
}

fn link(source: &str, target: &str, strength: f64) -> GraphLink {
	GraphLink {
		source: source.into(),
		target: target.into(),
		strength,
	}
}

fn region(start: f64, end: f64, label: &str, color: &str, description: &str) -> WaveRegion {
	WaveRegion {
		start,
		end,
		label: label.into(),
		color: color.into(),
		description: Some(description.into()),
	}
}

fn event(time: &str, title: &str, description: &str) -> TimelineEvent {
	TimelineEvent {
		time: time.into(),
		title: title.into(),
		description: description.into(),
		linked_region: None,
	}
}

fn linked_event(time: &str, title: &str, description: &str, region: &str) -> TimelineEvent {
	TimelineEvent {
		linked_region: Some(region.into()),
		..event(time, title, description)
	}
}

fn stat(year: i32, quarter: Quarter, game: &str, play_count: u64) -> GameStat {
	GameStat {
		year,
		quarter: Some(quarter),
		game: game.into(),
		play_count,
	}
}

/// Build the full seed aggregate.
pub fn research_data() -> ResearchData {
	ResearchData {
		audio_url: "/audio/paranoid.mp3".into(),
		nodes: nodes(),
		links: links(),
		wave_regions: wave_regions(),
		timeline_events: timeline_events(),
		game_stats: game_stats(),
	}
}

fn nodes() -> Vec<GraphNode> {
	vec![
		// Core album and band
		node(
			"Paranoid",
			"Paranoid (1970)",
			1,
			"Black Sabbath's breakout hit, combining doom-laden riffs with lyrics on \
			 paranoia and depression. Released Sept 18, 1970 (UK), Jan 7, 1971 (US). \
			 Reached #4 UK, #61 US.",
		),
		node(
			"Black Sabbath",
			"Black Sabbath",
			1,
			"Birmingham working-class band formed in 1968, originally named Earth, \
			 pioneered heavy metal with darker themes and down-tuned guitars.",
		),
		node(
			"Ozzy Osbourne",
			"Ozzy Osbourne",
			1,
			"Lead vocalist whose paranoia-laden lyrics and distinctive voice became \
			 metal's first iconic frontman persona.",
		),
		node(
			"Tony Iommi",
			"Tony Iommi",
			1,
			"Guitarist who lost fingertips in an industrial accident, developed the \
			 heavy, down-tuned style that defined metal guitar sound.",
		),
		node(
			"Geezer Butler",
			"Geezer Butler",
			1,
			"Bassist and primary lyricist, wrote Paranoid's lyrics about mental health \
			 struggles and societal alienation.",
		),
		node(
			"Bill Ward",
			"Bill Ward",
			1,
			"Drummer whose jazz-influenced style and powerful playing anchored \
			 Sabbath's revolutionary rhythm section.",
		),
		// Historical context
		node(
			"Industrial Birmingham",
			"Industrial Birmingham Origins",
			2,
			"Birmingham's factories shaped Sabbath's heavy, industrial-influenced \
			 sound. Tony Iommi's finger injury and working-class struggles influenced \
			 the band's gritty aesthetic.",
		),
		node(
			"Vietnam War Tensions",
			"Vietnam War & Cold War Tensions",
			2,
			"Written amid Vietnam War and Cold War anxieties, the album was originally \
			 titled 'War Pigs'. The label censored the title fearing anti-war \
			 controversy.",
		),
		node(
			"Cold War Paranoia",
			"Cold War Paranoia",
			2,
			"Nuclear anxiety and social surveillance fears of the early 1970s \
			 permeated the album's psychological themes.",
		),
		node(
			"Occult Rock",
			"Occult Rock Influences",
			2,
			"Influenced by late '60s occult bands like Coven (1969) and Iron Butterfly \
			 (1968), Sabbath integrated dark imagery and tritone intervals.",
		),
		node(
			"Blues Roots",
			"Blues and Rock Influences",
			2,
			"Originated as a blues-influenced band inspired by Cream, Jimi Hendrix, \
			 Led Zeppelin, and John Mayall's Bluesbreakers, evolving their heavier \
			 sound from this foundation.",
		),
		// Musical influences
		node(
			"Blues Rock",
			"Blues Rock Foundation",
			3,
			"Traditional blues progressions and pentatonic scales formed the \
			 structural foundation beneath Sabbath's heavier approach.",
		),
		node(
			"Psychedelic Rock",
			"Psychedelic Movement",
			3,
			"Late-60s psychedelia's experimental approach and darker themes influenced \
			 Sabbath's sonic exploration.",
		),
		node(
			"Cream",
			"Cream",
			3,
			"Power trio format and blues-rock intensity directly influenced Black \
			 Sabbath's early sound and arrangement approach.",
		),
		node(
			"Led Zeppelin",
			"Led Zeppelin",
			3,
			"Contemporary heavy blues rock that shared Birmingham origins and \
			 influenced Sabbath's dynamic range and mystical themes.",
		),
		// Cultural legacy
		node(
			"Heavy Metal Genesis",
			"Heavy Metal Origins",
			4,
			"Paranoid established the sonic template for heavy metal: down-tuned \
			 guitars, occult imagery, and working-class rebellion.",
		),
		node(
			"NWOBHM",
			"New Wave of British Heavy Metal",
			4,
			"1970s-80s British metal movement that drew directly from Sabbath's \
			 blueprint, spreading metal globally.",
		),
		node(
			"Doom Metal",
			"Creation of Doom Metal",
			3,
			"Established foundational elements of doom metal, influencing bands like \
			 Saint Vitus and Pentagram through slow tempos and thick guitar tones.",
		),
		node(
			"Thrash Metal",
			"Thrash & Speed Metal",
			3,
			"Fast-paced riffs and dark themes paved the way for thrash metal, \
			 influencing Megadeth and Metallica.",
		),
		node(
			"Gaming Culture",
			"Gaming Soundtrack",
			5,
			"Paranoid found new life in video game soundtracks, particularly tactical \
			 games where its intensity enhances gameplay.",
		),
		node(
			"Helldivers 2",
			"Contemporary Media Influence: Helldivers 2",
			3,
			"Modern association with video game culture, featured prominently in \
			 Helldivers 2. Boris Harizanov produced an epic remix connecting the song \
			 to current gaming culture.",
		),
		node(
			"Covers",
			"Notable Covers",
			3,
			"Covered extensively across genres: Megadeth (1994), Weezer (2019), \
			 Dillinger Escape Plan, and recent holiday metal interpretations, showing \
			 ongoing cross-genre appeal.",
		),
	]
}

fn links() -> Vec<GraphLink> {
	vec![
		// Band to song
		link("Black Sabbath", "Paranoid", 1.0),
		link("Ozzy Osbourne", "Paranoid", 0.9),
		link("Tony Iommi", "Paranoid", 0.9),
		link("Geezer Butler", "Paranoid", 0.8),
		link("Bill Ward", "Paranoid", 0.8),
		// Historical context to song
		link("Industrial Birmingham", "Paranoid", 2.0),
		link("Vietnam War Tensions", "Paranoid", 3.0),
		link("Cold War Paranoia", "Paranoid", 0.8),
		link("Occult Rock", "Paranoid", 2.0),
		link("Blues Roots", "Paranoid", 2.0),
		// Musical influences to band
		link("Blues Rock", "Black Sabbath", 0.8),
		link("Psychedelic Rock", "Black Sabbath", 0.6),
		link("Cream", "Black Sabbath", 0.7),
		link("Led Zeppelin", "Black Sabbath", 0.6),
		// Song to legacy
		link("Paranoid", "Heavy Metal Genesis", 1.0),
		link("Heavy Metal Genesis", "NWOBHM", 0.9),
		link("Heavy Metal Genesis", "Doom Metal", 3.0),
		link("Paranoid", "Gaming Culture", 0.6),
		link("Paranoid", "Thrash Metal", 3.0),
		link("Paranoid", "Helldivers 2", 1.0),
		link("Paranoid", "Covers", 2.0),
		// Cross-connections
		link("Tony Iommi", "Heavy Metal Genesis", 0.9),
		link("Industrial Birmingham", "Heavy Metal Genesis", 0.7),
	]
}

fn wave_regions() -> Vec<WaveRegion> {
	vec![
		region(
			0.0,
			12.0,
			"Intro",
			"#ff4500",
			"Modal E5-D5-G5 loop, avoiding traditional cadences, embodying mental \
			 entrapment. Rhythm: ~163 BPM with Bill Ward's swing; Iommi's strict \
			 down-picking. Timbre: dry mix, Gibson SG + Laney amps, mid-range heavy \
			 guitar; Geezer's P-bass doubles the riff lower.",
		),
		region(
			12.0,
			38.0,
			"Verse 1",
			"#ec4899",
			"Ozzy's vocals enter. Melody: E-minor pentatonic, monotone delivery, sits \
			 within the riff. Lyrics describe paranoiac dread. Vocals: double-tracked, \
			 slight phasing, narrow stereo field.",
		),
		region(
			38.0,
			64.0,
			"Chorus",
			"#8b5cf6",
			"Iconic 'Finished with my woman...' chorus. The E5-D5-G5 riff continues \
			 its cyclical pattern, reinforcing lyrical themes.",
		),
		region(
			64.0,
			90.0,
			"Verse 2",
			"#ec4899",
			"Continuing vocal style and lyrical themes. Rhythmic drive maintained by \
			 Iommi's down-picking and Ward's drumming.",
		),
		region(
			90.0,
			116.0,
			"Solo",
			"#3b82f6",
			"Tony Iommi's guitar solo. Melody: confined to two pentatonic boxes. \
			 Timbre: solo double-tracked with ring-modulated panning for an unsettling \
			 shimmer (ring-mod shimmer at 2-4 kHz).",
		),
		region(
			116.0,
			142.0,
			"Verse 3",
			"#ec4899",
			"Return to verse structure and vocal melody style. The lyrical narrative \
			 of confusion and despair progresses.",
		),
		region(
			142.0,
			168.0,
			"Chorus/Outro",
			"#8b5cf6",
			"Final chorus with crash-ride cymbal wash, drums open up. Song fades on \
			 the main riff, a last-gasp surge.",
		),
	]
}

fn timeline_events() -> Vec<TimelineEvent> {
	vec![
		event(
			"1966-02-01",
			"Tony Iommi's Factory Accident",
			"While working at a Birmingham sheet-metal factory, Tony Iommi lost the \
			 tips of two fingers on his right hand. This forced him to down-tune his \
			 guitar and develop a lighter playing style, directly shaping the dark, \
			 heavy riffing that became Black Sabbath's signature sound.",
		),
		event(
			"1967-09-01",
			"Formation of Earth (later Black Sabbath)",
			"Ozzy Osbourne, Tony Iommi, Geezer Butler, and Bill Ward coalesced as \
			 Earth, playing blues-driven sets in working-class pubs. Their early \
			 doo-wop and R&B influences soon gave way to darker, more experimental \
			 jams that presaged the doom metal aesthetic.",
		),
		event(
			"1969-01-15",
			"Name Change to Black Sabbath",
			"Inspired by a 1963 horror film marquee, the band renamed themselves \
			 Black Sabbath to reflect their growing fascination with occult imagery. \
			 The rebranding coincided with a shift toward heavier, down-tuned guitar \
			 textures and minor-mode song structures.",
		),
		event(
			"1970-04-15",
			"Vietnam War Protests Peak",
			"Massive antiwar demonstrations swept college campuses and cities \
			 worldwide as opposition to the Vietnam War reached its crescendo, \
			 framing Paranoid's themes of distrust and disillusionment.",
		),
		event(
			"1970-05-04",
			"Kent State Shootings",
			"National Guard troops fired on unarmed student protesters at Kent State \
			 University, killing four and igniting nationwide outrage against the \
			 Vietnam War and authority figures.",
		),
		linked_event(
			"1970-06-16",
			"Paranoid Recorded in One Take",
			"Under pressure from Vertigo Records for a radio single, Black Sabbath \
			 wrote and recorded 'Paranoid' in a single frantic session at Regent \
			 Sound Studios. The raw, live-in-studio approach preserved the track's \
			 palpable urgency and unvarnished energy.",
			"Intro",
		),
		event(
			"1970-08-01",
			"Album Title Censorship",
			"Originally planned as 'War Pigs', a direct anti-Vietnam title, the album \
			 was renamed 'Paranoid' after label executives feared overt political \
			 content would limit commercial viability.",
		),
		linked_event(
			"1970-09-18",
			"Single Release & Chart Success",
			"Released in both the UK (Vertigo) and US (Warner Bros), 'Paranoid' hit \
			 #4 on the UK Singles Chart and #61 on the US Billboard Hot 100, marking \
			 heavy metal's mainstream breakthrough.",
			"Chorus",
		),
		event(
			"1975-01-01",
			"New Wave of British Heavy Metal Surge",
			"By the mid-'70s, Judas Priest and later Iron Maiden drew directly on \
			 Sabbath's down-tuned riffs and occult imagery, igniting the NWOBHM and \
			 cementing the genre's global reach.",
		),
		event(
			"1978-01-01",
			"Punk & Post-Punk Reactions",
			"Bands like the Ramones and Siouxsie and the Banshees cited Paranoid's \
			 stripped-back aggression as a blueprint for proto-punk and gothic rock, \
			 channeling urban alienation and DIY ethos.",
		),
		linked_event(
			"1994-01-01",
			"Megadeth Thrash Cover",
			"Megadeth's Grammy-nominated cover accelerated the riff to thrash metal \
			 speeds, showcasing the song's adaptability across subgenres and \
			 reintroducing the track to a younger metal audience.",
			"Solo",
		),
		event(
			"2020-09-18",
			"50th Anniversary Reissue",
			"The band released a deluxe vinyl box set featuring unreleased demos and \
			 vintage studio footage, illuminating Sabbath's creative process and \
			 historical impact.",
		),
		linked_event(
			"2024-02-08",
			"Helldivers 2 Release",
			"'Paranoid' was featured on the Helldivers 2 launch soundtrack, \
			 introducing the song to a new gaming generation. The in-game remix \
			 peaked at 75,000 concurrent players on Steam and catalyzed 150 million \
			 Spotify streams.",
			"Chorus/Outro",
		),
		event(
			"2024-07-24",
			"Mental-Health Confession Revealed",
			"In a 2024 interview, Geezer Butler disclosed that the lyrics were rooted \
			 in his own depression, reframing 'Paranoid' as an early musical \
			 exploration of mental-health struggles.",
		),
	]
}

fn game_stats() -> Vec<GameStat> {
	vec![
		// Helldivers 2 average concurrent players per quarter (pre-release zeros)
		stat(2023, Quarter::Q1, "Helldivers 2", 0),
		stat(2023, Quarter::Q2, "Helldivers 2", 0),
		stat(2023, Quarter::Q3, "Helldivers 2", 0),
		stat(2023, Quarter::Q4, "Helldivers 2", 0),
		stat(2024, Quarter::Q1, "Helldivers 2", 12_500),
		stat(2024, Quarter::Q2, "Helldivers 2", 18_200),
		stat(2024, Quarter::Q3, "Helldivers 2", 22_800),
		stat(2024, Quarter::Q4, "Helldivers 2", 19_500),
		stat(2025, Quarter::Q1, "Helldivers 2", 25_100),
		// Spotify new plays per quarter
		stat(2023, Quarter::Q1, "Spotify", 3_200_000),
		stat(2023, Quarter::Q2, "Spotify", 2_900_000),
		stat(2023, Quarter::Q3, "Spotify", 3_400_000),
		stat(2023, Quarter::Q4, "Spotify", 4_100_000),
		stat(2024, Quarter::Q1, "Spotify", 8_200_000),
		stat(2024, Quarter::Q2, "Spotify", 6_800_000),
		stat(2024, Quarter::Q3, "Spotify", 7_400_000),
		stat(2024, Quarter::Q4, "Spotify", 9_100_000),
		stat(2025, Quarter::Q1, "Spotify", 7_600_000),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seed_satisfies_invariants() {
		assert_eq!(research_data().validate(), Ok(()));
	}

	#[test]
	fn seed_has_expected_cardinalities() {
		let data = research_data();
		assert_eq!(data.nodes.len(), 22);
		assert_eq!(data.links.len(), 23);
		assert_eq!(data.wave_regions.len(), 7);
		assert_eq!(data.timeline_events.len(), 14);
		assert_eq!(data.game_stats.len(), 18);
	}

	#[test]
	fn node_ids_are_unique() {
		let data = research_data();
		for (i, a) in data.nodes.iter().enumerate() {
			assert!(
				!data.nodes[i + 1..].iter().any(|b| b.id == a.id),
				"duplicate node id {:?}",
				a.id
			);
		}
	}

	#[test]
	fn regions_tile_the_track_in_order() {
		let regions = research_data().wave_regions;
		for pair in regions.windows(2) {
			assert!(pair[0].end <= pair[1].start + f64::EPSILON);
		}
	}
}
