//! Quarterly pivot of the flat game statistics.

use std::collections::BTreeMap;

use log::debug;

use super::types::{GameStat, Quarter};

/// One row of the pivoted table: a `(year, quarter)` bucket with one value
/// per series, aligned with [`PivotedStats::series`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PivotRow {
	/// Observation year.
	pub year: i32,
	/// Observation quarter.
	pub quarter: Quarter,
	/// Play counts, `values[i]` belonging to `series[i]`.
	pub values: Vec<u64>,
}

impl PivotRow {
	/// Short axis label, e.g. `2024 Q1`.
	pub fn label(&self) -> String {
		format!("{} {}", self.year, self.quarter)
	}
}

/// Result of [`pivot_quarterly`]: series names plus one row per period.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PivotedStats {
	/// Distinct series names in first-appearance order.
	pub series: Vec<String>,
	/// Rows sorted by `(year, quarter)` ascending.
	pub rows: Vec<PivotRow>,
}

impl PivotedStats {
	/// Largest observed value of one series across all rows.
	pub fn series_peak(&self, idx: usize) -> u64 {
		self.rows.iter().map(|r| r.values[idx]).max().unwrap_or(0)
	}
}

/// Pivot the flat observation list into one row per `(year, quarter)`.
///
/// Series order follows first appearance in the input. A period with no
/// observation for a series gets zero rather than being omitted; duplicate
/// observations for the same `(period, series)` are summed. Observations
/// without a quarter do not fit a quarterly table and are skipped.
pub fn pivot_quarterly(stats: &[GameStat]) -> PivotedStats {
	let mut series: Vec<String> = Vec::new();
	for stat in stats {
		if stat.quarter.is_some() && !series.contains(&stat.game) {
			series.push(stat.game.clone());
		}
	}

	let mut buckets: BTreeMap<(i32, Quarter), Vec<u64>> = BTreeMap::new();
	let mut skipped = 0usize;
	for stat in stats {
		let Some(quarter) = stat.quarter else {
			skipped += 1;
			continue;
		};
		let idx = series.iter().position(|s| *s == stat.game).unwrap_or(0);
		let values = buckets
			.entry((stat.year, quarter))
			.or_insert_with(|| vec![0; series.len()]);
		values[idx] += stat.play_count;
	}
	if skipped > 0 {
		debug!("pivot skipped {skipped} observations without a quarter");
	}

	let rows = buckets
		.into_iter()
		.map(|((year, quarter), values)| PivotRow {
			year,
			quarter,
			values,
		})
		.collect();

	PivotedStats { series, rows }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn stat(year: i32, quarter: Option<Quarter>, game: &str, play_count: u64) -> GameStat {
		GameStat {
			year,
			quarter,
			game: game.into(),
			play_count,
		}
	}

	#[test]
	fn one_row_per_period_with_zero_fill() {
		let pivot = pivot_quarterly(&[
			stat(2023, Some(Quarter::Q1), "Spotify", 3_200_000),
			stat(2023, Some(Quarter::Q1), "Helldivers 2", 0),
		]);
		assert_eq!(pivot.series, vec!["Spotify", "Helldivers 2"]);
		assert_eq!(
			pivot.rows,
			vec![PivotRow {
				year: 2023,
				quarter: Quarter::Q1,
				values: vec![3_200_000, 0],
			}]
		);
	}

	#[test]
	fn missing_series_defaults_to_zero() {
		let pivot = pivot_quarterly(&[
			stat(2023, Some(Quarter::Q1), "Spotify", 100),
			stat(2023, Some(Quarter::Q2), "Helldivers 2", 7),
		]);
		assert_eq!(pivot.rows.len(), 2);
		assert_eq!(pivot.rows[0].values, vec![100, 0]);
		assert_eq!(pivot.rows[1].values, vec![0, 7]);
	}

	#[test]
	fn rows_sort_by_year_then_quarter() {
		let pivot = pivot_quarterly(&[
			stat(2024, Some(Quarter::Q1), "Spotify", 1),
			stat(2023, Some(Quarter::Q4), "Spotify", 2),
			stat(2023, Some(Quarter::Q2), "Spotify", 3),
		]);
		let labels: Vec<String> = pivot.rows.iter().map(PivotRow::label).collect();
		assert_eq!(labels, vec!["2023 Q2", "2023 Q4", "2024 Q1"]);
	}

	#[test]
	fn duplicate_observations_are_summed() {
		let pivot = pivot_quarterly(&[
			stat(2024, Some(Quarter::Q3), "Spotify", 5),
			stat(2024, Some(Quarter::Q3), "Spotify", 7),
		]);
		assert_eq!(pivot.rows.len(), 1);
		assert_eq!(pivot.rows[0].values, vec![12]);
	}

	#[test]
	fn observations_without_quarter_are_skipped() {
		let pivot = pivot_quarterly(&[
			stat(2024, None, "Spotify", 99),
			stat(2024, Some(Quarter::Q1), "Spotify", 1),
		]);
		assert_eq!(pivot.rows.len(), 1);
		assert_eq!(pivot.rows[0].values, vec![1]);
	}

	#[test]
	fn series_peaks_cover_all_rows() {
		let pivot = pivot_quarterly(&[
			stat(2023, Some(Quarter::Q4), "Spotify", 4_100_000),
			stat(2024, Some(Quarter::Q4), "Spotify", 9_100_000),
			stat(2024, Some(Quarter::Q1), "Helldivers 2", 12_500),
		]);
		assert_eq!(pivot.series_peak(0), 9_100_000);
		assert_eq!(pivot.series_peak(1), 12_500);
	}

	#[test]
	fn seed_pivot_has_one_row_per_period() {
		let data = crate::data::seed::research_data();
		let pivot = pivot_quarterly(&data.game_stats);
		assert_eq!(pivot.series.len(), 2);
		assert_eq!(pivot.rows.len(), 9);
		for pair in pivot.rows.windows(2) {
			assert!((pair[0].year, pair[0].quarter) < (pair[1].year, pair[1].quarter));
		}
	}
}
