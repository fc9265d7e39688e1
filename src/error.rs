//! Error taxonomy for the visualizer.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to the page.
///
/// Data failures are terminal for the page; audio failures are local to the
/// record player, which degrades to region navigation without playback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The remote research document does not exist.
	#[error("research document not found")]
	DataUnavailable,

	/// Transport, parse, or integrity failure while loading the dataset.
	#[error("failed to load research data: {0}")]
	DataFetch(String),

	/// The audio resource failed to load or playback was rejected.
	#[error("audio unavailable: {0}")]
	AudioUnavailable(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_are_human_readable() {
		assert_eq!(Error::DataUnavailable.to_string(), "research document not found");
		assert_eq!(
			Error::DataFetch("status 500".into()).to_string(),
			"failed to load research data: status 500"
		);
		assert!(!Error::AudioUnavailable("decode error".into()).to_string().is_empty());
	}
}
