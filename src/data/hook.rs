//! Loading-state hook wrapping a [`DataSource`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};

use super::source::DataSource;
use super::types::ResearchData;
use crate::error::Result;

/// Lifecycle of the one data load performed per mount.
///
/// There is no retry transition; the consumer remounts to try again.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
	/// The load is in flight; no data yet.
	Loading,
	/// The load resolved with the full aggregate.
	Ready(ResearchData),
	/// The load failed terminally; holds a human-readable message.
	Failed(String),
}

impl LoadState {
	/// Fold a finished load into its terminal state.
	pub fn settle(result: Result<ResearchData>) -> Self {
		match result {
			Ok(data) => LoadState::Ready(data),
			Err(err) => LoadState::Failed(err.to_string()),
		}
	}

	/// True once the load finished, successfully or not.
	pub fn is_settled(&self) -> bool {
		!matches!(self, LoadState::Loading)
	}
}

/// Kick off exactly one load of `source` and expose its state as a signal.
pub fn use_research_data(source: DataSource) -> ReadSignal<LoadState> {
	let (state, set_state) = signal(LoadState::Loading);
	spawn_local(async move {
		let settled = LoadState::settle(source.load().await);
		match &settled {
			LoadState::Ready(_) => debug!("research data ready"),
			LoadState::Failed(msg) => error!("research data load failed: {msg}"),
			LoadState::Loading => unreachable!(),
		}
		set_state.set(settled);
	});
	state
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::seed;
	use crate::error::Error;

	#[test]
	fn settle_keeps_the_exact_data() {
		let data = seed::research_data();
		let state = LoadState::settle(Ok(data.clone()));
		assert_eq!(state, LoadState::Ready(data));
		assert!(state.is_settled());
	}

	#[test]
	fn settle_turns_errors_into_nonempty_messages() {
		let state = LoadState::settle(Err(Error::DataUnavailable));
		let LoadState::Failed(msg) = state else {
			panic!("expected Failed");
		};
		assert!(!msg.is_empty());
	}

	#[test]
	fn loading_is_not_settled() {
		assert!(!LoadState::Loading.is_settled());
	}
}
