//! Research data providers.
//!
//! Two interchangeable implementations behind one `load` contract: the
//! compiled-in seed and a one-shot read of a single remote JSON document.
//! Single attempt, no retry; failures surface to the page as-is.

use gloo_net::http::Request;
use log::{debug, warn};

use super::seed;
use super::types::ResearchData;
use crate::error::{Error, Result};

/// Path of the hosted research document, used by the remote deployment mode.
pub const DEFAULT_DOCUMENT_URL: &str = "/data/paranoid.json";

/// Where the research aggregate comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
	/// Compiled-in seed data.
	Seed,
	/// Single JSON document fetched from a remote store.
	Remote {
		/// URL of the document.
		url: String,
	},
}

impl DataSource {
	/// Load and validate the full aggregate.
	pub async fn load(&self) -> Result<ResearchData> {
		let data = match self {
			DataSource::Seed => seed::research_data(),
			DataSource::Remote { url } => fetch_document(url).await?,
		};
		data.validate().map_err(Error::DataFetch)?;
		debug!(
			"research data loaded: {} nodes, {} events",
			data.nodes.len(),
			data.timeline_events.len()
		);
		Ok(data)
	}
}

async fn fetch_document(url: &str) -> Result<ResearchData> {
	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| Error::DataFetch(e.to_string()))?;
	if response.status() == 404 {
		warn!("research document missing at {url}");
		return Err(Error::DataUnavailable);
	}
	if !response.ok() {
		return Err(Error::DataFetch(format!(
			"unexpected status {} from {url}",
			response.status()
		)));
	}
	response
		.json::<ResearchData>()
		.await
		.map_err(|e| Error::DataFetch(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_aggregate_maps_to_fetch_error() {
		let mut data = seed::research_data();
		data.nodes.clear();
		let err = data.validate().map_err(Error::DataFetch).unwrap_err();
		assert!(matches!(err, Error::DataFetch(_)));
	}
}
