use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
	/// The "home" chain.
	Layer1,
	/// The "foreign" chain.
	SideChain,
}

/// A label interpolated into a template in place of a real network value.
///
/// Labels are documentation only: they are never validated or resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
	pub label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain: Option<Chain>,
	pub description: String,
}

impl Placeholder {
	pub fn new(label: &str, chain: Option<Chain>, description: &str) -> Self {
		Self {
			label: label.into(),
			chain,
			description: description.into(),
		}
	}
}

/// Placeholders keyed by template argument name, in template order.
pub type Placeholders = IndexMap<String, Placeholder>;

pub fn placeholders_yaml(placeholders: &Placeholders) -> crate::Result<String> {
	Ok(serde_yaml::to_string(placeholders)?)
}
