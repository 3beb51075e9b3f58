//! Safe creation and lookup.

// self
use crate::{_prelude::*, client::PamClient};

/// Body for `POST Safes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSafeRequest {
	/// Safe name; required.
	pub safe_name: String,
	/// Free-form description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Vault folder, `\` by default on the service side.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	/// Days of object history to keep.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub number_of_days_retention: Option<u32>,
	/// Versions of each secret to keep.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub number_of_versions_retention: Option<u32>,
	/// Object-level access control.
	#[serde(rename = "oLACEnabled", skip_serializing_if = "Option::is_none")]
	pub olac_enabled: Option<bool>,
	/// Purge files automatically after the retention period.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_purge_enabled: Option<bool>,
	/// CPM user managing the safe.
	#[serde(rename = "managingCPM", skip_serializing_if = "Option::is_none")]
	pub managing_cpm: Option<String>,
}
impl AddSafeRequest {
	/// Creates a request for a safe named `safe_name` with service defaults.
	pub fn new(safe_name: impl Into<String>) -> Self {
		Self { safe_name: safe_name.into(), ..Default::default() }
	}

	/// Sets the description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}
}

/// User that created a safe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
	/// Creator identifier.
	pub id: String,
	/// Creator name.
	pub name: String,
}

/// Safe as reported by `POST Safes` and `GET Safes/{safeUrlId}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafeDetails {
	/// URL-safe identifier used in safe paths.
	pub safe_url_id: String,
	/// Safe name.
	pub safe_name: String,
	/// Internal safe number.
	pub safe_number: i64,
	/// Free-form description.
	pub description: Option<String>,
	/// Vault folder.
	pub location: String,
	/// User that created the safe.
	pub creator: Creator,
	/// Object-level access control.
	pub olac_enabled: bool,
	/// CPM user managing the safe.
	#[serde(rename = "managingCPM")]
	pub managing_cpm: Option<String>,
	/// Versions of each secret to keep; the service sends a number or null.
	pub number_of_versions_retention: Option<serde_json::Value>,
	/// Days of object history to keep.
	pub number_of_days_retention: Option<i64>,
	/// Purge files automatically after the retention period.
	pub auto_purge_enabled: bool,
	/// Creation time, Unix seconds.
	pub creation_time: Option<i64>,
	/// Last modification time, Unix microseconds.
	pub last_modification_time: Option<i64>,
	/// Accounts stored in the safe, when requested.
	pub accounts: Vec<serde_json::Value>,
	/// Whether the caller's membership has expired.
	pub is_expired_member: bool,
}

impl PamClient {
	/// Creates a safe.
	pub async fn add_safe(&self, request: &AddSafeRequest) -> Result<SafeDetails> {
		self.post_json("add_safe", self.api_url(["Safes"]), request).await
	}

	/// Fetches a safe by its URL identifier (usually its name).
	pub async fn get_safe_details(&self, safe_url_id: &str) -> Result<SafeDetails> {
		self.get_json("get_safe_details", self.api_url(["Safes", safe_url_id])).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn add_safe_request_omits_unset_fields() {
		let body = serde_json::to_value(AddSafeRequest::new("my-new-safe-1").description("Example"))
			.expect("Safe request should serialize.");

		assert_eq!(
			body,
			serde_json::json!({ "safeName": "my-new-safe-1", "description": "Example" })
		);
	}

	#[test]
	fn safe_details_tolerate_sparse_bodies() {
		let details: SafeDetails = serde_json::from_str(
			"{\"safeUrlId\":\"vault1\",\"safeName\":\"vault1\",\"safeNumber\":7,\"numberOfVersionsRetention\":null}",
		)
		.expect("Sparse safe details should deserialize.");

		assert_eq!(details.safe_url_id, "vault1");
		assert_eq!(details.safe_number, 7);
		assert_eq!(details.location, "");
		assert!(details.accounts.is_empty());
	}
}
