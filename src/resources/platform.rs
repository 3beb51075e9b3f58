//! Platform catalog.

// self
use crate::{_prelude::*, client::PamClient};

/// Identity section of a platform entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformGeneral {
	/// Platform identifier used by accounts.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Target system type, such as `Windows` or `Database`.
	pub system_type: String,
	/// Whether new accounts may use the platform.
	pub active: bool,
	/// Free-form description.
	pub description: String,
	/// Base platform the entry was duplicated from.
	#[serde(rename = "platformBaseID")]
	pub platform_base_id: String,
	/// `Regular` or `Rotational`.
	pub platform_type: String,
}

/// One platform entry. Sections other than `general` are kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Platform {
	/// Identity section.
	pub general: PlatformGeneral,
	/// Field definitions for accounts on this platform.
	pub properties: serde_json::Value,
	/// Linked-account definitions.
	pub linked_accounts: serde_json::Value,
	/// Credentials-management policy.
	pub credentials_management: serde_json::Value,
	/// Session-management policy.
	pub session_management: serde_json::Value,
	/// Privileged-access-workflow policy.
	pub privileged_access_workflows: serde_json::Value,
}

/// Answer of `GET Platforms`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlatformList {
	/// Platforms visible to the caller.
	pub platforms: Vec<Platform>,
	/// Total number of platforms.
	pub total: u64,
}

impl PamClient {
	/// Lists platforms.
	pub async fn get_platforms(&self) -> Result<PlatformList> {
		self.get_json("get_platforms", self.api_url(["Platforms"])).await
	}
}
