//! Privileged accounts.

// self
use crate::{_prelude::*, client::PamClient, query::ListQuery};

/// Secret-management settings attached to an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretManagement {
	/// Whether the CPM rotates the secret automatically.
	pub automatic_management_enabled: bool,
	/// Why automatic management is disabled, if it is.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub manual_management_reason: Option<String>,
	/// Last rotation status reported by the CPM.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Last modification time, Unix seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_modified_time: Option<i64>,
}

/// Body for `POST Accounts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountRequest {
	/// Account name; generated by the vault when omitted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Target address.
	pub address: String,
	/// Login name on the target.
	pub user_name: String,
	/// Platform the account is managed by.
	pub platform_id: String,
	/// Safe the account is stored in.
	pub safe_name: String,
	/// `password` or `key`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secret_type: Option<String>,
	/// Initial secret value.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secret: Option<String>,
	/// Platform-specific properties.
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub platform_account_properties: BTreeMap<String, serde_json::Value>,
	/// Rotation settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secret_management: Option<SecretManagement>,
}
impl AddAccountRequest {
	/// Creates a request with the mandatory fields.
	pub fn new(
		address: impl Into<String>,
		user_name: impl Into<String>,
		platform_id: impl Into<String>,
		safe_name: impl Into<String>,
	) -> Self {
		Self {
			address: address.into(),
			user_name: user_name.into(),
			platform_id: platform_id.into(),
			safe_name: safe_name.into(),
			..Default::default()
		}
	}

	/// Sets the account name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the secret type and initial value.
	pub fn secret(mut self, secret_type: impl Into<String>, secret: impl Into<String>) -> Self {
		self.secret_type = Some(secret_type.into());
		self.secret = Some(secret.into());

		self
	}
}

/// Account as reported by the vault. The secret value itself is never returned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
	/// Account identifier, `{safeId}_{objectId}`.
	pub id: String,
	/// Account name.
	pub name: String,
	/// Target address.
	pub address: String,
	/// Login name on the target.
	pub user_name: String,
	/// Platform the account is managed by.
	pub platform_id: String,
	/// Safe the account is stored in.
	pub safe_name: String,
	/// `password` or `key`.
	pub secret_type: String,
	/// Platform-specific properties.
	pub platform_account_properties: BTreeMap<String, serde_json::Value>,
	/// Rotation settings.
	pub secret_management: SecretManagement,
	/// Creation time, Unix seconds.
	pub created_time: Option<i64>,
}

/// One page of `GET Accounts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountList {
	/// Accounts on this page.
	pub value: Vec<Account>,
	/// Total matches across all pages.
	pub count: u64,
	/// Relative link to the following page, when there is one.
	#[serde(rename = "nextLink")]
	pub next_link: Option<String>,
}

impl PamClient {
	/// Creates an account.
	pub async fn add_account(&self, request: &AddAccountRequest) -> Result<Account> {
		self.post_json("add_account", self.api_url(["Accounts"]), request).await
	}

	/// Fetches an account by identifier.
	pub async fn get_account(&self, id: &str) -> Result<Account> {
		self.get_json("get_account", self.api_url(["Accounts", id])).await
	}

	/// Lists accounts matching `query`.
	///
	/// The query is validated before any request is made, so a rejected parameter never
	/// reaches the network.
	pub async fn get_accounts(&self, query: &ListQuery) -> Result<AccountList> {
		let params = query.validate()?;
		let mut url = self.api_url(["Accounts"]);

		if !params.is_empty() {
			url.set_query(Some(&params.encode()));
		}

		self.get_json("get_accounts", url).await
	}
}
