//! Safe membership.

// self
use crate::{_prelude::*, client::PamClient};

/// Permissions granted to a safe member. Every flag is sent; those left at their default are
/// sent as `false`.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafeMemberPermissions {
	pub use_accounts: bool,
	pub retrieve_accounts: bool,
	pub list_accounts: bool,
	pub add_accounts: bool,
	pub update_account_content: bool,
	pub update_account_properties: bool,
	#[serde(rename = "initiateCPMAccountManagementOperations")]
	pub initiate_cpm_account_management_operations: bool,
	pub specify_next_account_content: bool,
	pub rename_accounts: bool,
	pub delete_accounts: bool,
	pub unlock_accounts: bool,
	pub manage_safe: bool,
	pub manage_safe_members: bool,
	pub backup_safe: bool,
	pub view_audit_log: bool,
	pub view_safe_members: bool,
	pub access_without_confirmation: bool,
	pub create_folders: bool,
	pub delete_folders: bool,
	pub move_accounts_and_folders: bool,
	pub requests_authorization_level1: bool,
	pub requests_authorization_level2: bool,
}
impl SafeMemberPermissions {
	/// Use, retrieve and list accounts; the usual grant for an application identity.
	pub fn consumer() -> Self {
		Self { use_accounts: true, retrieve_accounts: true, list_accounts: true, ..Default::default() }
	}
}

/// Body for `POST Safes/{safeUrlId}/Members`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSafeMemberRequest {
	/// User, group or role name.
	pub member_name: String,
	/// Directory or `Vault` the member comes from.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_in: Option<String>,
	/// `User`, `Group` or `Role`.
	#[serde(rename = "MemberType", skip_serializing_if = "Option::is_none")]
	pub member_type: Option<String>,
	/// Membership expiry, Unix seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub membership_expiration_date: Option<i64>,
	/// Granted permissions.
	pub permissions: SafeMemberPermissions,
	/// Read-only membership.
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub is_read_only: bool,
}
impl AddSafeMemberRequest {
	/// Creates a request granting `permissions` to `member_name`.
	pub fn new(member_name: impl Into<String>, permissions: SafeMemberPermissions) -> Self {
		Self { member_name: member_name.into(), permissions, ..Default::default() }
	}

	/// Sets where the member is looked up.
	pub fn search_in(mut self, search_in: impl Into<String>) -> Self {
		self.search_in = Some(search_in.into());

		self
	}

	/// Sets the member type.
	pub fn member_type(mut self, member_type: impl Into<String>) -> Self {
		self.member_type = Some(member_type.into());

		self
	}
}

/// Membership as reported by the vault.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafeMember {
	/// Safe URL identifier.
	pub safe_url_id: String,
	/// Safe name.
	pub safe_name: String,
	/// Member identifier.
	pub member_id: String,
	/// Member name.
	pub member_name: String,
	/// `User`, `Group` or `Role`.
	pub member_type: String,
	/// Membership expiry, Unix seconds.
	pub membership_expiration_date: Option<i64>,
	/// Whether the membership has expired.
	pub is_expired_membership_enable: bool,
	/// Whether the member is a predefined vault user.
	pub is_predefined_user: bool,
	/// Granted permissions.
	pub permissions: SafeMemberPermissions,
}

impl PamClient {
	/// Adds a member to a safe.
	pub async fn add_safe_member(
		&self,
		safe_url_id: &str,
		request: &AddSafeMemberRequest,
	) -> Result<SafeMember> {
		self.post_json("add_safe_member", self.api_url(["Safes", safe_url_id, "Members"]), request)
			.await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn consumer_grants_only_read_access() {
		let body = serde_json::to_value(
			AddSafeMemberRequest::new("app-identity", SafeMemberPermissions::consumer())
				.search_in("Vault")
				.member_type("User"),
		)
		.expect("Member request should serialize.");

		assert_eq!(body["memberName"], "app-identity");
		assert_eq!(body["searchIn"], "Vault");
		assert_eq!(body["permissions"]["useAccounts"], true);
		assert_eq!(body["permissions"]["retrieveAccounts"], true);
		assert_eq!(body["MemberType"], "User");
		assert_eq!(body["permissions"]["manageSafe"], false);
		assert_eq!(body["permissions"]["initiateCPMAccountManagementOperations"], false);
		assert!(body.get("membershipExpirationDate").is_none());
		assert!(body.get("isReadOnly").is_none());
	}
}
