//! Demonstrates acquiring a client-credentials session and listing accounts with a
//! validated query against a mocked tenant.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use pam_sdk::{Config, PamClient, query::ListQuery};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/platformtoken");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":900}",
			);
		})
		.await;
	let accounts_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/PasswordVault/API/Accounts")
				.header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").body(
				"{\"value\":[{\"id\":\"12_3\",\"name\":\"srv-admin\",\"userName\":\"admin\"}],\"count\":1}",
			);
		})
		.await;
	// The mock tenant presents a self-signed certificate.
	let config = Config::builder(server.base_url(), server.base_url(), "demo-client", "super-secret")
		.tls_skip_verify(true)
		.build()?;
	let client = PamClient::new(config)?;
	let session = client.refresh_session().await?;

	println!("Session expires at {}.", session.expires_at);

	let accounts = client
		.get_accounts(&ListQuery::new().search("admin").search_type("contains").limit(25))
		.await?;

	for account in &accounts.value {
		println!("Account {} ({}).", account.name, account.id);
	}

	token_mock.assert_async().await;
	accounts_mock.assert_async().await;

	Ok(())
}
