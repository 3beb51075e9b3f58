// crates.io
use httpmock::prelude::*;
use time::OffsetDateTime;
// self
use pam_sdk::{
	Config, PamClient,
	auth::Session,
	error::{Error, ParseError, TransportError},
	reqwest::{Method, StatusCode},
};

fn build_client(server: &MockServer) -> PamClient {
	let config = Config::builder(server.base_url(), server.base_url(), "svc", "secret")
		.tls_skip_verify(true)
		.build()
		.expect("Config should build for the mock vault.");

	PamClient::new(config).expect("Client should build for the mock vault.")
}

#[tokio::test]
async fn send_attaches_stored_session() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/PasswordVault/API/Safes").header("authorization", "Bearer abc");
			then.status(200).body("{}");
		})
		.await;

	client.replace_session(Session::new("abc", "Bearer", OffsetDateTime::now_utc()));

	let request = client
		.request(Method::GET, client.api_url(["Safes"]))
		.build()
		.expect("Request should build.");
	let response = client.send(request).await.expect("Dispatch should succeed.");

	assert_eq!(response.status(), StatusCode::OK);

	mock.assert_async().await;
}

#[tokio::test]
async fn send_without_session_omits_authorization() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/PasswordVault/API/Platforms").header_missing("authorization");
			then.status(200).body("{}");
		})
		.await;
	let request = client
		.request(Method::GET, client.api_url(["Platforms"]))
		.build()
		.expect("Request should build.");

	client.send(request).await.expect("Dispatch should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn send_skips_empty_token() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/PasswordVault/API/Accounts").header_missing("authorization");
			then.status(200).body("{}");
		})
		.await;

	client.replace_session(Session::new("", "Bearer", OffsetDateTime::now_utc()));

	let request = client
		.request(Method::GET, client.api_url(["Accounts"]))
		.build()
		.expect("Request should build.");

	client.send(request).await.expect("Dispatch should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn send_returns_non_success_responses_untouched() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);

	server
		.mock_async(|when, then| {
			when.method(DELETE).path("/PasswordVault/API/Safes/vault1");
			then.status(404).body("{\"ErrorCode\":\"SFWS0007\",\"ErrorMessage\":\"Safe not found\"}");
		})
		.await;

	let request = client
		.request(Method::DELETE, client.api_url(["Safes", "vault1"]))
		.build()
		.expect("Request should build.");
	let response = client.send(request).await.expect("Dispatch should succeed for any status.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert!(
		response
			.text()
			.await
			.expect("Body should be readable.")
			.contains("SFWS0007")
	);
}

#[tokio::test]
async fn certificate_checks_stay_on_unless_skipped() {
	let server = MockServer::start_async().await;
	let base = format!("https://{}", server.address());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/PasswordVault/API/Safes");
			then.status(200).body("{}");
		})
		.await;
	let strict = PamClient::new(
		Config::builder(&base, &base, "svc", "secret")
			.build()
			.expect("Config should build with verification on."),
	)
	.expect("Client should build with verification on.");
	let request = strict
		.request(Method::GET, strict.api_url(["Safes"]))
		.build()
		.expect("Request should build.");
	let err = strict.send(request).await.expect_err("Self-signed certificate should be rejected.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })), "got {err:?}");

	mock.assert_calls_async(0).await;

	let relaxed = PamClient::new(
		Config::builder(&base, &base, "svc", "secret")
			.tls_skip_verify(true)
			.build()
			.expect("Config should build with verification off."),
	)
	.expect("Client should build with verification off.");
	let request = relaxed
		.request(Method::GET, relaxed.api_url(["Safes"]))
		.build()
		.expect("Request should build.");
	let response = relaxed.send(request).await.expect("Skipped verification should connect.");

	assert_eq!(response.status(), StatusCode::OK);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn unusable_token_is_a_parse_error() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200).body("{}");
		})
		.await;

	client.replace_session(Session::new("tok\nsplit", "Bearer", OffsetDateTime::now_utc()));

	let request = client
		.request(Method::GET, client.api_url(["Safes"]))
		.build()
		.expect("Request should build.");
	let err = client.send(request).await.expect_err("Token with a newline should be refused.");

	assert!(matches!(err, Error::Parse(ParseError::TokenHeader { .. })), "got {err:?}");

	mock.assert_calls_async(0).await;
}
