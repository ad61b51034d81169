// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client for the Auth Endpoint.
//!
//! Four operations: login, refresh, profile, register. The backend speaks
//! JSON with camelCase fields; error statuses carry `{ "message": ... }`.
//! This layer maps wire shapes to domain types and statuses to
//! [`SessionError`]; it holds no session state of its own.

use serde::{Deserialize, Serialize};
use stroyka_client_credentials::TokenPair;
use stroyka_common_secret::SecretString;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::SessionError;
use crate::identity::Identity;

const GENERIC_LOGIN_ERROR: &str = "invalid login or password";

/// A successful credential grant from login or registration.
#[derive(Debug)]
pub struct AuthGrant {
	/// The freshly issued pair.
	pub tokens: TokenPair,
	/// Identity, when the backend embeds it in the grant response.
	pub identity: Option<Identity>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
	phone: String,
	password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
	refresh_token: String,
}

/// Fields for bootstrapping a brand-new tenant and its first owner user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	/// Organization (tenant) name.
	pub org_name: String,
	/// Owner's display name.
	pub full_name: String,
	/// Owner's phone, used as the login identifier.
	pub phone: String,
	/// Owner's password.
	pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GrantResponse {
	access_token: Option<String>,
	refresh_token: Option<String>,
	user: Option<Identity>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
	#[serde(default)]
	message: Option<String>,
}

/// Thin client over the Auth Endpoint.
#[derive(Debug, Clone)]
pub struct AuthApi {
	client: reqwest::Client,
	base_url: String,
}

impl AuthApi {
	/// Build a client from config.
	pub fn new(config: &ApiConfig) -> Self {
		Self {
			client: stroyka_common_http::new_client_with_timeout(config.timeout),
			base_url: config.base_url.clone(),
		}
	}

	/// `POST /auth/login`.
	///
	/// Non-success statuses become [`SessionError::LoginFailed`] with the
	/// server's message (or a generic fallback). A success response missing
	/// either credential is [`SessionError::MalformedResponse`].
	pub async fn login(
		&self,
		phone: &str,
		password: &SecretString,
	) -> Result<AuthGrant, SessionError> {
		let request = LoginRequest {
			phone: phone.to_string(),
			password: password.expose().clone(),
		};

		debug!(phone = %phone, "logging in");

		let response = self
			.client
			.post(format!("{}/auth/login", self.base_url))
			.json(&request)
			.send()
			.await?;

		Self::grant_from_response(response).await
	}

	/// `POST /auth/register`: same grant shape as login.
	pub async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, SessionError> {
		debug!(org = %request.org_name, "registering organization");

		let response = self
			.client
			.post(format!("{}/auth/register", self.base_url))
			.json(request)
			.send()
			.await?;

		Self::grant_from_response(response).await
	}

	/// `POST /auth/refresh`: exchange the refresh token for a new pair.
	///
	/// Any non-success status is a plain [`SessionError::ServerError`]; the
	/// caller decides whether that degrades the session.
	pub async fn refresh(&self, refresh: &SecretString) -> Result<TokenPair, SessionError> {
		let request = RefreshRequest {
			refresh_token: refresh.expose().clone(),
		};

		debug!("refreshing access token");

		let response = self
			.client
			.post(format!("{}/auth/refresh", self.base_url))
			.json(&request)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(SessionError::ServerError {
				status: status.as_u16(),
			});
		}

		let body: GrantResponse = response.json().await?;
		let access = body
			.access_token
			.ok_or(SessionError::MalformedResponse("accessToken"))?;
		let refresh = body
			.refresh_token
			.ok_or(SessionError::MalformedResponse("refreshToken"))?;

		Ok(TokenPair::new(access, refresh))
	}

	/// `GET /auth/profile` with the bearer access token.
	pub async fn profile(&self, access: &SecretString) -> Result<Identity, SessionError> {
		let response = self
			.client
			.get(format!("{}/auth/profile", self.base_url))
			.bearer_auth(access.expose())
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(SessionError::ServerError {
				status: status.as_u16(),
			});
		}

		Ok(response.json().await?)
	}

	async fn grant_from_response(response: reqwest::Response) -> Result<AuthGrant, SessionError> {
		let status = response.status();

		if !status.is_success() {
			let message = response
				.json::<ErrorBody>()
				.await
				.ok()
				.and_then(|body| body.message)
				.unwrap_or_else(|| GENERIC_LOGIN_ERROR.to_string());
			return Err(SessionError::LoginFailed(message));
		}

		let body: GrantResponse = response.json().await?;

		let access = body
			.access_token
			.ok_or(SessionError::MalformedResponse("accessToken"))?;
		let refresh = body
			.refresh_token
			.ok_or(SessionError::MalformedResponse("refreshToken"))?;

		Ok(AuthGrant {
			tokens: TokenPair::new(access, refresh),
			identity: body.user,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::matchers::{body_json, header, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn api_for(server: &MockServer) -> AuthApi {
		AuthApi::new(&ApiConfig::new().with_base_url(server.uri()))
	}

	mod login {
		use super::*;

		#[tokio::test]
		async fn success_returns_tokens_and_identity() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/login"))
				.and(body_json(json!({
					"phone": "+998901234567",
					"password": "pw123456",
				})))
				.respond_with(ResponseTemplate::new(200).set_body_json(json!({
					"accessToken": "a1",
					"refreshToken": "r1",
					"user": {
						"id": 7,
						"fullName": "Alisher Usmonov",
						"phone": "+998901234567",
						"role": "PRORAB",
						"orgId": 3
					}
				})))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let grant = api
				.login("+998901234567", &SecretString::new("pw123456".to_string()))
				.await
				.unwrap();

			assert_eq!(grant.tokens.access.expose(), "a1");
			assert_eq!(grant.tokens.refresh.expose(), "r1");
			assert_eq!(
				grant.identity.unwrap().role,
				stroyka_rbac_core::Role::Prorab
			);
		}

		#[tokio::test]
		async fn rejection_carries_server_message() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/login"))
				.respond_with(
					ResponseTemplate::new(401).set_body_json(json!({"message": "wrong password"})),
				)
				.mount(&server)
				.await;

			let api = api_for(&server);
			let err = api
				.login("+998901234567", &SecretString::new("nope".to_string()))
				.await
				.unwrap_err();

			match err {
				SessionError::LoginFailed(msg) => assert_eq!(msg, "wrong password"),
				other => panic!("expected LoginFailed, got {other:?}"),
			}
		}

		#[tokio::test]
		async fn rejection_without_message_uses_generic_fallback() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/login"))
				.respond_with(ResponseTemplate::new(401))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let err = api
				.login("+998901234567", &SecretString::new("nope".to_string()))
				.await
				.unwrap_err();

			match err {
				SessionError::LoginFailed(msg) => assert_eq!(msg, GENERIC_LOGIN_ERROR),
				other => panic!("expected LoginFailed, got {other:?}"),
			}
		}

		#[tokio::test]
		async fn missing_refresh_token_is_malformed() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/login"))
				.respond_with(
					ResponseTemplate::new(200).set_body_json(json!({"accessToken": "a1"})),
				)
				.mount(&server)
				.await;

			let api = api_for(&server);
			let err = api
				.login("+998901234567", &SecretString::new("pw".to_string()))
				.await
				.unwrap_err();

			assert!(matches!(
				err,
				SessionError::MalformedResponse("refreshToken")
			));
		}
	}

	mod refresh {
		use super::*;

		#[tokio::test]
		async fn success_returns_new_pair() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/refresh"))
				.and(body_json(json!({"refreshToken": "r1"})))
				.respond_with(ResponseTemplate::new(200).set_body_json(json!({
					"accessToken": "a2",
					"refreshToken": "r2",
				})))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let pair = api
				.refresh(&SecretString::new("r1".to_string()))
				.await
				.unwrap();

			assert_eq!(pair.access.expose(), "a2");
			assert_eq!(pair.refresh.expose(), "r2");
		}

		#[tokio::test]
		async fn rejection_is_server_error() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/refresh"))
				.respond_with(ResponseTemplate::new(401))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let err = api
				.refresh(&SecretString::new("r_stale".to_string()))
				.await
				.unwrap_err();

			assert!(matches!(err, SessionError::ServerError { status: 401 }));
		}
	}

	mod profile {
		use super::*;

		#[tokio::test]
		async fn sends_bearer_token() {
			let server = MockServer::start().await;
			Mock::given(method("GET"))
				.and(path("/auth/profile"))
				.and(header("authorization", "Bearer a1"))
				.respond_with(ResponseTemplate::new(200).set_body_json(json!({
					"id": 7,
					"fullName": "Alisher Usmonov",
					"phone": "+998901234567",
					"role": "SKLAD",
					"orgId": 3
				})))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let identity = api
				.profile(&SecretString::new("a1".to_string()))
				.await
				.unwrap();

			assert_eq!(identity.role, stroyka_rbac_core::Role::Sklad);
		}

		#[tokio::test]
		async fn unauthorized_is_server_error() {
			let server = MockServer::start().await;
			Mock::given(method("GET"))
				.and(path("/auth/profile"))
				.respond_with(ResponseTemplate::new(401))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let err = api
				.profile(&SecretString::new("a_bad".to_string()))
				.await
				.unwrap_err();

			assert!(matches!(err, SessionError::ServerError { status: 401 }));
		}
	}

	mod register {
		use super::*;

		#[tokio::test]
		async fn returns_grant_like_login() {
			let server = MockServer::start().await;
			Mock::given(method("POST"))
				.and(path("/auth/register"))
				.respond_with(ResponseTemplate::new(200).set_body_json(json!({
					"accessToken": "a1",
					"refreshToken": "r1",
				})))
				.mount(&server)
				.await;

			let api = api_for(&server);
			let grant = api
				.register(&RegisterRequest {
					org_name: "Qurilish MChJ".to_string(),
					full_name: "Bobur Karimov".to_string(),
					phone: "+998907654321".to_string(),
					password: "pw123456".to_string(),
				})
				.await
				.unwrap();

			assert_eq!(grant.tokens.access.expose(), "a1");
			assert!(grant.identity.is_none());
		}
	}
}
