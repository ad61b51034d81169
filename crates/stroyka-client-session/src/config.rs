// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Auth Endpoint client.

use std::time::Duration;

/// Environment variable for the backend base URL.
pub const BASE_URL_ENV_VAR: &str = "STROYKA_API_BASE_URL";
/// Environment variable for the request timeout in seconds.
pub const TIMEOUT_ENV_VAR: &str = "STROYKA_API_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://api.stroyka.uz";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for talking to the Auth Endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
	/// Backend base URL, without a trailing slash.
	pub base_url: String,
	/// Per-request timeout.
	pub timeout: Duration,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

impl ApiConfig {
	/// Create a config with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Read configuration from environment variables, falling back to
	/// defaults for anything unset or unparseable.
	pub fn from_env() -> Self {
		let base_url = std::env::var(BASE_URL_ENV_VAR)
			.map(|url| url.trim_end_matches('/').to_string())
			.unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

		let timeout = std::env::var(TIMEOUT_ENV_VAR)
			.ok()
			.and_then(|v| v.parse::<u64>().ok())
			.map(Duration::from_secs)
			.unwrap_or(DEFAULT_TIMEOUT);

		Self { base_url, timeout }
	}

	/// Set the base URL.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	/// Set the request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_points_at_production() {
		let config = ApiConfig::default();
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(config.timeout, DEFAULT_TIMEOUT);
	}

	#[test]
	fn with_base_url_strips_trailing_slash() {
		let config = ApiConfig::new().with_base_url("http://localhost:3000/");
		assert_eq!(config.base_url, "http://localhost:3000");
	}

	#[test]
	fn with_timeout_sets_timeout() {
		let config = ApiConfig::new().with_timeout(Duration::from_secs(5));
		assert_eq!(config.timeout, Duration::from_secs(5));
	}
}
