// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Token inspection: read the expiry claim without contacting the server.
//!
//! The access token is a standard three-segment JWT. Only the `exp` claim is
//! consulted and only locally; signature verification is the backend's job.
//! Every decode failure counts as expired (fail closed): an undecodable
//! token and a stale token both mean "try a refresh", never "valid
//! indefinitely". Comparison is exact, with no clock-skew grace period.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use stroyka_common_secret::SecretString;

/// The claims this client reads from an access token payload.
///
/// Derived on demand from the token, never cached beyond a single check.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Claims {
	/// Expiry, seconds since epoch.
	pub exp: u64,
}

/// Decode the payload segment of a token.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url-JSON payload carrying an `exp` claim.
pub fn decode_claims(token: &SecretString) -> Option<Claims> {
	let mut segments = token.expose().split('.');
	let _header = segments.next()?;
	let payload = segments.next()?;
	let _signature = segments.next()?;
	if segments.next().is_some() {
		return None;
	}

	let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
	serde_json::from_slice(&bytes).ok()
}

/// Whether the token is expired as of `now_ms` (milliseconds since epoch).
///
/// Fails closed: an undecodable token is expired, and so is one whose `exp`
/// is too large to express in milliseconds.
pub fn is_expired_at(token: &SecretString, now_ms: u64) -> bool {
	match decode_claims(token) {
		Some(claims) => claims
			.exp
			.checked_mul(1000)
			.map_or(true, |exp_ms| exp_ms < now_ms),
		None => true,
	}
}

/// Whether the token is expired right now.
pub fn is_expired(token: &SecretString) -> bool {
	is_expired_at(token, now_millis())
}

pub(crate) fn now_millis() -> u64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.as_millis() as u64)
		.unwrap_or(0)
}
