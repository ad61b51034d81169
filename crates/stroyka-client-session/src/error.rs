// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session error types.
//!
//! Only login and registration surface errors to callers; bootstrap and
//! refresh failures are absorbed by the session manager and show up solely
//! as the session becoming anonymous.

use thiserror::Error;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
	/// The server rejected the credentials. Carries the server-provided
	/// message, or a generic fallback, suitable for user display.
	#[error("{0}")]
	LoginFailed(String),

	/// A success response was missing an expected credential field. Nothing
	/// is stored when this happens; no partial pair ever lands.
	#[error("malformed server response: missing {0}")]
	MalformedResponse(&'static str),

	/// The HTTP call itself failed (connect, timeout, TLS).
	#[error("HTTP request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The server returned a non-success status outside the login flow.
	#[error("server error ({status})")]
	ServerError { status: u16 },
}

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
