// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication session manager for the Stroyka client.
//!
//! This crate owns the token lifecycle:
//!
//! - **[`claims`]**: local access-token expiry inspection (fail closed)
//! - **[`AuthApi`]**: the Auth Endpoint client (login, refresh, profile,
//!   register)
//! - **[`SessionManager`]**: the state machine over
//!   uninitialized/loading/authenticated/anonymous, sole writer of the
//!   token store
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stroyka_client_credentials::FileTokenStore;
//! use stroyka_client_session::{ApiConfig, AuthApi, SessionManager};
//!
//! # tokio_test::block_on(async {
//! let api = AuthApi::new(&ApiConfig::from_env());
//! let store = Arc::new(FileTokenStore::new("~/.config/stroyka/tokens.json"));
//! let session = SessionManager::new(api, store);
//! session.bootstrap().await;
//! # });
//! ```

pub mod claims;

mod api;
mod config;
mod error;
mod identity;
mod manager;

pub use api::{AuthApi, AuthGrant, RegisterRequest};
pub use config::{ApiConfig, BASE_URL_ENV_VAR, TIMEOUT_ENV_VAR};
pub use error::{Result, SessionError};
pub use identity::Identity;
pub use manager::{SessionManager, SessionState};
