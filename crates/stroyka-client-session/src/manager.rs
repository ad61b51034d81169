// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The session manager: owner of the authenticated identity and the sole
//! writer of the token store.
//!
//! # State machine
//!
//! ```text
//! Uninitialized → Loading → Authenticated(identity)
//!                        ↘ Anonymous
//! ```
//!
//! Bootstrap reads the stored pair, refreshes it when the access token is
//! expired (or undecodable; the two are deliberately not distinguished) and
//! fetches the profile. Every failure on that path collapses to Anonymous:
//! the design trades diagnostic precision for a two-state UX where you
//! either have a usable session or you don't. Only login and registration
//! surface errors to their caller.
//!
//! Construct one manager at the application root and pass it down; cloning
//! is cheap and clones share state.

use std::sync::Arc;

use stroyka_client_credentials::{TokenPair, TokenStore};
use stroyka_common_secret::SecretString;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::api::{AuthApi, RegisterRequest};
use crate::claims;
use crate::error::SessionError;
use crate::identity::Identity;

/// Where the session currently stands.
///
/// Guards must treat `Loading` as distinct from both settled states; it is
/// never a default for either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
	/// Bootstrap has not run yet.
	Uninitialized,
	/// A bootstrap or re-sync is in flight.
	Loading,
	/// A usable session with a fetched profile.
	Authenticated(Identity),
	/// No usable session.
	Anonymous,
}

impl SessionState {
	/// True while bootstrap/re-sync has not settled.
	pub fn is_loading(&self) -> bool {
		matches!(self, SessionState::Uninitialized | SessionState::Loading)
	}

	/// The identity, when authenticated.
	pub fn identity(&self) -> Option<&Identity> {
		match self {
			SessionState::Authenticated(identity) => Some(identity),
			_ => None,
		}
	}

	/// The authenticated role, when authenticated.
	pub fn role(&self) -> Option<stroyka_rbac_core::Role> {
		self.identity().map(|i| i.role)
	}
}

/// Orchestrates login, logout and silent refresh against the Auth Endpoint.
///
/// No other component writes the token store; everything else observes
/// tokens only indirectly through [`SessionManager::state`].
#[derive(Debug)]
pub struct SessionManager<S: TokenStore> {
	api: AuthApi,
	store: Arc<S>,
	state: Arc<RwLock<SessionState>>,
	// Serializes bootstrap/refresh so overlapping triggers converge on one
	// outcome instead of racing the store.
	inflight: Arc<Mutex<()>>,
}

impl<S: TokenStore> Clone for SessionManager<S> {
	fn clone(&self) -> Self {
		Self {
			api: self.api.clone(),
			store: Arc::clone(&self.store),
			state: Arc::clone(&self.state),
			inflight: Arc::clone(&self.inflight),
		}
	}
}

impl<S: TokenStore> SessionManager<S> {
	/// Create a manager in the `Uninitialized` state.
	pub fn new(api: AuthApi, store: Arc<S>) -> Self {
		Self {
			api,
			store,
			state: Arc::new(RwLock::new(SessionState::Uninitialized)),
			inflight: Arc::new(Mutex::new(())),
		}
	}

	/// Snapshot of the current state.
	pub async fn state(&self) -> SessionState {
		self.state.read().await.clone()
	}

	/// True until the first bootstrap (or a re-sync) settles.
	pub async fn is_loading(&self) -> bool {
		self.state.read().await.is_loading()
	}

	/// The authenticated identity, if any.
	pub async fn identity(&self) -> Option<Identity> {
		self.state.read().await.identity().cloned()
	}

	/// Establish the session from whatever the token store holds.
	///
	/// Runs on first mount / page load. Ends in `Authenticated` or
	/// `Anonymous`; every failure along the way clears the store and
	/// degrades, nothing propagates.
	pub async fn bootstrap(&self) {
		let _guard = self.inflight.lock().await;
		self.bootstrap_inner().await;
	}

	/// Re-run bootstrap (e.g. after a profile edit changed the identity).
	pub async fn refresh_auth(&self) {
		let _guard = self.inflight.lock().await;
		self.bootstrap_inner().await;
	}

	async fn bootstrap_inner(&self) {
		self.set_state(SessionState::Loading).await;

		let pair = match self.store.load().await {
			Ok(Some(pair)) => pair,
			Ok(None) => {
				debug!("no stored credentials, session is anonymous");
				self.set_state(SessionState::Anonymous).await;
				return;
			}
			Err(e) => {
				warn!(error = %e, "token store unreadable, session is anonymous");
				self.set_state(SessionState::Anonymous).await;
				return;
			}
		};

		let pair = if claims::is_expired(&pair.access) {
			debug!("stored access token expired, attempting refresh");
			match self.refresh_inner(&pair).await {
				Some(fresh) => fresh,
				None => {
					self.clear_store().await;
					self.set_state(SessionState::Anonymous).await;
					return;
				}
			}
		} else {
			pair
		};

		match self.api.profile(&pair.access).await {
			Ok(identity) => {
				info!(user_id = identity.id, role = %identity.role, "session established");
				self.set_state(SessionState::Authenticated(identity)).await;
			}
			Err(e) => {
				// Unreachable server and rejected token degrade identically.
				debug!(error = %e, "profile fetch failed, degrading to anonymous");
				self.clear_store().await;
				self.set_state(SessionState::Anonymous).await;
			}
		}
	}

	/// Authenticate with phone and password.
	///
	/// On success the new pair is stored and the state becomes
	/// `Authenticated`. On failure the error is returned for the login form
	/// to display and nothing changes.
	pub async fn login(
		&self,
		phone: &str,
		password: &SecretString,
	) -> Result<Identity, SessionError> {
		let grant = self.api.login(phone, password).await?;
		self.adopt_grant(grant).await
	}

	/// Register a new organization and its first owner user.
	///
	/// The response is handled exactly like a login grant.
	pub async fn register(&self, request: &RegisterRequest) -> Result<Identity, SessionError> {
		let grant = self.api.register(request).await?;
		self.adopt_grant(grant).await
	}

	async fn adopt_grant(&self, grant: crate::api::AuthGrant) -> Result<Identity, SessionError> {
		if let Err(e) = self.store.save(&grant.tokens).await {
			warn!(error = %e, "failed to persist credentials");
		}

		let identity = match grant.identity {
			Some(identity) => identity,
			None => match self.api.profile(&grant.tokens.access).await {
				Ok(identity) => identity,
				Err(e) => {
					// A grant we cannot turn into an identity is not a
					// session; drop the pair rather than keep half a login.
					self.clear_store().await;
					self.set_state(SessionState::Anonymous).await;
					return Err(e);
				}
			},
		};

		info!(user_id = identity.id, role = %identity.role, "logged in");
		self.set_state(SessionState::Authenticated(identity.clone()))
			.await;
		Ok(identity)
	}

	/// Obtain a fresh pair using the stored refresh token.
	///
	/// Returns the new access token, or `None` when no refresh token is
	/// stored or the exchange failed. The store is only written on success.
	pub async fn refresh(&self) -> Option<SecretString> {
		let _guard = self.inflight.lock().await;

		let pair = match self.store.load().await {
			Ok(Some(pair)) => pair,
			_ => return None,
		};

		self.refresh_inner(&pair)
			.await
			.map(|fresh| fresh.access)
	}

	async fn refresh_inner(&self, current: &TokenPair) -> Option<TokenPair> {
		match self.api.refresh(&current.refresh).await {
			Ok(fresh) => {
				if let Err(e) = self.store.save(&fresh).await {
					warn!(error = %e, "failed to persist refreshed credentials");
				}
				debug!("token pair refreshed");
				Some(fresh)
			}
			Err(e) => {
				debug!(error = %e, "token refresh failed");
				None
			}
		}
	}

	/// Drop the session locally: clear the store, become anonymous.
	///
	/// Never calls the server; this only revokes the client's own copy.
	pub async fn logout(&self) {
		self.clear_store().await;
		self.set_state(SessionState::Anonymous).await;
		info!("logged out");
	}

	async fn clear_store(&self) {
		if let Err(e) = self.store.clear().await {
			warn!(error = %e, "failed to clear token store");
		}
	}

	async fn set_state(&self, next: SessionState) {
		*self.state.write().await = next;
	}
}
