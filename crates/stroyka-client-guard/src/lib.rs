// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session and role gates for navigation.
//!
//! Gates are pure functions from the current [`SessionState`] to a
//! rendering decision; the UI layer executes the decision (show a pending
//! state, render children, or navigate). Two invariants hold everywhere:
//!
//! - `Loading`/`Uninitialized` always yields a pending decision, never a
//!   redirect, so an unfinished bootstrap can't flash unauthorized content
//!   or bounce the user to the login screen by mistake.
//! - Gates never mutate session state and never call the network. Like the
//!   rest of the client core, a denial here is UX, not enforcement; the
//!   backend re-checks everything.

use stroyka_client_session::SessionState;
use stroyka_rbac_core::{can_access_path, role_satisfies, Role};
use tracing::debug;

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";
/// Default target when a role gate denies without a fallback.
pub const HOME_PATH: &str = "/";

/// Decision of the authentication gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthGate {
	/// Bootstrap has not settled; render nothing, navigate nowhere.
	Pending,
	/// Session present; render children.
	Render,
	/// No session; go to login, remembering where the user was headed.
	RedirectToLogin {
		/// The originally requested location, so login can return there.
		return_to: String,
	},
}

/// Require any authenticated session.
pub fn authentication_gate(state: &SessionState, requested_path: &str) -> AuthGate {
	if state.is_loading() {
		return AuthGate::Pending;
	}

	match state.identity() {
		Some(_) => AuthGate::Render,
		None => {
			debug!(path = %requested_path, "unauthenticated, redirecting to login");
			AuthGate::RedirectToLogin {
				return_to: requested_path.to_string(),
			}
		}
	}
}

/// Decision of the role gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleGate {
	/// Bootstrap has not settled.
	Pending,
	/// Role satisfies; render children.
	Render,
	/// Role does not satisfy and the caller supplied a fallback view.
	Fallback,
	/// Role does not satisfy and no fallback exists; navigate away.
	Redirect {
		/// Target route.
		to: String,
	},
}

/// Require the session role to satisfy `allowed`.
///
/// `has_fallback` says whether the call site can render an inline fallback;
/// otherwise denial redirects to `redirect_to` (default `/`).
pub fn role_gate(
	state: &SessionState,
	allowed: &[Role],
	has_fallback: bool,
	redirect_to: Option<&str>,
) -> RoleGate {
	if state.is_loading() {
		return RoleGate::Pending;
	}

	let satisfied = match state.role() {
		Some(role) => role_satisfies(role, allowed),
		None => false,
	};

	if satisfied {
		RoleGate::Render
	} else if has_fallback {
		RoleGate::Fallback
	} else {
		let to = redirect_to.unwrap_or(HOME_PATH).to_string();
		debug!(target = %to, "role gate denied, redirecting");
		RoleGate::Redirect { to }
	}
}

/// Inline show/hide by role, with no navigation side effects.
///
/// The non-reactive sibling of [`role_gate`] for conditional rendering
/// inside an already-authorized screen: it only ever suppresses or shows
/// content. While loading, content is suppressed.
pub fn role_visible(state: &SessionState, allowed: &[Role]) -> bool {
	match state.role() {
		Some(role) => role_satisfies(role, allowed),
		None => false,
	}
}

/// Decision of the combined route gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGate {
	/// Bootstrap has not settled.
	Pending,
	/// Render the routed screen.
	Render,
	/// No session at all.
	RedirectToLogin {
		/// The originally requested location.
		return_to: String,
	},
	/// Authenticated but the route policy denies this role.
	Redirect {
		/// Target route.
		to: String,
	},
}

/// Authentication gate and route access policy in one step.
///
/// The authentication check runs first: an anonymous session is sent to
/// login before the route policy is ever consulted.
pub fn route_gate(state: &SessionState, path: &str) -> RouteGate {
	match authentication_gate(state, path) {
		AuthGate::Pending => RouteGate::Pending,
		AuthGate::RedirectToLogin { return_to } => RouteGate::RedirectToLogin { return_to },
		AuthGate::Render => {
			if can_access_path(state.role(), path) {
				RouteGate::Render
			} else {
				RouteGate::Redirect {
					to: HOME_PATH.to_string(),
				}
			}
		}
	}
}
