// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route access policy: URL path prefix -> roles allowed to enter.
//!
//! Restriction is opt-in: only the prefixes listed in [`ROUTE_POLICY`] are
//! gated, everything else is open to any authenticated role. Matching is
//! plain `starts_with` in declaration order, first hit wins, so a more
//! specific prefix must be declared before a broader one that would shadow
//! it.

use crate::role::{role_satisfies, Role};

/// One authored policy rule.
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicyEntry {
	/// Path prefix, including the leading slash.
	pub prefix: &'static str,
	/// Roles (satisfied directly or through the hierarchy) allowed in.
	pub allowed: &'static [Role],
}

/// The compiled route policy, in match priority order.
pub const ROUTE_POLICY: &[RoutePolicyEntry] = &[
	RoutePolicyEntry {
		prefix: "/settings/organization",
		allowed: &[Role::Boss],
	},
	RoutePolicyEntry {
		prefix: "/warehouse",
		allowed: &[Role::Boss, Role::Direktor, Role::Sklad],
	},
	RoutePolicyEntry {
		prefix: "/finance",
		allowed: &[Role::Boss, Role::Direktor, Role::Bugalter],
	},
	RoutePolicyEntry {
		prefix: "/suppliers",
		allowed: &[Role::Boss, Role::Direktor, Role::Taminot],
	},
	RoutePolicyEntry {
		prefix: "/workers",
		allowed: &[Role::Boss, Role::Direktor, Role::Prorab],
	},
	RoutePolicyEntry {
		prefix: "/transport",
		allowed: &[Role::Boss, Role::Direktor, Role::Taminot, Role::Haydovchi],
	},
	RoutePolicyEntry {
		prefix: "/platform",
		allowed: &[Role::Moderator, Role::Operator, Role::SuperAdmin],
	},
];

/// Decide whether `role` may enter `path`.
///
/// `None` (no authenticated session) denies every path; the authentication
/// gate should already have redirected before this is consulted. A path
/// matching no configured prefix is unrestricted.
pub fn can_access_path(role: Option<Role>, path: &str) -> bool {
	let Some(role) = role else {
		return false;
	};

	match ROUTE_POLICY.iter().find(|e| path.starts_with(e.prefix)) {
		Some(entry) => role_satisfies(role, entry.allowed),
		None => true,
	}
}
