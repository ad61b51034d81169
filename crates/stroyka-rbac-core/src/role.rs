// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role enumeration and the role hierarchy.
//!
//! A user carries exactly one [`Role`], assigned server-side and immutable
//! from the client's point of view. The hierarchy below is authored data:
//! each role lists the roles whose capabilities it covers, explicitly and
//! non-transitively. Expanding the lists through a graph traversal would
//! silently widen grants the backend never issued, so don't.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All roles known to the platform.
///
/// Wire values are the backend's uppercase tags (`"PRORAB"`, `"SKLAD"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	/// Organization owner; covers every operational role.
	Boss,
	/// Director; day-to-day management across departments.
	Direktor,
	/// Accountant; finance entries and payment approval.
	Bugalter,
	/// Technical control department; estimates and acceptance.
	Pto,
	/// Supply officer; purchase requests and suppliers.
	Taminot,
	/// Warehouse keeper; material receipt and issue.
	Sklad,
	/// Site foreman; requests materials, manages site workers.
	Prorab,
	/// Driver; transport and delivery tasks.
	Haydovchi,
	/// Platform moderator; reviews tenant content.
	Moderator,
	/// Platform operator; tenant onboarding and support.
	Operator,
	/// Platform super admin; covers everything.
	SuperAdmin,
}

impl Role {
	/// Returns all roles, in declaration order.
	pub fn all() -> &'static [Role] {
		&[
			Role::Boss,
			Role::Direktor,
			Role::Bugalter,
			Role::Pto,
			Role::Taminot,
			Role::Sklad,
			Role::Prorab,
			Role::Haydovchi,
			Role::Moderator,
			Role::Operator,
			Role::SuperAdmin,
		]
	}

	/// The organization-level operational roles (no platform staff).
	pub fn operational() -> &'static [Role] {
		&[
			Role::Boss,
			Role::Direktor,
			Role::Bugalter,
			Role::Pto,
			Role::Taminot,
			Role::Sklad,
			Role::Prorab,
			Role::Haydovchi,
		]
	}

	/// The role itself plus every role it inherits.
	///
	/// Authored per role; deliberately not computed transitively.
	pub fn effective_roles(&self) -> &'static [Role] {
		match self {
			Role::Boss => &[
				Role::Boss,
				Role::Direktor,
				Role::Bugalter,
				Role::Pto,
				Role::Taminot,
				Role::Sklad,
				Role::Prorab,
				Role::Haydovchi,
			],
			Role::Direktor => &[
				Role::Direktor,
				Role::Bugalter,
				Role::Pto,
				Role::Taminot,
				Role::Sklad,
				Role::Prorab,
				Role::Haydovchi,
			],
			Role::Bugalter => &[Role::Bugalter],
			Role::Pto => &[Role::Pto],
			Role::Taminot => &[Role::Taminot],
			Role::Sklad => &[Role::Sklad],
			Role::Prorab => &[Role::Prorab],
			Role::Haydovchi => &[Role::Haydovchi],
			Role::Moderator => &[Role::Moderator],
			Role::Operator => &[Role::Operator, Role::Moderator],
			Role::SuperAdmin => &[
				Role::SuperAdmin,
				Role::Operator,
				Role::Moderator,
				Role::Boss,
				Role::Direktor,
				Role::Bugalter,
				Role::Pto,
				Role::Taminot,
				Role::Sklad,
				Role::Prorab,
				Role::Haydovchi,
			],
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Boss => write!(f, "BOSS"),
			Role::Direktor => write!(f, "DIREKTOR"),
			Role::Bugalter => write!(f, "BUGALTER"),
			Role::Pto => write!(f, "PTO"),
			Role::Taminot => write!(f, "TAMINOT"),
			Role::Sklad => write!(f, "SKLAD"),
			Role::Prorab => write!(f, "PRORAB"),
			Role::Haydovchi => write!(f, "HAYDOVCHI"),
			Role::Moderator => write!(f, "MODERATOR"),
			Role::Operator => write!(f, "OPERATOR"),
			Role::SuperAdmin => write!(f, "SUPER_ADMIN"),
		}
	}
}

impl std::str::FromStr for Role {
	type Err = crate::error::RbacError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"BOSS" => Ok(Role::Boss),
			"DIREKTOR" => Ok(Role::Direktor),
			"BUGALTER" => Ok(Role::Bugalter),
			"PTO" => Ok(Role::Pto),
			"TAMINOT" => Ok(Role::Taminot),
			"SKLAD" => Ok(Role::Sklad),
			"PRORAB" => Ok(Role::Prorab),
			"HAYDOVCHI" => Ok(Role::Haydovchi),
			"MODERATOR" => Ok(Role::Moderator),
			"OPERATOR" => Ok(Role::Operator),
			"SUPER_ADMIN" => Ok(Role::SuperAdmin),
			other => Err(crate::error::RbacError::UnknownRole(other.to_string())),
		}
	}
}

/// Returns true if `role` may act on behalf of any role in `allowed`.
///
/// Direct membership always satisfies; otherwise the role's effective set
/// must intersect `allowed`.
pub fn role_satisfies(role: Role, allowed: &[Role]) -> bool {
	if allowed.contains(&role) {
		return true;
	}
	role.effective_roles().iter().any(|r| allowed.contains(r))
}
