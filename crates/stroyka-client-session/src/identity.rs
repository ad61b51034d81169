// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The authenticated user's profile.

use serde::{Deserialize, Serialize};
use stroyka_rbac_core::Role;

/// Profile of the authenticated user, as the backend reports it.
///
/// Owned exclusively by the session manager and always re-fetched live;
/// persisting it would let the role go stale relative to server-side
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
	/// Backend user id.
	pub id: i64,
	/// Display name.
	pub full_name: String,
	/// Phone number used as the login identifier.
	pub phone: String,
	/// The user's single role, assigned server-side.
	pub role: Role,
	/// Organization (tenant) the user belongs to.
	pub org_id: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_backend_camel_case() {
		let json = r#"{
			"id": 7,
			"fullName": "Alisher Usmonov",
			"phone": "+998901234567",
			"role": "PRORAB",
			"orgId": 3
		}"#;

		let identity: Identity = serde_json::from_str(json).unwrap();
		assert_eq!(identity.id, 7);
		assert_eq!(identity.full_name, "Alisher Usmonov");
		assert_eq!(identity.role, Role::Prorab);
		assert_eq!(identity.org_id, 3);
	}

	#[test]
	fn unknown_role_tag_fails_deserialization() {
		let json = r#"{"id":1,"fullName":"x","phone":"y","role":"INTERN","orgId":1}"#;
		assert!(serde_json::from_str::<Identity>(json).is_err());
	}
}
