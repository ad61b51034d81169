// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The permission matrix: capability -> roles allowed to exercise it.
//!
//! Both sides of the matrix are closed enums, so a typo in a capability key
//! or a role missing from an entry is a compile error rather than a silent
//! "denied". The matrix is compiled into the client and is advisory only:
//! it decides what the UI offers, the backend independently enforces every
//! capability on every request.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named permission gated by role membership.
///
/// Display/serde form is `resource:action` (e.g. `project:create`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
	/// Create a construction project.
	#[serde(rename = "project:create")]
	ProjectCreate,
	/// Edit project details and estimates.
	#[serde(rename = "project:edit")]
	ProjectEdit,
	/// Archive or delete a project.
	#[serde(rename = "project:delete")]
	ProjectDelete,
	/// Raise a material purchase request.
	#[serde(rename = "request:create")]
	RequestCreate,
	/// Approve or reject a purchase request.
	#[serde(rename = "request:approve")]
	RequestApprove,
	/// Record material receipt into a warehouse.
	#[serde(rename = "warehouse:receive")]
	WarehouseReceive,
	/// Issue material from a warehouse to a site.
	#[serde(rename = "warehouse:issue")]
	WarehouseIssue,
	/// Manage the supplier directory.
	#[serde(rename = "supplier:manage")]
	SupplierManage,
	/// Manage site workers and attendance.
	#[serde(rename = "worker:manage")]
	WorkerManage,
	/// View finance entries and balances.
	#[serde(rename = "finance:view")]
	FinanceView,
	/// Create or edit finance entries.
	#[serde(rename = "finance:edit")]
	FinanceEdit,
	/// Manage transport and delivery assignments.
	#[serde(rename = "transport:manage")]
	TransportManage,
	/// Invite or remove organization members.
	#[serde(rename = "org:members")]
	OrgMembers,
	/// Edit organization settings.
	#[serde(rename = "org:settings")]
	OrgSettings,
	/// Moderate tenant content (platform staff).
	#[serde(rename = "platform:moderate")]
	PlatformModerate,
	/// Onboard and administer tenants (platform staff).
	#[serde(rename = "platform:tenants")]
	PlatformTenants,
}

impl Capability {
	/// Returns all capabilities, in declaration order.
	pub fn all() -> &'static [Capability] {
		&[
			Capability::ProjectCreate,
			Capability::ProjectEdit,
			Capability::ProjectDelete,
			Capability::RequestCreate,
			Capability::RequestApprove,
			Capability::WarehouseReceive,
			Capability::WarehouseIssue,
			Capability::SupplierManage,
			Capability::WorkerManage,
			Capability::FinanceView,
			Capability::FinanceEdit,
			Capability::TransportManage,
			Capability::OrgMembers,
			Capability::OrgSettings,
			Capability::PlatformModerate,
			Capability::PlatformTenants,
		]
	}

	/// The roles allowed to exercise this capability.
	///
	/// This is the authored matrix; owner roles are listed explicitly so the
	/// table reads as the full grant, not as hierarchy shorthand.
	pub fn allowed_roles(&self) -> &'static [Role] {
		match self {
			Capability::ProjectCreate => &[Role::Boss, Role::Direktor, Role::SuperAdmin],
			Capability::ProjectEdit => &[Role::Boss, Role::Direktor, Role::Pto, Role::SuperAdmin],
			Capability::ProjectDelete => &[Role::Boss, Role::SuperAdmin],
			Capability::RequestCreate => &[
				Role::Boss,
				Role::Direktor,
				Role::Prorab,
				Role::Taminot,
				Role::SuperAdmin,
			],
			Capability::RequestApprove => &[Role::Boss, Role::Direktor, Role::Taminot, Role::SuperAdmin],
			Capability::WarehouseReceive => &[Role::Boss, Role::Direktor, Role::Sklad, Role::SuperAdmin],
			Capability::WarehouseIssue => &[Role::Boss, Role::Direktor, Role::Sklad, Role::SuperAdmin],
			Capability::SupplierManage => &[Role::Boss, Role::Direktor, Role::Taminot, Role::SuperAdmin],
			Capability::WorkerManage => &[Role::Boss, Role::Direktor, Role::Prorab, Role::SuperAdmin],
			Capability::FinanceView => &[Role::Boss, Role::Direktor, Role::Bugalter, Role::SuperAdmin],
			Capability::FinanceEdit => &[Role::Boss, Role::Bugalter, Role::SuperAdmin],
			Capability::TransportManage => &[
				Role::Boss,
				Role::Direktor,
				Role::Taminot,
				Role::Haydovchi,
				Role::SuperAdmin,
			],
			Capability::OrgMembers => &[Role::Boss, Role::Direktor, Role::SuperAdmin],
			Capability::OrgSettings => &[Role::Boss, Role::SuperAdmin],
			Capability::PlatformModerate => &[Role::Moderator, Role::Operator, Role::SuperAdmin],
			Capability::PlatformTenants => &[Role::Operator, Role::SuperAdmin],
		}
	}
}

impl fmt::Display for Capability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Capability::ProjectCreate => write!(f, "project:create"),
			Capability::ProjectEdit => write!(f, "project:edit"),
			Capability::ProjectDelete => write!(f, "project:delete"),
			Capability::RequestCreate => write!(f, "request:create"),
			Capability::RequestApprove => write!(f, "request:approve"),
			Capability::WarehouseReceive => write!(f, "warehouse:receive"),
			Capability::WarehouseIssue => write!(f, "warehouse:issue"),
			Capability::SupplierManage => write!(f, "supplier:manage"),
			Capability::WorkerManage => write!(f, "worker:manage"),
			Capability::FinanceView => write!(f, "finance:view"),
			Capability::FinanceEdit => write!(f, "finance:edit"),
			Capability::TransportManage => write!(f, "transport:manage"),
			Capability::OrgMembers => write!(f, "org:members"),
			Capability::OrgSettings => write!(f, "org:settings"),
			Capability::PlatformModerate => write!(f, "platform:moderate"),
			Capability::PlatformTenants => write!(f, "platform:tenants"),
		}
	}
}

impl std::str::FromStr for Capability {
	type Err = crate::error::RbacError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"project:create" => Ok(Capability::ProjectCreate),
			"project:edit" => Ok(Capability::ProjectEdit),
			"project:delete" => Ok(Capability::ProjectDelete),
			"request:create" => Ok(Capability::RequestCreate),
			"request:approve" => Ok(Capability::RequestApprove),
			"warehouse:receive" => Ok(Capability::WarehouseReceive),
			"warehouse:issue" => Ok(Capability::WarehouseIssue),
			"supplier:manage" => Ok(Capability::SupplierManage),
			"worker:manage" => Ok(Capability::WorkerManage),
			"finance:view" => Ok(Capability::FinanceView),
			"finance:edit" => Ok(Capability::FinanceEdit),
			"transport:manage" => Ok(Capability::TransportManage),
			"org:members" => Ok(Capability::OrgMembers),
			"org:settings" => Ok(Capability::OrgSettings),
			"platform:moderate" => Ok(Capability::PlatformModerate),
			"platform:tenants" => Ok(Capability::PlatformTenants),
			other => Err(crate::error::RbacError::UnknownCapability(other.to_string())),
		}
	}
}

/// Pure membership test against the compiled matrix.
///
/// No hierarchy expansion happens here; entries grant roles by name.
pub fn has_capability(role: Role, capability: Capability) -> bool {
	capability.allowed_roles().contains(&role)
}

#[cfg(test)]
mod tests {
	use super::*;

	mod matrix {
		use super::*;

		#[test]
		fn warehouse_issue_is_for_warehouse_keepers() {
			assert!(has_capability(Role::Sklad, Capability::WarehouseIssue));
			assert!(has_capability(Role::Boss, Capability::WarehouseIssue));
			assert!(!has_capability(Role::Prorab, Capability::WarehouseIssue));
			assert!(!has_capability(Role::Bugalter, Capability::WarehouseIssue));
		}

		#[test]
		fn foreman_raises_requests_but_cannot_approve() {
			assert!(has_capability(Role::Prorab, Capability::RequestCreate));
			assert!(!has_capability(Role::Prorab, Capability::RequestApprove));
		}

		#[test]
		fn finance_edit_excludes_director() {
			assert!(has_capability(Role::Bugalter, Capability::FinanceEdit));
			assert!(has_capability(Role::Direktor, Capability::FinanceView));
			assert!(!has_capability(Role::Direktor, Capability::FinanceEdit));
		}

		#[test]
		fn platform_capabilities_exclude_tenant_roles() {
			for role in Role::operational() {
				assert!(!has_capability(*role, Capability::PlatformModerate));
				assert!(!has_capability(*role, Capability::PlatformTenants));
			}
		}

		#[test]
		fn every_capability_names_at_least_one_role() {
			for cap in Capability::all() {
				assert!(
					!cap.allowed_roles().is_empty(),
					"{cap} grants nobody, which can only be a table mistake"
				);
			}
		}

		#[test]
		fn super_admin_is_in_every_platform_entry() {
			assert!(has_capability(Role::SuperAdmin, Capability::PlatformModerate));
			assert!(has_capability(Role::SuperAdmin, Capability::PlatformTenants));
		}

		/// The matrix is advisory. Nothing in this crate is a security
		/// boundary; the backend must (and does) re-check every capability.
		/// This test pins that the client table can disagree with a server
		/// decision without anything here pretending otherwise.
		#[test]
		fn matrix_is_client_side_advice_only() {
			// A denied lookup produces a boolean, never an enforcement action.
			let denied = has_capability(Role::Haydovchi, Capability::OrgSettings);
			assert!(!denied);
		}
	}

	mod wire_format {
		use super::*;

		#[test]
		fn serializes_as_resource_action_keys() {
			assert_eq!(
				serde_json::to_string(&Capability::WarehouseIssue).unwrap(),
				"\"warehouse:issue\""
			);
		}

		#[test]
		fn display_matches_serde_key() {
			for cap in Capability::all() {
				let json = serde_json::to_string(cap).unwrap();
				assert_eq!(json, format!("\"{cap}\""));
			}
		}

		#[test]
		fn parses_every_display_form() {
			for cap in Capability::all() {
				assert_eq!(cap.to_string().parse::<Capability>().unwrap(), *cap);
			}
		}

		#[test]
		fn unknown_key_is_an_error() {
			let err = "warehouse:launch".parse::<Capability>().unwrap_err();
			assert!(matches!(
				err,
				crate::error::RbacError::UnknownCapability(ref key) if key == "warehouse:launch"
			));
		}
	}
}
