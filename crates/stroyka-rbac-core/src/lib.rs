// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Roles, capabilities and route policy for the Stroyka client core.
//!
//! Everything in this crate is pure data and pure functions: no I/O, no
//! state, no clock. The three tables it compiles in:
//!
//! - the role hierarchy ([`Role::effective_roles`], authored per role)
//! - the permission matrix ([`Capability::allowed_roles`])
//! - the route access policy ([`ROUTE_POLICY`])
//!
//! All of it is advisory, client-side gating. The backend is the authority
//! and re-checks every decision made here; this crate only decides what the
//! UI shows and where navigation is allowed to land.

mod capability;
mod error;
mod role;
mod route;

pub use capability::{has_capability, Capability};
pub use error::RbacError;
pub use role::{role_satisfies, Role};
pub use route::{can_access_path, RoutePolicyEntry, ROUTE_POLICY};
