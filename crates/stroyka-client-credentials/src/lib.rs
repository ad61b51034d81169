// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bearer token pair storage for the Stroyka client.
//!
//! The session holds exactly one credential pair (access + refresh). This
//! crate stores that pair as a unit:
//!
//! - **[`TokenStore`] trait**: abstract backend interface
//! - **[`FileTokenStore`]**: JSON file with 0600 permissions and atomic
//!   replace-on-write
//! - **[`MemoryTokenStore`]**: in-memory backend for tests
//!
//! Callers that must never fail on storage trouble (the session manager's
//! bootstrap path) absorb the `Result` themselves: a load error reads as
//! "no pair", a save error is logged and dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! use stroyka_client_credentials::{FileTokenStore, TokenPair, TokenStore};
//!
//! # tokio_test::block_on(async {
//! let store = FileTokenStore::new("~/.config/stroyka/tokens.json");
//! store.save(&TokenPair::new("at_...", "rt_...")).await.unwrap();
//! let pair = store.load().await.unwrap();
//! # });
//! ```

mod error;
mod pair;
mod store;

pub use error::CredentialError;
pub use pair::{PersistedTokenPair, TokenPair};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
