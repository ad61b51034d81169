// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Token pair storage backends.
//!
//! The store is deliberately dumb: it persists the pair as two opaque
//! strings and validates nothing about their shape. Whether a token is
//! usable is the session manager's question, answered elsewhere.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::CredentialError;
use crate::pair::{PersistedTokenPair, TokenPair};

/// Storage backend for the session's token pair.
///
/// The pair is the unit of storage: save and clear act on both credentials
/// at once, so no reachable state holds exactly one of them.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug {
	/// Load the stored pair, if any.
	async fn load(&self) -> Result<Option<TokenPair>, CredentialError>;

	/// Replace the stored pair wholesale.
	async fn save(&self, pair: &TokenPair) -> Result<(), CredentialError>;

	/// Remove the stored pair.
	async fn clear(&self) -> Result<(), CredentialError>;

	/// Check whether a pair is currently stored.
	async fn exists(&self) -> Result<bool, CredentialError> {
		Ok(self.load().await?.is_some())
	}
}

/// File-backed store: one JSON document, restricted permissions.
///
/// Writes go through a temp file and an atomic rename so a crash mid-write
/// never leaves a torn pair on disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
	path: PathBuf,
}

impl FileTokenStore {
	/// Create a store at the given path. Parent directories are created on
	/// first save.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// The path of the credential file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	async fn write_pair(&self, persisted: &PersistedTokenPair) -> Result<(), CredentialError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).await?;
		}

		let contents = serde_json::to_string_pretty(persisted)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = fs::File::create(&temp_path).await?;
		file.write_all(contents.as_bytes()).await?;
		file.sync_all().await?;
		drop(file);

		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			let perms = std::fs::Permissions::from_mode(0o600);
			if let Err(e) = std::fs::set_permissions(&temp_path, perms) {
				warn!(path = ?temp_path, error = %e, "failed to set token file permissions to 0600");
			}
		}

		fs::rename(&temp_path, &self.path).await?;

		debug!(path = ?self.path, "token pair written");
		Ok(())
	}
}

#[async_trait]
impl TokenStore for FileTokenStore {
	async fn load(&self) -> Result<Option<TokenPair>, CredentialError> {
		if !self.path.exists() {
			return Ok(None);
		}

		let contents = fs::read_to_string(&self.path).await?;
		let persisted: PersistedTokenPair = serde_json::from_str(&contents)?;
		Ok(Some(persisted.into()))
	}

	async fn save(&self, pair: &TokenPair) -> Result<(), CredentialError> {
		self.write_pair(&PersistedTokenPair::from(pair)).await
	}

	async fn clear(&self) -> Result<(), CredentialError> {
		match fs::remove_file(&self.path).await {
			Ok(()) => Ok(()),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(e) => Err(e.into()),
		}
	}
}

/// In-memory store for tests and non-persistent contexts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
	pair: tokio::sync::RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
	/// Create a new empty in-memory store.
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
	async fn load(&self) -> Result<Option<TokenPair>, CredentialError> {
		Ok(self.pair.read().await.clone())
	}

	async fn save(&self, pair: &TokenPair) -> Result<(), CredentialError> {
		*self.pair.write().await = Some(pair.clone());
		Ok(())
	}

	async fn clear(&self) -> Result<(), CredentialError> {
		*self.pair.write().await = None;
		Ok(())
	}
}
