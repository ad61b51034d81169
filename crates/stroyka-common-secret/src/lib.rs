// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper for bearer credentials and passwords.
//!
//! Access and refresh tokens flow through most of the client core, and a
//! single stray `{:?}` would put them into logs. [`Secret<T>`] makes that
//! impossible without an explicit `.expose()` call:
//!
//! - Debug/Display always print `[REDACTED]`
//! - Serialize always emits `"[REDACTED]"` (persisted forms deserialize into
//!   the wrapper but never serialize out of it)
//! - the inner value is zeroized on drop
//!
//! # Example
//!
//! ```
//! use stroyka_common_secret::SecretString;
//!
//! let access = SecretString::new("eyJhbGciOi...".to_string());
//! assert_eq!(format!("{access}"), "[REDACTED]");
//! assert_eq!(access.expose(), "eyJhbGciOi...");
//! ```

use std::fmt;
use zeroize::Zeroize;

/// Placeholder emitted everywhere a secret would otherwise appear.
pub const REDACTED: &str = "[REDACTED]";

/// Wrapper that hides a sensitive value from every formatting path.
///
/// There is intentionally no `Deref` impl; call [`Secret::expose`] so that
/// secret access stays visible in code review.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// Alias for the common case of secret strings (tokens, passwords).
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	/// Wrap a sensitive value.
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Explicitly access the inner value.
	pub fn expose(&self) -> &T {
		&self.inner
	}

	/// Clone the inner value out of the wrapper.
	///
	/// Cloning (rather than moving) keeps the zeroization guarantee on the
	/// wrapper's own memory intact.
	pub fn into_inner(self) -> T
	where
		T: Clone,
	{
		self.inner.clone()
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

impl<T> serde::Serialize for Secret<T>
where
	T: Zeroize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de, T> serde::Deserialize<'de> for Secret<T>
where
	T: serde::Deserialize<'de> + Zeroize,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Secret::new(T::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	mod formatting {
		use super::*;

		#[test]
		fn debug_is_redacted() {
			let token = Secret::new("rt_4f7c9d2e".to_string());
			let out = format!("{token:?}");
			assert!(!out.contains("rt_4f7c9d2e"));
			assert!(out.contains(REDACTED));
		}

		#[test]
		fn display_is_redacted() {
			let token = Secret::new("rt_4f7c9d2e".to_string());
			assert_eq!(format!("{token}"), REDACTED);
		}

		#[test]
		fn option_secret_debug_is_redacted() {
			let token: Option<SecretString> = Some(Secret::new("pw123456".to_string()));
			let out = format!("{token:?}");
			assert!(out.contains(REDACTED));
			assert!(!out.contains("pw123456"));
		}
	}

	mod access {
		use super::*;

		#[test]
		fn expose_returns_inner_value() {
			let token = SecretString::new("at_access".to_string());
			assert_eq!(token.expose(), "at_access");
		}

		#[test]
		fn into_inner_returns_owned_value() {
			let token = SecretString::new("at_access".to_string());
			assert_eq!(token.into_inner(), "at_access");
		}

		#[test]
		fn equality_compares_inner_values() {
			assert_eq!(
				SecretString::new("a".to_string()),
				SecretString::new("a".to_string())
			);
			assert_ne!(
				SecretString::new("a".to_string()),
				SecretString::new("b".to_string())
			);
		}
	}

	mod serde_behaviour {
		use super::*;

		#[test]
		fn serialize_is_redacted() {
			let token = SecretString::new("super-secret".to_string());
			let json = serde_json::to_string(&token).unwrap();
			assert!(!json.contains("super-secret"));
			assert!(json.contains(REDACTED));
		}

		#[test]
		fn deserialize_populates_secret() {
			let token: SecretString = serde_json::from_str(r#""pw123456""#).unwrap();
			assert_eq!(token.expose(), "pw123456");
		}
	}

	proptest! {
		/// Secrets must never leak through Debug for arbitrary contents.
		#[test]
		fn debug_never_contains_secret(inner in "[a-zA-Z0-9_.-]{4,40}") {
			prop_assume!(!inner.contains("REDACTED"));
			prop_assume!(!inner.contains("Secret"));

			let secret = Secret::new(inner.clone());
			let rendered = format!("{secret:?}");
			prop_assert!(!rendered.contains(&inner));
		}

		/// expose() round-trips whatever went in.
		#[test]
		fn expose_roundtrips(inner in ".*") {
			let secret = Secret::new(inner.clone());
			prop_assert_eq!(secret.expose(), &inner);
		}
	}
}
