//! Thread-safe in-memory configurator for embedders without a live configuration watcher, and
//! for tests.

// self
use crate::{
	_prelude::*,
	config::{ClusterConfig, ClusterConfigurator, SecretConfig, SecretConfigurator},
};

/// Shared snapshot holder; clones observe the same value.
#[derive(Debug, Default)]
pub struct MemoryConfigurator<T>(Arc<RwLock<T>>);
impl<T> MemoryConfigurator<T> {
	/// Wraps the initial snapshot.
	pub fn new(value: T) -> Self {
		Self(Arc::new(RwLock::new(value)))
	}

	/// Replaces the snapshot, returning the previous one.
	pub fn replace(&self, value: T) -> T {
		std::mem::replace(&mut *self.0.write(), value)
	}

	/// Mutates the snapshot in place.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.0.write());
	}

	/// Returns a copy of the current snapshot.
	pub fn snapshot(&self) -> T
	where
		T: Clone,
	{
		self.0.read().clone()
	}
}
impl<T> Clone for MemoryConfigurator<T> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}
impl SecretConfigurator for MemoryConfigurator<SecretConfig> {
	fn config(&self) -> SecretConfig {
		self.snapshot()
	}
}
impl ClusterConfigurator for MemoryConfigurator<ClusterConfig> {
	fn config(&self) -> Option<ClusterConfig> {
		Some(self.snapshot())
	}
}
impl ClusterConfigurator for MemoryConfigurator<Option<ClusterConfig>> {
	fn config(&self) -> Option<ClusterConfig> {
		self.snapshot()
	}
}
