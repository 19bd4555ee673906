//! Configuration snapshots read by the authorizer and the provider contracts that serve them.
//!
//! Configurators are polled on demand; the authorizer never caches what they return, so a
//! replaced snapshot takes effect on the next call.

pub mod memory;

pub use memory::MemoryConfigurator;

// self
use crate::_prelude::*;

/// Read-only provider of the secret-scoped snapshot.
pub trait SecretConfigurator
where
	Self: Send + Sync,
{
	/// Returns the current secret snapshot. Must not block.
	fn config(&self) -> SecretConfig;
}

/// Read-only provider of the cluster-scoped snapshot.
pub trait ClusterConfigurator
where
	Self: Send + Sync,
{
	/// Returns the current cluster snapshot, or `None` before any configuration was loaded.
	fn config(&self) -> Option<ClusterConfig>;
}

/// Secret-scoped snapshot carrying the cluster authorization token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretConfig {
	/// Raw token as stored in the secret; empty means "not configured".
	pub token: String,
}
impl SecretConfig {
	/// Builds a snapshot holding the provided raw token.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: token.into() }
	}
}
impl Debug for SecretConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let token = if self.token.is_empty() { "<empty>" } else { "<redacted>" };

		f.debug_struct("SecretConfig").field("token", &token).finish()
	}
}

/// Cluster-scoped snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterConfig {
	/// Explicit proxy overrides.
	pub proxy: ProxySettings,
}
impl ClusterConfig {
	/// Builds a snapshot around the provided proxy settings.
	pub fn with_proxy(proxy: ProxySettings) -> Self {
		Self { proxy }
	}
}

/// Explicit proxy settings; any non-empty field disables environment discovery entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProxySettings {
	/// Proxy used for `http` targets.
	pub http_proxy: String,
	/// Proxy used for `https` targets.
	pub https_proxy: String,
	/// Comma-separated exclusions (hosts, domains, IPs, CIDR blocks).
	pub no_proxy: String,
}
impl ProxySettings {
	/// Returns `true` when no field is set.
	pub fn is_empty(&self) -> bool {
		self.http_proxy.is_empty() && self.https_proxy.is_empty() && self.no_proxy.is_empty()
	}
}
