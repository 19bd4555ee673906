//! Optional observability helpers for authorizer operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `cluster_authorizer.op` with the `op` and `stage`
//!   fields, plus debug events describing which proxy strategy was chosen and a warning when
//!   a transport has to refuse a request because proxy selection failed.
//! - Enable `metrics` to increment `cluster_authorizer_operation_total` (labeled by `op` +
//!   `outcome`) and `cluster_authorizer_proxy_strategy_total` (labeled by `strategy`).
//!
//! Operations return their errors; nothing here logs them.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Authorizer operations observed by this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Token extraction and validation.
	Token,
	/// Authorization header injection.
	Authorize,
	/// Proxy selector construction.
	ProxySelection,
}
impl OpKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpKind::Token => "token",
			OpKind::Authorize => "authorize",
			OpKind::ProxySelection => "proxy_selection",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded once per operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Proxy strategy picked by [`Authorizer::system_or_configured_proxy`](crate::Authorizer::system_or_configured_proxy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProxyStrategy {
	/// Explicit cluster proxy settings.
	Configured,
	/// Process environment with CIDR-aware `NO_PROXY`.
	Environment,
}
impl ProxyStrategy {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProxyStrategy::Configured => "configured",
			ProxyStrategy::Environment => "environment",
		}
	}
}
impl Display for ProxyStrategy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
