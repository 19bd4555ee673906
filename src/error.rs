//! Crate-level error type aggregating token and proxy failures.

// self
use crate::{_prelude::*, auth::TokenError, proxy::ProxyError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// Every variant is terminal from the authorizer's point of view; retry and fallback policy
/// belongs to the caller.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// Bearer token is missing or unusable.
	#[error(transparent)]
	Token(#[from] TokenError),
	/// Proxy selection failed.
	#[error(transparent)]
	Proxy(#[from] ProxyError),
}
impl Error {
	/// Returns `true` when the secret configuration carries no token at all.
	pub fn is_token_not_configured(&self) -> bool {
		matches!(self, Self::Token(e) if e.is_not_configured())
	}

	/// Returns `true` when a configured token was rejected.
	pub fn is_token_invalid(&self) -> bool {
		matches!(self, Self::Token(e) if e.is_invalid())
	}

	/// Returns `true` when a configured proxy value could not be parsed.
	pub fn is_proxy_url_parse(&self) -> bool {
		matches!(self, Self::Proxy(ProxyError::InvalidUrl { .. }))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_errors_keep_their_classification() {
		let not_configured: Error = TokenError::NotConfigured.into();
		let empty: Error = TokenError::Empty.into();

		assert!(not_configured.is_token_not_configured());
		assert!(!not_configured.is_token_invalid());
		assert!(empty.is_token_invalid());
		assert_eq!(empty.to_string(), TokenError::Empty.to_string());
	}

	#[test]
	fn proxy_error_exposes_parse_source() {
		let source = url::ParseError::InvalidPort;
		let error: Error = ProxyError::InvalidUrl { value: "http://p:99999".into(), source }.into();

		assert!(error.is_proxy_url_parse());

		let inner = StdError::source(&error).expect("Transparent error should forward the source.");

		assert_eq!(inner.to_string(), source.to_string());
	}
}
