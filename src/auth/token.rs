//! Validated bearer token that keeps secret material out of logs.

// self
use crate::_prelude::*;

/// Reasons a token cannot be used for authorization.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum TokenError {
	/// The secret configuration carries no token value.
	#[error("Cluster authorization token is not configured.")]
	NotConfigured,
	/// The token contains a carriage return or line feed.
	#[error("Cluster authorization token is not valid: contains newlines.")]
	ContainsNewlines,
	/// The token is whitespace only.
	#[error("Cluster authorization token is empty.")]
	Empty,
	/// The token contains bytes that cannot appear in an HTTP header value.
	#[error("Cluster authorization token is not valid: contains characters not allowed in a header.")]
	InvalidHeaderValue,
}
impl TokenError {
	/// Returns `true` for the "no token at all" case.
	pub const fn is_not_configured(&self) -> bool {
		matches!(self, Self::NotConfigured)
	}

	/// Returns `true` when a token was present but rejected.
	pub const fn is_invalid(&self) -> bool {
		!self.is_not_configured()
	}
}

/// Trimmed bearer token that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);
impl BearerToken {
	/// Validates the raw token as read from the secret configuration.
	///
	/// The "not configured" check runs on the raw value and the emptiness check on the trimmed
	/// value, so a whitespace-only token reports [`TokenError::Empty`].
	pub fn from_raw(raw: &str) -> Result<Self, TokenError> {
		if raw.is_empty() {
			return Err(TokenError::NotConfigured);
		}

		let token = raw.trim();

		if token.contains(['\n', '\r']) {
			return Err(TokenError::ContainsNewlines);
		}
		if token.is_empty() {
			return Err(TokenError::Empty);
		}

		Ok(Self(token.to_owned()))
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Builds the `Bearer <token>` header value, flagged as sensitive.
	pub fn header_value(&self) -> Result<HeaderValue, TokenError> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
			.map_err(|_| TokenError::InvalidHeaderValue)?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl AsRef<str> for BearerToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn surrounding_whitespace_is_trimmed() {
		for raw in ["abc", "  abc", "abc\t", "\n abc \r\n", "\u{a0}abc\u{2003}"] {
			let token = BearerToken::from_raw(raw).expect("Token with padding should validate.");

			assert_eq!(token.expose(), "abc", "raw token {raw:?}");
		}
	}

	#[test]
	fn empty_raw_value_is_not_configured() {
		assert_eq!(BearerToken::from_raw(""), Err(TokenError::NotConfigured));
	}

	#[test]
	fn whitespace_only_is_empty_rather_than_missing() {
		let err = BearerToken::from_raw("   ").expect_err("Blank token must be rejected.");

		assert_eq!(err, TokenError::Empty);
		assert!(err.is_invalid());
		assert!(!err.is_not_configured());
	}

	#[test]
	fn inner_line_breaks_are_rejected() {
		assert_eq!(BearerToken::from_raw("abc\ndef"), Err(TokenError::ContainsNewlines));
		assert_eq!(BearerToken::from_raw(" abc\rdef "), Err(TokenError::ContainsNewlines));
	}

	#[test]
	fn header_value_is_bearer_and_sensitive() {
		let token = BearerToken::from_raw(" xyz ").expect("Token fixture should validate.");
		let value = token.header_value().expect("Plain token should form a header value.");

		assert_eq!(value, "Bearer xyz");
		assert!(value.is_sensitive());
	}

	#[test]
	fn control_characters_fail_header_construction() {
		let token = BearerToken::from_raw("abc\u{0}def").expect("NUL is not trimmed away.");

		assert_eq!(token.header_value(), Err(TokenError::InvalidHeaderValue));
	}

	#[test]
	fn formatters_redact() {
		let token = BearerToken::from_raw("super-secret").expect("Token fixture should validate.");

		assert_eq!(format!("{token:?}"), "BearerToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
	}
}
