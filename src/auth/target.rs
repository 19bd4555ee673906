//! Header-carrying values that [`Authorizer::authorize`](crate::Authorizer::authorize) can
//! write into.

// self
use crate::_prelude::*;

/// Anything that exposes a mutable header collection for an outgoing request.
///
/// The authorizer only writes the `Authorization` header; it never reads headers back.
pub trait AuthorizationTarget {
	/// Returns the header collection, creating it first if the target has none yet.
	fn headers_mut(&mut self) -> &mut HeaderMap;
}
impl AuthorizationTarget for HeaderMap {
	fn headers_mut(&mut self) -> &mut HeaderMap {
		self
	}
}
impl AuthorizationTarget for Option<HeaderMap> {
	fn headers_mut(&mut self) -> &mut HeaderMap {
		self.get_or_insert_with(HeaderMap::new)
	}
}
impl AuthorizationTarget for ReqwestRequest {
	fn headers_mut(&mut self) -> &mut HeaderMap {
		ReqwestRequest::headers_mut(self)
	}
}
