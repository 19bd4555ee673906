//! `reqwest` integration for the authorizer.
//!
//! [`ProxySelector::into_reqwest_proxy`] turns a selector into a [`reqwest::Proxy`], and
//! [`Authorizer::client_builder`] preloads a [`ReqwestClientBuilder`] with it. Requests are
//! authorized separately through [`Authorizer::authorize`], which accepts a built
//! [`reqwest::Request`].

// crates.io
use reqwest::Proxy;
// self
use crate::{
	_prelude::*,
	Authorizer,
	auth::TokenError,
	obs,
	proxy::{ProxyError, ProxySelector},
};

// Loopback port 0 refuses every connection, so a request routed here fails instead of
// leaving without its proxy.
const REFUSING_PROXY: &str = "http://127.0.0.1:0";

impl ProxySelector {
	/// Adapts the selector to a [`reqwest::Proxy`].
	///
	/// `reqwest` cannot fail a request from its proxy callback, so a selection error routes the
	/// request to a proxy that refuses connections; the request fails with a connect error and
	/// the cause is reported through [`obs::trace_proxy_failure`].
	pub fn into_reqwest_proxy(self) -> Proxy {
		Proxy::custom(move |target| match self.select(target) {
			Ok(proxy) => proxy.map(String::from),
			Err(e) => {
				obs::trace_proxy_failure(target, &e);

				Some(REFUSING_PROXY.to_owned())
			},
		})
	}
}

impl Authorizer {
	/// Returns a client builder routed through the current proxy selector.
	///
	/// Malformed proxy values are rejected here rather than on the first request. Installing
	/// the selector disables `reqwest`'s own system proxy discovery. Rebuild the client after
	/// configuration changes; the selector is captured once.
	pub fn client_builder(&self) -> Result<ReqwestClientBuilder, ProxyError> {
		self.validate_proxy_config()?;

		Ok(ReqwestClient::builder().proxy(self.system_or_configured_proxy().into_reqwest_proxy()))
	}

	/// Builds and authorizes a request in one step.
	pub fn authorized_request(
		&self,
		method: reqwest::Method,
		url: Url,
	) -> Result<ReqwestRequest, TokenError> {
		let mut request = ReqwestRequest::new(method, url);

		self.authorize(&mut request)?;

		Ok(request)
	}
}
