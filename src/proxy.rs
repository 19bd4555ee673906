//! Proxy selection functions handed to the HTTP transport.
//!
//! A [`ProxySelector`] answers one question per outgoing request: which proxy, if any, should
//! carry traffic to this URL. Selectors are built either from explicit settings
//! ([`ProxyConfig`]) or from the process environment ([`environment_proxy`]), optionally
//! decorated with CIDR-aware `NO_PROXY` handling ([`with_no_proxy_cidrs`]).

pub mod config;
pub mod env;

pub use config::*;
pub use env::*;

// self
use crate::_prelude::*;

/// Signature shared by every proxy selection strategy.
pub type ProxyFn = dyn Fn(&Url) -> Result<Option<Url>, ProxyError> + Send + Sync;

/// Failures raised while selecting a proxy.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ProxyError {
	/// A configured proxy value is not a URL, even after assuming `http://`.
	#[error("Invalid proxy address `{value}`.")]
	InvalidUrl {
		/// Raw configured value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The target URL cannot be expressed as an HTTP request URI.
	#[error("Target `{target}` is not a valid request URI.")]
	InvalidTarget {
		/// Serialized target URL.
		target: String,
	},
	/// `HTTP_PROXY` can be injected through the `Proxy` request header under CGI.
	#[error("Refusing to use HTTP_PROXY in a CGI environment.")]
	CgiEnvironment,
}

/// Cloneable, thread-safe proxy selection function.
///
/// A selector closes over the values captured when it was built; rebuild it after configuration
/// changes.
#[derive(Clone)]
pub struct ProxySelector(Arc<ProxyFn>);
impl ProxySelector {
	/// Wraps a selection function.
	pub fn new<F>(f: F) -> Self
	where
		F: 'static + Fn(&Url) -> Result<Option<Url>, ProxyError> + Send + Sync,
	{
		Self(Arc::new(f))
	}

	/// Selector that never routes through a proxy.
	pub fn direct() -> Self {
		Self::new(|_| Ok(None))
	}

	/// Returns the proxy for `target`, or `None` to connect directly.
	pub fn select(&self, target: &Url) -> Result<Option<Url>, ProxyError> {
		(self.0)(target)
	}

	/// Returns the proxy for the request's URL.
	pub fn select_for(&self, request: &ReqwestRequest) -> Result<Option<Url>, ProxyError> {
		self.select(request.url())
	}
}
impl Debug for ProxySelector {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ProxySelector(..)")
	}
}

/// Extracts a literal IP from the URL host, normalizing IPv4-mapped IPv6 addresses.
pub(crate) fn host_ip(target: &Url) -> Option<IpAddr> {
	match target.host()? {
		Host::Ipv4(ip) => Some(IpAddr::V4(ip)),
		Host::Ipv6(ip) => Some(IpAddr::V6(ip).to_canonical()),
		Host::Domain(domain) => domain.parse::<IpAddr>().ok().map(|ip| ip.to_canonical()),
	}
}
