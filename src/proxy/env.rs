//! Environment-based proxy discovery and the CIDR-aware `NO_PROXY` decorator.

// crates.io
use ipnet::{IpNet, Ipv4Net};
// self
use crate::{
	_prelude::*,
	proxy::{ProxyConfig, ProxySelector, host_ip},
};

/// Source of environment variables.
pub trait ProxyEnvironment
where
	Self: Send + Sync,
{
	/// Returns the variable's value, if set.
	fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;
impl ProxyEnvironment for ProcessEnvironment {
	fn var(&self, key: &str) -> Option<String> {
		std::env::var(key).ok()
	}
}
impl ProxyEnvironment for HashMap<String, String> {
	fn var(&self, key: &str) -> Option<String> {
		self.get(key).cloned()
	}
}

impl ProxyConfig {
	/// Reads `HTTP_PROXY`, `HTTPS_PROXY`, `NO_PROXY` (or their lowercase forms) and
	/// `REQUEST_METHOD`.
	pub fn from_environment(env: &dyn ProxyEnvironment) -> Self {
		Self {
			http_proxy: any_var(env, &["HTTP_PROXY", "http_proxy"]),
			https_proxy: any_var(env, &["HTTPS_PROXY", "https_proxy"]),
			no_proxy: any_var(env, &["NO_PROXY", "no_proxy"]),
			cgi: env.var("REQUEST_METHOD").is_some_and(|method| !method.is_empty()),
		}
	}
}

/// Standard environment resolver; the environment is re-read on every call.
pub fn environment_proxy(env: Arc<dyn ProxyEnvironment>) -> ProxySelector {
	ProxySelector::new(move |target| {
		ProxyConfig::from_environment(env.as_ref()).resolver()?.resolve(target)
	})
}

/// Wraps `delegate` so targets whose literal IP falls inside a `NO_PROXY` CIDR block go direct.
///
/// Only the bypass decision is intercepted; proxy choice stays with `delegate`. The
/// environment is read once, and `delegate` is returned untouched when it lists no CIDR block.
pub fn with_no_proxy_cidrs(delegate: ProxySelector, env: &dyn ProxyEnvironment) -> ProxySelector {
	let cidrs = any_var(env, &["NO_PROXY", "no_proxy"])
		.split(',')
		.filter_map(parse_cidr_sloppy)
		.collect::<Vec<IpNet>>();

	if cidrs.is_empty() {
		return delegate;
	}

	ProxySelector::new(move |target| {
		let excluded = host_ip(target).is_some_and(|ip| cidrs.iter().any(|cidr| cidr.contains(&ip)));

		if excluded {
			return Ok(None);
		}

		delegate.select(target)
	})
}

/// Parses a CIDR block, tolerating leading zeros in IPv4 octets (`010.000.0.0/8`).
pub fn parse_cidr_sloppy(raw: &str) -> Option<IpNet> {
	let raw = raw.trim();

	if !raw.contains('/') {
		return None;
	}
	if let Ok(net) = raw.parse::<IpNet>() {
		return Some(net.trunc());
	}

	let (addr, prefix) = raw.split_once('/')?;
	let octets = addr
		.split('.')
		.map(|octet| match octet.trim_start_matches('0') {
			_ if octet.is_empty() => None,
			"" => Some(0),
			digits if digits.len() > 3 => None,
			digits => digits.parse::<u8>().ok(),
		})
		.collect::<Option<Vec<_>>>()?;
	let octets: [u8; 4] = octets.try_into().ok()?;
	let prefix = prefix.parse::<u8>().ok()?;

	Ipv4Net::new(octets.into(), prefix).ok().map(|net| IpNet::V4(net.trunc()))
}

// First non-empty value wins.
fn any_var(env: &dyn ProxyEnvironment, keys: &[&str]) -> String {
	keys.iter().filter_map(|key| env.var(key)).find(|value| !value.is_empty()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
	}

	fn url(raw: &str) -> Url {
		Url::parse(raw).expect("Fixture URL should parse.")
	}

	#[test]
	fn uppercase_wins_unless_empty() {
		let config = ProxyConfig::from_environment(&env(&[
			("HTTP_PROXY", "http://upper:1"),
			("http_proxy", "http://lower:1"),
			("HTTPS_PROXY", ""),
			("https_proxy", "http://lower:2"),
			("no_proxy", ".svc"),
		]));

		assert_eq!(config.http_proxy, "http://upper:1");
		assert_eq!(config.https_proxy, "http://lower:2");
		assert_eq!(config.no_proxy, ".svc");
		assert!(!config.cgi);
	}

	#[test]
	fn request_method_marks_cgi() {
		let config = ProxyConfig::from_environment(&env(&[("REQUEST_METHOD", "GET")]));

		assert!(config.cgi);
	}

	#[test]
	fn sloppy_cidr_accepts_leading_zeros() {
		assert_eq!(parse_cidr_sloppy("010.000.0.0/8"), "10.0.0.0/8".parse::<IpNet>().ok());
		assert_eq!(parse_cidr_sloppy(" 192.168.1.7/24 "), "192.168.1.0/24".parse::<IpNet>().ok());
		assert_eq!(parse_cidr_sloppy("10.0.0.1"), None);
		assert_eq!(parse_cidr_sloppy("example.com/8"), None);
	}

	#[test]
	fn decorator_only_intercepts_cidr_hits() {
		let proxy = url("http://proxy:3128");
		let always = ProxySelector::new(move |_| Ok(Some(proxy.clone())));
		let selector = with_no_proxy_cidrs(always, &env(&[("NO_PROXY", "example.com, 10.0.0.0/8")]));

		assert_eq!(selector.select(&url("https://10.9.8.7/")), Ok(None));
		assert_eq!(selector.select(&url("https://11.0.0.1/")), Ok(Some(url("http://proxy:3128"))));
		assert_eq!(
			selector.select(&url("https://example.com/")),
			Ok(Some(url("http://proxy:3128")))
		);
	}
}
