//! Request authorization and proxy strategy selection driven by live configuration.

// self
use crate::{
	_prelude::*,
	auth::{AuthorizationTarget, BearerToken, TokenError},
	config::{ClusterConfigurator, SecretConfigurator},
	obs::{self, OpKind, OpOutcome, OpSpan, ProxyStrategy},
	proxy::{self, ProcessEnvironment, ProxyConfig, ProxyEnvironment, ProxyError, ProxySelector},
};

/// Authorizes outgoing requests and picks the proxy they travel through.
///
/// Nothing is cached: every call re-reads the configurators, so configuration changes apply
/// to the next call. Configurators are shared with other consumers and must be safe for
/// concurrent reads; the authorizer adds no locking of its own.
#[derive(Clone)]
pub struct Authorizer {
	secret_configurator: Arc<dyn SecretConfigurator>,
	configurator: Arc<dyn ClusterConfigurator>,
	environment: Arc<dyn ProxyEnvironment>,
	// `None` means the standard resolver over `environment`.
	env_proxy_resolver: Option<ProxySelector>,
}
impl Authorizer {
	/// Creates an authorizer over the process environment.
	pub fn new(
		secret_configurator: Arc<dyn SecretConfigurator>,
		configurator: Arc<dyn ClusterConfigurator>,
	) -> Self {
		Self {
			secret_configurator,
			configurator,
			environment: Arc::new(ProcessEnvironment),
			env_proxy_resolver: None,
		}
	}

	/// Reads proxy variables from `environment` instead of the process environment.
	///
	/// A resolver set through [`Self::with_env_proxy_resolver`] is kept.
	pub fn with_environment(mut self, environment: Arc<dyn ProxyEnvironment>) -> Self {
		self.environment = environment;

		self
	}

	/// Replaces the resolver used when no explicit proxy settings exist.
	///
	/// The CIDR-aware `NO_PROXY` decorator still wraps the replacement.
	pub fn with_env_proxy_resolver(mut self, resolver: ProxySelector) -> Self {
		self.env_proxy_resolver = Some(resolver);

		self
	}

	/// Sets `Authorization: Bearer <token>` on `target`, replacing any previous value.
	///
	/// On failure the header collection is left as it was, apart from being created if absent.
	pub fn authorize<T>(&self, target: &mut T) -> Result<(), TokenError>
	where
		T: ?Sized + AuthorizationTarget,
	{
		const KIND: OpKind = OpKind::Authorize;

		let _span = OpSpan::new(KIND, "authorize").entered();
		let headers = target.headers_mut();
		let result = self.token().and_then(|token| token.header_value()).map(|value| {
			headers.insert(AUTHORIZATION, value);
		});

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	/// Reads and validates the bearer token from the secret configuration.
	pub fn token(&self) -> Result<BearerToken, TokenError> {
		const KIND: OpKind = OpKind::Token;

		let _span = OpSpan::new(KIND, "token").entered();
		let result = BearerToken::from_raw(&self.secret_configurator.config().token);

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	/// Builds the proxy selector for the current configuration.
	///
	/// Explicit cluster proxy settings, when any field is set, are used exclusively and the
	/// environment is ignored. Otherwise proxies come from the environment resolver, with
	/// `NO_PROXY` CIDR blocks matched against literal target IPs. Call again after
	/// configuration changes rather than holding on to an old selector.
	pub fn system_or_configured_proxy(&self) -> ProxySelector {
		const KIND: OpKind = OpKind::ProxySelection;

		let _span = OpSpan::new(KIND, "system_or_configured_proxy").entered();
		let configured = self.configurator.config().filter(|config| !config.proxy.is_empty());
		let (strategy, selector) = match configured {
			Some(config) =>
				(ProxyStrategy::Configured, ProxyConfig::from(&config.proxy).into_selector()),
			None => (
				ProxyStrategy::Environment,
				proxy::with_no_proxy_cidrs(self.env_proxy_resolver(), self.environment.as_ref()),
			),
		};

		obs::trace_proxy_strategy(strategy);
		obs::record_proxy_strategy(strategy);
		obs::record_op_outcome(KIND, OpOutcome::Success);

		selector
	}

	/// Parses the proxy values the next selector would use, without building it.
	///
	/// Surfaces malformed configuration before a transport is wired up. A substituted
	/// environment resolver is not inspected.
	pub fn validate_proxy_config(&self) -> Result<(), ProxyError> {
		let config = match self.configurator.config().filter(|config| !config.proxy.is_empty()) {
			Some(config) => ProxyConfig::from(&config.proxy),
			None => ProxyConfig::from_environment(self.environment.as_ref()),
		};

		config.resolver().map(|_| ())
	}

	fn env_proxy_resolver(&self) -> ProxySelector {
		self.env_proxy_resolver
			.clone()
			.unwrap_or_else(|| proxy::environment_proxy(self.environment.clone()))
	}
}
impl Debug for Authorizer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Authorizer").finish_non_exhaustive()
	}
}
