// self
use crate::{
	_prelude::*,
	obs::{OpKind, ProxyStrategy},
	proxy::ProxyError,
};

/// A span builder used by authorizer operations.
#[derive(Clone, Debug)]
pub struct OpSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OpSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(kind: OpKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("cluster_authorizer.op", op = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the remainder of the current scope.
	pub fn entered(self) -> OpSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OpSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OpSpanGuard {}
		}
	}
}

/// RAII guard returned by [`OpSpan::entered`].
pub struct OpSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OpSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OpSpanGuard(..)")
	}
}

/// Emits a debug event naming the chosen proxy strategy.
pub fn trace_proxy_strategy(strategy: ProxyStrategy) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(strategy = strategy.as_str(), "proxy strategy selected");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = strategy;
	}
}

/// Emits a warning when a transport has to refuse a request because proxy selection failed.
pub fn trace_proxy_failure(target: &Url, error: &ProxyError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			host = target.host_str().unwrap_or_default(),
			error = %error,
			"proxy selection failed; refusing the request"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (target, error);
	}
}
