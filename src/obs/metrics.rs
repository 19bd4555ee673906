// self
use crate::obs::{OpKind, OpOutcome, ProxyStrategy};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_op_outcome(kind: OpKind, outcome: OpOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"cluster_authorizer_operation_total",
			"op" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records which proxy strategy a new selector uses (when enabled).
pub fn record_proxy_strategy(strategy: ProxyStrategy) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"cluster_authorizer_proxy_strategy_total",
			"strategy" => strategy.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = strategy;
	}
}
