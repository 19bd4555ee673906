//! Bearer-token authorization and configuration-aware proxy selection for outgoing cluster
//! telemetry.
//!
//! [`Authorizer`] re-reads its configurators on every call: the secret configurator supplies the
//! token attached as `Authorization: Bearer <token>`, and the cluster configurator supplies
//! explicit proxy settings that override the process environment. When no explicit settings
//! exist, proxies come from `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY`, with `NO_PROXY` CIDR blocks
//! matched against literal target IPs.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod authorizer;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod proxy;

pub use authorizer::Authorizer;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		net::IpAddr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use reqwest::{
		Client as ReqwestClient, ClientBuilder as ReqwestClientBuilder, Request as ReqwestRequest,
		header::{AUTHORIZATION, HeaderMap, HeaderValue},
	};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::{Host, Url};

	pub use crate::error::Result;
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, serde_json as _, tokio as _};
