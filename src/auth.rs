//! Bearer token validation and the request types it can be attached to.

pub mod target;
pub mod token;

pub use target::*;
pub use token::*;
