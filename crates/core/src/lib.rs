//! `salesintel-core`: shared domain primitives.
//!
//! Typed identifiers and the domain error model used by the forecasting,
//! infrastructure and API crates. No IO lives here.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
