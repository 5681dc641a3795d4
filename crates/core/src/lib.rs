//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod input;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{ItemId, TransactionId, UserId};
pub use input::{parse_amount, parse_count};
pub use money::Money;
