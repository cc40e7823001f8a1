//! Common types shared by all entities

pub mod money;
pub mod validation;

/// Primary key type used by the shop API for every entity.
pub type EntityId = i64;

pub use money::{line_total, round_money};
