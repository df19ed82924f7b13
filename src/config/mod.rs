//! Configuration resolution and tree-scoped distribution.
//!
//! This module provides:
//!
//! - [`ConfigValue`]: the resolved configuration record a subtree reads
//! - [`ProviderProps`]: the instance props supplied at a publishing point
//! - [`Resolver`]: prop resolution with referential-stability memoization
//! - [`Context`]: the tree-scoped store consumers read from
//!
//! Resolution is a pure computation; distribution happens through contexts
//! handed down the tree; side effects (theme marker synchronization) live in
//! [`crate::theme`] and run only after a configuration is published.

mod context;
mod resolver;
mod value;

pub use context::Context;
pub use resolver::{ProviderProps, Resolver};
pub use value::{ConfigValue, DateFormatter, DateParser};
