//! Substitution engine
//!
//! This module takes parsed segments and a [`ResolutionConfig`] and produces
//! the rendered string.

pub mod config;
pub mod resolver;
pub mod substitute;

pub use config::ResolutionConfig;
pub use resolver::{EnvResolver, Resolver};
pub use substitute::{substitute, substitute_safe};
