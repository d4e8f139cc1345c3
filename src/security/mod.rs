//! Security subsystem.
//!
//! # Design Decisions
//! - Escaping of attacker-influenced text lives with the renderers (`render::layout`)
//! - This module only hardens responses at the HTTP layer

pub mod headers;
