//! PAM host crate.
//!
//! Owns the toolkit-neutral host visual tree that widgets render through,
//! its HTML serialisation, and process-wide logging setup.

pub mod html;
pub mod logging;
pub mod node;

pub use node::{HostContent, HostNode};
