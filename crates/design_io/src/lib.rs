//! Design IO - Import and export of design trees
//!
//! The engine sits between a host design tool and anything that speaks its
//! JSON tree format:
//!
//! - [`DesignParser`] accepts the envelope shapes producers use and yields
//!   root nodes, degrading gracefully on malformed input.
//! - [`ImportDesign`] recreates a parsed tree on the host in z-order,
//!   definitional nodes first.
//! - [`ExportDesign`] captures the host's page and counts what it found.
//!
//! The host is reached only through the [`NodeRepository`] and [`Notifier`]
//! ports. [`InMemoryRepository`] implements them for tests and tooling.

mod counting;
mod error;
mod export;
mod import;
mod memory;
mod ordering;
mod parser;
mod ports;
mod settings;

pub use counting::*;
pub use error::*;
pub use export::*;
pub use import::*;
pub use memory::*;
pub use ordering::*;
pub use parser::*;
pub use ports::*;
pub use settings::*;
