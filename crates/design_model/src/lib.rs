//! Design Model - Design tree value objects and node types
//!
//! This crate provides the data contract every import and export is
//! serialized against: a recursive `DesignNode` covering geometry, paint,
//! stroke, effects, auto-layout, text runs, vector networks and component
//! metadata, plus the normalized value objects those groups are built from.
//!
//! All vocabularies are open. A node, paint or effect kind this crate does
//! not recognize is kept as its raw tag and written back unchanged.
//!
//! # Example
//!
//! ```rust
//! use design_model::{Color, DesignNode, NodeKind, Paint};
//!
//! let card = DesignNode::new("Card", NodeKind::Frame)
//!     .with_size(320.0, 200.0)
//!     .with_fills(vec![Paint::solid(Color::WHITE)])
//!     .with_child(DesignNode::new("Divider", NodeKind::Line));
//!
//! assert!(card.has_children());
//! let json = card.to_value().unwrap();
//! assert_eq!(json["type"], "FRAME");
//! ```

mod vocabulary;
mod color;
mod component;
mod effect;
mod error;
mod geometry;
mod image;
mod layout;
mod node;
mod paint;
mod typography;
pub mod vector;

pub use color::*;
pub use component::*;
pub use effect::*;
pub use error::*;
pub use geometry::*;
pub use image::*;
pub use layout::*;
pub use node::*;
pub use paint::*;
pub use typography::*;
pub use vector::*;
pub use vocabulary::*;
