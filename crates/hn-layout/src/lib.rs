//! hn-layout: deterministic 2D grid layout for network descriptions.
//!
//! Derives parent/child adjacency from control-unit references, assigns
//! integer grid coordinates by recursive descent from the root nodes, moves
//! every downstream to the lowest row, and emits one directed connector per
//! resolvable reference.
//!
//! Layout is defined for any network, valid or not: cyclic or dangling
//! input degrades to a partial picture instead of failing.
//!
//! # Example
//!
//! ```
//! use hn_layout::layout;
//! use hn_model::{Network, Node};
//!
//! let network = Network::new(vec![
//!     Node::reservoir("R1", "Upper basin"),
//!     Node::gate("G1", "Spill gate", Some("R1"), Some("D1")),
//!     Node::downstream("D1", "Valley outflow"),
//! ]);
//!
//! let picture = layout(&network);
//! assert_eq!(picture.nodes.len(), 3);
//! assert_eq!(picture.connectors.len(), 2);
//! ```

pub mod adjacency;
pub mod place;
pub mod types;

// Re-exports for ergonomics
pub use adjacency::Adjacency;
pub use place::layout;
pub use types::{Connector, Layout, PositionedNode};
