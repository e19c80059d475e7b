//! Deterministic in-memory host toolkit for axlens.
//!
//! Hierarchies are described either with the [`ViewSpec`] builder or as XML
//! (see `assets/mock_tree.xml`) and instantiated into a [`MockHost`] whose
//! views implement [`axlens_core::ui::HostView`].

mod tree;
mod view;

pub use tree::{MockHost, MockTree, MockTreeLoadError, ViewSpec};
pub use view::{MockNode, MockView};
