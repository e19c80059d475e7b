pub mod action;
pub mod importance;
pub mod node;
pub mod view;

pub use action::{NodeAction, StandardAction};
pub use importance::Importance;
pub use node::{AccessibilityNode, is_blank};
pub use view::{Ancestors, HostView, HostViewExt, ViewKind, ViewParent};
