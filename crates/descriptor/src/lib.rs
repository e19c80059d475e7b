//! Accessibility metadata for views of a host GUI toolkit.
//!
//! Given a view and the accessibility node the toolkit computed for it, the
//! [`AccessibilityDescriptor`] answers the questions an inspector asks: is the
//! node ignored by assistive tooling (and why), what would a screen reader
//! announce, which actions does it offer, and why would it receive focus.
//!
//! All queries are read-only walks over borrowed host handles. They never fail;
//! missing information degrades to "ignored", no description or `"unknown"`.

pub mod actions;
pub mod config;
pub mod description;
mod descriptor;
pub mod focus;
pub mod ignore;
mod properties;

pub use actions::{UNKNOWN_ACTION, action_label, action_labels};
pub use config::{ConfigError, DescriptorConfig, IgnorePolicy};
pub use description::{DEFAULT_SEPARATOR, description};
pub use descriptor::AccessibilityDescriptor;
pub use focus::focusable_reasons;
pub use ignore::{IgnoreVerdict, classify, classify_by_view_flags, explain_ignored, is_ignored};
pub use properties::AccessibilityProperties;
