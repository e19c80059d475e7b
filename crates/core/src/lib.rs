//! Host contract for axlens.
//!
//! A GUI toolkit exposes its view tree through [`ui::HostView`] and the
//! accessibility information it computes for each view through
//! [`ui::AccessibilityNode`]. Everything in this crate is read-only: handles
//! are borrowed for the duration of a single query and nothing is cached.

pub mod ui;
