//! Whether assistive tooling skips a node, and why.
//!
//! Both [`is_ignored`] and [`explain_ignored`] are projections of a single
//! [`IgnoreVerdict`], so the answer and its explanation cannot drift apart.

use crate::focus::{has_focusable_ancestor, has_text};
use axlens_core::ui::{AccessibilityNode, HostView, HostViewExt, Importance, is_blank};
use serde::Serialize;

/// The branch of the ignore decision that matched, first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgnoreVerdict {
    ImportanceNo,
    ImportanceNoHideDescendants,
    AncestorHidesDescendants,
    NotVisible,
    /// Focusable leaf; surfaced even without anything to say.
    FocusableLeaf,
    FocusableSpeaking,
    FocusableSilent,
    /// Not focusable, has text, and no focusable ancestor reads it out instead.
    TextWithoutFocusableAncestor,
    /// Not focusable and its text is announced by a focusable ancestor.
    DescriptionCoOpted,
    NoDescription,
    /// View-flags policy: the view is actionable or describes itself.
    FlagsExposed,
    /// View-flags policy: nothing makes the view interesting.
    FlagsInert,
}

impl IgnoreVerdict {
    pub const fn is_ignored(self) -> bool {
        !matches!(
            self,
            IgnoreVerdict::FocusableLeaf
                | IgnoreVerdict::FocusableSpeaking
                | IgnoreVerdict::TextWithoutFocusableAncestor
                | IgnoreVerdict::FlagsExposed
        )
    }

    pub const fn reason(self) -> &'static str {
        match self {
            IgnoreVerdict::ImportanceNo => "View has importantForAccessibility set to 'NO'.",
            IgnoreVerdict::ImportanceNoHideDescendants => {
                "View has importantForAccessibility set to 'NO_HIDE_DESCENDANTS'."
            }
            IgnoreVerdict::AncestorHidesDescendants => {
                "An ancestor View has importantForAccessibility set to 'NO_HIDE_DESCENDANTS'."
            }
            IgnoreVerdict::NotVisible => "View is not visible.",
            IgnoreVerdict::FocusableLeaf => {
                "View is actionable and has no children, so it is always exposed."
            }
            IgnoreVerdict::FocusableSpeaking => "View is actionable and has a description.",
            IgnoreVerdict::FocusableSilent => "View is actionable, but has no description.",
            IgnoreVerdict::TextWithoutFocusableAncestor => {
                "View is not actionable, but has a description and no focusable ancestor."
            }
            IgnoreVerdict::DescriptionCoOpted => {
                "View is not actionable, and an ancestor View has co-opted its description."
            }
            IgnoreVerdict::NoDescription | IgnoreVerdict::FlagsInert => {
                "View is not actionable and has no description."
            }
            IgnoreVerdict::FlagsExposed => "View is actionable or has a description.",
        }
    }
}

/// Runs the node-based decision.
pub fn classify(node: &dyn AccessibilityNode, view: &dyn HostView) -> IgnoreVerdict {
    let verdict = decide(node, view);
    tracing::trace!(class = view.class_name(), ?verdict, "classified accessibility node");
    verdict
}

fn decide(node: &dyn AccessibilityNode, view: &dyn HostView) -> IgnoreVerdict {
    match view.importance() {
        Importance::No => return IgnoreVerdict::ImportanceNo,
        Importance::NoHideDescendants => return IgnoreVerdict::ImportanceNoHideDescendants,
        Importance::Auto | Importance::Yes => {}
    }

    if view.ancestors().any(|ancestor| ancestor.importance().hides_descendants()) {
        return IgnoreVerdict::AncestorHidesDescendants;
    }

    if !node.is_visible_to_user() {
        return IgnoreVerdict::NotVisible;
    }

    if node.is_accessibility_focusable() {
        if node.child_count() == 0 {
            return IgnoreVerdict::FocusableLeaf;
        } else if node.is_speaking() {
            return IgnoreVerdict::FocusableSpeaking;
        }
        return IgnoreVerdict::FocusableSilent;
    }

    if has_text(node) {
        if has_focusable_ancestor(view) {
            return IgnoreVerdict::DescriptionCoOpted;
        }
        return IgnoreVerdict::TextWithoutFocusableAncestor;
    }

    IgnoreVerdict::NoDescription
}

/// Runs the view-flags decision used by hosts without node information.
pub fn classify_by_view_flags(view: &dyn HostView) -> IgnoreVerdict {
    let exposed = view.is_clickable()
        || view.is_long_clickable()
        || view.is_focusable()
        || !is_blank(view.text().as_deref())
        || !is_blank(view.content_description().as_deref())
        || view.has_node_provider()
        || view.has_accessibility_delegate();
    let verdict = if exposed { IgnoreVerdict::FlagsExposed } else { IgnoreVerdict::FlagsInert };
    tracing::trace!(class = view.class_name(), ?verdict, "classified view by flags");
    verdict
}

pub fn is_ignored(node: &dyn AccessibilityNode, view: &dyn HostView) -> bool {
    classify(node, view).is_ignored()
}

pub fn explain_ignored(node: &dyn AccessibilityNode, view: &dyn HostView) -> &'static str {
    classify(node, view).reason()
}
