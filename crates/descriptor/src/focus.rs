//! Predicates shared by the ignore decision and the focusable reasons.

use axlens_core::ui::{AccessibilityNode, HostView, HostViewExt, StandardAction, is_blank};

/// Non-empty own text or content description.
pub fn has_text(node: &dyn AccessibilityNode) -> bool {
    !is_blank(node.text().as_deref()) || !is_blank(node.content_description().as_deref())
}

/// Whether any view ancestor's node is accessibility-focusable.
pub fn has_focusable_ancestor(view: &dyn HostView) -> bool {
    view.ancestors().any(|ancestor| ancestor.accessibility_node().is_accessibility_focusable())
}

/// Clickable, long-clickable or focusable view, or a node offering one of the
/// matching actions.
pub fn is_actionable_for_accessibility(node: &dyn AccessibilityNode, view: &dyn HostView) -> bool {
    if view.is_clickable() || view.is_long_clickable() || view.is_focusable() {
        return true;
    }
    node.actions().iter().any(|action| {
        matches!(
            action.as_standard(),
            Some(StandardAction::Focus | StandardAction::Click | StandardAction::LongClick)
        )
    })
}

/// Direct child of a scroll container.
pub fn is_top_level_scroll_item(view: &dyn HostView) -> bool {
    view.parent_view().is_some_and(|parent| parent.is_scroll_container())
}

/// A visible direct child that speaks without being focusable itself.
pub fn has_non_actionable_speaking_descendants(view: &dyn HostView) -> bool {
    if !view.is_container() {
        return false;
    }
    view.children().any(|child| {
        let node = child.accessibility_node();
        node.is_visible_to_user() && !node.is_accessibility_focusable() && node.is_speaking()
    })
}

/// Why a node would receive accessibility focus, or `None` when nothing applies.
pub fn focusable_reasons(node: &dyn AccessibilityNode, view: &dyn HostView) -> Option<&'static str> {
    let has_text = has_text(node);
    let is_checkable = node.is_checkable();
    let speaking_descendants = has_non_actionable_speaking_descendants(view);

    if is_actionable_for_accessibility(node, view) {
        if node.child_count() == 0 {
            return Some("View is actionable and has no children.");
        } else if has_text {
            return Some("View is actionable and has a description.");
        } else if is_checkable {
            return Some("View is actionable and checkable.");
        } else if speaking_descendants {
            return Some(
                "View is actionable and has non-actionable descendants with descriptions.",
            );
        }
    }

    if is_top_level_scroll_item(view) {
        if has_text {
            return Some("View is a direct child of a scrollable container and has a description.");
        } else if is_checkable {
            return Some("View is a direct child of a scrollable container and is checkable.");
        } else if speaking_descendants {
            return Some(
                "View is a direct child of a scrollable container and has non-actionable \
                 descendants with descriptions.",
            );
        }
    }

    if has_text {
        return Some("View has a description and is not actionable, but has no actionable ancestor.");
    }

    None
}
