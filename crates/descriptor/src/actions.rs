use axlens_core::ui::{AccessibilityNode, NodeAction};

pub const UNKNOWN_ACTION: &str = "unknown";

/// Readable label of one action: the fixed name of a standard action, else
/// the host-supplied label, else [`UNKNOWN_ACTION`].
pub fn action_label(action: &NodeAction) -> String {
    match action.as_standard() {
        Some(standard) => standard.label().to_owned(),
        None => action.label.clone().unwrap_or_else(|| UNKNOWN_ACTION.to_owned()),
    }
}

/// Labels of every supported action, in host order.
pub fn action_labels(node: &dyn AccessibilityNode) -> Vec<String> {
    node.actions().iter().map(action_label).collect()
}
