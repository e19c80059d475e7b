use super::action::NodeAction;

/// Accessibility information the host toolkit computed for one view.
///
/// Implementations wrap whatever the toolkit hands out (a node-info object, a
/// platform accessible, a cached record). Text accessors return `None` or an
/// empty string interchangeably; callers treat both as absent.
pub trait AccessibilityNode: Send + Sync {
    fn is_visible_to_user(&self) -> bool;
    fn content_description(&self) -> Option<String>;
    fn text(&self) -> Option<String>;
    fn child_count(&self) -> usize;

    /// Whether assistive navigation may move focus onto this node.
    fn is_accessibility_focusable(&self) -> bool;

    /// Whether a screen reader would announce something for this node.
    fn is_speaking(&self) -> bool;

    /// Supported actions, in the order the host reports them.
    fn actions(&self) -> Vec<NodeAction>;

    fn is_checkable(&self) -> bool {
        false
    }

    fn is_accessibility_focused(&self) -> bool {
        false
    }
}

/// Treats `None` and `Some("")` alike.
pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}
