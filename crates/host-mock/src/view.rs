use axlens_core::ui::{
    AccessibilityNode, HostView, Importance, NodeAction, ViewKind, ViewParent,
};
use std::sync::{Arc, Weak};

/// Accessibility node of a [`MockView`]; every value is fixed at instantiation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockNode {
    pub(crate) visible: bool,
    pub(crate) text: Option<String>,
    pub(crate) content_description: Option<String>,
    pub(crate) child_count: usize,
    pub(crate) accessibility_focusable: bool,
    pub(crate) speaking: bool,
    pub(crate) checkable: bool,
    pub(crate) focused: bool,
    pub(crate) actions: Vec<NodeAction>,
}

impl AccessibilityNode for MockNode {
    fn is_visible_to_user(&self) -> bool {
        self.visible
    }

    fn content_description(&self) -> Option<String> {
        self.content_description.clone()
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn child_count(&self) -> usize {
        self.child_count
    }

    fn is_accessibility_focusable(&self) -> bool {
        self.accessibility_focusable
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn actions(&self) -> Vec<NodeAction> {
        self.actions.clone()
    }

    fn is_checkable(&self) -> bool {
        self.checkable
    }

    fn is_accessibility_focused(&self) -> bool {
        self.focused
    }
}

pub struct MockView {
    pub(crate) id: String,
    pub(crate) class_name: String,
    pub(crate) kind: ViewKind,
    pub(crate) importance: Importance,
    pub(crate) clickable: bool,
    pub(crate) long_clickable: bool,
    pub(crate) focusable: bool,
    pub(crate) node_provider: bool,
    pub(crate) delegate: bool,
    pub(crate) scroll_container: bool,
    pub(crate) parent: Option<Weak<MockView>>,
    pub(crate) children: Vec<Arc<MockView>>,
    pub(crate) node: Arc<MockNode>,
}

impl MockView {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node(&self) -> &MockNode {
        &self.node
    }

    pub fn child_views(&self) -> &[Arc<MockView>] {
        &self.children
    }
}

impl std::fmt::Debug for MockView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockView")
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("kind", &self.kind)
            .field("importance", &self.importance)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

impl HostView for MockView {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn kind(&self) -> ViewKind {
        self.kind
    }

    fn importance(&self) -> Importance {
        self.importance
    }

    fn parent(&self) -> ViewParent {
        match self.parent.as_ref().and_then(Weak::upgrade) {
            Some(parent) => ViewParent::View(parent),
            None => ViewParent::Root,
        }
    }

    fn children(&self) -> Box<dyn Iterator<Item = Arc<dyn HostView>> + Send + '_> {
        if self.kind != ViewKind::Container {
            return Box::new(std::iter::empty());
        }
        Box::new(self.children.iter().map(|child| Arc::clone(child) as Arc<dyn HostView>))
    }

    fn accessibility_node(&self) -> Arc<dyn AccessibilityNode> {
        Arc::clone(&self.node) as Arc<dyn AccessibilityNode>
    }

    fn is_clickable(&self) -> bool {
        self.clickable
    }

    fn is_long_clickable(&self) -> bool {
        self.long_clickable
    }

    fn is_focusable(&self) -> bool {
        self.focusable
    }

    fn has_node_provider(&self) -> bool {
        self.node_provider
    }

    fn has_accessibility_delegate(&self) -> bool {
        self.delegate
    }

    fn is_scroll_container(&self) -> bool {
        self.scroll_container
    }

    fn text(&self) -> Option<String> {
        self.node.text.clone()
    }

    fn content_description(&self) -> Option<String> {
        self.node.content_description.clone()
    }
}
