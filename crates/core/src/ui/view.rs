use super::importance::Importance;
use super::node::AccessibilityNode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Structural category of a view as far as accessibility is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Leaf,
    /// Editable text field; its own text wins over a content description.
    EditField,
    /// View group whose children are reachable through [`HostView::children`].
    Container,
}

/// Parent slot of a view.
///
/// `Root` covers both "no parent" and "parent exists but is not a view" (for
/// example the window root that hosts the hierarchy). Upward walks stop there.
#[derive(Clone)]
pub enum ViewParent {
    View(Arc<dyn HostView>),
    Root,
}

impl ViewParent {
    pub fn view(&self) -> Option<&Arc<dyn HostView>> {
        match self {
            ViewParent::View(view) => Some(view),
            ViewParent::Root => None,
        }
    }

    pub fn into_view(self) -> Option<Arc<dyn HostView>> {
        match self {
            ViewParent::View(view) => Some(view),
            ViewParent::Root => None,
        }
    }
}

/// Read-only handle into the host toolkit's view tree.
pub trait HostView: Send + Sync {
    /// Toolkit class name, used for diagnostics only.
    fn class_name(&self) -> &str;
    fn kind(&self) -> ViewKind;
    fn importance(&self) -> Importance;
    fn parent(&self) -> ViewParent;

    /// Children in drawing order. Only containers return anything.
    fn children(&self) -> Box<dyn Iterator<Item = Arc<dyn HostView>> + Send + '_> {
        Box::new(std::iter::empty())
    }

    /// Accessibility node the toolkit initializes for this view.
    fn accessibility_node(&self) -> Arc<dyn AccessibilityNode>;

    fn is_clickable(&self) -> bool;
    fn is_long_clickable(&self) -> bool;
    fn is_focusable(&self) -> bool;
    fn has_node_provider(&self) -> bool;
    fn has_accessibility_delegate(&self) -> bool;

    fn is_scroll_container(&self) -> bool {
        false
    }

    /// View-level text, consulted when no node information is used.
    fn text(&self) -> Option<String> {
        None
    }

    /// View-level content description, consulted when no node information is used.
    fn content_description(&self) -> Option<String> {
        None
    }
}

/// Iterator over the view ancestors of a view, nearest first.
pub struct Ancestors {
    next: ViewParent,
}

impl Iterator for Ancestors {
    type Item = Arc<dyn HostView>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.next, ViewParent::Root) {
            ViewParent::View(view) => {
                self.next = view.parent();
                Some(view)
            }
            ViewParent::Root => None,
        }
    }
}

pub trait HostViewExt {
    fn ancestors(&self) -> Ancestors;
    fn parent_view(&self) -> Option<Arc<dyn HostView>>;
    fn is_container(&self) -> bool;
    fn is_edit_field(&self) -> bool;
}

impl<T> HostViewExt for T
where
    T: HostView + ?Sized,
{
    fn ancestors(&self) -> Ancestors {
        Ancestors { next: self.parent() }
    }

    fn parent_view(&self) -> Option<Arc<dyn HostView>> {
        self.parent().into_view()
    }

    fn is_container(&self) -> bool {
        self.kind() == ViewKind::Container
    }

    fn is_edit_field(&self) -> bool {
        self.kind() == ViewKind::EditField
    }
}
