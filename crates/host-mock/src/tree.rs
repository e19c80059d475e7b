use crate::view::{MockNode, MockView};
use axlens_core::ui::{Importance, NodeAction, StandardAction, ViewKind, is_blank};
use quick_xml::de::from_str;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Declarative description of one view and its accessibility node.
///
/// Node predicates that are left unset are derived the way a platform would:
/// a node is accessibility-focusable when it is visible and actionable, and it
/// speaks when it has text, is checkable, or (for containers) has a visible
/// child that speaks without being focusable itself, unless its importance
/// silences it.
#[derive(Clone, Debug)]
pub struct ViewSpec {
    id: String,
    class_name: String,
    kind: ViewKind,
    importance: Importance,
    clickable: bool,
    long_clickable: bool,
    focusable: bool,
    node_provider: bool,
    delegate: bool,
    scroll_container: bool,
    visible: bool,
    text: Option<String>,
    content_description: Option<String>,
    accessibility_focusable: Option<bool>,
    speaking: Option<bool>,
    checkable: bool,
    focused: bool,
    child_count: Option<usize>,
    actions: Vec<NodeAction>,
    children: Vec<ViewSpec>,
}

impl ViewSpec {
    pub fn new(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            kind: ViewKind::Leaf,
            importance: Importance::Auto,
            clickable: false,
            long_clickable: false,
            focusable: false,
            node_provider: false,
            delegate: false,
            scroll_container: false,
            visible: true,
            text: None,
            content_description: None,
            accessibility_focusable: None,
            speaking: None,
            checkable: false,
            focused: false,
            child_count: None,
            actions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn container(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(id, class_name).kind(ViewKind::Container)
    }

    pub fn edit_field(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(id, class_name).kind(ViewKind::EditField)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(mut self, kind: ViewKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn long_clickable(mut self, long_clickable: bool) -> Self {
        self.long_clickable = long_clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn node_provider(mut self, node_provider: bool) -> Self {
        self.node_provider = node_provider;
        self
    }

    pub fn delegate(mut self, delegate: bool) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn scroll_container(mut self, scroll_container: bool) -> Self {
        self.scroll_container = scroll_container;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn content_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    pub fn accessibility_focusable(mut self, focusable: bool) -> Self {
        self.accessibility_focusable = Some(focusable);
        self
    }

    pub fn speaking(mut self, speaking: bool) -> Self {
        self.speaking = Some(speaking);
        self
    }

    pub fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Overrides the node's child count, which otherwise equals the number of child specs.
    pub fn child_count(mut self, count: usize) -> Self {
        self.child_count = Some(count);
        self
    }

    pub fn with_action(mut self, action: impl Into<NodeAction>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn with_child(mut self, child: ViewSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ViewSpec>,
    {
        self.children.extend(children);
        self
    }

    fn has_text(&self) -> bool {
        !is_blank(self.text.as_deref()) || !is_blank(self.content_description.as_deref())
    }

    fn build_node(&self, children: &[Arc<MockView>]) -> MockNode {
        let child_count = self.child_count.unwrap_or(self.children.len());
        let actionable = self.clickable || self.long_clickable || self.focusable;
        let silenced = self.importance.hides_descendants()
            || (self.importance == Importance::No && child_count == 0);
        let speaking_descendants = self.kind == ViewKind::Container
            && children.iter().any(|child| {
                let node = child.node();
                node.visible && !node.accessibility_focusable && node.speaking
            });
        MockNode {
            visible: self.visible,
            text: self.text.clone(),
            content_description: self.content_description.clone(),
            child_count,
            accessibility_focusable: self
                .accessibility_focusable
                .unwrap_or(self.visible && actionable),
            speaking: self.speaking.unwrap_or(
                !silenced && (self.has_text() || self.checkable || speaking_descendants),
            ),
            checkable: self.checkable,
            focused: self.focused,
            actions: self.actions.clone(),
        }
    }
}

/// A hierarchy with a single root view, ready to be instantiated.
#[derive(Clone, Debug)]
pub struct MockTree {
    root: ViewSpec,
}

impl MockTree {
    /// Wraps a builder hierarchy.
    ///
    /// # Panics
    ///
    /// Panics when two views share an id; use [`MockTree::try_new`] to get the
    /// error instead.
    pub fn new(root: ViewSpec) -> Self {
        Self::try_new(root).unwrap_or_else(|err| panic!("invalid mock hierarchy: {err}"))
    }

    /// # Errors
    ///
    /// Returns [`MockTreeLoadError::DuplicateId`] when two views share an id.
    pub fn try_new(root: ViewSpec) -> Result<Self, MockTreeLoadError> {
        check_unique_ids(&root, &mut HashSet::new())?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &ViewSpec {
        &self.root
    }

    /// The settings screen shipped in `assets/mock_tree.xml`.
    pub fn sample() -> Self {
        const XML: &str = include_str!("../assets/mock_tree.xml");
        Self::from_xml(XML).expect("embedded mock_tree.xml is a valid hierarchy")
    }

    pub fn from_xml(xml: &str) -> Result<Self, MockTreeLoadError> {
        let parsed: XmlHierarchy = from_str(xml)?;
        let mut views = parsed.views;
        if views.len() != 1 {
            return Err(MockTreeLoadError::RootCount(views.len()));
        }
        let root = build_view(views.remove(0))?;
        Self::try_new(root)
    }

    pub fn instantiate(&self) -> MockHost {
        let mut by_id = HashMap::new();
        let root = instantiate_view(&self.root, None, &mut by_id);
        MockHost { root, by_id }
    }
}

/// Live views of an instantiated [`MockTree`].
///
/// Parent links are weak; views stay reachable upward only while the host is alive.
#[derive(Debug)]
pub struct MockHost {
    root: Arc<MockView>,
    by_id: HashMap<String, Arc<MockView>>,
}

impl MockHost {
    pub fn root(&self) -> Arc<MockView> {
        Arc::clone(&self.root)
    }

    pub fn view(&self, id: &str) -> Option<Arc<MockView>> {
        self.by_id.get(id).cloned()
    }

    pub fn views(&self) -> impl Iterator<Item = &Arc<MockView>> {
        self.by_id.values()
    }
}

fn instantiate_view(
    spec: &ViewSpec,
    parent: Option<Weak<MockView>>,
    by_id: &mut HashMap<String, Arc<MockView>>,
) -> Arc<MockView> {
    let view = Arc::new_cyclic(|weak: &Weak<MockView>| {
        let children: Vec<Arc<MockView>> = spec
            .children
            .iter()
            .map(|child| instantiate_view(child, Some(weak.clone()), by_id))
            .collect();
        let node = Arc::new(spec.build_node(&children));
        MockView {
            id: spec.id.clone(),
            class_name: spec.class_name.clone(),
            kind: spec.kind,
            importance: spec.importance,
            clickable: spec.clickable,
            long_clickable: spec.long_clickable,
            focusable: spec.focusable,
            node_provider: spec.node_provider,
            delegate: spec.delegate,
            scroll_container: spec.scroll_container,
            parent,
            children,
            node,
        }
    });
    by_id.insert(spec.id.clone(), Arc::clone(&view));
    view
}

fn check_unique_ids(spec: &ViewSpec, seen: &mut HashSet<String>) -> Result<(), MockTreeLoadError> {
    if !seen.insert(spec.id.clone()) {
        return Err(MockTreeLoadError::DuplicateId(spec.id.clone()));
    }
    spec.children.iter().try_for_each(|child| check_unique_ids(child, seen))
}

#[derive(Debug, Deserialize)]
struct XmlHierarchy {
    #[serde(rename = "view", default)]
    views: Vec<XmlView>,
}

#[derive(Debug, Deserialize)]
struct XmlView {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@class")]
    class_name: String,
    #[serde(rename = "@kind")]
    kind: Option<ViewKind>,
    #[serde(rename = "@importance")]
    importance: Option<Importance>,
    #[serde(rename = "@clickable")]
    clickable: Option<bool>,
    #[serde(rename = "@long_clickable")]
    long_clickable: Option<bool>,
    #[serde(rename = "@focusable")]
    focusable: Option<bool>,
    #[serde(rename = "@node_provider")]
    node_provider: Option<bool>,
    #[serde(rename = "@delegate")]
    delegate: Option<bool>,
    #[serde(rename = "@scroll_container")]
    scroll_container: Option<bool>,
    #[serde(rename = "@visible")]
    visible: Option<bool>,
    #[serde(rename = "@text")]
    text: Option<String>,
    #[serde(rename = "@content_description")]
    content_description: Option<String>,
    #[serde(rename = "@accessibility_focusable")]
    accessibility_focusable: Option<bool>,
    #[serde(rename = "@speaking")]
    speaking: Option<bool>,
    #[serde(rename = "@checkable")]
    checkable: Option<bool>,
    #[serde(rename = "@focused")]
    focused: Option<bool>,
    #[serde(rename = "@child_count")]
    child_count: Option<usize>,
    #[serde(rename = "action", default)]
    actions: Vec<XmlAction>,
    #[serde(rename = "view", default)]
    children: Vec<XmlView>,
}

#[derive(Debug, Deserialize)]
struct XmlAction {
    #[serde(rename = "@id")]
    id: Option<u32>,
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "@label")]
    label: Option<String>,
}

fn build_view(node: XmlView) -> Result<ViewSpec, MockTreeLoadError> {
    let mut spec = ViewSpec::new(node.id, node.class_name)
        .kind(node.kind.unwrap_or_default())
        .importance(node.importance.unwrap_or_default())
        .clickable(node.clickable.unwrap_or(false))
        .long_clickable(node.long_clickable.unwrap_or(false))
        .focusable(node.focusable.unwrap_or(false))
        .node_provider(node.node_provider.unwrap_or(false))
        .delegate(node.delegate.unwrap_or(false))
        .scroll_container(node.scroll_container.unwrap_or(false))
        .visible(node.visible.unwrap_or(true))
        .checkable(node.checkable.unwrap_or(false))
        .focused(node.focused.unwrap_or(false));

    spec.text = node.text;
    spec.content_description = node.content_description;
    spec.accessibility_focusable = node.accessibility_focusable;
    spec.speaking = node.speaking;
    spec.child_count = node.child_count;

    for action in node.actions {
        let action = build_action(&spec.id, action)?;
        spec.actions.push(action);
    }
    for child in node.children {
        spec.children.push(build_view(child)?);
    }
    Ok(spec)
}

fn build_action(view_id: &str, action: XmlAction) -> Result<NodeAction, MockTreeLoadError> {
    let id = match (action.id, action.name) {
        (Some(id), _) => id,
        (None, Some(name)) => StandardAction::from_label(&name)
            .map(StandardAction::id)
            .ok_or(MockTreeLoadError::UnknownAction(name))?,
        (None, None) => return Err(MockTreeLoadError::MissingActionId(view_id.to_owned())),
    };
    Ok(NodeAction::new(id, action.label))
}

#[derive(Debug, Error)]
pub enum MockTreeLoadError {
    #[error("failed to parse mock hierarchy XML: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("mock hierarchy must have exactly one root view, found {0}")]
    RootCount(usize),
    #[error("duplicate view id '{0}' in mock hierarchy")]
    DuplicateId(String),
    #[error("unknown action name '{0}'")]
    UnknownAction(String),
    #[error("action on view '{0}' has neither an id nor a name")]
    MissingActionId(String),
}
