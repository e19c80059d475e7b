use axlens_core::ui::{AccessibilityNode, HostView, HostViewExt};

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Text a screen reader would announce for the node.
///
/// Content description first (edit fields prefer their own text), then own
/// text, then the joined descriptions of speaking children of a container.
pub fn description(
    node: &dyn AccessibilityNode,
    view: &dyn HostView,
    separator: &str,
) -> Option<String> {
    let content_description = node.content_description().filter(|text| !text.is_empty());
    let text = node.text().filter(|text| !text.is_empty());

    if let Some(content_description) = content_description
        && (!view.is_edit_field() || text.is_none())
    {
        return Some(content_description);
    }

    if text.is_some() {
        return text;
    }

    if !view.is_container() {
        return None;
    }

    let parts: Vec<String> = view
        .children()
        .filter_map(|child| {
            let child_node = child.accessibility_node();
            if !child_node.is_speaking() {
                return None;
            }
            description(&*child_node, &*child, separator)
        })
        .filter(|part| !part.is_empty())
        .collect();

    tracing::trace!(class = view.class_name(), parts = parts.len(), "joined child descriptions");
    if parts.is_empty() { None } else { Some(parts.join(separator)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axlens_host_mock::{MockHost, MockTree, ViewSpec};
    use rstest::{fixture, rstest};

    #[fixture]
    fn host() -> MockHost {
        MockTree::sample().instantiate()
    }

    fn describe(host: &MockHost, id: &str) -> Option<String> {
        let view = host.view(id).expect("view present");
        description(&*view.accessibility_node(), &*view, DEFAULT_SEPARATOR)
    }

    #[rstest]
    #[case("nav_up", Some("Navigate up"))]
    #[case("search", Some("bluetooth"))]
    #[case("title", Some("Settings"))]
    #[case("wifi_row", Some("Wi-Fi, Connected"))]
    #[case("item_display", Some("Display, Brightness, dark theme"))]
    #[case("wifi_switch", None)]
    #[case("item_empty", None)]
    #[case("divider", None)]
    fn sample_descriptions(host: MockHost, #[case] id: &str, #[case] expected: Option<&str>) {
        assert_eq!(describe(&host, id).as_deref(), expected);
    }

    #[rstest]
    #[case(ViewSpec::edit_field("f", "EditText"), Some("B"))]
    #[case(ViewSpec::new("f", "TextView"), Some("A"))]
    fn content_description_versus_own_text(#[case] spec: ViewSpec, #[case] expected: Option<&str>) {
        let host = MockTree::new(spec.content_description("A").text("B")).instantiate();
        assert_eq!(describe(&host, "f").as_deref(), expected);
    }

    #[rstest]
    fn edit_field_without_text_uses_content_description() {
        let host = MockTree::new(
            ViewSpec::edit_field("f", "EditText").content_description("Email").text(""),
        )
        .instantiate();
        assert_eq!(describe(&host, "f").as_deref(), Some("Email"));
    }

    #[rstest]
    fn container_joins_only_speaking_children_in_order() {
        let host = MockTree::new(ViewSpec::container("group", "Group").with_children([
            ViewSpec::new("x", "Text").text("X").speaking(true),
            ViewSpec::new("silent", "Text").text("nope").speaking(false),
            ViewSpec::new("y", "Text").content_description("Y").speaking(true),
        ]))
        .instantiate();
        assert_eq!(describe(&host, "group").as_deref(), Some("X, Y"));
    }

    #[rstest]
    fn nested_containers_recurse() {
        let host = MockTree::new(ViewSpec::container("outer", "Group").with_children([
            ViewSpec::container("inner", "Group").with_children([
                ViewSpec::new("a", "Text").text("a"),
                ViewSpec::new("b", "Text").text("b"),
            ]),
            ViewSpec::new("c", "Text").text("c"),
        ]))
        .instantiate();
        let view = host.root();
        assert_eq!(
            description(&*view.accessibility_node(), &*view, " / ").as_deref(),
            Some("a / b / c")
        );
    }

    #[rstest]
    fn leaf_without_text_has_no_description() {
        let host = MockTree::new(ViewSpec::new("img", "ImageView").content_description(""))
            .instantiate();
        assert_eq!(describe(&host, "img"), None);
    }
}
