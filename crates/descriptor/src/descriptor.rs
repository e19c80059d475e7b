use crate::actions;
use crate::config::{ConfigError, DescriptorConfig, IgnorePolicy};
use crate::description;
use crate::focus;
use crate::ignore::{self, IgnoreVerdict};
use crate::properties::AccessibilityProperties;
use axlens_core::ui::{AccessibilityNode, HostView};

/// Accessibility metadata for (node, view) pairs of a host hierarchy.
///
/// Stateless apart from its configuration; every query walks the host tree
/// afresh, so results follow the host's current state.
#[derive(Clone, Debug, Default)]
pub struct AccessibilityDescriptor {
    config: DescriptorConfig,
}

impl AccessibilityDescriptor {
    /// # Errors
    ///
    /// Rejects configurations that fail [`DescriptorConfig::validate`].
    pub fn new(config: DescriptorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DescriptorConfig {
        &self.config
    }

    pub fn classify(&self, node: &dyn AccessibilityNode, view: &dyn HostView) -> IgnoreVerdict {
        match self.config.ignore_policy {
            IgnorePolicy::NodeInfo => ignore::classify(node, view),
            IgnorePolicy::ViewFlags => ignore::classify_by_view_flags(view),
        }
    }

    pub fn is_ignored(&self, node: &dyn AccessibilityNode, view: &dyn HostView) -> bool {
        self.classify(node, view).is_ignored()
    }

    pub fn explain_ignored(
        &self,
        node: &dyn AccessibilityNode,
        view: &dyn HostView,
    ) -> &'static str {
        self.classify(node, view).reason()
    }

    pub fn description(&self, node: &dyn AccessibilityNode, view: &dyn HostView) -> Option<String> {
        description::description(node, view, &self.config.description_separator)
    }

    pub fn action_labels(&self, node: &dyn AccessibilityNode) -> Vec<String> {
        actions::action_labels(node)
    }

    pub fn focusable_reasons(
        &self,
        node: &dyn AccessibilityNode,
        view: &dyn HostView,
    ) -> Option<&'static str> {
        focus::focusable_reasons(node, view)
    }

    /// Collects the panel properties for the view's own accessibility node.
    pub fn properties(&self, view: &dyn HostView) -> AccessibilityProperties {
        let node = view.accessibility_node();
        self.properties_of(&*node, view)
    }

    pub fn properties_of(
        &self,
        node: &dyn AccessibilityNode,
        view: &dyn HostView,
    ) -> AccessibilityProperties {
        let verdict = self.classify(node, view);
        let ignored = verdict.is_ignored();
        tracing::debug!(class = view.class_name(), ?verdict, "collecting accessibility properties");

        if ignored {
            return AccessibilityProperties {
                ignored,
                verdict,
                ignored_reasons: Some(verdict.reason()),
                focusable: false,
                focusable_reasons: None,
                focused: false,
                description: None,
                actions: Vec::new(),
            };
        }

        AccessibilityProperties {
            ignored,
            verdict,
            ignored_reasons: None,
            focusable: true,
            focusable_reasons: self.focusable_reasons(node, view),
            focused: node.is_accessibility_focused(),
            description: self.description(node, view),
            actions: self.action_labels(node),
        }
    }
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

    #[rstest]
    fn exposed_view_carries_full_properties(host: MockHost) {
        let descriptor = AccessibilityDescriptor::default();
        let search = host.view("search").expect("search");
        let properties = descriptor.properties(&*search);

        assert!(!properties.ignored);
        assert!(properties.focusable);
        assert!(properties.focused);
        assert_eq!(properties.verdict, IgnoreVerdict::FocusableLeaf);
        assert_eq!(properties.description.as_deref(), Some("bluetooth"));
        assert_eq!(
            properties.actions,
            vec!["focus", "click", "long-click", "paste", "set-selection", "Voice search"]
        );
        assert_eq!(properties.focusable_reasons, Some("View is actionable and has no children."));
    }

    #[rstest]
    fn ignored_view_only_carries_reason(host: MockHost) {
        let descriptor = AccessibilityDescriptor::default();
        let label = host.view("wifi_label").expect("label");
        let properties = descriptor.properties(&*label);

        assert!(properties.ignored);
        assert!(!properties.focusable);
        assert_eq!(
            properties.ignored_reasons,
            Some("View is not actionable, and an ancestor View has co-opted its description.")
        );
        assert_eq!(properties.description, None);
        assert!(properties.actions.is_empty());
        let names: Vec<&str> = properties.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["ignored", "ignored-reasons", "focusable"]);
    }

    #[rstest]
    fn entries_follow_panel_order(host: MockHost) {
        let descriptor = AccessibilityDescriptor::default();
        let properties = descriptor.properties(&*host.view("wifi_row").expect("row"));
        let entries = properties.entries();
        let names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["ignored", "focusable", "focusable-reasons", "focused", "description", "actions"]
        );
        assert_eq!(entries[4].1, "Wi-Fi, Connected");
        assert_eq!(entries[5].1, "click");
    }

    #[rstest]
    fn separator_comes_from_configuration(host: MockHost) {
        let descriptor =
            AccessibilityDescriptor::new(DescriptorConfig::default().with_separator(" · "))
                .expect("valid config");
        let row = host.view("item_display").expect("row");
        assert_eq!(
            descriptor.description(&*row.accessibility_node(), &*row).as_deref(),
            Some("Display · Brightness, dark theme")
        );
    }

    #[rstest]
    fn view_flags_policy_ignores_node_information() {
        let host = MockTree::new(
            ViewSpec::new("icon", "ImageView")
                .content_description("Logo")
                .visible(false),
        )
        .instantiate();
        let view = host.root();
        let node = view.accessibility_node();

        let node_info = AccessibilityDescriptor::default();
        assert_eq!(node_info.explain_ignored(&*node, &*view), "View is not visible.");

        let view_flags = AccessibilityDescriptor::new(
            DescriptorConfig::default().with_policy(IgnorePolicy::ViewFlags),
        )
        .expect("valid config");
        assert!(!view_flags.is_ignored(&*node, &*view));
        assert_eq!(
            view_flags.explain_ignored(&*node, &*view),
            "View is actionable or has a description."
        );
    }

    #[rstest]
    fn rejects_empty_separator_built_in_code() {
        let result = AccessibilityDescriptor::new(DescriptorConfig::default().with_separator(""));
        assert!(matches!(result, Err(ConfigError::EmptySeparator)));
    }

    #[rstest]
    fn properties_serialize_to_kebab_case_json(host: MockHost) {
        let descriptor = AccessibilityDescriptor::default();
        let properties = descriptor.properties(&*host.view("divider").expect("divider"));
        let json = properties.to_json().expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed["ignored"], true);
        assert_eq!(
            parsed["ignored-reasons"],
            "View has importantForAccessibility set to 'NO'."
        );
        assert!(parsed.get("description").is_none());
        assert_eq!(parsed["verdict"], "importance-no");
    }
}
