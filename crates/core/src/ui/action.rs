use serde::{Deserialize, Serialize};

/// An action advertised by an accessibility node.
///
/// Standard actions are identified by the platform's numeric id alone; custom
/// actions usually carry a label supplied by the application.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeAction {
    pub id: u32,
    pub label: Option<String>,
}

impl NodeAction {
    pub fn new(id: u32, label: Option<String>) -> Self {
        Self { id, label }
    }

    pub fn standard(action: StandardAction) -> Self {
        Self { id: action.id(), label: None }
    }

    pub fn custom(id: u32, label: impl Into<String>) -> Self {
        Self { id, label: Some(label.into()) }
    }

    pub fn as_standard(&self) -> Option<StandardAction> {
        StandardAction::from_id(self.id)
    }
}

impl From<StandardAction> for NodeAction {
    fn from(action: StandardAction) -> Self {
        NodeAction::standard(action)
    }
}

/// Actions with a fixed platform id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardAction {
    Focus,
    ClearFocus,
    Select,
    ClearSelection,
    Click,
    LongClick,
    AccessibilityFocus,
    ClearAccessibilityFocus,
    NextAtMovementGranularity,
    PreviousAtMovementGranularity,
    NextHtmlElement,
    PreviousHtmlElement,
    ScrollForward,
    ScrollBackward,
    Copy,
    Paste,
    Cut,
    SetSelection,
}

impl StandardAction {
    pub const ALL: [StandardAction; 18] = [
        StandardAction::Focus,
        StandardAction::ClearFocus,
        StandardAction::Select,
        StandardAction::ClearSelection,
        StandardAction::Click,
        StandardAction::LongClick,
        StandardAction::AccessibilityFocus,
        StandardAction::ClearAccessibilityFocus,
        StandardAction::NextAtMovementGranularity,
        StandardAction::PreviousAtMovementGranularity,
        StandardAction::NextHtmlElement,
        StandardAction::PreviousHtmlElement,
        StandardAction::ScrollForward,
        StandardAction::ScrollBackward,
        StandardAction::Copy,
        StandardAction::Paste,
        StandardAction::Cut,
        StandardAction::SetSelection,
    ];

    pub const fn id(self) -> u32 {
        match self {
            StandardAction::Focus => 0x0000_0001,
            StandardAction::ClearFocus => 0x0000_0002,
            StandardAction::Select => 0x0000_0004,
            StandardAction::ClearSelection => 0x0000_0008,
            StandardAction::Click => 0x0000_0010,
            StandardAction::LongClick => 0x0000_0020,
            StandardAction::AccessibilityFocus => 0x0000_0040,
            StandardAction::ClearAccessibilityFocus => 0x0000_0080,
            StandardAction::NextAtMovementGranularity => 0x0000_0100,
            StandardAction::PreviousAtMovementGranularity => 0x0000_0200,
            StandardAction::NextHtmlElement => 0x0000_0400,
            StandardAction::PreviousHtmlElement => 0x0000_0800,
            StandardAction::ScrollForward => 0x0000_1000,
            StandardAction::ScrollBackward => 0x0000_2000,
            StandardAction::Copy => 0x0000_4000,
            StandardAction::Paste => 0x0000_8000,
            StandardAction::Cut => 0x0001_0000,
            StandardAction::SetSelection => 0x0002_0000,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    /// Kebab-case label shown by the inspector.
    pub const fn label(self) -> &'static str {
        match self {
            StandardAction::Focus => "focus",
            StandardAction::ClearFocus => "clear-focus",
            StandardAction::Select => "select",
            StandardAction::ClearSelection => "clear-selection",
            StandardAction::Click => "click",
            StandardAction::LongClick => "long-click",
            StandardAction::AccessibilityFocus => "accessibility-focus",
            StandardAction::ClearAccessibilityFocus => "clear-accessibility-focus",
            StandardAction::NextAtMovementGranularity => "next-at-movement-granularity",
            StandardAction::PreviousAtMovementGranularity => "previous-at-movement-granularity",
            StandardAction::NextHtmlElement => "next-html-element",
            StandardAction::PreviousHtmlElement => "previous-html-element",
            StandardAction::ScrollForward => "scroll-forward",
            StandardAction::ScrollBackward => "scroll-backward",
            StandardAction::Copy => "copy",
            StandardAction::Paste => "paste",
            StandardAction::Cut => "cut",
            StandardAction::SetSelection => "set-selection",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn ids_and_labels_are_unique() {
        let ids: HashSet<u32> = StandardAction::ALL.iter().map(|a| a.id()).collect();
        let labels: HashSet<&str> = StandardAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(ids.len(), StandardAction::ALL.len());
        assert_eq!(labels.len(), StandardAction::ALL.len());
    }

    #[rstest]
    #[case(0x10, Some(StandardAction::Click))]
    #[case(0x1000, Some(StandardAction::ScrollForward))]
    #[case(0x10000, Some(StandardAction::Cut))]
    #[case(0x3, None)]
    #[case(0, None)]
    fn lookup_by_id(#[case] id: u32, #[case] expected: Option<StandardAction>) {
        assert_eq!(StandardAction::from_id(id), expected);
    }

    #[rstest]
    fn label_lookup_is_inverse_of_label() {
        for action in StandardAction::ALL {
            assert_eq!(StandardAction::from_label(action.label()), Some(action));
        }
        assert_eq!(StandardAction::from_label("wiggle"), None);
    }

    #[rstest]
    fn node_action_from_standard_has_no_label() {
        let action = NodeAction::from(StandardAction::LongClick);
        assert_eq!(action.id, 0x20);
        assert_eq!(action.label, None);
        assert_eq!(action.as_standard(), Some(StandardAction::LongClick));
    }
}
