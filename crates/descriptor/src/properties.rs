use crate::ignore::IgnoreVerdict;
use serde::Serialize;

/// Everything the inspector shows in its accessibility panel for one view.
///
/// Focus, description and actions are only collected for nodes that are not
/// ignored; for ignored nodes they stay empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccessibilityProperties {
    pub ignored: bool,
    pub verdict: IgnoreVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_reasons: Option<&'static str>,
    pub focusable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focusable_reasons: Option<&'static str>,
    pub focused: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

impl AccessibilityProperties {
    /// Panel rows as `(name, value)`, in display order. Absent values are omitted.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("ignored", self.ignored.to_string())];
        if let Some(reasons) = self.ignored_reasons {
            entries.push(("ignored-reasons", reasons.to_owned()));
        }
        entries.push(("focusable", self.focusable.to_string()));
        if self.ignored {
            return entries;
        }
        if let Some(reasons) = self.focusable_reasons {
            entries.push(("focusable-reasons", reasons.to_owned()));
        }
        entries.push(("focused", self.focused.to_string()));
        if let Some(description) = &self.description {
            entries.push(("description", description.clone()));
        }
        if !self.actions.is_empty() {
            entries.push(("actions", self.actions.join(", ")));
        }
        entries
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
