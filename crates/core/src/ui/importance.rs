use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Importance-for-accessibility directive of a view.
///
/// `Yes` exists because toolkits report it, but the descriptor treats it the
/// same as `Auto`: only `No` and `NoHideDescendants` influence the outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    #[default]
    Auto,
    Yes,
    No,
    NoHideDescendants,
}

impl Importance {
    /// Maps the integer codes used by the platform view API.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Importance::Auto),
            1 => Some(Importance::Yes),
            2 => Some(Importance::No),
            4 => Some(Importance::NoHideDescendants),
            _ => None,
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Importance::Auto => 0,
            Importance::Yes => 1,
            Importance::No => 2,
            Importance::NoHideDescendants => 4,
        }
    }

    /// `true` when the view itself is hidden from accessibility services.
    pub const fn hides_self(self) -> bool {
        matches!(self, Importance::No | Importance::NoHideDescendants)
    }

    /// `true` when every descendant of the view is hidden as well.
    pub const fn hides_descendants(self) -> bool {
        matches!(self, Importance::NoHideDescendants)
    }

    /// Constant name as printed by the platform tooling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Importance::Auto => "AUTO",
            Importance::Yes => "YES",
            Importance::No => "NO",
            Importance::NoHideDescendants => "NO_HIDE_DESCENDANTS",
        }
    }
}

impl Display for Importance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
