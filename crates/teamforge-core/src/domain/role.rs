//! Fixed role slots within a team.

use std::fmt;

/// One of the five role slots. A team's slot order is always
/// top, jungle, mid, adc, support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// All roles in slot order.
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Returns the slot position of this role within a team.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Returns the role occupying a slot position.
    pub fn from_slot(slot: usize) -> Option<Role> {
        Self::ALL.get(slot).copied()
    }

    /// Short form-field key.
    pub fn key(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jg",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "sup",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Top => "Top lane",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid lane",
            Role::Adc => "AD Carry",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
