use serde::{Deserialize, Serialize};

use crate::domain::types::MenuId;

/// A navigation menu entry.
///
/// Every attribute except the identifier is optional; equality is decided by
/// the identifier alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub label: Option<String>,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

impl PartialEq for Menu {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Menu {}

impl std::hash::Hash for Menu {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Mutable attributes of a menu entry that is about to be inserted.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct NewMenu {
    pub label: Option<String>,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

impl NewMenu {
    #[must_use]
    pub fn new(
        label: Option<String>,
        name: Option<String>,
        position: Option<i32>,
        level: Option<i32>,
        active: Option<bool>,
    ) -> Self {
        Self {
            label,
            name,
            position,
            level,
            active,
        }
    }
}

/// Full replacement of the mutable attributes of an existing menu entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct UpdateMenu {
    pub label: Option<String>,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

impl UpdateMenu {
    #[must_use]
    pub fn new(
        label: Option<String>,
        name: Option<String>,
        position: Option<i32>,
        level: Option<i32>,
        active: Option<bool>,
    ) -> Self {
        Self {
            label,
            name,
            position,
            level,
            active,
        }
    }
}
