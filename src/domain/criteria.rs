//! Dynamic query criteria for [`Menu`] entries.
//!
//! [`MenuCriteria`] holds one optional filter per attribute. A menu matches
//! when it satisfies every filter that is present; absent filters impose no
//! constraint. The repository translates the same criteria into SQL, while
//! [`MenuCriteria::matches`] evaluates them against values already in memory.

use std::cmp::Ordering;

use crate::domain::filter::{Filter, RangeFilter, StringFilter};
use crate::domain::menu::Menu;
use crate::pagination::{PageRequest, SortDirection};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuCriteria {
    pub id: Option<RangeFilter<i64>>,
    pub label: Option<StringFilter>,
    pub name: Option<StringFilter>,
    pub position: Option<RangeFilter<i32>>,
    pub level: Option<RangeFilter<i32>>,
    pub active: Option<Filter<bool>>,
}

impl MenuCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, filter: RangeFilter<i64>) -> Self {
        self.id = Some(filter);
        self
    }

    pub fn label(mut self, filter: StringFilter) -> Self {
        self.label = Some(filter);
        self
    }

    pub fn name(mut self, filter: StringFilter) -> Self {
        self.name = Some(filter);
        self
    }

    pub fn position(mut self, filter: RangeFilter<i32>) -> Self {
        self.position = Some(filter);
        self
    }

    pub fn level(mut self, filter: RangeFilter<i32>) -> Self {
        self.level = Some(filter);
        self
    }

    pub fn active(mut self, filter: Filter<bool>) -> Self {
        self.active = Some(filter);
        self
    }

    /// True when no attribute is constrained.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.label.is_none()
            && self.name.is_none()
            && self.position.is_none()
            && self.level.is_none()
            && self.active.is_none()
    }

    /// Returns whether `menu` satisfies every filter present in the criteria.
    pub fn matches(&self, menu: &Menu) -> bool {
        let id = menu.id.get();
        self.id.as_ref().is_none_or(|f| f.matches(Some(&id)))
            && self
                .label
                .as_ref()
                .is_none_or(|f| f.matches(menu.label.as_deref()))
            && self
                .name
                .as_ref()
                .is_none_or(|f| f.matches(menu.name.as_deref()))
            && self
                .position
                .as_ref()
                .is_none_or(|f| f.matches(menu.position.as_ref()))
            && self
                .level
                .as_ref()
                .is_none_or(|f| f.matches(menu.level.as_ref()))
            && self
                .active
                .as_ref()
                .is_none_or(|f| f.matches(menu.active.as_ref()))
    }
}

/// Attributes a menu listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSortField {
    Id,
    Label,
    Name,
    Position,
    Level,
    Active,
}

impl MenuSortField {
    /// Resolves the property name used in `sort=<property>,<direction>`.
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "label" => Some(Self::Label),
            "name" => Some(Self::Name),
            "position" => Some(Self::Position),
            "level" => Some(Self::Level),
            "active" => Some(Self::Active),
            _ => None,
        }
    }

    /// Orders two menus by this attribute, nulls first as SQLite does.
    pub fn compare(self, a: &Menu, b: &Menu) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Label => a.label.cmp(&b.label),
            Self::Name => a.name.cmp(&b.name),
            Self::Position => a.position.cmp(&b.position),
            Self::Level => a.level.cmp(&b.level),
            Self::Active => a.active.cmp(&b.active),
        }
    }
}

/// Returns every menu from `menus` matching `criteria`, keeping input order.
pub fn filter_menus(menus: &[Menu], criteria: &MenuCriteria) -> Vec<Menu> {
    menus
        .iter()
        .filter(|menu| criteria.matches(menu))
        .cloned()
        .collect()
}

/// Counts the menus from `menus` matching `criteria`.
pub fn count_menus(menus: &[Menu], criteria: &MenuCriteria) -> usize {
    menus.iter().filter(|menu| criteria.matches(menu)).count()
}

/// Filters, orders and slices `menus` according to `criteria` and `page`.
///
/// Returns the total number of matches before slicing along with the
/// requested page. A page past the end yields an empty list.
pub fn page_menus(
    menus: &[Menu],
    criteria: &MenuCriteria,
    page: &PageRequest,
) -> (usize, Vec<Menu>) {
    let mut matched = filter_menus(menus, criteria);
    let total = matched.len();

    matched.sort_by(|a, b| {
        page.sort
            .iter()
            .map(|sort| {
                let ordering = sort.field.compare(a, b);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    });

    let items = matched
        .into_iter()
        .skip(page.offset())
        .take(page.size)
        .collect();

    (total, items)
}
