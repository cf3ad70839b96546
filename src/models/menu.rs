//! Diesel models representing menu entries.

use diesel::prelude::*;

use crate::domain::menu::{
    Menu as DomainMenu, NewMenu as DomainNewMenu, UpdateMenu as DomainUpdateMenu,
};
use crate::domain::types::{MenuId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::menu::Menu`].
pub struct Menu {
    pub id: i64,
    pub label: Option<String>,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu)]
/// Insertable form of [`Menu`].
pub struct NewMenu<'a> {
    pub label: Option<&'a str>,
    pub name: Option<&'a str>,
    pub position: Option<i32>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu)]
#[diesel(treat_none_as_null = true)]
/// Full replacement of the mutable columns of a [`Menu`] record.
pub struct UpdateMenu<'a> {
    pub label: Option<&'a str>,
    pub name: Option<&'a str>,
    pub position: Option<i32>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

impl TryFrom<Menu> for DomainMenu {
    type Error = TypeConstraintError;

    fn try_from(menu: Menu) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MenuId::try_from(menu.id)?,
            label: menu.label,
            name: menu.name,
            position: menu.position,
            level: menu.level,
            active: menu.active,
        })
    }
}

impl<'a> From<&'a DomainNewMenu> for NewMenu<'a> {
    fn from(menu: &'a DomainNewMenu) -> Self {
        Self {
            label: menu.label.as_deref(),
            name: menu.name.as_deref(),
            position: menu.position,
            level: menu.level,
            active: menu.active,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenu> for UpdateMenu<'a> {
    fn from(menu: &'a DomainUpdateMenu) -> Self {
        Self {
            label: menu.label.as_deref(),
            name: menu.name.as_deref(),
            position: menu.position,
            level: menu.level,
            active: menu.active,
        }
    }
}
