//! DTOs produced by the menu services.

use crate::domain::menu::Menu;

/// Result payload returned by [`crate::services::menu::list_menus`].
#[derive(Debug)]
pub struct MenuPage {
    /// Total number of menus matching the criteria, before paging.
    pub total: usize,
    /// Page of menus requested by the caller.
    pub menus: Vec<Menu>,
}
