use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        criteria::MenuCriteria,
        menu::{Menu, NewMenu, UpdateMenu},
        types::MenuId,
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod menu;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Criteria plus optional paging for a menu listing.
#[derive(Debug, Clone, Default)]
pub struct MenuListQuery {
    pub criteria: MenuCriteria,
    pub pagination: Option<PageRequest>,
}

impl MenuListQuery {
    pub fn new(criteria: MenuCriteria) -> Self {
        Self {
            criteria,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}

pub trait MenuReader {
    fn get_menu_by_id(&self, id: MenuId) -> RepositoryResult<Option<Menu>>;
    /// Returns the number of matches before paging along with the selected menus.
    fn list_menus(&self, query: MenuListQuery) -> RepositoryResult<(usize, Vec<Menu>)>;
    fn count_menus(&self, criteria: &MenuCriteria) -> RepositoryResult<usize>;
}

pub trait MenuWriter {
    fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
    fn update_menu(&self, id: MenuId, updates: &UpdateMenu) -> RepositoryResult<Menu>;
    fn delete_menu(&self, id: MenuId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of the menu storage traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
