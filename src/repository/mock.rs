//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::criteria::MenuCriteria;
use crate::domain::menu::{Menu, NewMenu, UpdateMenu};
use crate::domain::types::MenuId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{MenuListQuery, MenuReader, MenuWriter};

mock! {
    pub Repository {}

    impl MenuReader for Repository {
        fn get_menu_by_id(&self, id: MenuId) -> RepositoryResult<Option<Menu>>;
        fn list_menus(&self, query: MenuListQuery) -> RepositoryResult<(usize, Vec<Menu>)>;
        fn count_menus(&self, criteria: &MenuCriteria) -> RepositoryResult<usize>;
    }

    impl MenuWriter for Repository {
        fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
        fn update_menu(&self, id: MenuId, updates: &UpdateMenu) -> RepositoryResult<Menu>;
        fn delete_menu(&self, id: MenuId) -> RepositoryResult<()>;
    }
}
