//! Services handling menu management workflows.

use validator::Validate;

use crate::domain::criteria::MenuCriteria;
use crate::domain::menu::{Menu, NewMenu, UpdateMenu};
use crate::domain::types::MenuId;
use crate::dto::menu::MenuPage;
use crate::forms::menu::MenuForm;
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryError;
use crate::repository::{MenuListQuery, MenuReader, MenuWriter};
use crate::services::{ServiceError, ServiceResult};

fn validate_form(form: &MenuForm) -> ServiceResult<()> {
    form.validate().map_err(|e| {
        log::debug!("Rejected menu payload: {e}");
        ServiceError::bad_request(format!("Invalid menu payload: {e}"), "validation")
    })
}

/// Persists a new menu entry. The payload must not carry an identifier.
pub fn create_menu<R>(repo: &R, form: MenuForm) -> ServiceResult<Menu>
where
    R: MenuWriter + ?Sized,
{
    log::debug!("Request to save Menu : {form:?}");

    if form.id.is_some() {
        return Err(ServiceError::bad_request(
            "A new menu cannot already have an ID",
            "idexists",
        ));
    }
    validate_form(&form)?;

    let new_menu = NewMenu::from(form);
    let menu = repo.create_menu(&new_menu)?;

    Ok(menu)
}

/// Replaces every mutable attribute of an existing menu entry.
pub fn update_menu<R>(repo: &R, form: MenuForm) -> ServiceResult<Menu>
where
    R: MenuWriter + ?Sized,
{
    log::debug!("Request to update Menu : {form:?}");

    let Some(raw_id) = form.id else {
        return Err(ServiceError::bad_request("Invalid id", "idnull"));
    };
    validate_form(&form)?;

    let id = MenuId::new(raw_id)?;
    let updates = UpdateMenu::from(form);

    match repo.update_menu(id, &updates) {
        Ok(menu) => Ok(menu),
        Err(RepositoryError::NotFound) => Err(ServiceError::bad_request(
            "Entity not found",
            "idnotfound",
        )),
        Err(err) => Err(err.into()),
    }
}

/// Fetches a single menu entry.
pub fn get_menu<R>(repo: &R, id: i64) -> ServiceResult<Menu>
where
    R: MenuReader + ?Sized,
{
    log::debug!("Request to get Menu : {id}");

    // Non-positive ids can never have been assigned by the store.
    let Ok(id) = MenuId::new(id) else {
        return Err(ServiceError::NotFound);
    };

    repo.get_menu_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Removes a menu entry. Unknown identifiers are reported as not found.
pub fn delete_menu<R>(repo: &R, id: i64) -> ServiceResult<()>
where
    R: MenuWriter + ?Sized,
{
    log::debug!("Request to delete Menu : {id}");

    let Ok(id) = MenuId::new(id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.delete_menu(id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(err) => {
            log::error!("Failed to delete menu {id}: {err}");
            Err(err.into())
        }
    }
}

/// Returns every menu matching `criteria`, without paging.
pub fn find_menus<R>(repo: &R, criteria: MenuCriteria) -> ServiceResult<Vec<Menu>>
where
    R: MenuReader + ?Sized,
{
    log::debug!("find by criteria : {criteria:?}");

    let (_, menus) = repo.list_menus(MenuListQuery::new(criteria))?;
    Ok(menus)
}

/// Returns one page of the menus matching `criteria` plus the total match count.
pub fn list_menus<R>(repo: &R, criteria: MenuCriteria, page: PageRequest) -> ServiceResult<MenuPage>
where
    R: MenuReader + ?Sized,
{
    log::debug!("find by criteria : {criteria:?}, page: {page:?}");

    let (total, menus) = repo.list_menus(MenuListQuery::new(criteria).paginate(page))?;

    Ok(MenuPage { total, menus })
}

/// Counts the menus matching `criteria`.
pub fn count_menus<R>(repo: &R, criteria: &MenuCriteria) -> ServiceResult<usize>
where
    R: MenuReader + ?Sized,
{
    log::debug!("count by criteria : {criteria:?}");

    Ok(repo.count_menus(criteria)?)
}
