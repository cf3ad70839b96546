//! Repository implementation for menu entries.
//!
//! [`MenuCriteria`] is translated into a boxed Diesel query: every filter
//! present adds its own `WHERE` clauses, so the resulting statement is the
//! conjunction of all requested constraints.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        criteria::{MenuCriteria, MenuSortField},
        menu::{Menu, NewMenu, UpdateMenu},
        types::MenuId,
    },
    models::menu::{Menu as DbMenu, NewMenu as DbNewMenu, UpdateMenu as DbUpdateMenu},
    pagination::{Sort, SortDirection},
    repository::{
        DieselRepository, MenuListQuery, MenuReader, MenuWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::menu,
};

type BoxedMenuQuery = menu::BoxedQuery<'static, Sqlite>;

/// Adds the operators shared by all filter types.
macro_rules! apply_filter {
    ($query:ident, $column:expr, $filter:expr) => {{
        let filter = $filter;
        if let Some(value) = filter.equals.clone() {
            $query = $query.filter($column.eq(value));
        }
        if let Some(value) = filter.not_equals.clone() {
            $query = $query.filter($column.ne(value));
        }
        match filter.specified {
            Some(true) => $query = $query.filter($column.is_not_null()),
            Some(false) => $query = $query.filter($column.is_null()),
            None => {}
        }
        if let Some(values) = filter.in_list.clone() {
            $query = $query.filter($column.eq_any(values));
        }
        if let Some(values) = filter.not_in.clone().filter(|values| !values.is_empty()) {
            $query = $query.filter($column.ne_all(values));
        }
    }};
}

/// Adds the shared operators plus the range bounds.
macro_rules! apply_range_filter {
    ($query:ident, $column:expr, $filter:expr) => {{
        let filter = $filter;
        apply_filter!($query, $column, &filter.base);
        if let Some(bound) = filter.greater_than {
            $query = $query.filter($column.gt(bound));
        }
        if let Some(bound) = filter.greater_than_or_equal {
            $query = $query.filter($column.ge(bound));
        }
        if let Some(bound) = filter.less_than {
            $query = $query.filter($column.lt(bound));
        }
        if let Some(bound) = filter.less_than_or_equal {
            $query = $query.filter($column.le(bound));
        }
    }};
}

/// Adds the shared operators plus the substring tests.
macro_rules! apply_string_filter {
    ($query:ident, $column:expr, $filter:expr) => {{
        let filter = $filter;
        apply_filter!($query, $column, &filter.base);
        if let Some(needle) = &filter.contains {
            $query = $query.filter($column.like(like_pattern(needle)).escape('\\'));
        }
        if let Some(needle) = &filter.does_not_contain {
            $query = $query.filter($column.not_like(like_pattern(needle)).escape('\\'));
        }
    }};
}

/// Wraps `needle` in `%` wildcards, escaping the `LIKE` metacharacters it contains.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn filtered_menus(criteria: &MenuCriteria) -> BoxedMenuQuery {
    let mut query = menu::table.into_boxed::<Sqlite>();

    if let Some(filter) = &criteria.id {
        apply_range_filter!(query, menu::id, filter);
    }
    if let Some(filter) = &criteria.label {
        apply_string_filter!(query, menu::label, filter);
    }
    if let Some(filter) = &criteria.name {
        apply_string_filter!(query, menu::name, filter);
    }
    if let Some(filter) = &criteria.position {
        apply_range_filter!(query, menu::position, filter);
    }
    if let Some(filter) = &criteria.level {
        apply_range_filter!(query, menu::level, filter);
    }
    if let Some(filter) = &criteria.active {
        apply_filter!(query, menu::active, filter);
    }

    query
}

fn apply_sort(query: BoxedMenuQuery, sort: &Sort) -> BoxedMenuQuery {
    use SortDirection::{Asc, Desc};

    match (sort.field, sort.direction) {
        (MenuSortField::Id, Asc) => query.then_order_by(menu::id.asc()),
        (MenuSortField::Id, Desc) => query.then_order_by(menu::id.desc()),
        (MenuSortField::Label, Asc) => query.then_order_by(menu::label.asc()),
        (MenuSortField::Label, Desc) => query.then_order_by(menu::label.desc()),
        (MenuSortField::Name, Asc) => query.then_order_by(menu::name.asc()),
        (MenuSortField::Name, Desc) => query.then_order_by(menu::name.desc()),
        (MenuSortField::Position, Asc) => query.then_order_by(menu::position.asc()),
        (MenuSortField::Position, Desc) => query.then_order_by(menu::position.desc()),
        (MenuSortField::Level, Asc) => query.then_order_by(menu::level.asc()),
        (MenuSortField::Level, Desc) => query.then_order_by(menu::level.desc()),
        (MenuSortField::Active, Asc) => query.then_order_by(menu::active.asc()),
        (MenuSortField::Active, Desc) => query.then_order_by(menu::active.desc()),
    }
}

fn into_domain(db_menus: Vec<DbMenu>) -> RepositoryResult<Vec<Menu>> {
    db_menus
        .into_iter()
        .map(|db_menu| Menu::try_from(db_menu).map_err(RepositoryError::from))
        .collect()
}

impl MenuReader for DieselRepository {
    fn get_menu_by_id(&self, id: MenuId) -> RepositoryResult<Option<Menu>> {
        let mut conn = self.conn()?;
        let db_menu = menu::table
            .find(id.get())
            .first::<DbMenu>(&mut conn)
            .optional()?;

        match db_menu {
            Some(db_menu) => Ok(Some(Menu::try_from(db_menu).map_err(RepositoryError::from)?)),
            None => Ok(None),
        }
    }

    fn list_menus(&self, query: MenuListQuery) -> RepositoryResult<(usize, Vec<Menu>)> {
        let mut conn = self.conn()?;

        // Get the total count before applying pagination
        let total = filtered_menus(&query.criteria)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered_menus(&query.criteria);
        if let Some(page) = &query.pagination {
            // An offset SQLite cannot represent lies past every stored row.
            let (Ok(offset), Ok(limit)) = (i64::try_from(page.offset()), i64::try_from(page.size))
            else {
                return Ok((total, Vec::new()));
            };
            items = page.sort.iter().fold(items, apply_sort);
            items = items.offset(offset).limit(limit);
        }

        let db_menus = items
            .then_order_by(menu::id.asc())
            .load::<DbMenu>(&mut conn)?;

        Ok((total, into_domain(db_menus)?))
    }

    fn count_menus(&self, criteria: &MenuCriteria) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total = filtered_menus(criteria)
            .count()
            .get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}

impl MenuWriter for DieselRepository {
    fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu> {
        let mut conn = self.conn()?;

        let db_new_menu: DbNewMenu = new_menu.into();

        let db_menu = diesel::insert_into(menu::table)
            .values(&db_new_menu)
            .get_result::<DbMenu>(&mut conn)?;

        Menu::try_from(db_menu).map_err(RepositoryError::from)
    }

    fn update_menu(&self, id: MenuId, updates: &UpdateMenu) -> RepositoryResult<Menu> {
        let mut conn = self.conn()?;

        let db_updates: DbUpdateMenu = updates.into();

        let db_menu = diesel::update(menu::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbMenu>(&mut conn)?;

        Menu::try_from(db_menu).map_err(RepositoryError::from)
    }

    fn delete_menu(&self, id: MenuId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(menu::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
