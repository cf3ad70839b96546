//! Request payloads accepted by the menu endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::menu::{NewMenu, UpdateMenu};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// JSON body of `POST /menus` and `PUT /menus`.
pub struct MenuForm {
    /// Must be absent on create and present on update.
    pub id: Option<i64>,
    #[validate(length(max = 255))]
    pub label: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub position: Option<i32>,
    #[validate(range(min = 0))]
    pub level: Option<i32>,
    pub active: Option<bool>,
}

impl From<MenuForm> for NewMenu {
    fn from(form: MenuForm) -> Self {
        NewMenu::new(form.label, form.name, form.position, form.level, form.active)
    }
}

impl From<MenuForm> for UpdateMenu {
    fn from(form: MenuForm) -> Self {
        UpdateMenu::new(form.label, form.name, form.position, form.level, form.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_payload() {
        let form: MenuForm =
            serde_json::from_str(r#"{"label":"Home","position":1}"#).expect("valid json");
        assert_eq!(form.id, None);
        assert_eq!(form.label.as_deref(), Some("Home"));
        assert_eq!(form.active, None);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn rejects_negative_position_and_long_label() {
        let form = MenuForm {
            label: Some("x".repeat(256)),
            position: Some(-1),
            ..MenuForm::default()
        };
        let errors = form.validate().expect_err("invalid form");
        let fields = errors.field_errors();
        assert!(fields.contains_key("label"));
        assert!(fields.contains_key("position"));
    }

    #[test]
    fn converts_into_domain_payloads() {
        let form = MenuForm {
            id: Some(3),
            name: Some("docs".into()),
            level: Some(2),
            active: Some(true),
            ..MenuForm::default()
        };
        let update: UpdateMenu = form.clone().into();
        assert_eq!(update.name.as_deref(), Some("docs"));
        assert_eq!(update.label, None);
        let new: NewMenu = form.into();
        assert_eq!(new.level, Some(2));
        assert_eq!(new.active, Some(true));
    }
}
