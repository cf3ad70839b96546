//! HTTP layer: route registration and the shared response helpers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod menu;

pub const ENTITY_NAME: &str = "menu";

/// Registers the menu endpoints under `/api`.
///
/// `/menus/count` is registered ahead of `/menus/{id}` so that it is not
/// captured by the identifier segment.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(menu::create_menu)
            .service(menu::update_menu)
            .service(menu::list_menus)
            .service(menu::count_menus)
            .service(menu::get_menu)
            .service(menu::delete_menu),
    );
}

/// Adds the `X-<app>-alert` / `X-<app>-params` pair describing an entity change.
pub fn with_entity_alert(
    mut builder: HttpResponseBuilder,
    application_name: &str,
    action: &str,
    param: &str,
) -> HttpResponseBuilder {
    builder
        .insert_header((
            format!("X-{application_name}-alert"),
            format!("{application_name}.{ENTITY_NAME}.{action}"),
        ))
        .insert_header((format!("X-{application_name}-params"), param.to_string()));
    builder
}

/// Problem response for a rejected request.
pub fn bad_request(application_name: &str, message: &str, error_key: &str) -> HttpResponse {
    HttpResponse::BadRequest()
        .insert_header((
            format!("X-{application_name}-error"),
            format!("error.{error_key}"),
        ))
        .insert_header((format!("X-{application_name}-params"), ENTITY_NAME))
        .json(json!({
            "title": message,
            "status": StatusCode::BAD_REQUEST.as_u16(),
            "entityName": ENTITY_NAME,
            "errorKey": error_key,
            "message": format!("error.{error_key}"),
        }))
}

/// Maps a service failure onto its HTTP response, logging unexpected errors.
pub fn error_response(err: ServiceError, application_name: &str, context: &str) -> HttpResponse {
    match err {
        ServiceError::BadRequest { message, error_key } => {
            bad_request(application_name, &message, error_key)
        }
        ServiceError::TypeConstraint(message) => {
            bad_request(application_name, &message, "invalidvalue")
        }
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Repository(err) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
