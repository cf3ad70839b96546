use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::criteria::MenuQuery;
use crate::forms::menu::MenuForm;
use crate::models::config::ServerConfig;
use crate::pagination::link_header;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, with_entity_alert};
use crate::services::menu as menu_service;

fn parse_query(req: &HttpRequest, config: &ServerConfig) -> Result<MenuQuery, HttpResponse> {
    MenuQuery::from_query_string(req.query_string()).map_err(|e| {
        log::debug!("Rejected menu query `{}`: {e}", req.query_string());
        bad_request(&config.application_name, &e.to_string(), "badfilter")
    })
}

#[post("/menus")]
pub async fn create_menu(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(form): web::Json<MenuForm>,
) -> impl Responder {
    match menu_service::create_menu(repo.get_ref(), form) {
        Ok(menu) => {
            let id = menu.id.to_string();
            let mut builder = HttpResponse::Created();
            builder.insert_header((header::LOCATION, format!("/api/menus/{id}")));
            with_entity_alert(builder, &config.application_name, "created", &id).json(menu)
        }
        Err(err) => error_response(err, &config.application_name, "Failed to create menu"),
    }
}

#[put("/menus")]
pub async fn update_menu(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(form): web::Json<MenuForm>,
) -> impl Responder {
    match menu_service::update_menu(repo.get_ref(), form) {
        Ok(menu) => {
            let id = menu.id.to_string();
            with_entity_alert(HttpResponse::Ok(), &config.application_name, "updated", &id)
                .json(menu)
        }
        Err(err) => error_response(err, &config.application_name, "Failed to update menu"),
    }
}

#[get("/menus")]
pub async fn list_menus(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = match parse_query(&req, &config) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let page = query.page.clone();

    match menu_service::list_menus(repo.get_ref(), query.criteria, query.page) {
        Ok(result) => HttpResponse::Ok()
            .insert_header(("X-Total-Count", result.total.to_string()))
            .insert_header((
                header::LINK,
                link_header(req.path(), req.query_string(), &page, result.total),
            ))
            .json(result.menus),
        Err(err) => error_response(err, &config.application_name, "Failed to list menus"),
    }
}

#[get("/menus/count")]
pub async fn count_menus(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = match parse_query(&req, &config) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match menu_service::count_menus(repo.get_ref(), &query.criteria) {
        Ok(count) => HttpResponse::Ok().json(count),
        Err(err) => error_response(err, &config.application_name, "Failed to count menus"),
    }
}

#[get("/menus/{id}")]
pub async fn get_menu(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match menu_service::get_menu(repo.get_ref(), id.into_inner()) {
        Ok(menu) => HttpResponse::Ok().json(menu),
        Err(err) => error_response(err, &config.application_name, "Failed to get menu"),
    }
}

#[delete("/menus/{id}")]
pub async fn delete_menu(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let id = id.into_inner();
    match menu_service::delete_menu(repo.get_ref(), id) {
        Ok(()) => with_entity_alert(
            HttpResponse::NoContent(),
            &config.application_name,
            "deleted",
            &id.to_string(),
        )
        .finish(),
        Err(err) => error_response(err, &config.application_name, "Failed to delete menu"),
    }
}
