use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use cosmos_menu::models::config::ServerConfig;
use cosmos_menu::repository::DieselRepository;
use cosmos_menu::routes::configure;

mod common;

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        database_url: String::new(),
        application_name: "cosmosApp".into(),
    }
}

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .configure(configure)
                .app_data(web::Data::new(DieselRepository::new($test_db.pool().clone())))
                .app_data(web::Data::new(server_config())),
        )
        .await
    };
}

macro_rules! create {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/menus")
            .set_json($body)
            .to_request();
        let created: Value = test::call_and_read_body_json(&$app, req).await;
        created
    }};
}

#[actix_web::test]
async fn create_assigns_id_and_sets_location() {
    let test_db = common::TestDb::new("routes_create.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/menus")
        .set_json(json!({"label": "Home", "name": "home", "position": 1, "level": 0, "active": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/menus/1");
    assert_eq!(
        resp.headers().get("X-cosmosApp-alert").unwrap(),
        "cosmosApp.menu.created"
    );
    assert_eq!(resp.headers().get("X-cosmosApp-params").unwrap(), "1");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["label"], "Home");
}

#[actix_web::test]
async fn create_with_existing_id_is_bad_request() {
    let test_db = common::TestDb::new("routes_create_with_id.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/menus")
        .set_json(json!({"id": 1, "label": "Home"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("X-cosmosApp-error").unwrap(),
        "error.idexists"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorKey"], "idexists");
    assert_eq!(body["entityName"], "menu");

    let req = test::TestRequest::get().uri("/api/menus/count").to_request();
    let count: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn update_checks_identifier() {
    let test_db = common::TestDb::new("routes_update.db");
    let app = init_app!(test_db);
    create!(app, json!({"label": "Home", "position": 1}));

    let req = test::TestRequest::put()
        .uri("/api/menus")
        .set_json(json!({"label": "Start"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorKey"], "idnull");

    let req = test::TestRequest::put()
        .uri("/api/menus")
        .set_json(json!({"id": 99, "label": "Start"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorKey"], "idnotfound");

    let req = test::TestRequest::put()
        .uri("/api/menus")
        .set_json(json!({"id": 1, "label": "Start", "active": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("X-cosmosApp-alert").unwrap(),
        "cosmosApp.menu.updated"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["label"], "Start");
    assert_eq!(body["position"], Value::Null);
    assert_eq!(body["active"], false);
}

#[actix_web::test]
async fn get_and_delete_by_id() {
    let test_db = common::TestDb::new("routes_get_delete.db");
    let app = init_app!(test_db);
    create!(app, json!({"label": "Home"}));

    let req = test::TestRequest::get().uri("/api/menus/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["label"], "Home");

    let req = test::TestRequest::get()
        .uri(&format!("/api/menus/{}", i64::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/api/menus/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers().get("X-cosmosApp-alert").unwrap(),
        "cosmosApp.menu.deleted"
    );

    let req = test::TestRequest::get().uri("/api/menus/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for uri in ["/api/menus/1", "/api/menus/999", "/api/menus/0"] {
        let req = test::TestRequest::delete().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri: {uri}");
    }
}

#[actix_web::test]
async fn list_filters_and_counts() {
    let test_db = common::TestDb::new("routes_list_filters.db");
    let app = init_app!(test_db);
    create!(app, json!({"label": "A", "position": 1, "active": false}));
    create!(app, json!({"label": "B", "position": 2, "active": true}));

    let cases = [
        ("active.equals=true", vec![2]),
        ("position.lessThan=2", vec![1]),
        ("", vec![1, 2]),
        ("label.contains=b", vec![2]),
        ("label.in=A,B&position.greaterThanOrEqual=2", vec![2]),
        ("active.specified=false", vec![]),
    ];

    for (filter, expected) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/api/menus?sort=id,asc&{filter}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|menu| menu["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, expected, "filter: {filter}");

        let req = test::TestRequest::get()
            .uri(&format!("/api/menus/count?{filter}"))
            .to_request();
        let count: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(count, expected.len(), "filter: {filter}");
    }
}

#[actix_web::test]
async fn list_sets_pagination_headers() {
    let test_db = common::TestDb::new("routes_pagination.db");
    let app = init_app!(test_db);
    for position in 0..5 {
        create!(app, json!({"label": format!("M{position}"), "position": position}));
    }

    let req = test::TestRequest::get()
        .uri("/api/menus?page=1&size=2&sort=position,desc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "5");
    let link = resp
        .headers()
        .get(header::LINK)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(link.contains("</api/menus?sort=position,desc&page=2&size=2>; rel=\"next\""));
    assert!(link.contains("</api/menus?sort=position,desc&page=0&size=2>; rel=\"prev\""));
    assert!(link.contains("</api/menus?sort=position,desc&page=2&size=2>; rel=\"last\""));

    let body: Value = test::read_body_json(resp).await;
    let labels: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|menu| menu["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["M2", "M1"]);
}

#[actix_web::test]
async fn out_of_range_page_is_empty_with_total() {
    let test_db = common::TestDb::new("routes_out_of_range.db");
    let app = init_app!(test_db);
    create!(app, json!({"label": "Only"}));

    let req = test::TestRequest::get()
        .uri("/api/menus?page=5&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "1");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn huge_page_numbers_are_empty_pages() {
    let test_db = common::TestDb::new("routes_huge_page.db");
    let app = init_app!(test_db);
    create!(app, json!({"label": "A"}));
    create!(app, json!({"label": "B"}));

    for page in [i64::MAX as u64, u64::MAX] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/menus?page={page}&size=2"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "page: {page}");
        assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "2");
        let link = resp.headers().get(header::LINK).unwrap().to_str().unwrap();
        assert!(!link.contains("rel=\"next\""), "page: {page}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]), "page: {page}");
    }
}

#[actix_web::test]
async fn malformed_filter_is_bad_request() {
    let test_db = common::TestDb::new("routes_malformed_filter.db");
    let app = init_app!(test_db);

    for uri in [
        "/api/menus?position.greaterThan=two",
        "/api/menus/count?active.equals=maybe",
        "/api/menus?label.greaterThan=a",
        "/api/menus?sort=colour,asc",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errorKey"], "badfilter", "uri: {uri}");
    }
}
