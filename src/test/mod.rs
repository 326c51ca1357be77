use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use crate::{build_services, modules};

macro_rules! app {
    () => {{
        let (film_service, user_service, friend_service) = build_services();
        test::init_service(
            App::new()
                .app_data(web::Data::new(film_service))
                .app_data(web::Data::new(user_service))
                .app_data(web::Data::new(friend_service))
                .configure(modules::configure),
        )
        .await
    }};
}

fn matrix() -> Value {
    json!({
        "name": "Matrix",
        "description": "A hacker learns the truth",
        "releaseDate": "1999-03-31",
        "duration": 136
    })
}

fn user(login: &str) -> Value {
    json!({ "email": format!("{login}@example.com"), "login": login, "birthday": "1990-01-01" })
}

macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let value: Value =
            if body.is_empty() { Value::Null } else { serde_json::from_slice(&body).unwrap() };
        (status, value)
    }};
}

#[actix_web::test]
async fn test_create_film_assigns_id() {
    let app = app!();
    let (status, body) = call!(app, test::TestRequest::post().uri("/films").set_json(matrix()));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["releaseDate"], "1999-03-31");
    assert_eq!(body["data"]["likes"], json!([]));
}

#[actix_web::test]
async fn test_film_validation_failures_are_bad_requests() {
    let app = app!();

    let old = json!({ "name": "Old", "releaseDate": "1800-01-01", "duration": 10 });
    let (status, body) = call!(app, test::TestRequest::post().uri("/films").set_json(old));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let blank = json!({ "name": " ", "releaseDate": "1999-03-31", "duration": 10 });
    let (status, _) = call!(app, test::TestRequest::post().uri("/films").set_json(blank));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing_date = json!({ "name": "Matrix", "duration": 10 });
    let (status, _) = call!(app, test::TestRequest::post().uri("/films").set_json(missing_date));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/films")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = call!(app, test::TestRequest::get().uri("/films"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_update_unknown_film_is_not_found() {
    let app = app!();
    let mut film = matrix();
    film["id"] = json!(100);
    let (status, body) = call!(app, test::TestRequest::put().uri("/films").set_json(film));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Film not found");
}

#[actix_web::test]
async fn test_film_crud() {
    let app = app!();
    call!(app, test::TestRequest::post().uri("/films").set_json(matrix()));

    let mut film = matrix();
    film["id"] = json!(1);
    film["name"] = json!("The Matrix");
    let (status, body) = call!(app, test::TestRequest::put().uri("/films").set_json(film));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "The Matrix");

    let (status, body) = call!(app, test::TestRequest::get().uri("/films/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "The Matrix");

    let (status, body) = call!(app, test::TestRequest::delete().uri("/films/1"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = call!(app, test::TestRequest::get().uri("/films/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call!(app, test::TestRequest::get().uri("/films/abc"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_user_defaults_name() {
    let app = app!();
    let body = json!({ "email": "a@b.com", "login": "ann", "birthday": "1990-01-01" });
    let (status, body) = call!(app, test::TestRequest::post().uri("/users").set_json(body));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "ann");
    assert_eq!(body["data"]["friends"], json!([]));

    let bad = json!({ "email": "invalid", "login": "ann lee", "birthday": "1990-01-01" });
    let (status, _) = call!(app, test::TestRequest::post().uri("/users").set_json(bad));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut unknown = user("bob");
    unknown["id"] = json!(100);
    let (status, _) = call!(app, test::TestRequest::put().uri("/users").set_json(unknown));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_likes_and_popular_films() {
    let app = app!();
    for _ in 0..3 {
        call!(app, test::TestRequest::post().uri("/films").set_json(matrix()));
    }
    for login in ["ann", "bob"] {
        call!(app, test::TestRequest::post().uri("/users").set_json(user(login)));
    }

    for uri in ["/films/2/like/1", "/films/2/like/2", "/films/2/like/2", "/films/3/like/1"] {
        let (status, _) = call!(app, test::TestRequest::put().uri(uri));
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = call!(app, test::TestRequest::put().uri("/films/2/like/9"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(app, test::TestRequest::get().uri("/films/popular"));
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> =
        body["data"].as_array().unwrap().iter().map(|f| f["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(body["data"][0]["likes"], json!([1, 2]));

    let (_, body) = call!(app, test::TestRequest::get().uri("/films/popular?count=1"));
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = call!(app, test::TestRequest::get().uri("/films/popular?count=0"));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(app, test::TestRequest::delete().uri("/films/2/like/2"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = call!(app, test::TestRequest::get().uri("/films/2"));
    assert_eq!(body["data"]["likes"], json!([1]));
}

#[actix_web::test]
async fn test_friends_and_common_friends() {
    let app = app!();
    for login in ["ann", "bob", "cid"] {
        call!(app, test::TestRequest::post().uri("/users").set_json(user(login)));
    }

    for uri in ["/users/1/friends/3", "/users/2/friends/3", "/users/1/friends/2"] {
        let (status, _) = call!(app, test::TestRequest::put().uri(uri));
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call!(app, test::TestRequest::get().uri("/users/3/friends"));
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> =
        body["data"].as_array().unwrap().iter().map(|u| u["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);

    let (_, body) = call!(app, test::TestRequest::get().uri("/users/1/friends/common/2"));
    let ids: Vec<u64> =
        body["data"].as_array().unwrap().iter().map(|u| u["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![3]);

    let (status, _) = call!(app, test::TestRequest::put().uri("/users/1/friends/1"));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(app, test::TestRequest::put().uri("/users/1/friends/9"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call!(app, test::TestRequest::delete().uri("/users/3/friends/1"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = call!(app, test::TestRequest::get().uri("/users/1"));
    assert_eq!(body["data"]["friends"], json!([2]));

    let (status, _) = call!(app, test::TestRequest::delete().uri("/users/2"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = call!(app, test::TestRequest::get().uri("/users/1/friends"));
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_update_without_id_is_bad_request() {
    let app = app!();
    call!(app, test::TestRequest::post().uri("/films").set_json(matrix()));
    call!(app, test::TestRequest::post().uri("/users").set_json(user("ann")));

    let (status, body) = call!(app, test::TestRequest::put().uri("/films").set_json(matrix()));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Film id is required");

    let (status, body) = call!(app, test::TestRequest::put().uri("/users").set_json(user("bob")));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User id is required");

    let (_, body) = call!(app, test::TestRequest::get().uri("/users/1"));
    assert_eq!(body["data"]["login"], "ann");
}

#[actix_web::test]
async fn test_unlike_and_unfriend_unknown_ids_are_not_found() {
    let app = app!();
    call!(app, test::TestRequest::post().uri("/films").set_json(matrix()));
    for login in ["ann", "bob"] {
        call!(app, test::TestRequest::post().uri("/users").set_json(user(login)));
    }
    call!(app, test::TestRequest::put().uri("/films/1/like/1"));
    call!(app, test::TestRequest::put().uri("/users/1/friends/2"));

    for uri in ["/films/1/like/9", "/films/9/like/1", "/users/1/friends/9", "/users/9/friends/1"] {
        let (status, body) = call!(app, test::TestRequest::delete().uri(uri));
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["message"].is_string());
    }

    let (_, body) = call!(app, test::TestRequest::get().uri("/films/1"));
    assert_eq!(body["data"]["likes"], json!([1]));
    let (_, body) = call!(app, test::TestRequest::get().uri("/users/1/friends"));
    assert_eq!(body["data"][0]["id"], 2);
}

#[actix_web::test]
async fn test_popular_defaults_to_ten_films() {
    let app = app!();
    for _ in 0..12 {
        call!(app, test::TestRequest::post().uri("/films").set_json(matrix()));
    }
    call!(app, test::TestRequest::post().uri("/users").set_json(user("ann")));
    call!(app, test::TestRequest::put().uri("/films/12/like/1"));

    let (status, body) = call!(app, test::TestRequest::get().uri("/films/popular"));
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> =
        body["data"].as_array().unwrap().iter().map(|f| f["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![12, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let (_, body) = call!(app, test::TestRequest::get().uri("/films/popular?count=12"));
    assert_eq!(body["data"].as_array().unwrap().len(), 12);
}
