//! The reqres scenario table
//!
//! The fixed set of request/expectation pairs this tool exists to run.
//! Fixture IDs and field values (user 2 "Janet", resource 2 "fuchsia rose",
//! the eve.holt registration account) are stable reqres.in seed data, so the
//! expectations here are repeatable across runs.

use serde_json::json;

use super::definition::Scenario;

/// Build the full scenario suite, in execution order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::get("get users page 2", "users?page=2")
            .expect_status(200)
            .expect_field("total", json!(12)),
        Scenario::get("single user", "users/2")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet")),
        Scenario::get("single user not found", "users/23").expect_status(404),
        Scenario::get("list resources", "unknown")
            .expect_status(200)
            .expect_field("total", json!(12))
            .expect_len("data", 6),
        Scenario::get("single resource", "unknown/2")
            .expect_status(200)
            .expect_field("data.name", json!("fuchsia rose")),
        Scenario::get("single resource not found", "unknown/23")
            .expect_status(404)
            .expect_body("{}"),
        // Created users echo the submitted fields alongside the server id.
        Scenario::post("create user", "users")
            .json_body(json!({"name": "Ivan", "job": "programmer"}))
            .expect_status(201)
            .expect_present("id")
            .expect_field("name", json!("Ivan"))
            .expect_field("job", json!("programmer")),
        Scenario::patch("update user", "users/2")
            .json_body(json!({"name": "morpheus", "job": "zion resident"}))
            .expect_status(200)
            .expect_field("name", json!("morpheus"))
            .expect_field("job", json!("zion resident")),
        Scenario::delete("delete user", "users/2").expect_status(204),
        Scenario::post("register", "register")
            .json_body(json!({"email": "eve.holt@reqres.in", "password": "pistol"}))
            .expect_status(200)
            .expect_present("id"),
        Scenario::post("register without password", "register")
            .raw_body(r#"{"email":"eve.holt@reqres.in"}"#)
            .expect_status(400)
            .expect_field("error", json!("Missing password")),
        Scenario::post("login", "login")
            .json_body(json!({"email": "eve.holt@reqres.in", "password": "cityslicka"}))
            .expect_status(200)
            .expect_present("token"),
        // Posts to `register`, matching the upstream fixture this suite
        // mirrors; both endpoints share the missing-password validation.
        // Kept as-is so observed behavior stays comparable.
        Scenario::post("login without password", "register")
            .raw_body(r#"{"email":"peter@klaven"}"#)
            .expect_status(400)
            .expect_field("error", json!("Missing password")),
        Scenario::get("delayed response", "users?delay=2")
            .expect_status(200)
            .expect_field("total", json!(12)),
    ]
}
