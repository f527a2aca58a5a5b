use super::setup::Env;
use entity::users;
use http::StatusCode;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub token: String,
}

#[allow(unused)]
pub async fn register_user(app: &Env) -> User {
    let username = format!("user-{}", super::uuid());
    let email = format!("{username}@example.com");

    let res = app
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": "password123",
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await;

    User {
        id: body["user"]["id"].as_str().expect("no user id").to_owned(),
        username,
        email,
        token: body["token"].as_str().expect("no token").to_owned(),
    }
}

#[allow(unused)]
pub async fn register_admin(app: &Env) -> User {
    let user = register_user(app).await;
    make_admin(app, &user).await;
    user
}

/// Roles are never changed over HTTP, so tests flip the column directly.
#[allow(unused)]
pub async fn make_admin(app: &Env, user: &User) {
    let model = users::Entity::find()
        .filter(users::Column::Email.eq(user.email.as_str()))
        .one(app.db())
        .await
        .expect("failed to query user")
        .expect("no such user");

    let mut model: users::ActiveModel = model.into();
    model.role = Set(users::Role::Admin);
    model.update(app.db()).await.expect("failed to update role");
}
