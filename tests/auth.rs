mod utils;

use utils::prelude::*;

mod register {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = setup().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["user"]["username"], "alice");
        assert_eq!(body["user"]["email"], "alice@example.com");
        assert_eq!(body["user"]["role"], "user");
        assert!(body["user"]["id"].is_string());
        assert!(body["token"].is_string());
    }

    #[tokio::test]
    async fn response_never_contains_password() {
        let app = setup().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": "bob",
                "email": "bob@example.com",
                "password": "hunter22",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        assert!(body["user"].get("password").is_none());
        assert!(body["user"].get("passwordHash").is_none());
        assert!(!body.to_string().contains("hunter22"));
    }

    #[tokio::test]
    async fn missing_fields_are_all_reported() {
        let app = setup().await;

        let res = app.post("/api/auth/register").json(&json!({})).send().await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = res.json().await;
        assert_eq!(body["code"], "validation");

        let message = body["message"].as_str().unwrap();
        assert!(message.contains("username is required"));
        assert!(message.contains("email is required"));
        assert!(message.contains("password is required"));
    }

    #[tokio::test]
    async fn duplicate_email() {
        let app = setup().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": "carol2",
                "email": "carol@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_EMAIL);

        // the first registration is unaffected
        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": "carol@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["user"]["username"], "carol");
    }

    #[tokio::test]
    async fn duplicate_username() {
        let app = setup().await;

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": "dave",
                "email": "dave@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .post("/api/auth/register")
            .json(&json!({
                "username": "dave",
                "email": "dave2@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_USERNAME);
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = setup().await;
        let user = register_user(&app).await;

        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": user.email,
                "password": "password123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["message"], "Logged in successfully");
        assert_eq!(body["user"]["username"], user.username);
        assert!(body["token"].is_string());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let app = setup().await;
        let user = register_user(&app).await;

        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": user.email,
                "password": "wrong-password",
            }))
            .send()
            .await;

        let wrong_password_status = res.status();
        let wrong_password_body: Value = res.json().await;

        let res = app
            .post("/api/auth/login")
            .json(&json!({
                "email": "nobody@example.com",
                "password": "password123",
            }))
            .send()
            .await;

        assert_eq!(res.status(), wrong_password_status);

        let unknown_email_body: Value = res.json().await;
        assert_json_eq!(wrong_password_body, unknown_email_body);

        assert_eq!(wrong_password_status, error::INVALID_CREDENTIALS.status());
        assert_eq!(unknown_email_body["code"], error::INVALID_CREDENTIALS.code());
    }

    #[tokio::test]
    async fn missing_fields() {
        let app = setup().await;

        let res = app.post("/api/auth/login").json(&json!({})).send().await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = res.json().await;
        assert_eq!(body["code"], "validation");
    }
}
