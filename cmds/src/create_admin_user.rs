use dotenvy::dotenv;
use entity::users::{self, Role};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, EntityTrait, QueryFilter, Set,
};
use std::env::{self, args};
use uuid::Uuid;

/// Promotes an existing user to admin, or creates a fresh admin account.
/// Roles are never changed over HTTP; this is the only path.
///
/// Usage: create_admin_user <email> <password> [username]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    let email = args().nth(1).expect("no email given");
    let password = args().nth(2).expect("no password given");
    let username = args()
        .nth(3)
        .or_else(|| email.split('@').next().map(str::to_owned))
        .expect("could not derive a username");

    let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let db = Database::connect(ConnectOptions::new(url))
        .await
        .expect("failed to connect to database");

    let existing = users::Entity::find()
        .filter(users::Column::Email.eq(&email))
        .one(&db)
        .await
        .expect("failed to query user");

    let user = match existing {
        Some(user) => {
            let mut user: users::ActiveModel = user.into();
            user.role = Set(Role::Admin);
            user.update(&db).await.expect("failed to promote user")
        }
        None => {
            let password_hash =
                kata_backend::auth::hash_password(&password).expect("failed to hash password");

            let user = users::ActiveModel {
                id: Set(Uuid::new_v4()),
                username: Set(username),
                email: Set(email),
                password_hash: Set(password_hash),
                role: Set(Role::Admin),
                created_at: Set(chrono::Utc::now()),
            };

            user.insert(&db).await.expect("failed to create admin user")
        }
    };

    println!("{} {}", user.id, user.email);
}
