mod create;
mod delete;
mod list;
mod update;

use crate::{middlewares::RequireAdminLayer, StateTrait};
use axum::{handler::Handler, routing::get, Router};
use chrono::{DateTime, Utc};
use entity::problems::{self, Difficulty, TestCase};
use serde::Serialize;
use uuid::Uuid;

/// Routes for problem management
///
/// GET    /api/problems
/// POST   /api/problems          (admin)
/// GET    /api/problems/{id}
/// PUT    /api/problems/{id}    (admin)
/// DELETE /api/problems/{id}    (admin)
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_problems::<S>)
                .post(create::create_problem::<S>.layer(RequireAdminLayer::new())),
        )
        .route(
            "/{id}",
            get(list::get_problem::<S>)
                .put(update::update_problem::<S>.layer(RequireAdminLayer::new()))
                .delete(delete::delete_problem::<S>.layer(RequireAdminLayer::new())),
        )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    id: Uuid,
    title: String,
    description: String,
    difficulty: Difficulty,
    category: String,
    tags: Vec<String>,
    starter_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    test_cases: Vec<TestCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<problems::Model> for ProblemResponse {
    fn from(problem: problems::Model) -> Self {
        ProblemResponse {
            id: problem.id,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            category: problem.category,
            tags: problem.tags.0,
            starter_code: problem.starter_code,
            solution: problem.solution,
            test_cases: problem.test_cases.0,
            created_by: problem.created_by,
            created_at: problem.created_at,
            updated_at: problem.updated_at,
        }
    }
}
