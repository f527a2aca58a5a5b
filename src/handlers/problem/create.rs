use super::ProblemResponse;
use crate::{
    auth::CurrentUser,
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::problems::{
    self, constraints::*, Difficulty, Tags, TestCase, TestCases, DEFAULT_STARTER_CODE,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(
        required(message = "Problem title is required"),
        length(min = 5, message = "Problem title must be at least 5 characters long")
    )]
    title: Option<String>,
    #[validate(
        required(message = "Problem description is required"),
        length(min = 20, message = "Problem description must be at least 20 characters long")
    )]
    description: Option<String>,
    #[validate(required(message = "Difficulty is required"))]
    difficulty: Option<Difficulty>,
    #[validate(
        required(message = "Category is required"),
        length(min = 1, message = "Category is required")
    )]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    starter_code: Option<String>,
    solution: Option<String>,
    #[validate(
        required(message = "At least one test case is required"),
        length(min = 1, message = "At least one test case is required")
    )]
    test_cases: Option<Vec<TestCase>>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    message: &'static str,
    problem: ProblemResponse,
}

pub async fn create_problem<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    // `required` has already run, so the fields are present
    let (Some(title), Some(description), Some(difficulty), Some(category), Some(test_cases)) = (
        request.title,
        request.description,
        request.difficulty,
        request.category,
        request.test_cases,
    ) else {
        return Err(error::INTERNAL);
    };

    let existing = problems::Entity::find()
        .filter(problems::Column::Title.eq(&title))
        .one(state.db())
        .await?;

    if existing.is_some() {
        return Err(error::DUPLICATE_PROBLEM_TITLE);
    }

    let now = Utc::now();
    let problem = problems::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        description: Set(description),
        difficulty: Set(difficulty),
        category: Set(category),
        tags: Set(Tags(request.tags)),
        starter_code: Set(request
            .starter_code
            .unwrap_or_else(|| DEFAULT_STARTER_CODE.to_owned())),
        solution: Set(request.solution),
        test_cases: Set(TestCases(test_cases)),
        created_by: Set(Some(user.id)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = problems::Entity::insert(problem)
        .exec_with_returning(state.db())
        .await;

    let problem = match result {
        Err(err) if err.unique_violation(UC_PROBLEMS_TITLE) => {
            return Err(error::DUPLICATE_PROBLEM_TITLE)
        }
        r => r?,
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: "Problem created successfully",
            problem: problem.into(),
        }),
    ))
}
