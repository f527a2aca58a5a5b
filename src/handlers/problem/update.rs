use super::ProblemResponse;
use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    utils::set_option,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use chrono::Utc;
use entity::problems::{self, constraints::*, Difficulty, Tags, TestCase, TestCases};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Partial update: absent fields keep their stored value. Provided fields
/// pass the same rules as on creation, so the merged record stays valid.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 5, message = "Problem title must be at least 5 characters long"))]
    title: Option<String>,
    #[validate(length(
        min = 20,
        message = "Problem description must be at least 20 characters long"
    ))]
    description: Option<String>,
    difficulty: Option<Difficulty>,
    #[validate(length(min = 1, message = "Category is required"))]
    category: Option<String>,
    tags: Option<Vec<String>>,
    starter_code: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    solution: Option<Option<String>>,
    #[validate(length(min = 1, message = "At least one test case is required"))]
    test_cases: Option<Vec<TestCase>>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    message: &'static str,
    problem: ProblemResponse,
}

pub async fn update_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::INVALID_PROBLEM_ID);
    };

    let txn = state.db().begin().await?;

    let Some(problem) = problems::Entity::find_by_id(id).one(&txn).await? else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    if let Some(title) = &request.title {
        if *title != problem.title {
            let existing = problems::Entity::find()
                .filter(problems::Column::Title.eq(title))
                .one(&txn)
                .await?;

            if existing.is_some() {
                return Err(error::DUPLICATE_PROBLEM_TITLE);
            }
        }
    }

    let active_model = problems::ActiveModel {
        id: Set(id),
        title: set_option(request.title),
        description: set_option(request.description),
        difficulty: set_option(request.difficulty),
        category: set_option(request.category),
        tags: set_option(request.tags.map(Tags)),
        starter_code: set_option(request.starter_code),
        solution: set_option(request.solution),
        test_cases: set_option(request.test_cases.map(TestCases)),
        created_by: NotSet,
        created_at: NotSet,
        updated_at: Set(Utc::now()),
    };

    let result = problems::Entity::update(active_model).exec(&txn).await;

    let problem = match result {
        Err(DbErr::RecordNotFound(_)) => return Err(error::PROBLEM_NOT_FOUND),
        Err(err) if err.unique_violation(UC_PROBLEMS_TITLE) => {
            return Err(error::DUPLICATE_PROBLEM_TITLE)
        }
        r => r?,
    };

    txn.commit().await?;

    Ok(Json(Response {
        message: "Problem updated successfully",
        problem: problem.into(),
    }))
}
