use super::ProblemResponse;
use crate::{error, extractors::Json, Result, StateTrait};
use axum::extract::{Path, State};
use entity::problems;
use sea_orm::{EntityTrait, TransactionTrait};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    message: &'static str,
    problem: ProblemResponse,
}

pub async fn delete_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::INVALID_PROBLEM_ID);
    };

    let txn = state.db().begin().await?;

    let Some(problem) = problems::Entity::find_by_id(id).one(&txn).await? else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    problems::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    Ok(Json(Response {
        message: "Problem deleted successfully",
        problem: problem.into(),
    }))
}
