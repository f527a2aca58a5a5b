use super::ProblemResponse;
use crate::{error, extractors::Json, Result, StateTrait};
use axum::extract::{Path, State};
use entity::problems;
use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    message: &'static str,
    count: usize,
    problems: Vec<ProblemResponse>,
}

#[derive(Debug, Serialize)]
pub struct GetResponse {
    message: &'static str,
    problem: ProblemResponse,
}

pub async fn list_problems<S: StateTrait>(State(state): State<S>) -> Result<Json<ListResponse>> {
    let problems = problems::Entity::find()
        .all(state.db())
        .await?
        .into_iter()
        .map(ProblemResponse::from)
        .collect::<Vec<_>>();

    Ok(Json(ListResponse {
        message: "Problems fetched successfully",
        count: problems.len(),
        problems,
    }))
}

pub async fn get_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<GetResponse>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::INVALID_PROBLEM_ID);
    };

    let Some(problem) = problems::Entity::find_by_id(id).one(state.db()).await? else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    Ok(Json(GetResponse {
        message: "Problem fetched successfully",
        problem: problem.into(),
    }))
}
