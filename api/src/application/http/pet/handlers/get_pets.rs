use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet::{entities::Pet, ports::PetService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_params::PaginationQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPetsResponse {
    pub data: Vec<Pet>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pets",
    summary = "List pets",
    description = "Lists the caller's pets; superusers see every pet.",
    params(PaginationQuery),
    responses(
        (status = 200, body = GetPetsResponse)
    ),
)]
pub async fn get_pets(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetPetsResponse>, ApiError> {
    let pets = state
        .service
        .get_pets(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPetsResponse {
        data: pets.data,
        count: pets.count,
    }))
}
