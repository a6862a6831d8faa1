use axum::{extract::State, Json};

use service::catalog::domain::{Division, Major};

use crate::errors::JsonApiError;
use crate::extract::ApiPath;
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/routes/divisiones",
    tag = "catalog",
    responses(
        (status = 200, description = "All divisions ordered by id", body = [crate::openapi::DivisionDoc]),
        (status = 500, description = "Server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn divisions(State(state): State<ServerState>) -> Result<Json<Vec<Division>>, JsonApiError> {
    let list = state
        .catalog
        .divisions()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error obteniendo divisiones", &state.errors))?;
    Ok(Json(list))
}

#[utoipa::path(
    get,
    path = "/routes/carreras/{id_division}",
    tag = "catalog",
    params(("id_division" = i32, Path, description = "Division id")),
    responses(
        (status = 200, description = "Majors of the division ordered by id, possibly empty", body = [crate::openapi::MajorDoc]),
        (status = 500, description = "Server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn majors(
    State(state): State<ServerState>,
    ApiPath(id_division): ApiPath<i32>,
) -> Result<Json<Vec<Major>>, JsonApiError> {
    let list = state
        .catalog
        .majors(id_division)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error obteniendo carreras", &state.errors))?;
    Ok(Json(list))
}
