use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::routes::auth::{LoginResponse, UsuarioResponse};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Internal detail, development mode only
    pub error: Option<String>,
}

#[derive(ToSchema)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido_paterno: String,
    /// Optional, stored as an empty string when absent
    pub apellido_materno: Option<String>,
    pub correo: String,
    pub password: String,
    pub id_carrera: Option<i32>,
    pub id_division: Option<i32>,
    pub cuatrimestre: i32,
    pub id_rol: i32,
}

#[derive(ToSchema)]
pub struct LoginRequest { pub correo: String, pub password: String }

#[derive(ToSchema)]
pub struct DivisionDoc { pub id_division: i32, pub siglas: String, pub nombre_division: String }

#[derive(ToSchema)]
pub struct MajorDoc { pub id_carrera: i32, pub nombre_carrera: String }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::me,
        crate::routes::catalog::divisions,
        crate::routes::catalog::majors,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            ErrorResponse,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UsuarioResponse,
            DivisionDoc,
            MajorDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "catalog")
    )
)]
pub struct ApiDoc;
