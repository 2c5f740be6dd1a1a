use crate::application::http::{
    catalog::router::CatalogApiDoc, health::router::HealthApiDoc, intake::router::IntakeApiDoc,
    nutrition::router::NutritionApiDoc, profile::router::ProfileApiDoc,
    safety::router::SafetyApiDoc, sync::router::SyncApiDoc,
};
use utoipa::OpenApi;

// Parenthesized "" paths: utoipa rejects empty string literals in nest(), but accepts expressions.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafePlate API"
    ),
    nest(
        (path = "/catalog", api = CatalogApiDoc),
        (path = (""), api = ProfileApiDoc),
        (path = (""), api = SafetyApiDoc),
        (path = "/users/{user_id}/intake", api = IntakeApiDoc),
        (path = (""), api = NutritionApiDoc),
        (path = "/sync", api = SyncApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
