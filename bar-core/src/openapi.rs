//! OpenAPI documentation assembly

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BAR Core API",
        version = "0.1.0",
        description = "Business Annual Report API: invitation token lookup",
        license(name = "BSD-3-Clause"),
        contact(name = "BAR Team")
    ),
    tags(
        (name = "System", description = "Health checks and system status"),
        (name = "Business", description = "Business lookup by invitation token"),
    ),
    components(
        schemas(
            crate::domain::BusinessSummary,
            crate::api::health::HealthResponse,
        )
    ),
    paths(
        crate::api::health::health,
        crate::api::business::get_by_token,
    ),
)]
pub struct ApiDoc;
