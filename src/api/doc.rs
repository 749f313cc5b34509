use utoipa::OpenApi;

pub const DATA_TAG: &str = "Data";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SOA Data",
        description = "Topic and COVID datasets served as JSON",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::external::soa::Dataset,
        )
    ),
    tags(
        (name = DATA_TAG, description = "Dataset endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
