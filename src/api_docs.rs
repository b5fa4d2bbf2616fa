use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::transport::nearby_transport,
    ),
    tags(
        (name = "terrascore", description = "Transport accessibility scoring API")
    )
)]
pub struct ApiDoc;
