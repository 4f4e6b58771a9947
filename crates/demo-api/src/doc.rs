//! OpenAPI document served by Swagger UI.

use demo_content::models::{Comment, EnrichedPost, EnrichedUser, PostAuthor};
use utoipa::OpenApi;

use crate::errors::ErrorBody;
use crate::handlers::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo content API",
        description = "Demo posts and users aggregated from free upstream APIs."
    ),
    paths(
        crate::handlers::demo_posts,
        crate::handlers::demo_users,
        crate::handlers::health_check,
    ),
    components(schemas(
        EnrichedPost,
        EnrichedUser,
        PostAuthor,
        Comment,
        ErrorBody,
        HealthResponse
    )),
    tags(
        (name = "demo", description = "Generated feed content"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_demo_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/demo/posts"));
        assert!(doc.paths.paths.contains_key("/api/demo/users"));
        assert!(doc.paths.paths.contains_key("/api/health"));
    }
}
