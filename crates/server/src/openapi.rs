use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Book as returned by the API.
#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Request body for create and update. Omitted fields are stored as empty strings.
#[derive(ToSchema)]
pub struct BookInputDoc {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookshelf API", description = "API for managing books"),
    paths(
        crate::routes::health,
        crate::books::list,
        crate::books::get,
        crate::books::create,
        crate::books::update,
        crate::books::delete,
    ),
    components(
        schemas(
            HealthResponse,
            BookDoc,
            BookInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "Book API", description = "API for managing books")
    )
)]
pub struct ApiDoc;
