use utoipa::OpenApi;

use crate::core::models::user::{User, UserPayload};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::index,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::create_user,
        super::handlers::update_user,
        super::handlers::delete_user,
    ),
    components(schemas(User, UserPayload)),
    info(title = "User Service API", description = "In-memory CRUD over users")
)]
pub struct ApiDoc;
