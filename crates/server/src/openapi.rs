use utoipa::OpenApi;

use crate::routes::contacts::ContactOut;

#[derive(OpenApi)]
#[openapi(
    info(title = "Contact.ly", description = "APIs for contact Apis", version = "0.1"),
    paths(
        crate::routes::root,
        crate::routes::contacts::list,
        crate::routes::contacts::view,
        crate::routes::contacts::create,
        crate::routes::contacts::remove,
        crate::routes::contacts::view_html,
    ),
    components(schemas(ContactOut)),
    tags(
        (name = "root"),
        (name = "contacts")
    )
)]
pub struct ApiDoc;
