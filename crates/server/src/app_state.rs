use gallery_api::ApiContext;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) api: ApiContext,
    pub(crate) static_files: ServeDir,
}
