use crate::services::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}
