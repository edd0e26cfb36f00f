use std::sync::Arc;

use crate::catalog::Catalog;
use crate::location::LocationResolver;

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub resolver: LocationResolver,
    pub default_limit: i64,
}
