//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, DictTypeService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{PgDictTypeRepository, PgTokenRepository};

/// Application state cloned into each request.
///
/// All members are reference-counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub cache: Arc<dyn CacheService>,
    pub dict_type_service: Arc<DictTypeService<PgDictTypeRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool and cache.
    ///
    /// `signing_secret` is the HMAC key API tokens were hashed with.
    pub fn new(pool: Arc<PgPool>, cache: Arc<dyn CacheService>, signing_secret: String) -> Self {
        let dict_type_repository = Arc::new(PgDictTypeRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        let dict_type_service = Arc::new(DictTypeService::new(
            dict_type_repository,
            cache.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(token_repository, signing_secret));

        Self {
            pool,
            cache,
            dict_type_service,
            auth_service,
        }
    }
}
