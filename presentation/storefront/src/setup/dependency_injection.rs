use std::sync::Arc;

use auth::demo_authenticator::DemoAuthenticator;
use catalog::repository::CatalogRepositoryInMemory;
use logger::TracingLogger;

use business::application::auth::store::AuthStore;
use business::application::cart::store::CartStore;
use business::application::search::store::SearchStore;
use business::domain::catalog::repository::CatalogRepository;

use crate::config::store_config::StoreConfig;

/// The single set of stores of a running app. Screens receive clones of
/// these `Arc`s; nothing else owns store state.
pub struct DependencyContainer {
    pub catalog: Arc<dyn CatalogRepository>,
    pub cart: Arc<CartStore>,
    pub search: Arc<SearchStore>,
    pub auth: Arc<AuthStore>,
}

impl DependencyContainer {
    pub fn new(config: &StoreConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryInMemory::bundled()?);
        let authenticator = Arc::new(DemoAuthenticator::new(config.auth_latency));

        // Stores
        let cart = Arc::new(CartStore::new(logger.clone()));
        let search = Arc::new(SearchStore::new(
            catalog.clone(),
            logger.clone(),
            config.search_latency,
        ));
        let auth = Arc::new(AuthStore::new(authenticator, cart.clone(), logger));

        Ok(Self {
            catalog,
            cart,
            search,
            auth,
        })
    }
}
