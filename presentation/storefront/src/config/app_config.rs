use super::store_config::StoreConfig;

pub struct AppConfig {
    pub stores: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            stores: StoreConfig::from_env(),
        }
    }
}
