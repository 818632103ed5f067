pub mod browse;
pub mod config;
pub mod movies;
pub mod prompts;
pub mod reviews;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviecritic_config::{Config, PathManager};
use moviecritic_core::{CatalogController, DetailController};
use moviecritic_models::MovieId;
use moviecritic_remote::HttpDataService;

/// Config file, then `MOVIECRITIC_BASE_URL`, then `--base-url`
pub fn load_settings(base_url_override: Option<&str>) -> Result<Config> {
    let config_file = PathManager::default().config_file();
    let mut config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    config.apply_env_overrides();
    if let Some(base_url) = base_url_override {
        config.service.base_url = base_url.to_string();
    }
    Ok(config)
}

/// Everything a command needs to talk to the movie service
pub struct Context {
    pub config: Config,
    pub service: HttpDataService,
}

impl Context {
    pub fn connect(config: Config) -> Result<Self> {
        config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;
        let service = HttpDataService::new(&config.service.base_url)
            .map_err(|e| eyre!("Failed to create movie service client: {}", e))?;
        tracing::debug!(base_url = %service.base_url(), "Connected to movie service");
        Ok(Self { config, service })
    }

    pub fn catalog(&self) -> CatalogController<HttpDataService> {
        CatalogController::new(self.service.clone())
    }

    pub fn detail(&self, movie_id: MovieId) -> DetailController<HttpDataService> {
        DetailController::new(self.service.clone(), movie_id)
    }
}
