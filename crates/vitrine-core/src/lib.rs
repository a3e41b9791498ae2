pub mod app_config;
pub mod assembler;
pub mod catalog;
pub mod config;
pub mod home;
pub mod locales;

pub use app_config::{AppConfig, Environment};
pub use assembler::HomeAssembler;
pub use catalog::{Brand, Category, Money, Page, Product, ProductImage, SiteInfo};
pub use config::{load_app_config, load_app_config_from_env};
pub use home::{
    assemble_home, backfill, DonorQueue, HomeLists, BEST_SELLING_FETCH_COUNT, DISPLAY_SLOTS,
    FEATURED_FETCH_COUNT, MARQUEE_COUNT, NEWEST_FETCH_COUNT,
};
pub use locales::{load_locales, LocaleConfig, LocalesFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read locales file {path}: {source}")]
    LocalesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locales file: {0}")]
    LocalesFileParse(#[from] serde_yaml::Error),

    #[error("invalid locales configuration: {0}")]
    LocalesInvalid(String),
}
