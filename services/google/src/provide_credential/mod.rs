mod config;
pub use config::ConfigCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

mod static_provider;
pub use static_provider::StaticCredentialProvider;
