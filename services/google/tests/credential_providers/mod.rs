mod config;
mod default;
