pub mod config_repository;
pub mod helper;

pub use config_repository::ConfigRepository;
