pub mod settings_repo;
pub use settings_repo::SettingsRepository;
