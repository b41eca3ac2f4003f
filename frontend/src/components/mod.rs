pub mod dashboard;
pub mod rescan;
pub mod settings;
pub mod upload;
