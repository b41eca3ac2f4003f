pub mod submission;
pub mod upload;
