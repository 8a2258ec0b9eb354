pub mod dto;
pub mod progress;
pub mod study_service;
pub mod weekly;
