pub mod analyze;
pub mod projects;
pub mod report;
pub mod select;
