pub mod complexity_analysis;
pub mod report;
