pub mod analyze;
pub mod chart;
pub mod cli;
pub mod colors;
pub mod error;
pub mod git;
pub mod ignore;
pub mod lang;
pub mod model;
pub mod report;
pub mod scan;
