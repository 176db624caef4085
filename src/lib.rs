pub mod config;
pub mod constants;
pub mod junit;
pub mod report;
pub mod runner;
pub mod sink;
pub mod utils;
pub mod xml;
