pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub const DEFAULT_REPORT_PATH: &str = "./build/reports/**/TESTS*.xml";
pub const DEFAULT_NAME: &str = "Tests";

pub const PATH_TO_REPORT_ENV: &str = "JUNIT_SUMMARY_PATH";
pub const NAME_ENV: &str = "JUNIT_SUMMARY_NAME";
pub const ONLY_WARN_ENV: &str = "JUNIT_SUMMARY_ONLY_WARN";
pub const ROOT_ENV: &str = "JUNIT_SUMMARY_ROOT";
pub const LOG_FILTER_ENV: &str = "JUNIT_SUMMARY_LOG";
