pub mod extractor;
pub mod filter;
pub mod test_case;
pub mod test_suite;

pub const TAG_TEST_SUITES: &str = "testsuites";
pub const TAG_TEST_SUITE: &str = "testsuite";
pub const TAG_TEST_CASE: &str = "testcase";
pub const TAG_FAILURE: &str = "failure";
pub const TAG_ERROR: &str = "error";

pub use extractor::{extract_suites, extract_suites_from_str, ExtractError};
pub use filter::filter_failed_test_cases;
pub use test_case::{FailureDetail, TestCase};
pub use test_suite::TestSuite;
