use super::{test_case::TestCase, test_suite::TestSuite};

/// Failing test cases of the suites whose counters report failures or
/// errors, in suite order and then document order within each suite.
pub fn filter_failed_test_cases(suites: &[TestSuite]) -> Vec<TestCase> {
    suites
        .iter()
        .filter(|suite| suite.reports_failures_or_errors())
        .flat_map(TestSuite::test_cases)
        .filter(TestCase::is_failing)
        .collect()
}
