use crate::xml::XmlElement;

use super::{test_case::TestCase, TAG_TEST_CASE};

pub mod attrs {
    pub const NAME: &str = "name";
    pub const FAILURES: &str = "failures";
    pub const ERRORS: &str = "errors";
}

/// A `testsuite` element and its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    element: XmlElement,
}

impl From<XmlElement> for TestSuite {
    fn from(element: XmlElement) -> Self {
        Self { element }
    }
}

impl TestSuite {
    pub fn element(&self) -> &XmlElement {
        &self.element
    }

    pub fn name(&self) -> Option<&str> {
        self.element.attribute(attrs::NAME)
    }

    pub fn failures(&self) -> i64 {
        self.element
            .attribute(attrs::FAILURES)
            .map(parse_count)
            .unwrap_or_default()
    }

    pub fn errors(&self) -> i64 {
        self.element
            .attribute(attrs::ERRORS)
            .map(parse_count)
            .unwrap_or_default()
    }

    /// Suite-level counters only. A suite can claim failures without any
    /// failing test case, and the other way around.
    pub fn reports_failures_or_errors(&self) -> bool {
        self.failures() != 0 || self.errors() != 0
    }

    /// Every `testcase` below this suite, nested suites included.
    pub fn test_cases(&self) -> Vec<TestCase> {
        self.element
            .elements_by_tag_name(TAG_TEST_CASE)
            .into_iter()
            .cloned()
            .map(TestCase::from)
            .collect()
    }
}

/// Reads the leading integer of a counter attribute. Surrounding whitespace
/// and anything after the digits are ignored, and a value without leading
/// digits counts as zero.
pub fn parse_count(value: &str) -> i64 {
    let value = value.trim();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite(attributes: &[(&str, &str)]) -> TestSuite {
        attributes
            .iter()
            .fold(XmlElement::new("testsuite"), |element, (key, value)| {
                element.with_attribute(*key, *value)
            })
            .into()
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0"), 0);
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("  3 "), 3);
        assert_eq!(parse_count("3abc"), 3);
        assert_eq!(parse_count("-2"), -2);
        assert_eq!(parse_count("+4"), 4);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-"), 0);
        assert_eq!(parse_count("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_counters_default_to_zero() {
        let suite = suite(&[("name", "empty")]);
        assert_eq!(suite.failures(), 0);
        assert_eq!(suite.errors(), 0);
        assert!(!suite.reports_failures_or_errors());
        assert_eq!(suite.name(), Some("empty"));
    }

    #[test]
    fn test_non_numeric_counters_do_not_report() {
        let suite = suite(&[("failures", "many"), ("errors", "")]);
        assert!(!suite.reports_failures_or_errors());
    }

    #[test]
    fn test_either_counter_reports() {
        assert!(suite(&[("failures", "1"), ("errors", "0")]).reports_failures_or_errors());
        assert!(suite(&[("failures", "0"), ("errors", "2")]).reports_failures_or_errors());
        assert!(!suite(&[("failures", "0"), ("errors", "0")]).reports_failures_or_errors());
    }

    #[test]
    fn test_test_cases_include_nested_cases_in_order() {
        let suite = TestSuite::from(
            XmlElement::new("testsuite")
                .with_child(XmlElement::new("testcase").with_attribute("name", "a"))
                .with_child(
                    XmlElement::new("testsuite")
                        .with_child(XmlElement::new("testcase").with_attribute("name", "b")),
                )
                .with_child(XmlElement::new("testcase").with_attribute("name", "c")),
        );
        let names = suite
            .test_cases()
            .iter()
            .map(|case| case.name().unwrap_or_default().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
