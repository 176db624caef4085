use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::xml::{parse_document, XmlElement, XmlNode, XmlParseError};

use super::{test_suite::TestSuite, TAG_TEST_SUITE, TAG_TEST_SUITES};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not read report `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse report `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: XmlParseError,
    },
}

/// Where the suites of a document live once the wrapper question is settled.
#[derive(Debug, Clone, Copy)]
enum SuiteContainer<'a> {
    /// The container is itself a `testsuite`.
    Suite(&'a XmlElement),
    /// Any other element; its `testsuite` descendants are the suites.
    Collection(&'a XmlElement),
}

impl<'a> SuiteContainer<'a> {
    fn normalize(root: &'a XmlElement) -> Self {
        let container = match root.first_child() {
            Some(XmlNode::Element(wrapper)) if wrapper.name() == TAG_TEST_SUITES => wrapper,
            _ => root,
        };
        if container.name() == TAG_TEST_SUITE {
            SuiteContainer::Suite(container)
        } else {
            SuiteContainer::Collection(container)
        }
    }

    fn suites(self) -> Vec<TestSuite> {
        match self {
            SuiteContainer::Suite(suite) => vec![TestSuite::from(suite.clone())],
            SuiteContainer::Collection(container) => container
                .elements_by_tag_name(TAG_TEST_SUITE)
                .into_iter()
                .cloned()
                .map(TestSuite::from)
                .collect(),
        }
    }
}

pub fn extract_suites_from_str(xml: &str) -> Result<Vec<TestSuite>, XmlParseError> {
    let document = parse_document(xml)?;
    Ok(SuiteContainer::normalize(document.root()).suites())
}

/// Reads the report at `path` and returns its suites in document order. A
/// report that does not exist yields no suites.
pub async fn extract_suites<P: AsRef<Path>>(path: P) -> Result<Vec<TestSuite>, ExtractError> {
    let path = path.as_ref();
    let read_error = |source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    };

    if !tokio::fs::try_exists(path).await.map_err(read_error)? {
        log::info!("Report does not exist, skipping: {}", path.display());
        return Ok(Vec::new());
    }

    let contents = tokio::fs::read_to_string(path).await.map_err(read_error)?;
    let suites = extract_suites_from_str(&contents).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Found {} test suites in {}", suites.len(), path.display());
    Ok(suites)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite_names(suites: &[TestSuite]) -> Vec<&str> {
        suites
            .iter()
            .map(|suite| suite.name().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_bare_suite_root() {
        let xml = r#"<testsuite name="only" failures="1">
            <testcase classname="pkg.Foo" name="testBar"><failure/></testcase>
        </testsuite>"#;
        let suites = extract_suites_from_str(xml).unwrap();

        assert_eq!(suites.len(), 1);
        assert_eq!(
            suites[0].element(),
            parse_document(xml).unwrap().root(),
        );
    }

    #[test]
    fn test_testsuites_root() {
        let suites = extract_suites_from_str(
            r#"<?xml version="1.0"?>
<testsuites>
  <testsuite name="a"/>
  <testsuite name="b"><testsuite name="c"/></testsuite>
</testsuites>"#,
        )
        .unwrap();
        assert_eq!(suite_names(&suites), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wrapper_as_first_child() {
        let suites = extract_suites_from_str(
            r#"<report><testsuites><testsuite name="a"/><testsuite name="b"/></testsuites><testsuite name="outside"/></report>"#,
        )
        .unwrap();
        assert_eq!(suite_names(&suites), vec!["a", "b"]);
    }

    #[test]
    fn test_wrapper_after_whitespace_searches_whole_root() {
        let suites = extract_suites_from_str(
            "<report>\n<testsuites><testsuite name=\"a\"/></testsuites><testsuite name=\"outside\"/></report>",
        )
        .unwrap();
        assert_eq!(suite_names(&suites), vec!["a", "outside"]);
    }

    #[test]
    fn test_no_suites() {
        assert!(extract_suites_from_str("<testsuites/>").unwrap().is_empty());
        assert!(extract_suites_from_str("<coverage><line/></coverage>")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        assert!(extract_suites_from_str("<testsuite><testcase></testsuite>").is_err());
        assert!(extract_suites_from_str("not xml at all").is_err());
    }

    #[tokio::test]
    async fn test_missing_report_yields_no_suites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let suites = extract_suites(temp_dir.path().join("TESTS-missing.xml"))
            .await
            .unwrap();
        assert!(suites.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_report_names_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("TESTS-broken.xml");
        std::fs::write(&path, "<testsuite>").unwrap();

        let error = extract_suites(&path).await.unwrap_err();
        assert!(matches!(error, ExtractError::Parse { .. }));
        assert!(error.to_string().contains("TESTS-broken.xml"));
    }
}
