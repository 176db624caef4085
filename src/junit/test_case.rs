use crate::xml::XmlElement;

use super::{TAG_ERROR, TAG_FAILURE};

pub mod attrs {
    pub const CLASSNAME: &str = "classname";
    pub const NAME: &str = "name";
    pub const MESSAGE: &str = "message";
    pub const TYPE: &str = "type";
}

/// A `testcase` element and its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    element: XmlElement,
}

impl From<XmlElement> for TestCase {
    fn from(element: XmlElement) -> Self {
        Self { element }
    }
}

/// The `message` and `type` of a `failure` (or `error`) element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FailureDetail<'a> {
    pub message: Option<&'a str>,
    pub r#type: Option<&'a str>,
}

impl<'a> From<&'a XmlElement> for FailureDetail<'a> {
    fn from(element: &'a XmlElement) -> Self {
        Self {
            message: element.attribute(attrs::MESSAGE),
            r#type: element.attribute(attrs::TYPE),
        }
    }
}

impl TestCase {
    pub fn element(&self) -> &XmlElement {
        &self.element
    }

    pub fn classname(&self) -> Option<&str> {
        self.element.attribute(attrs::CLASSNAME)
    }

    pub fn name(&self) -> Option<&str> {
        self.element.attribute(attrs::NAME)
    }

    pub fn failures(&self) -> Vec<FailureDetail<'_>> {
        self.details(TAG_FAILURE)
    }

    pub fn errors(&self) -> Vec<FailureDetail<'_>> {
        self.details(TAG_ERROR)
    }

    /// Detail of the first `failure` below this case. Cases that only carry
    /// `error` elements have none.
    pub fn first_failure(&self) -> Option<FailureDetail<'_>> {
        self.failures().into_iter().next()
    }

    /// Decided by the case's own `failure`/`error` elements, never by the
    /// parent suite's counters.
    pub fn is_failing(&self) -> bool {
        self.element.has_child_nodes() && (!self.failures().is_empty() || !self.errors().is_empty())
    }

    fn details(&self, tag: &str) -> Vec<FailureDetail<'_>> {
        self.element
            .elements_by_tag_name(tag)
            .into_iter()
            .map(FailureDetail::from)
            .collect()
    }
}
