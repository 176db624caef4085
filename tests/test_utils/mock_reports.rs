use std::fs;
use std::path::{Path, PathBuf};

pub const PASSING_SUITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="pkg.FooTest" tests="1" failures="0" errors="0">
  <testcase classname="pkg.Foo" name="testOk" time="0.01"/>
</testsuite>
"#;

pub const FAILING_SUITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="pkg.FooTest" tests="1" failures="1" errors="0">
  <testcase classname="pkg.Foo" name="testBar" time="0.02">
    <failure message="boom" type="AssertionError">java.lang.AssertionError: boom</failure>
  </testcase>
</testsuite>
"#;

pub const WRAPPED_SUITES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="all">
  <testsuite name="first" tests="2" failures="0" errors="0">
    <testcase classname="pkg.First" name="testOne"/>
    <testcase classname="pkg.First" name="testTwo"/>
  </testsuite>
  <testsuite name="second" tests="3" failures="1" errors="1">
    <testcase classname="pkg.Second" name="testFails">
      <failure message="expected 1 but was 2" type="AssertionError"/>
    </testcase>
    <testcase classname="pkg.Second" name="testPasses"/>
    <testcase classname="pkg.Second" name="testErrors">
      <error message="npe" type="NullPointerException"/>
    </testcase>
  </testsuite>
</testsuites>
"#;

/// Writes `contents` to `relative` under `root`, creating parent directories.
pub fn write_report<T: AsRef<Path>>(root: T, relative: &str, contents: &str) -> PathBuf {
    let path = root.as_ref().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create report directory");
    }
    fs::write(&path, contents).expect("failed to write report");
    path
}
