use std::path::{Path, PathBuf};

use clap::Args;

use crate::constants::{
    DEFAULT_NAME, DEFAULT_REPORT_PATH, NAME_ENV, ONLY_WARN_ENV, PATH_TO_REPORT_ENV, ROOT_ENV,
};
use crate::utils::from_non_empty_or_default;

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    #[arg(
        long,
        env = PATH_TO_REPORT_ENV,
        default_value = DEFAULT_REPORT_PATH,
        help = "Glob pattern matching the JUnit XML reports."
    )]
    pub path_to_report: String,
    #[arg(
        long,
        env = NAME_ENV,
        default_value = DEFAULT_NAME,
        help = "Title shown above the results table."
    )]
    pub name: String,
    #[arg(
        long,
        env = ONLY_WARN_ENV,
        help = "Warn instead of failing when tests have failed."
    )]
    pub only_warn: bool,
    #[arg(
        long,
        env = ROOT_ENV,
        help = "Directory a relative pattern is resolved against. Defaults to current directory."
    )]
    pub root: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            path_to_report: String::from(DEFAULT_REPORT_PATH),
            name: String::from(DEFAULT_NAME),
            only_warn: false,
            root: None,
        }
    }
}

impl Options {
    /// Title for the signal and the table. Blank names fall back to the default.
    pub fn display_name(&self) -> String {
        from_non_empty_or_default(Some(self.name.clone()), String::from(DEFAULT_NAME), |s| s)
    }

    /// The glob pattern to scan, joined onto `root` when it is relative.
    pub fn report_pattern(&self) -> anyhow::Result<String> {
        let pattern = Path::new(&self.path_to_report);
        match &self.root {
            Some(root) if !pattern.is_absolute() => root
                .join(pattern)
                .components()
                .collect::<PathBuf>()
                .to_str()
                .map(String::from)
                .ok_or_else(|| anyhow::anyhow!("Report path is not valid UTF-8: {:?}", root)),
            _ => Ok(self.path_to_report.clone()),
        }
    }
}
