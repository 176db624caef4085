use crate::junit::{FailureDetail, TestCase};

pub const PLACEHOLDER: &str = "-";
pub const TABLE_HEADER: &str = "| File | Name | Message | Type|";

/// The one-line signal sent ahead of the table.
pub fn failure_signal(name: &str) -> String {
    format!("{} have failed, see below for more information.", name)
}

/// Renders a markdown table with one row per failed case, in the order given.
pub fn format_report(failed_cases: &[TestCase], title: &str) -> String {
    let mut table = format!("### {}:\n\n", title);
    table.push_str(TABLE_HEADER);
    table.push('\n');
    for case in failed_cases {
        table.push_str(&format_row(case));
        table.push('\n');
    }
    table
}

fn format_row(case: &TestCase) -> String {
    // error-only cases keep placeholders, their error detail is not rendered
    let FailureDetail { message, r#type } = case.first_failure().unwrap_or_default();
    format!(
        "| {} | {} | {} | {}|",
        case.classname().unwrap_or_default(),
        case.name().unwrap_or_default(),
        message.unwrap_or(PLACEHOLDER),
        r#type.unwrap_or(PLACEHOLDER),
    )
}
