//! Sample team-member data and the column catalogue used by the binary.

use crate::grid::{BadgeTone, CellValue, ColumnDefinition, ColumnRegistry, DisplayValue, RowRecord};
use once_cell::sync::Lazy;

/// Grid title for the team-member demo
pub const TEAM_GRID_TITLE: &str = "Team Members";

/// Column catalogue shown by the demo grid
pub static TEAM_COLUMNS: Lazy<ColumnRegistry> = Lazy::new(|| ColumnRegistry::new(team_columns()));

/// Rows loaded at startup
pub static TEAM_MEMBERS: Lazy<Vec<RowRecord>> = Lazy::new(team_members);

fn team_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("id", "ID", 60),
        ColumnDefinition::new("name", "Full Name", 180)
            .with_renderer(|_, value| DisplayValue::Emphasis(value.to_string())),
        ColumnDefinition::new("role", "Role", 150),
        ColumnDefinition::new("email", "Email Address", 200),
        ColumnDefinition::new("age", "Age", 80),
        ColumnDefinition::new("status", "Status", 120).with_renderer(|_, value| status_badge(value)),
        ColumnDefinition::new("progress", "Progress", 140).with_renderer(|_, value| {
            let percent = value.as_integer().unwrap_or(0).clamp(0, 100);
            DisplayValue::Progress(u8::try_from(percent).unwrap_or(0))
        }),
        ColumnDefinition::new("lastLogin", "Last Login", 130),
        ColumnDefinition::actions(),
    ]
}

fn status_badge(value: &CellValue) -> DisplayValue {
    let text = value.to_string();
    let tone = match text.as_str() {
        "Active" => BadgeTone::Positive,
        "Pending" => BadgeTone::Warning,
        "Inactive" => BadgeTone::Negative,
        _ => BadgeTone::Neutral,
    };
    DisplayValue::Badge { text, tone }
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u64,
    name: &str,
    email: &str,
    age: i64,
    status: &str,
    role: &str,
    last_login: &str,
    progress: i64,
) -> RowRecord {
    RowRecord::new(id)
        .with("id", i64::try_from(id).unwrap_or_default())
        .with("name", name)
        .with("email", email)
        .with("age", age)
        .with("status", status)
        .with("role", role)
        .with("lastLogin", last_login)
        .with("progress", progress)
}

fn team_members() -> Vec<RowRecord> {
    vec![
        member(1, "Ivan Petrov", "ivan@example.com", 28, "Active", "Frontend Engineer", "2023-10-24", 85),
        member(2, "Daria Petrova", "daria@example.com", 32, "Pending", "UX Designer", "2023-11-01", 45),
        member(3, "Alex Smith", "alex@example.com", 24, "Active", "DevOps", "2023-11-12", 92),
        member(4, "Elena Korolyova", "elena@example.com", 29, "Inactive", "Product Manager", "2023-09-15", 12),
        member(5, "Michael Brown", "mike@example.com", 41, "Active", "CTO", "2023-11-15", 100),
        member(6, "Sarah Wilson", "sarah@example.com", 27, "Pending", "QA Analyst", "2023-11-14", 67),
        member(7, "John Doe", "john@example.com", 35, "Active", "Backend Dev", "2023-11-10", 80),
        member(8, "Anna Lee", "anna@example.com", 22, "Inactive", "Intern", "2023-08-20", 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ends_with_actions() {
        let ids = TEAM_COLUMNS.ids();
        assert_eq!(ids.len(), 9);
        assert_eq!(ids.first().map(String::as_str), Some("id"));
        assert_eq!(ids.last().map(String::as_str), Some("actions"));
    }

    #[test]
    fn status_and_progress_renderers() {
        let row = &TEAM_MEMBERS[3];
        let status = TEAM_COLUMNS.get("status").unwrap().render_cell(row);
        assert_eq!(
            status,
            DisplayValue::Badge {
                text: "Inactive".to_string(),
                tone: BadgeTone::Negative
            }
        );
        let progress = TEAM_COLUMNS.get("progress").unwrap().render_cell(row);
        assert_eq!(progress, DisplayValue::Progress(12));
    }
}
