//! Category list formatting for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories yet. Create your first category with 'budgetbook category add'.\n"
            .to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            color: c.color.clone(),
            id: c.id.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_list() {
        let categories = vec![
            Category::new("Groceries", "#10B981"),
            Category::new("Transport", "#3B82F6"),
        ];

        let output = format_category_list(&categories);
        assert!(output.contains("Groceries"));
        assert!(output.contains("#3B82F6"));
        assert!(output.contains("Name"));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let output = format_category_list(&[]);
        assert!(output.contains("No categories yet"));
    }
}
