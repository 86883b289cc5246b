use colored::Colorize;
use serde::Serialize;
use sift::api::{CmdMessage, MessageLevel, SettingsItem, TabSummary, VisibilityController};
use sift::error::Result;
use sift::model::Record;
use sift::state::VisibilityState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn render_tab_row(tabs: &[TabSummary]) -> String {
    tabs.iter()
        .map(|t| {
            let cell = format!("{} {} {}", t.icon, t.label, t.count);
            if t.selected {
                format!("[{}]", cell).bold().to_string()
            } else {
                format!(" {} ", cell)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub(super) fn render_settings(items: &[SettingsItem]) -> String {
    let mut out = String::from("Settings:\n");
    for item in items {
        let mark = if item.checked { "x" } else { " " };
        out.push_str(&format!("  [{}] {}\n", mark, item.category));
    }
    out
}

pub(super) fn render_records(records: &[&Record]) -> String {
    if records.is_empty() {
        return format!("{}\n", "No results found".dimmed());
    }

    let mut out = String::new();
    for record in records {
        let name = truncate_to_width(&record.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        out.push_str(&format!(
            "  {}  {}{}  {}\n",
            record.icon,
            name,
            " ".repeat(padding),
            record.category.label().dimmed()
        ));
    }
    out
}

/// Tab row, settings panel when open, then results.
pub(super) fn render_view(controller: &VisibilityController) -> String {
    let mut out = render_tab_row(&controller.tabs());
    out.push('\n');
    if controller.dropdown_open() {
        out.push_str(&render_settings(&controller.settings_items()));
    }
    out.push('\n');
    out.push_str(&render_records(&controller.visible_records()));
    out
}

#[derive(Serialize)]
struct ViewJson<'a> {
    state: &'a VisibilityState,
    tabs: Vec<TabSummary>,
    records: Vec<&'a Record>,
}

pub(super) fn render_view_json(
    controller: &VisibilityController,
    with_records: bool,
) -> Result<String> {
    let view = ViewJson {
        state: controller.state(),
        tabs: controller.tabs(),
        records: if with_records {
            controller.visible_records()
        } else {
            Vec::new()
        },
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift::catalog::Catalog;
    use sift::model::{Category, Tab};

    fn controller() -> VisibilityController {
        let catalog = Catalog::new(vec![
            Record::new(1, Category::People, "Alice", "👤"),
            Record::new(2, Category::Files, "Alice_file.pdf", "📄"),
            Record::new(3, Category::Chats, "Chat with Alice", "💬"),
        ])
        .unwrap();
        VisibilityController::new(catalog)
    }

    #[test]
    fn tab_row_brackets_selected() {
        colored::control::set_override(false);
        let mut controller = controller();
        controller.toggle_category(Tab::PEOPLE);

        let row = render_tab_row(&controller.tabs());
        assert!(row.starts_with('['));
        assert!(row.contains(" All 2]"));
        assert!(row.contains(" 📎 Files 1 "));
        assert!(!row.contains("People"));
    }

    #[test]
    fn empty_results_message() {
        colored::control::set_override(false);
        assert_eq!(render_records(&[]), "No results found\n");
    }

    #[test]
    fn settings_marks_checked() {
        let mut controller = controller();
        controller.toggle_category(Tab::CHATS);
        let text = render_settings(&controller.settings_items());
        assert!(text.contains("[x] Files"));
        assert!(text.contains("[ ] Chats"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(60);
        let out = truncate_to_width(&long, 10);
        assert_eq!(out.width(), 10);
        assert!(out.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn json_view_lists_records() {
        let controller = controller();
        let json = render_view_json(&controller, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 3);
        assert_eq!(value["state"]["selected"], "All");
        assert_eq!(value["tabs"][0]["count"], 3);
    }
}
