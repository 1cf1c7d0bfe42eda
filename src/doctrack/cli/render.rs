//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Layout math (column widths, truncation,
//! padding) is done on plain strings with Unicode-aware widths; colour is applied last so
//! escape codes never skew the alignment.

use colored::*;
use doctrack::api::{CmdMessage, DocumentStats, MessageLevel};
use doctrack::commands::helpers::short_id;
use doctrack::config::Columns;
use doctrack::error::Result;
use doctrack::model::{DerivedView, Status};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 34;
const TYPE_WIDTH: usize = 12;
const PARTY_WIDTH: usize = 18;
const EXPIRES_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 13;
const ATTACHMENT_MARKER: &str = "📎";

pub const EMPTY_LIST: &str = "No documents found.";

/// One-line summary cards.
pub fn render_stats(stats: &DocumentStats) -> String {
    format!(
        "{} {}   {} {}   {} {}   {} {}\n",
        "Total".bold(),
        stats.total,
        "Valid".green(),
        stats.valid,
        "Expiring soon".yellow(),
        stats.expiring_soon,
        "Expired".red(),
        stats.expired
    )
}

pub fn render_table(views: &[DerivedView], columns: &Columns) -> String {
    if views.is_empty() {
        return format!("{}\n", EMPTY_LIST.dimmed());
    }

    let mut header = vec![pad("ID", 8), pad("Name", NAME_WIDTH)];
    if columns.doc_type {
        header.push(pad("Type", TYPE_WIDTH));
    }
    if columns.expiry_date {
        header.push(pad("Expires", EXPIRES_WIDTH));
    }
    if columns.status {
        header.push(pad("Status", STATUS_WIDTH));
    }
    if columns.updated_by {
        header.push(pad("Updated by", PARTY_WIDTH));
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", header.join("  ").trim_end().bold()));

    for view in views {
        let record = &view.record;
        let name = match &record.file {
            Some(_) => format!("{} {}", record.name, ATTACHMENT_MARKER),
            None => record.name.clone(),
        };

        let mut cells: Vec<String> = vec![
            short_id(&record.id).dimmed().to_string(),
            pad(&truncate_to_width(&name, NAME_WIDTH), NAME_WIDTH),
        ];
        if columns.doc_type {
            cells.push(pad(
                &truncate_to_width(record.doc_type.as_str(), TYPE_WIDTH),
                TYPE_WIDTH,
            ));
        }
        if columns.expiry_date {
            cells.push(pad(&view.formatted_expiry_date, EXPIRES_WIDTH));
        }
        if columns.status {
            cells.push(style_status(view.status, &pad(view.status.label(), STATUS_WIDTH)));
        }
        if columns.updated_by {
            cells.push(pad(
                &truncate_to_width(&record.updated_by.name, PARTY_WIDTH),
                PARTY_WIDTH,
            ));
        }

        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

pub fn render_detail(detail: &str, status: Option<Status>) -> String {
    let mut out = String::new();
    let mut lines = detail.lines();
    if let Some(title) = lines.next() {
        out.push_str(&format!("{}\n", title.bold()));
    }
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    if let Some(status) = status {
        out.push_str(&format!("Status: {}\n", style_status(status, status.label())));
    }
    out
}

pub fn render_types(types: &[String]) -> String {
    types.iter().map(|t| format!("{}\n", t)).collect()
}

pub fn render_json(views: &[DerivedView]) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(views)?))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn style_status(status: Status, text: &str) -> String {
    match status {
        Status::Valid => text.green().to_string(),
        Status::ExpiringSoon => text.yellow().to_string(),
        Status::Expired => text.red().to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
