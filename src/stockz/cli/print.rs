use colored::Colorize;
use stockz::api::{CmdMessage, MessageLevel};
use stockz::model::{ActivityEntry, StockLine};

const REPORT_HEADER: &str = "--- Items Report ---";
const REPORT_FOOTER: &str = "--------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn print_activity(entries: &[ActivityEntry]) {
    for entry in entries {
        let line = format!("{} {} of {}", entry.action, entry.qty, entry.item);
        println!("{}", line.green());
    }
}

pub(super) fn print_report(lines: &[StockLine]) {
    println!("{}", format_report(lines));
}

fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => format!("Warning: {}", message.content)
            .yellow()
            .to_string(),
        MessageLevel::Error => format!("Error: {}", message.content).red().to_string(),
    }
}

/// Header, one `item -> qty` line per item, footer. Blank line before the header.
pub(super) fn format_report(lines: &[StockLine]) -> String {
    let mut out = format!("\n{}\n", REPORT_HEADER);
    for line in lines {
        out.push_str(&format!("{} -> {}\n", line.item, line.qty));
    }
    out.push_str(REPORT_FOOTER);
    out.push('\n');
    out
}

pub(super) fn format_low_items(items: &[String]) -> String {
    format!("{:?}", items)
}
