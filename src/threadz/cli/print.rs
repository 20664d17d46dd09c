use chrono::{DateTime, Utc};
use colored::Colorize;
use threadz::api::{CmdMessage, DisplayComment, MessageLevel};
use threadz::config::ThreadzConfig;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const INDENT: &str = "    ";
const STAR_ON: &str = "★";
const STAR_OFF: &str = "☆";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per comment, indented by depth.
pub fn print_thread(comments: &[DisplayComment], show_timestamps: bool) {
    if comments.is_empty() {
        println!("No comments yet.");
        return;
    }

    for dc in comments {
        let indent = INDENT.repeat(dc.depth.saturating_sub(1));
        let star = if dc.starred {
            STAR_ON.yellow()
        } else {
            STAR_OFF.dimmed()
        };
        let id_str = format!("{}. ", dc.id);

        let left_width = indent.width() + 2 + id_str.width();
        let right_width = if show_timestamps { TIME_WIDTH } else { 0 };
        let available = LINE_WIDTH.saturating_sub(left_width + right_width);

        let one_line: String = dc
            .text
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let text = truncate_to_width(&one_line, available);
        let padding = available.saturating_sub(text.width());

        let time = if show_timestamps {
            format_time_ago(dc.created_at).dimmed().to_string()
        } else {
            String::new()
        };

        println!(
            "{}{} {}{}{}{}",
            indent,
            star,
            id_str.yellow(),
            text,
            " ".repeat(padding),
            time
        );

        if dc.hidden_replies > 0 {
            println!(
                "{}{}",
                INDENT.repeat(dc.depth),
                format!("({} more replies)", dc.hidden_replies).dimmed()
            );
        }
    }
}

/// Full text of each comment, replies indented below.
pub fn print_full_comments(comments: &[DisplayComment]) {
    let base = comments.first().map(|dc| dc.depth).unwrap_or(1);
    for dc in comments {
        let indent = INDENT.repeat(dc.depth.saturating_sub(base));
        let star = if dc.starred { STAR_ON } else { STAR_OFF };
        println!(
            "{}{} {} {}",
            indent,
            star,
            dc.id.to_string().yellow(),
            dc.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        for line in dc.text.lines() {
            println!("{}  {}", indent, line);
        }
        println!();
    }
}

pub fn print_config(config: &ThreadzConfig) {
    for key in ThreadzConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
