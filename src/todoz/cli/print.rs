use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use timeago::Formatter;
use todoz::api::{CmdMessage, MessageLevel, Welcome};
use todoz::config::{is_valid_date_format, TodozConfig, DEFAULT_DATE_FORMAT};
use todoz::index::DisplayTodo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 34;
const STARS_WIDTH: usize = 5;
const EMPTY_LIST: &str = "All tasks completed. Nice work!";
const NO_MATCHES: &str = "No matching todos.";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_welcome(welcome: &Welcome) {
    println!("{}", welcome_line(welcome).bold());
}

/// `filtered` tells an empty list apart from a filter that matched nothing.
pub(super) fn print_todos(todos: &[DisplayTodo], filtered: bool, date_format: &str) {
    let now = Utc::now();
    if todos.is_empty() {
        let text = if filtered { NO_MATCHES } else { EMPTY_LIST };
        println!("{}", text.dimmed());
        return;
    }
    for dt in todos {
        println!("{}", todo_line(dt, date_format, now));
    }
}

pub(super) fn print_config(config: &TodozConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn welcome_line(welcome: &Welcome) -> String {
    format!(
        "Hello, {}. You have {} uncompleted task{}.",
        welcome.user_name,
        welcome.uncompleted_count,
        if welcome.uncompleted_count == 1 { "" } else { "s" }
    )
}

fn todo_line(dt: &DisplayTodo, date_format: &str, now: DateTime<Utc>) -> String {
    let todo = &dt.todo;

    let idx = format!("{:>3}.", dt.index);
    let check = if todo.is_done { "[x]" } else { "[ ]" };

    let name = truncate_to_width(&todo.name, NAME_WIDTH);
    let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));
    let name = if todo.is_done {
        name.strikethrough().dimmed().to_string()
    } else {
        name
    };

    let stars = todo.priority.stars();
    let stars_padding = " ".repeat(STARS_WIDTH.saturating_sub(stars.chars().count()));

    let deadline = todo
        .deadline
        .map(|d| format_deadline(d, date_format, now))
        .unwrap_or_default();

    let badge = if todo.is_done {
        format!(" {}", "DONE".green())
    } else if todo.is_overdue(now) {
        format!(" {}", "OVERDUE".red().bold())
    } else {
        String::new()
    };

    let line = format!(
        "{} {} {}{} {}{}  {}{}",
        idx.yellow(),
        check,
        name,
        padding,
        stars.yellow(),
        stars_padding,
        deadline.dimmed(),
        badge
    );
    line.trim_end().to_string()
}

/// Local wall-clock time in `date_format` followed by a relative hint.
fn format_deadline(deadline: DateTime<Utc>, date_format: &str, now: DateTime<Utc>) -> String {
    // A hand-edited config.json can carry a pattern chrono would refuse to render.
    let pattern = if is_valid_date_format(date_format) {
        date_format
    } else {
        DEFAULT_DATE_FORMAT
    };
    let local = deadline.with_timezone(&Local).format(pattern);
    format!("{} ({})", local, relative_time(deadline, now))
}

fn relative_time(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let formatter = Formatter::new();
    if deadline >= now {
        let ahead = deadline.signed_duration_since(now);
        let text = formatter.convert(ahead.to_std().unwrap_or_default());
        match text.strip_suffix(" ago") {
            Some(span) => format!("in {}", span),
            None => text,
        }
    } else {
        let behind = now.signed_duration_since(deadline);
        formatter.convert(behind.to_std().unwrap_or_default())
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            result.pop();
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use todoz::model::{Priority, Todo};

    fn display(todo: Todo, index: usize) -> DisplayTodo {
        DisplayTodo { todo, index }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn welcome_pluralizes() {
        let one = Welcome {
            user_name: "Tanuki".into(),
            uncompleted_count: 1,
        };
        let many = Welcome {
            user_name: "unknown".into(),
            uncompleted_count: 3,
        };
        assert_eq!(welcome_line(&one), "Hello, Tanuki. You have 1 uncompleted task.");
        assert_eq!(
            welcome_line(&many),
            "Hello, unknown. You have 3 uncompleted tasks."
        );
    }

    #[test]
    fn relative_time_reads_both_ways() {
        let now = now();
        assert_eq!(relative_time(now + Duration::days(2), now), "in 2 days");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
    }

    #[test]
    fn line_shows_index_check_name_and_stars() {
        colored::control::set_override(false);
        let todo = Todo::new("Buy milk".into(), Priority::new(2).unwrap(), None);
        let line = todo_line(&display(todo, 1), DEFAULT_DATE_FORMAT, now());
        assert!(line.starts_with("  1. [ ] Buy milk"));
        assert!(line.ends_with("★★"));
    }

    #[test]
    fn overdue_and_done_badges() {
        colored::control::set_override(false);
        let now = now();

        let late = Todo::new(
            "File taxes".into(),
            Priority::default(),
            Some(now - Duration::days(1)),
        );
        let line = todo_line(&display(late.clone(), 1), DEFAULT_DATE_FORMAT, now);
        assert!(line.ends_with("OVERDUE"));
        assert!(line.contains("1 day ago"));

        let mut done = late;
        done.is_done = true;
        let line = todo_line(&display(done, 2), DEFAULT_DATE_FORMAT, now);
        assert!(line.contains("[x]"));
        assert!(line.ends_with("DONE"));
        assert!(!line.contains("OVERDUE"));
    }

    #[test]
    fn deadline_uses_local_time_and_format() {
        let now = now();
        let deadline = now + Duration::hours(5);
        let expected = deadline.with_timezone(&Local).format("%d/%m").to_string();
        let shown = format_deadline(deadline, "%d/%m", now);
        assert_eq!(shown, format!("{} (in 5 hours)", expected));
    }

    #[test]
    fn invalid_format_falls_back_to_default() {
        let now = now();
        let expected = now
            .with_timezone(&Local)
            .format(DEFAULT_DATE_FORMAT)
            .to_string();
        assert!(format_deadline(now, "%Q", now).starts_with(&expected));
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Buy milk", 34), "Buy milk");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("日本語のタスク", 6), "日本…");
    }
}
