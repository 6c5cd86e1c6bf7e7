//! Console output for one-shot commands
//!
//! `configure`, `reset` and `status` report through the `print_cmd_*` macros so
//! every command shares the same tagged, colored format. Errors go to stderr to
//! keep `status` output on stdout clean.

#[derive(Debug, Clone, Copy)]
enum Tag {
    Info,
    Warn,
    Error,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Tag::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Tag::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Tag::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// `[TAG] title`, followed by a tab and the details when there are any.
fn format_line(tag: Tag, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag.label(), title)
    } else {
        format!("{} {}\t {}", tag.label(), title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_line(Tag::Info, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_line(Tag::Warn, title, details));
}

pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", format_line(Tag::Error, title, ""));
    if let Some(details) = details {
        eprintln!("{}", format_line(Tag::Error, "Details:", details));
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_line(Tag::Success, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
