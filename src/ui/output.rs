use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Section header, e.g. the catalog title
pub fn header(text: &str) {
    println!("{}", text.style(theme().header.clone()));
}

/// A result line; text is printed unchanged apart from styling
pub fn line(text: &str) {
    println!("{}", text.style(theme().result.clone()));
}

/// A snippet name in a listing
pub fn name(text: &str) {
    println!("{}", text.style(theme().name.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}
