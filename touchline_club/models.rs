pub mod availability;
pub mod chat;
pub mod club;
pub mod event;
pub mod invitation;
pub mod player;
pub mod post;
pub mod profile;
pub mod team;

/// Trims a free-text field and turns blank input into `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
