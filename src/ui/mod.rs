pub mod calendar_view;
pub mod messages;
pub mod prompt;
