use crate::bot::{Stats, User};
use crate::responses;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Stats,
    Faq,
    Unknown,
}

impl Command {
    /// Exact, case-insensitive match on the whole trimmed text
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "/start" => Command::Start,
            "/help" => Command::Help,
            "/stats" => Command::Stats,
            "/faq" => Command::Faq,
            _ => Command::Unknown,
        }
    }
}

pub fn handle(user: &User, text: &str, stats: &Stats) -> String {
    match Command::parse(text) {
        Command::Start => responses::welcome(user.language).to_string(),
        Command::Help => responses::help(user.language).to_string(),
        Command::Stats => responses::stats(stats),
        Command::Faq => responses::faq_topics(user.language).to_string(),
        Command::Unknown => responses::UNKNOWN_COMMAND.to_string(),
    }
}
