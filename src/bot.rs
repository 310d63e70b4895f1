use std::collections::HashMap;

use tracing::{debug, info};

use crate::commands;
use crate::faq::FaqTable;
use crate::language::{self, Language};
use crate::responses;

/// A conversation participant
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct User {
    pub id: u64,
    pub username: Option<String>,
    pub display_name: Option<String>,
    /// Language of the most recent message
    pub language: Language,
    pub is_student: bool,
}

impl User {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            username: None,
            display_name: None,
            language: Language::Ru,
            is_student: true,
        }
    }
}

/// Session-wide counters, never decremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_messages: u64,
    pub users_count: u64,
    pub faq_hits: u64,
}

impl Stats {
    /// FAQ hits as a percentage of all messages, 0 when there are none
    pub fn hit_ratio(&self) -> f64 {
        self.faq_hits as f64 / self.total_messages.max(1) as f64 * 100.0
    }
}

/// Per-session state: the user registry and its counters
#[derive(Debug, Default)]
pub struct Session {
    users: HashMap<u64, User>,
    stats: Stats,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[allow(dead_code)]
    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    fn get_or_create_user(&mut self, id: u64) -> &mut User {
        let stats = &mut self.stats;
        self.users.entry(id).or_insert_with(|| {
            stats.users_count += 1;
            info!("New user {}", id);
            User::new(id)
        })
    }
}

/// Routes each message to a command, an FAQ answer or the fallback reply.
/// Holds only immutable data; all mutable state lives in the [`Session`].
pub struct Dispatcher {
    faq: FaqTable,
    support_phone: String,
}

impl Dispatcher {
    pub fn new(faq: FaqTable, support_phone: &str) -> Self {
        Self {
            faq,
            support_phone: support_phone.to_string(),
        }
    }

    /// Process one message and return the reply text
    pub fn process_message(&self, session: &mut Session, user_id: u64, text: &str) -> String {
        session.stats.total_messages += 1;

        // Language is re-detected on every message, not remembered
        let detected = language::detect(text);
        let user = session.get_or_create_user(user_id);
        user.language = detected;
        let user = user.clone();

        debug!("Message from user {} ({}): {}", user_id, detected, text);

        if text.starts_with('/') {
            return commands::handle(&user, text, &session.stats);
        }

        if let Some(answer) = self.faq.search(text, detected) {
            session.stats.faq_hits += 1;
            return answer.to_string();
        }

        responses::fallback(detected, &self.support_phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "+7 (727) 377-33-33";

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(FaqTable::builtin(), PHONE)
    }

    #[test]
    fn test_exam_question_scenario() {
        let bot = dispatcher();
        let mut session = Session::new();

        let reply = bot.process_message(&mut session, 1, "Когда экзамен?");

        assert!(reply.starts_with("Расписание экзаменов"));
        assert_eq!(session.user(1).unwrap().language, Language::Ru);
        assert_eq!(
            *session.stats(),
            Stats {
                total_messages: 1,
                users_count: 1,
                faq_hits: 1
            }
        );
    }

    #[test]
    fn test_kazakh_schedule_scenario() {
        let bot = dispatcher();
        let mut session = Session::new();

        let reply = bot.process_message(&mut session, 1, "Сабақ кестесі қайда?");

        assert!(reply.starts_with("Сабақ кестесі e.edugpt.edu.kz"));
        assert_eq!(session.user(1).unwrap().language, Language::Kk);
        assert_eq!(session.stats().faq_hits, 1);
    }

    #[test]
    fn test_user_counted_once() {
        let bot = dispatcher();
        let mut session = Session::new();

        bot.process_message(&mut session, 42, "привет");
        bot.process_message(&mut session, 42, "ещё раз");
        assert_eq!(session.stats().users_count, 1);
        assert_eq!(session.stats().total_messages, 2);

        bot.process_message(&mut session, 43, "привет");
        assert_eq!(session.stats().users_count, 2);
    }

    #[test]
    fn test_commands_never_count_as_faq_hits() {
        let bot = dispatcher();
        let mut session = Session::new();

        // "/экзамен" contains an FAQ keyword but is a command
        let reply = bot.process_message(&mut session, 1, "/экзамен");
        assert_eq!(reply, responses::UNKNOWN_COMMAND);
        bot.process_message(&mut session, 1, "/faq");
        bot.process_message(&mut session, 1, "/help");

        assert_eq!(session.stats().faq_hits, 0);
        assert_eq!(session.stats().total_messages, 3);
    }

    #[test]
    fn test_unknown_command_scenario() {
        let bot = dispatcher();
        let mut session = Session::new();

        let reply = bot.process_message(&mut session, 1, "/unknown");

        assert_eq!(reply, responses::UNKNOWN_COMMAND);
        assert_eq!(session.stats().total_messages, 1);
        assert_eq!(session.stats().faq_hits, 0);
    }

    #[test]
    fn test_stats_as_first_message_counts_itself() {
        let bot = dispatcher();
        let mut session = Session::new();

        let reply = bot.process_message(&mut session, 1, "/stats");

        assert!(reply.contains("Пользователей: 1\n"));
        assert!(reply.contains("Сообщений: 1\n"));
        assert!(reply.contains("FAQ попаданий: 0\n"));
        assert!(reply.ends_with("0.0%"));
    }

    #[test]
    fn test_stats_after_hits() {
        let bot = dispatcher();
        let mut session = Session::new();

        bot.process_message(&mut session, 1, "стипендия");
        let reply = bot.process_message(&mut session, 1, "/STATS");

        // 1 hit out of 2 messages
        assert!(reply.ends_with("50.0%"));
    }

    #[test]
    fn test_fallback_is_localized() {
        let bot = dispatcher();
        let mut session = Session::new();

        let ru = bot.process_message(&mut session, 1, "какая погода?");
        assert!(ru.starts_with("🤔 Извините"));
        assert!(ru.contains(PHONE));

        let kk = bot.process_message(&mut session, 1, "ауа райы қандай?");
        assert!(kk.starts_with("🤔 Кешіріңіз"));
        assert_eq!(session.stats().faq_hits, 0);
    }

    #[test]
    fn test_language_is_redetected_every_message() {
        let bot = dispatcher();
        let mut session = Session::new();

        bot.process_message(&mut session, 1, "Сәлем");
        assert_eq!(session.user(1).unwrap().language, Language::Kk);

        // Not sticky: a Russian message flips it back
        let reply = bot.process_message(&mut session, 1, "/start");
        assert_eq!(session.user(1).unwrap().language, Language::Ru);
        assert_eq!(reply, responses::welcome(Language::Ru));
    }

    #[test]
    fn test_sessions_are_independent() {
        let bot = dispatcher();
        let mut first = Session::new();
        let mut second = Session::new();

        bot.process_message(&mut first, 1, "экзамен");
        bot.process_message(&mut first, 2, "экзамен");

        assert_eq!(first.stats().users_count, 2);
        assert_eq!(*second.stats(), Stats::default());
        bot.process_message(&mut second, 1, "x");
        assert_eq!(second.stats().faq_hits, 0);
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(5);
        assert!(user.is_student);
        assert_eq!(user.language, Language::Ru);
        assert!(user.username.is_none() && user.display_name.is_none());
    }
}
