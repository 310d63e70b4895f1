//! Localized canned replies.

use crate::bot::Stats;
use crate::language::Language;

pub const UNKNOWN_COMMAND: &str = "❓ Неизвестная команда. Используйте /help для справки.";

pub const TRY_AGAIN: &str = "❌ Произошла ошибка. Попробуйте еще раз.";

pub fn welcome(language: Language) -> &'static str {
    match language {
        Language::Kk => {
            "🎓 Сәлем! Мен EduGPT KZ ботымын!\n\n\
             Мен сізге көмектесе аламын:\n\
             • Сабақ кестесін табу\n\
             • Емтихан туралы ақпарат\n\
             • Стипендия туралы сұрақтар\n\
             • Байланыс мәліметтері\n\n\
             Сұрақ қойыңыз! 🤖"
        }
        Language::Ru => {
            "🎓 Привет! Я EduGPT KZ бот!\n\n\
             Я могу помочь вам с:\n\
             • Расписанием занятий\n\
             • Информацией об экзаменах\n\
             • Вопросами по стипендии\n\
             • Контактными данными\n\n\
             Задавайте вопросы! 🤖"
        }
    }
}

pub fn help(language: Language) -> &'static str {
    match language {
        Language::Kk => {
            "📚 Көмек:\n\n\
             🔍 Сұрақтар мысалдары:\n\
             • \"Сабақ кестем қайда?\"\n\
             • \"Емтихан қашан?\"\n\
             • \"Стипендия қанша?\"\n\n\
             📋 Командалар:\n\
             /start - бастау\n\
             /help - көмек\n\
             /stats - статистика\n\
             /faq - жиі қойылатын сұрақтар"
        }
        Language::Ru => {
            "📚 Справка:\n\n\
             🔍 Примеры вопросов:\n\
             • \"Где мое расписание?\"\n\
             • \"Когда экзамен?\"\n\
             • \"Сколько стипендия?\"\n\n\
             📋 Команды:\n\
             /start - начать\n\
             /help - справка\n\
             /stats - статистика\n\
             /faq - частые вопросы"
        }
    }
}

pub fn faq_topics(language: Language) -> &'static str {
    match language {
        Language::Kk => {
            "❓ Жиі қойылатын сұрақтар:\n\n\
             • Сабақ кестесі\n\
             • Емтихан\n\
             • Стипендия\n\
             • Байланыс мәліметтері\n\n\
             Сұрақтың бірін жазып жіберіңіз!"
        }
        Language::Ru => {
            "❓ Часто задаваемые вопросы:\n\n\
             • Расписание занятий\n\
             • Экзамены\n\
             • Стипендия\n\
             • Контактная информация\n\n\
             Напишите один из вопросов!"
        }
    }
}

/// Reply used when neither a command nor an FAQ entry matched
pub fn fallback(language: Language, support_phone: &str) -> String {
    match language {
        Language::Kk => format!(
            "🤔 Кешіріңіз, мен бұл сұраққа дәл жауап бере алмаймын.\n\n\
             Қайталап сұраңыз немесе /faq командасын қолданыңыз.\n\
             Көмек керек болса, қабылдау комиссиясына хабарласыңыз:\n\
             📞 {support_phone}"
        ),
        Language::Ru => format!(
            "🤔 Извините, я не могу дать точный ответ на этот вопрос.\n\n\
             Переформулируйте вопрос или используйте команду /faq.\n\
             Если нужна помощь, обратитесь в приемную комиссию:\n\
             📞 {support_phone}"
        ),
    }
}

pub fn stats(stats: &Stats) -> String {
    format!(
        "📊 Статистика демо-бота:\n\n\
         👥 Пользователей: {}\n\
         💬 Сообщений: {}\n\
         🎯 FAQ попаданий: {}\n\n\
         📈 Точность ответов: {:.1}%",
        stats.users_count,
        stats.total_messages,
        stats.faq_hits,
        stats.hit_ratio()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_with_no_messages() {
        let out = stats(&Stats::default());
        assert!(out.contains("Пользователей: 0\n"));
        assert!(out.contains("Сообщений: 0\n"));
        assert!(out.contains("FAQ попаданий: 0\n"));
        assert!(out.ends_with("Точность ответов: 0.0%"));
    }

    #[test]
    fn test_stats_ratio_one_decimal() {
        let s = Stats {
            total_messages: 3,
            users_count: 2,
            faq_hits: 1,
        };
        assert!(stats(&s).ends_with("Точность ответов: 33.3%"));

        let s = Stats {
            total_messages: 3,
            users_count: 1,
            faq_hits: 2,
        };
        assert!(stats(&s).ends_with("66.7%"));
    }

    #[test]
    fn test_fallback_mentions_phone() {
        let ru = fallback(Language::Ru, "+7 000");
        let kk = fallback(Language::Kk, "+7 000");
        assert!(ru.ends_with("📞 +7 000"));
        assert!(kk.ends_with("📞 +7 000"));
        assert!(kk.contains("Кешіріңіз"));
    }

    #[test]
    fn test_localized_texts_differ() {
        assert_ne!(welcome(Language::Ru), welcome(Language::Kk));
        assert_ne!(help(Language::Ru), help(Language::Kk));
        assert_ne!(faq_topics(Language::Ru), faq_topics(Language::Kk));
    }
}
