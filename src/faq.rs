use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::language::Language;

/// A single canned answer keyed by a keyword
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub keyword: String,
    pub language: Language,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(keyword: &str, language: Language, answer: &str) -> Self {
        Self {
            keyword: keyword.trim().to_lowercase(),
            language,
            answer: answer.to_string(),
        }
    }
}

/// Ordered FAQ entries, fixed once the table is built.
///
/// Lookups walk entries in definition order, so the first keyword that
/// matches wins when several would.
#[derive(Debug, Clone)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

#[derive(Debug, Deserialize)]
struct FaqFile {
    #[serde(default)]
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| FaqEntry::new(&e.keyword, e.language, &e.answer))
            .collect();
        Self { entries }
    }

    /// The table shipped with the bot
    pub fn builtin() -> Self {
        use Language::{Kk, Ru};

        Self::new(vec![
            FaqEntry::new(
                "расписание",
                Ru,
                "Расписание занятий доступно в личном кабинете e.edugpt.edu.kz в разделе 'Расписание'",
            ),
            FaqEntry::new(
                "экзамен",
                Ru,
                "Расписание экзаменов публикуется за 2 недели до начала сессии на сайте университета",
            ),
            FaqEntry::new(
                "стипендия",
                Ru,
                "Стипендия выплачивается 10 числа каждого месяца. Размер: 50,000 тенге",
            ),
            FaqEntry::new(
                "контакты",
                Ru,
                "Приемная комиссия: +7 (727) 377-33-33, email: info@edugpt.edu.kz",
            ),
            FaqEntry::new(
                "админ",
                Ru,
                "Для добавления FAQ используйте команду /faq_add в админ-панели",
            ),
            FaqEntry::new(
                "сабақ кестесі",
                Kk,
                "Сабақ кестесі e.edugpt.edu.kz сайтындағы жеке кабинетте 'Сабақ кестесі' бөлімінде",
            ),
            FaqEntry::new(
                "емтихан",
                Kk,
                "Емтихан кестесі сессия басталмас бұрын 2 апта бұрын университет сайтында жарияланады",
            ),
            FaqEntry::new(
                "стипендия",
                Kk,
                "Стипендия әр айдың 10-ында төленеді. Мөлшері: 50,000 теңге",
            ),
            FaqEntry::new(
                "байланыс",
                Kk,
                "Қабылдау комиссиясы: +7 (727) 377-33-33, email: info@edugpt.edu.kz",
            ),
        ])
    }

    /// Load a table from a TOML file with `[[entries]]` tables.
    /// File order is kept as lookup order.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read FAQ file: {}", path.display()))?;
        let file: FaqFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse FAQ file: {}", path.display()))?;

        let table = Self::new(file.entries);
        info!("Loaded {} FAQ entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Entries for one language, in lookup order
    pub fn entries(&self, language: Language) -> impl Iterator<Item = &FaqEntry> {
        self.entries.iter().filter(move |e| e.language == language)
    }

    /// First answer whose keyword occurs in the query
    pub fn search(&self, query: &str, language: Language) -> Option<&str> {
        let query = query.trim().to_lowercase();

        let hit = self
            .entries(language)
            .find(|e| query.contains(e.keyword.as_str()));

        if let Some(entry) = hit {
            debug!("FAQ hit on keyword '{}' ({})", entry.keyword, language);
        }
        hit.map(|e| e.answer.as_str())
    }

    /// Like [`FaqTable::search`] but with a raw language code.
    /// Codes that are not supported match nothing.
    #[allow(dead_code)]
    pub fn search_code(&self, query: &str, code: &str) -> Option<&str> {
        let language = code.parse::<Language>().ok()?;
        self.search(query, language)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
