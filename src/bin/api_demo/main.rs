//! EduGPT API demo.
//!
//! Calls the REST API of a running EduGPT server one request at a time and
//! then concurrently, printing every outcome, followed by a catalog of
//! request examples and matching `curl` commands.
//!
//! The server address comes from the first argument, then `EDUGPT_API_URL`,
//! then `http://localhost:8000`.

mod client;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::{envelope, ApiClient, DEFAULT_BASE_URL};

// ── Demo data ──────────────────────────────────────────────────────────────────

const BATCH: [(&str, u64); 5] = [
    ("Когда экзамен по математике?", 12345),
    ("Где мое расписание?", 12346),
    ("Сколько стипендия?", 12347),
    ("Контакты приемной комиссии", 12348),
    ("Как добавить FAQ?", 12349),
];

/// A documented request shown in the catalog section
struct ExampleRequest {
    name: &'static str,
    method: &'static str,
    endpoint: &'static str,
    params: Option<Value>,
    body: Option<Value>,
    description: &'static str,
}

fn request_catalog() -> Vec<ExampleRequest> {
    vec![
        ExampleRequest {
            name: "FAQ поиск на русском",
            method: "GET",
            endpoint: "/api/faq/search",
            params: Some(json!({ "query": "расписание", "language": "ru" })),
            body: None,
            description: "Поиск информации о расписании",
        },
        ExampleRequest {
            name: "FAQ поиск на казахском",
            method: "GET",
            endpoint: "/api/faq/search",
            params: Some(json!({ "query": "сабақ кестесі", "language": "kk" })),
            body: None,
            description: "Поиск информации о расписании на казахском",
        },
        ExampleRequest {
            name: "Отправка сообщения студенту",
            method: "POST",
            endpoint: "/api/chat/message",
            params: None,
            body: Some(json!({
                "message": "Когда экзамен по программированию?",
                "user_id": 12345,
                "language": "ru",
            })),
            description: "Отправка сообщения от студента",
        },
        ExampleRequest {
            name: "Отправка сообщения преподавателю",
            method: "POST",
            endpoint: "/api/chat/message",
            params: None,
            body: Some(json!({
                "message": "Как добавить новый FAQ?",
                "user_id": 54321,
                "language": "ru",
                "is_teacher": true,
            })),
            description: "Отправка сообщения от преподавателя",
        },
        ExampleRequest {
            name: "Получение статистики",
            method: "GET",
            endpoint: "/api/analytics/stats",
            params: None,
            body: None,
            description: "Получение общей статистики системы",
        },
    ]
}

fn curl_examples(base_url: &str) -> Vec<(&'static str, String)> {
    vec![
        (
            "Проверка здоровья API",
            format!("curl -X GET {base_url}/api/health"),
        ),
        (
            "Поиск в FAQ",
            format!("curl -X GET '{base_url}/api/faq/search?query=расписание&language=ru'"),
        ),
        (
            "Отправка сообщения",
            format!(
                "curl -X POST {base_url}/api/chat/message \\\n  \
                 -H \"Content-Type: application/json\" \\\n  \
                 -d '{{\"message\": \"Когда экзамен?\", \"user_id\": 12345, \"language\": \"ru\"}}'"
            ),
        ),
        (
            "Получение статистики",
            format!("curl -X GET {base_url}/api/analytics/stats"),
        ),
    ]
}

fn resolve_base_url(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

// ── Sections ───────────────────────────────────────────────────────────────────

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(40));
}

async fn demo_sequential(api: &ApiClient) {
    section("🔄 Демонстрация синхронного API");

    println!("1. Проверка состояния API...");
    println!("   Результат: {}", envelope(&api.health_check().await));

    println!("\n2. Поиск в FAQ...");
    println!(
        "   Результат: {}",
        envelope(&api.search_faq("расписание", "ru").await)
    );

    println!("\n3. Отправка сообщения...");
    println!(
        "   Результат: {}",
        envelope(
            &api.send_message("Когда экзамен по математике?", 12345, "ru")
                .await
        )
    );

    println!("\n4. Получение статистики...");
    println!("   Результат: {}", envelope(&api.get_stats().await));
}

async fn demo_concurrent(api: &ApiClient) {
    section("⚡ Демонстрация асинхронного API");

    println!("Отправляем {} сообщений одновременно...", BATCH.len());
    let results = api.send_messages(&BATCH).await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!("Batch finished: {} ok, {} failed", results.len() - failed, failed);

    for (i, result) in results.iter().enumerate() {
        println!("   Сообщение {}: {}", i + 1, envelope(result));
    }
}

fn demo_catalog() {
    section("📚 Примеры использования API");

    for (i, example) in request_catalog().iter().enumerate() {
        println!("\n{}. {}", i + 1, example.name);
        println!("   Метод: {}", example.method);
        println!("   Endpoint: {}", example.endpoint);
        if let Some(params) = &example.params {
            println!("   Параметры: {params}");
        }
        if let Some(body) = &example.body {
            println!("   Тело запроса: {body}");
        }
        println!("   Описание: {}", example.description);
    }
}

fn demo_curl(base_url: &str) {
    section("🔧 Примеры curl команд");

    for (i, (name, command)) in curl_examples(base_url).iter().enumerate() {
        println!("\n{}. {}", i + 1, name);
        println!("   {command}");
    }
}

// ── Entry point ────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url = resolve_base_url(
        std::env::args().nth(1),
        std::env::var("EDUGPT_API_URL").ok(),
    );
    let api = ApiClient::new(&base_url)?;
    info!("Using API at {}", api.base_url());

    println!("🎓 EduGPT KZ - API Demo Examples");
    println!("\n{}", "=".repeat(50));

    demo_sequential(&api).await;
    demo_concurrent(&api).await;
    demo_catalog();
    demo_curl(api.base_url());

    println!("\n{}", "=".repeat(50));
    println!("✅ Демонстрация завершена!");
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
