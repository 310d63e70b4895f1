pub mod console;

/// Inputs that end an interactive session, compared case-insensitively
pub const EXIT_WORDS: [&str; 3] = ["quit", "exit", "выход"];

pub fn is_exit_word(input: &str) -> bool {
    let input = input.to_lowercase();
    EXIT_WORDS.contains(&input.as_str())
}
