// NutriBot Core Entry Point
// Rule-based nutrition coaching brain with a line-oriented chat loop.

mod brain;
mod calculator;
mod chatbot;
mod error;
mod meals;
mod models;
mod nutrition_data;
mod profile_store;
mod prompts;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use chatbot::DietChatbot;
use profile_store::ProfileStore;
use prompts::{DISCLAIMER_TEXT, EXAMPLE_PROMPTS};

fn print_help() {
    println!("Commands: /help, /history, /food <name>, /reset, /quit");
    println!("Try asking, for example:");
    for prompt in EXAMPLE_PROMPTS {
        println!("  - {prompt}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let store = Arc::new(ProfileStore::new());
    let bot = DietChatbot::new(store.clone());

    // One anonymous session per process run.
    let user_id = uuid::Uuid::new_v4().to_string();
    info!(user_id, "starting chat session");

    println!("{}", bot.welcome_message());
    println!("(type /help for commands)\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/reset" => {
                bot.reset_conversation(&user_id);
                println!("Conversation reset. Let's start over!");
            }
            "/history" => {
                for turn in store.history(&user_id) {
                    println!("[{:?}] {}", turn.role, turn.content);
                }
            }
            _ if line.starts_with("/food ") => {
                let key = line["/food ".len()..].trim().to_lowercase().replace(' ', "_");
                println!("{}", nutrition_data::format_food_info(&key));
            }
            message => {
                let (response, needs_disclaimer) = bot.process_message(message, &user_id);
                println!("{response}");
                if needs_disclaimer {
                    println!("\n{DISCLAIMER_TEXT}");
                }
                println!();
            }
        }
    }

    Ok(())
}
