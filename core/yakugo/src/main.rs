mod adapter;
mod cli;
mod domain;
mod error;
mod llm;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::process;

use cli::ParseOutcome;
use domain::{Command, CorpusCard};
use error::Error;
use ports::inbound::CommandRunner;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use wiring::App;

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl CommandRunner for Runner {
    fn run(&mut self, command: Command) -> Result<i32, Error> {
        let command_name = command.name();
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result = match command {
            Command::Analyze { term, .. } => {
                let card = self.app.use_case.analyze(&term)?;
                print_card(&card);
                Ok(0)
            }
            Command::List => {
                for card in self.app.use_case.history().cards() {
                    println!(
                        "{}  {}  {}  {}",
                        card.id,
                        format_created_at(card.created_at),
                        card.entry.term,
                        card.entry.meaning
                    );
                }
                Ok(0)
            }
            Command::Show { id } => match self.app.use_case.find(&id) {
                Some(card) => {
                    print_card(card);
                    Ok(0)
                }
                None => Err(Error::io_msg(format!("card not found: {}", id))),
            },
            Command::Delete { id } => {
                if self.app.use_case.remove(&id)? {
                    println!("Deleted: {}", id);
                } else {
                    println!("No card with id: {}", id);
                }
                Ok(0)
            }
            Command::Export { out_dir } => {
                let path = self.app.use_case.export(out_dir.as_deref())?;
                println!("Exported to {}", path.display());
                Ok(0)
            }
            Command::Import { file } => {
                let accepted = self.app.use_case.import(&file)?;
                println!("Imported {} card(s)", accepted);
                Ok(0)
            }
            Command::KeySet { value } => {
                self.app.use_case.set_credential(&value)?;
                println!("API key saved");
                Ok(0)
            }
            Command::KeyClear => {
                self.app.use_case.clear_credential()?;
                println!("API key cleared");
                Ok(0)
            }
            Command::KeyStatus => {
                if self.app.use_case.credential_is_set() {
                    println!("API key: set");
                } else {
                    println!("API key: not set");
                }
                Ok(0)
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("yakugo: {}", e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run() -> Result<i32, Error> {
    let command = match cli::parse_args()? {
        ParseOutcome::GenerateCompletion(shell) => {
            cli::print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::Run(command) => command,
    };

    // provider / model の指定は analyze のみが持つ
    let (provider, model) = match &command {
        Command::Analyze { provider, model, .. } => (provider.clone(), model.clone()),
        _ => (None, None),
    };
    let app = wiring::wire(provider.as_deref(), model)?;
    let mut runner = Runner { app };
    runner.run(command)
}

fn print_card(card: &CorpusCard) {
    println!("Term: {}", card.entry.term);
    println!("Meaning: {}", card.entry.meaning);
    if !card.entry.paraphrases.is_empty() {
        println!("Paraphrases:");
        for group in &card.entry.paraphrases {
            println!("  [{}] {}", group.category, group.words.join(" / "));
        }
    }
    if !card.entry.localization_memo.is_empty() {
        println!("Notes:");
        for memo in &card.entry.localization_memo {
            println!("  - {}", memo);
        }
    }
    if !card.entry.examples.is_empty() {
        println!("Examples:");
        for example in &card.entry.examples {
            println!("  - {}", example);
        }
    }
    if !card.entry.tags.is_empty() {
        println!("Tags: {}", card.entry.tags.join(", "));
    }
    println!("Id: {}  Created: {}", card.id, format_created_at(card.created_at));
}

fn format_created_at(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
