//! 引数解析
//!
//! clap の builder API でコマンドを組み立て、ドメインの Command に変換する。

use std::io;
use std::path::PathBuf;

use clap::value_parser;
use clap_complete::Shell;

use crate::domain::Command;
use crate::error::Error;

/// 解析結果: 通常のコマンド実行 / 補完スクリプト生成
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Run(Command),
    GenerateCompletion(Shell),
}

pub fn build_cli() -> clap::Command {
    clap::Command::new("yakugo")
        .about("Analyze a term with a generative-language API and keep the results as corpus cards")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            clap::Command::new("analyze")
                .about("Analyze a term and prepend the result to the history")
                .arg(clap::Arg::new("term").required(true).help("Term to analyze"))
                .arg(
                    clap::Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("MODEL")
                        .help("Override the generation model name"),
                )
                .arg(
                    clap::Arg::new("provider")
                        .long("provider")
                        .value_name("NAME")
                        .help("Analysis provider: gemini (default) or echo"),
                ),
        )
        .subcommand(clap::Command::new("list").about("List stored cards, newest first"))
        .subcommand(
            clap::Command::new("show")
                .about("Show one card in full")
                .arg(clap::Arg::new("id").required(true).help("Card id")),
        )
        .subcommand(
            clap::Command::new("delete")
                .about("Delete a card by id")
                .arg(clap::Arg::new("id").required(true).help("Card id")),
        )
        .subcommand(
            clap::Command::new("export")
                .about("Export the history to a dated JSON file")
                .arg(
                    clap::Arg::new("out-dir")
                        .short('o')
                        .long("out-dir")
                        .value_name("DIR")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory to write the export file into (default: current directory)"),
                ),
        )
        .subcommand(
            clap::Command::new("import")
                .about("Merge cards from an exported JSON file into the history")
                .arg(
                    clap::Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file whose top-level value is an array of cards"),
                ),
        )
        .subcommand(
            clap::Command::new("key")
                .about("Manage the stored API key")
                .subcommand_required(true)
                .subcommand(
                    clap::Command::new("set")
                        .about("Store the API key")
                        .arg(clap::Arg::new("value").required(true).help("API key value")),
                )
                .subcommand(clap::Command::new("clear").about("Remove the stored API key"))
                .subcommand(clap::Command::new("status").about("Show whether an API key is stored")),
        )
        .subcommand(
            clap::Command::new("completion")
                .about("Generate a shell completion script")
                .arg(
                    clap::Arg::new("shell")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// プロセス引数を解析する（usage エラーや --help は clap がそのまま処理する）
pub fn parse_args() -> Result<ParseOutcome, Error> {
    outcome_from_matches(&build_cli().get_matches())
}

fn outcome_from_matches(matches: &clap::ArgMatches) -> Result<ParseOutcome, Error> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| Error::invalid_argument("a subcommand is required"))?;
    let outcome = match name {
        "analyze" => ParseOutcome::Run(Command::Analyze {
            term: required_string(sub, "term")?,
            model: sub.get_one::<String>("model").cloned(),
            provider: sub.get_one::<String>("provider").cloned(),
        }),
        "list" => ParseOutcome::Run(Command::List),
        "show" => ParseOutcome::Run(Command::Show {
            id: required_string(sub, "id")?,
        }),
        "delete" => ParseOutcome::Run(Command::Delete {
            id: required_string(sub, "id")?,
        }),
        "export" => ParseOutcome::Run(Command::Export {
            out_dir: sub.get_one::<PathBuf>("out-dir").cloned(),
        }),
        "import" => ParseOutcome::Run(Command::Import {
            file: sub
                .get_one::<PathBuf>("file")
                .cloned()
                .ok_or_else(|| Error::invalid_argument("import requires a file"))?,
        }),
        "key" => match sub.subcommand() {
            Some(("set", key_sub)) => ParseOutcome::Run(Command::KeySet {
                value: required_string(key_sub, "value")?,
            }),
            Some(("clear", _)) => ParseOutcome::Run(Command::KeyClear),
            Some(("status", _)) => ParseOutcome::Run(Command::KeyStatus),
            _ => return Err(Error::invalid_argument("unknown key subcommand")),
        },
        "completion" => {
            let shell = sub
                .get_one::<Shell>("shell")
                .copied()
                .ok_or_else(|| Error::invalid_argument("completion requires a shell"))?;
            ParseOutcome::GenerateCompletion(shell)
        }
        other => return Err(Error::invalid_argument(format!("unknown subcommand: {}", other))),
    };
    Ok(outcome)
}

fn required_string(matches: &clap::ArgMatches, name: &str) -> Result<String, Error> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| Error::invalid_argument(format!("missing required argument: {}", name)))
}

/// 補完スクリプトを stdout へ出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_cli();
    clap_complete::generate(shell, &mut cmd, "yakugo", &mut io::stdout());
}
