use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "phrase-bridge", version, about = "Translate text between languages")]
pub struct Cli {
    /// JSON config file (defaults to $PHRASE_BRIDGE_CONFIG, then environment variables)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text once and print the result
    Translate {
        /// Text to translate; read from stdin when omitted
        text: Option<String>,
        /// Source language name or code
        #[arg(long, short)]
        from: Option<String>,
        /// Target language name or code
        #[arg(long, short)]
        to: Option<String>,
        /// Also save the translation to this file
        #[arg(long)]
        save: Option<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Detect the language of some text
    Detect {
        /// Text to analyze; read from stdin when omitted
        text: Option<String>,
    },
    /// List supported languages
    Languages {
        /// Only languages that can be translated into
        #[arg(long)]
        targets: bool,
        /// Case-insensitive filter
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Check whether the translation service responds
    Check,
    /// Interactive translation session (the default)
    Interactive,
    /// Write the current configuration to a JSON file
    InitConfig {
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_translate_args() {
        let cli = Cli::parse_from([
            "phrase-bridge",
            "translate",
            "hello",
            "--from",
            "English",
            "-t",
            "de",
            "--json",
        ]);

        match cli.command {
            Some(Command::Translate {
                text, from, to, save, json,
            }) => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(from.as_deref(), Some("English"));
                assert_eq!(to.as_deref(), Some("de"));
                assert!(save.is_none());
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::parse_from(["phrase-bridge"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_offline_commands() {
        let cli = Cli::parse_from(["phrase-bridge", "languages", "--targets", "-s", "chin"]);
        match cli.command {
            Some(Command::Languages { targets, search }) => {
                assert!(targets);
                assert_eq!(search.as_deref(), Some("chin"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["phrase-bridge", "--config", "a.json", "init-config", "b.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("a.json")));
        match cli.command {
            Some(Command::InitConfig { path }) => assert_eq!(path, PathBuf::from("b.json")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
