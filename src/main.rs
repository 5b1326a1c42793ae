//! Snippets CLI - store and retrieve snippets of text

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use snippets::commands;
use snippets::config;
use snippets::output::{self, OutputMode};
use snippets::storage::SnippetStore;

#[derive(Parser, Debug)]
#[command(name = "snippets")]
#[command(version)]
#[command(about = "Store and retrieve snippets of text")]
#[command(long_about = r#"
Snippets keeps short named pieces of text in a SQLite table.

Example usage:
  snippets put greeting "hello world"
  snippets get greeting
  snippets get_name "hello world"
  snippets search "%hello%"
  snippets catalog
"#)]
struct Cli {
    /// Path to the database file
    #[arg(short, long, global = true, env = "SNIPPETS_DATABASE")]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log file path ("-" logs to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Store a snippet
    Put {
        /// Name of the snippet
        name: String,

        /// Snippet text
        snippet: String,
    },

    /// Retrieve a snippet
    Get {
        /// Name of the snippet
        name: String,
    },

    /// Retrieve a name
    #[command(name = "get_name", alias = "get-name")]
    GetName {
        /// Snippet text
        snippet: String,
    },

    /// Search snippets with a LIKE pattern ("%term%" for a substring)
    Search {
        /// Term in a snippet text
        term: String,
    },

    /// Catalog all keywords
    Catalog,

    /// Write a default snippets.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let output_mode = OutputMode::from_flag(cli.json);

    if let Err(err) = run(cli) {
        tracing::error!("{:#}", err);
        if output_mode.is_human() {
            snippets::ui::error(&format!("{:#}", err));
        } else if output::emit_error(&format!("{:#}", err)).is_err() {
            snippets::ui::error(&format!("{:#}", err));
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = setup(&cli)?;
    let output_mode = OutputMode::from_flag(cli.json);

    match cli.command {
        Commands::Init { force } => commands::run_init(output_mode, &settings.config_path, force),
        Commands::Put { name, snippet } => with_store(&settings.database, |store| {
            commands::run_put(store, output_mode, &name, &snippet)
        }),
        Commands::Get { name } => {
            with_store(&settings.database, |store| commands::run_get(store, output_mode, &name))
        }
        Commands::GetName { snippet } => with_store(&settings.database, |store| {
            commands::run_get_name(store, output_mode, &snippet)
        }),
        Commands::Search { term } => {
            with_store(&settings.database, |store| commands::run_search(store, output_mode, &term))
        }
        Commands::Catalog => {
            with_store(&settings.database, |store| commands::run_catalog(store, output_mode))
        }
    }
}

/// Paths resolved from flags and the config file
struct Settings {
    config_path: PathBuf,
    database: PathBuf,
}

/// Load the config and install logging.
///
/// Logging is installed before a config error is returned so the failure
/// reaches the log file.
fn setup(cli: &Cli) -> anyhow::Result<Settings> {
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let loaded = match config::load_config(Some(&config_path)) {
        Ok(loaded) => loaded,
        Err(err) => {
            let log_file = config::resolve_log_file(cli.log_file.clone(), None);
            snippets::logging::init(&log_file, cli.verbose)?;
            return Err(err);
        }
    };

    let log_file = config::resolve_log_file(cli.log_file.clone(), loaded.as_ref());
    snippets::logging::init(&log_file, cli.verbose)?;

    if loaded.is_none() && cli.config.is_some() {
        tracing::warn!("Config {} not found, using defaults", config_path.display());
        snippets::ui::warn(&format!("Config {} not found, using defaults", config_path.display()));
    }

    let database = config::resolve_database(cli.database.clone(), loaded.as_ref());
    Ok(Settings { config_path, database })
}

/// Open the store, run one command against it, then close it.
///
/// On error the store is dropped, which closes the connection.
fn with_store<F>(database: &Path, command: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut SnippetStore) -> anyhow::Result<()>,
{
    config::ensure_parent_dir(database)?;
    let mut store = SnippetStore::open(database)?;
    command(&mut store)?;
    store.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("snippets").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_put() {
        let cli = parse(&["put", "foo", "bar"]);
        assert_eq!(
            cli.command,
            Commands::Put { name: "foo".to_string(), snippet: "bar".to_string() }
        );
    }

    #[test]
    fn parses_get_name_with_underscore_and_alias() {
        let expected = Commands::GetName { snippet: "hello world".to_string() };
        assert_eq!(parse(&["get_name", "hello world"]).command, expected);
        assert_eq!(parse(&["get-name", "hello world"]).command, expected);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = parse(&["catalog", "--json", "--database", "x.db", "-v"]);
        assert_eq!(cli.command, Commands::Catalog);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.database, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn put_requires_both_arguments() {
        assert!(Cli::try_parse_from(["snippets", "put", "only-name"]).is_err());
    }

    #[test]
    fn config_error_is_logged_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("snippets.toml");
        let log_path = dir.path().join("logs").join("snippets.log");
        std::fs::write(&config_path, "database = [").unwrap();

        let cli = parse(&[
            "catalog",
            "--config",
            config_path.to_str().unwrap(),
            "--log-file",
            log_path.to_str().unwrap(),
        ]);

        assert!(setup(&cli).is_err());
        assert!(log_path.exists());
    }

    #[test]
    fn store_commands_run_through_with_store() {
        let dir = tempfile::tempdir().unwrap();
        let database = dir.path().join("data").join("snippets.db");

        with_store(&database, |store| commands::run_put(store, OutputMode::Json, "foo", "bar"))
            .unwrap();
        with_store(&database, |store| {
            assert_eq!(store.get("foo")?.as_deref(), Some("bar"));
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
