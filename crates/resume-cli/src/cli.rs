//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_api::config::{CORS_ORIGINS_ENV, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV};
use resume_persistence::config::{ARCHIVE_DIR_ENV, DATA_DIR_ENV, DOCUMENT_FILE_ENV};
use resume_persistence::StoreConfig;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Resume editor - edit a structured résumé and keep every saved version
#[derive(Parser, Debug)]
#[command(name = "resume-editor")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the document and its archive
    #[arg(short, long, env = DATA_DIR_ENV, default_value = ".")]
    pub data_dir: String,

    /// Current document file, relative to the data directory
    #[arg(short, long, env = DOCUMENT_FILE_ENV)]
    pub file: Option<String>,

    /// Archive directory, relative to the data directory
    #[arg(short, long, env = ARCHIVE_DIR_ENV)]
    pub archive_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the editor web interface (default)
    Serve {
        /// Host to bind to
        #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind to
        #[arg(short, long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Browser origin allowed to call the API (repeatable; default: any)
        #[arg(long = "cors-origin", env = CORS_ORIGINS_ENV, value_delimiter = ',')]
        cors_origins: Vec<String>,
    },

    /// Print the current document
    Show {
        /// Output format (json, summary)
        #[arg(long, default_value = "json")]
        format: ShowFormat,
    },

    /// List archived versions, newest first
    Versions {
        /// Output format (table, json, brief)
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Show at most this many versions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Replace the current document with the contents of a JSON file
    Import {
        /// Path to the JSON file
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Verify that the current document is readable and well-formed
    Check,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: std::env::var(PORT_ENV)
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins: std::env::var(CORS_ORIGINS_ENV)
                .map(|v| v.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ShowFormat {
    #[default]
    Json,
    Summary,
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the storage configuration from the global options.
    pub fn store_config(&self) -> StoreConfig {
        let mut config = StoreConfig::new(&self.data_dir);
        if let Some(file) = &self.file {
            config = config.with_document_file(file);
        }
        if let Some(dir) = &self.archive_dir {
            config = config.with_archive_dir(dir);
        }
        config
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should work (runs the server)
        let cli = Cli::parse_from(["resume-editor"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["resume-editor", "serve", "--host", "0.0.0.0", "-p", "8080"]);
        match cli.command {
            Some(Commands::Serve { host, port, cors_origins }) => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8080);
                assert!(cors_origins.is_empty());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_cors_origins() {
        let cli = Cli::parse_from([
            "resume-editor",
            "serve",
            "--cors-origin",
            "http://a.test",
            "--cors-origin",
            "http://b.test,http://c.test",
        ]);
        match cli.command {
            Some(Commands::Serve { cors_origins, .. }) => {
                assert_eq!(cors_origins, vec!["http://a.test", "http://b.test", "http://c.test"]);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_versions() {
        let cli = Cli::parse_from(["resume-editor", "versions", "--format", "brief", "-l", "5"]);
        assert_eq!(
            cli.command,
            Some(Commands::Versions {
                format: OutputFormat::Brief,
                limit: Some(5)
            })
        );
    }

    #[test]
    fn test_cli_parse_import() {
        let cli = Cli::parse_from(["resume-editor", "import", "old.json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Import {
                path: PathBuf::from("old.json")
            })
        );
    }

    #[test]
    fn test_cli_store_config() {
        let cli = Cli::parse_from([
            "resume-editor",
            "--data-dir",
            "/srv/cv",
            "--file",
            "cv.json",
            "--archive-dir",
            "history",
            "check",
        ]);
        let config = cli.store_config();
        assert_eq!(config.document_path(), PathBuf::from("/srv/cv/cv.json"));
        assert_eq!(config.archive_path(), PathBuf::from("/srv/cv/history"));
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["resume-editor", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        // Verify help can be generated without panic
        Cli::command().debug_assert();
    }
}
