//! Command handlers for CLI subcommands.

use std::fmt::Write;
use std::path::Path;

use resume_api::config::CorsPolicy;
use resume_api::{serve, ApiConfig, AppState};
use resume_models::{parse, serialize, ResumeDocument};
use resume_persistence::{DocumentRepository, StoreConfig, VersionRecord};
use tracing::info;

use crate::cli::{Commands, OutputFormat, ShowFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(command: Commands, store: &StoreConfig) -> Result<()> {
    let repo = DocumentRepository::from_config(store);

    match command {
        Commands::Serve {
            host,
            port,
            cors_origins,
        } => cmd_serve(repo, &host, port, cors_origins),
        Commands::Show { format } => cmd_show(&repo, format),
        Commands::Versions { format, limit } => cmd_versions(&repo, format, limit),
        Commands::Import { path } => cmd_import(&repo, &path),
        Commands::Check => cmd_check(&repo),
    }
}

fn cmd_serve(repo: DocumentRepository, host: &str, port: u16, cors_origins: Vec<String>) -> Result<()> {
    let config = ApiConfig::new(host, port).with_cors(CorsPolicy::from_origins(cors_origins));

    println!("Resume Editor");
    println!("  Open in browser: {}", config.url());
    println!("  Editing file:    {}", repo.path().display());
    println!("  Backups saved to: {}", repo.version_store().dir().display());
    println!("\nPress Ctrl+C to stop the server");

    let state = AppState::new(config.clone(), repo);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config, state))?;
    Ok(())
}

fn cmd_show(repo: &DocumentRepository, format: ShowFormat) -> Result<()> {
    let doc = repo.load()?;
    match format {
        ShowFormat::Json => println!("{}", String::from_utf8(serialize(&doc)?)?),
        ShowFormat::Summary => print!("{}", summarize(&doc)),
    }
    Ok(())
}

fn cmd_versions(repo: &DocumentRepository, format: OutputFormat, limit: Option<usize>) -> Result<()> {
    let mut records = repo.versions()?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    match format {
        OutputFormat::Table => print!("{}", format_versions_table(&records)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Brief => {
            for record in &records {
                println!("{}", record.file_name);
            }
        }
    }
    Ok(())
}

fn cmd_import(repo: &DocumentRepository, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let doc = parse(&bytes).map_err(|e| format!("{}: {}", path.display(), e))?;

    info!(source = %path.display(), target = %repo.path().display(), "Importing document");
    let archived = repo.save(&doc)?;

    println!("Imported {} into {}", path.display(), repo.path().display());
    if let Some(record) = archived {
        println!("  Previous version archived as {}", record.file_name);
    }
    Ok(())
}

fn cmd_check(repo: &DocumentRepository) -> Result<()> {
    if !repo.exists() {
        println!(
            "No document at {}; the editor will start from an empty résumé.",
            repo.path().display()
        );
        return Ok(());
    }

    let doc = repo.load()?;
    let versions = repo.versions()?.len();
    println!("{} is well-formed", repo.path().display());
    print!("{}", summarize(&doc));
    println!("  Archived versions: {}", versions);
    Ok(())
}

/// Formats a short human-readable summary of a document.
pub fn summarize(doc: &ResumeDocument) -> String {
    let name = if doc.profile.name.is_empty() {
        "(no name)"
    } else {
        doc.profile.name.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", name);
    if !doc.profile.title.is_empty() {
        let _ = writeln!(out, "  {}", doc.profile.title);
    }
    let _ = writeln!(out, "  Skill groups: {}", doc.skills.len());
    let _ = writeln!(out, "  Positions:    {}", doc.experience.len());
    let _ = writeln!(out, "  Achievements: {}", doc.achievements.len());
    out
}

/// Formats archived versions as a table.
pub fn format_versions_table(records: &[VersionRecord]) -> String {
    if records.is_empty() {
        return "No archived versions.\n".to_string();
    }

    let width = records
        .iter()
        .map(|r| r.file_name.len())
        .max()
        .unwrap_or(0)
        .max("FILE".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {:<19}  {:>8}", "FILE", "SAVED", "BYTES");
    for record in records {
        let _ = writeln!(
            out,
            "{:<width$}  {:<19}  {:>8}",
            record.file_name,
            record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.size_bytes,
        );
    }
    out
}
