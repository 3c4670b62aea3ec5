use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use enumsync_codegen::{CodeGenerator, CodegenError};
use enumsync_spec::{GeneratorConfig, Severity};

mod logging;

#[derive(Parser)]
#[command(
    name = "enumsync",
    about = "Regenerate the InitErrors enum for the managed (C#) and native (C++) sides"
)]
#[command(version)]
struct Cli {
    /// Root directory the output paths are relative to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON config to use instead of the built-in table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = if cli.print_config {
        cmd_print_config(cli.config.as_deref())
    } else {
        cmd_generate(cli.config.as_deref(), &cli.out_dir)
    };

    match result {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

/// Built-in config, or the one at `path`, with a source label for diagnostics.
fn resolve_config(path: Option<&Path>) -> Result<(GeneratorConfig, String)> {
    match path {
        Some(p) => {
            let config = enumsync_spec::load_config(p)
                .with_context(|| format!("Failed to load config '{}'", p.display()))?;
            Ok((config, p.display().to_string()))
        }
        None => Ok((GeneratorConfig::builtin(), "<builtin>".to_string())),
    }
}

fn cmd_print_config(path: Option<&Path>) -> Result<bool> {
    let (config, _) = resolve_config(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(true)
}

fn cmd_generate(config_path: Option<&Path>, out_dir: &Path) -> Result<bool> {
    let (config, source) = resolve_config(config_path)?;
    println!(
        "{} {} ({} members) from {}",
        "Generating".bold(),
        config.type_name,
        config.table.len(),
        source.dimmed()
    );

    let generator = CodeGenerator::new(config, source);
    let generated = match generator.generate() {
        Ok(g) => g,
        Err(CodegenError::InvalidConfig(report)) => {
            for entry in &report.errors {
                let severity_str = match entry.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                println!(
                    "  {} [{}] {} ({}:{})",
                    severity_str,
                    entry.code.dimmed(),
                    entry.message,
                    entry.file.dimmed(),
                    entry.path.dimmed(),
                );
                if let Some(suggestion) = &entry.suggestion {
                    println!("    {} {}", "hint:".cyan(), suggestion);
                }
            }
            eprintln!(
                "{} {} error(s) - nothing was written",
                "✗".red().bold(),
                report.count(Severity::Error)
            );
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    generated
        .write_to_disk(out_dir)
        .with_context(|| format!("Failed to write to '{}'", out_dir.display()))?;

    println!(
        "{} Generated {} file(s) → {}",
        "✓".green().bold(),
        generated.file_count(),
        out_dir.display()
    );
    for file_path in generated.files().keys() {
        println!("  {} {}", "→".dimmed(), file_path);
    }

    Ok(true)
}
