use anyhow::{Context, Result};
use steplist::cli::commands::{CatalogCommand, CheckCommand, InitCommand};
use steplist::cli::output::*;
use steplist::cli::{Cli, Command};
use steplist::core::{audit, catalog, BitriseConfig, ProjectConfig};
use steplist::scaffold;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout carries YAML, so logs go to stderr
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Catalog(cmd) => list_catalog(cmd)?,
        Command::Init(cmd) => init_config(cmd)?,
        Command::Check(cmd) => check_config(cmd)?,
    }

    Ok(())
}

fn list_catalog(cmd: &CatalogCommand) -> Result<()> {
    let entries: Vec<_> = match cmd.category {
        Some(category) => catalog::by_category(category.into()).collect(),
        None => catalog::all().iter().collect(),
    };

    if cmd.json {
        let data: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.step.id,
                    "version": e.step.version,
                    "key": e.step.composite(),
                    "category": e.category,
                    "accepts_inputs": e.accepts_inputs,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{} Catalog steps:", INFO);
    for entry in entries {
        println!("{}", format_catalog_entry(entry));
    }

    Ok(())
}

fn init_config(cmd: &InitCommand) -> Result<()> {
    let project = match (&cmd.file, cmd.platform) {
        (Some(file), _) => ProjectConfig::from_file(file)
            .with_context(|| format!("Failed to load project config {}", file))?,
        (None, Some(platform)) => {
            let mut project = ProjectConfig::new(platform.into());
            project.name = cmd.name.clone();
            project
        }
        (None, None) => anyhow::bail!("Either --file or --platform is required"),
    };
    debug!(?project, "Loaded project");

    let yaml = scaffold::default_config(&project).to_yaml()?;

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &yaml).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("{} Wrote {}", CHECK, style(path).bold());
        }
        None => print!("{}", yaml),
    }

    Ok(())
}

fn check_config(cmd: &CheckCommand) -> Result<()> {
    let config = BitriseConfig::from_file(&cmd.file)
        .with_context(|| format!("Failed to load pipeline definition {}", cmd.file))?;

    let findings = audit::check(&config);

    if cmd.json {
        let data = serde_json::json!({ "findings": findings });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else if findings.is_empty() {
        println!("{} All steps match the catalog", CHECK);
    } else {
        println!("{} {} step reference(s) differ from the catalog:", WARN, findings.len());
        for finding in &findings {
            println!("  {}", format_finding(finding));
        }
    }

    if !findings.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
