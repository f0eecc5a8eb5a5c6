mod logging;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use larder_core::behaviors::{register_update_worker, NoWorkers};
use larder_core::{
    AppConfig, Catalog, ExitCode, HostPage, LarderError, SelectDialog, Selection,
};
use larder_tui::app::App;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "larder",
    about = "Pick foods and recipes from a searchable list",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting LARDER_JSON=1.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the picker and print the chosen consumable.
    Pick {
        /// Catalog file (defaults to the configured one).
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Text typed into the filter before the picker shows.
        #[arg(long)]
        query: Option<String>,
    },

    /// Show which catalog entries a filter text leaves visible.
    Filter {
        query: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show all config values.
    List,
    /// Print the config file location.
    Path,
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    // ── Env var overrides ──────────────────────────────────────────────────
    let json_output = cli.json || std::env::var("LARDER_JSON").as_deref() == Ok("1");

    let command = cli.command.unwrap_or(Commands::Pick {
        catalog: None,
        query: None,
    });

    let _log_guard = if matches!(command, Commands::Pick { .. }) {
        logging::init_file()
    } else {
        logging::init_stderr()
    };

    let config = AppConfig::load()?;

    match command {
        // ── Pick ───────────────────────────────────────────────────────────
        Commands::Pick { catalog, query } => {
            let catalog = load_catalog(&config, catalog.as_deref(), json_output)?;
            let page = HostPage::from_catalog(&catalog, &config.dialog);
            let registration = register_update_worker(&mut NoWorkers, &config.worker);
            debug!(?registration, "update worker");

            let mut app = App::new(config, page);
            app.start_pick(query);

            larder_tui::run_tui(&mut app)?;
            let dur = start.elapsed().as_millis();

            match app.picked() {
                Some(selection) => {
                    info!(id = %selection.id, logged = app.entries.len(), "pick finished");
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":selection,"meta":{"duration_ms":dur}}))?;
                    } else {
                        print_selection(&selection);
                    }
                }
                None => {
                    if json_output {
                        print_json(&serde_json::json!({"status":"error","error":"cancelled","message":"Nothing picked","meta":{"duration_ms":dur}}))?;
                    } else {
                        eprintln!("Nothing picked.");
                    }
                    std::process::exit(ExitCode::Cancelled.code());
                }
            }
        }

        // ── Filter ─────────────────────────────────────────────────────────
        Commands::Filter { query, catalog } => {
            let catalog = load_catalog(&config, catalog.as_deref(), json_output)?;
            let mut dialog = SelectDialog::new(catalog.options());
            dialog.set_filter(&query);
            let view = dialog.view();
            let dur = start.elapsed().as_millis();

            if json_output {
                let items: Vec<_> = view
                    .rows
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "id": row.option.id,
                            "type": row.option.ctype,
                            "name": row.option.name,
                            "url": row.option.url,
                            "visible": !row.hidden,
                            "last_visible": row.last_visible,
                        })
                    })
                    .collect();
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": { "items": items, "visible": view.visible_count(), "query": query },
                    "meta": { "duration_ms": dur }
                }))?;
            } else if view.rows.is_empty() {
                println!("Catalog is empty.");
            } else {
                for row in &view.rows {
                    let shown = if row.hidden { "-" } else { "+" };
                    let marker = if row.last_visible { "last" } else { "" };
                    println!(
                        "{shown} {id:<8}  {kind:<6}  {name:<40}  {marker}",
                        id = row.option.id,
                        kind = row.option.ctype,
                        name = row.option.name,
                    );
                }
                println!("{} of {} visible", view.visible_count(), view.rows.len());
            }
        }

        // ── Config ─────────────────────────────────────────────────────────
        Commands::Config { action } => {
            let dur = start.elapsed().as_millis();
            match action {
                ConfigAction::List => {
                    let kv = config.entries();
                    if json_output {
                        let data: serde_json::Map<String, serde_json::Value> = kv
                            .iter()
                            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.as_str())))
                            .collect();
                        print_json(&serde_json::json!({"status":"ok","data":data,"meta":{"duration_ms":dur}}))?;
                    } else {
                        for (k, v) in &kv {
                            println!("{k} = {v}");
                        }
                    }
                }
                ConfigAction::Path => {
                    let path = AppConfig::config_path();
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":{"path":path,"exists":path.exists()},"meta":{"duration_ms":dur}}))?;
                    } else {
                        println!("{}", path.display());
                    }
                }
            }
        }
    }

    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

fn print_selection(selection: &Selection) {
    println!("id   = {}", selection.id);
    println!("type = {}", selection.ctype);
    println!("name = {}", selection.name);
    println!("url  = {}", selection.url);
}

/// Load the catalog from `path` or the configured location. A missing
/// file exits with the not-found code.
fn load_catalog(config: &AppConfig, path: Option<&Path>, json_output: bool) -> Result<Catalog> {
    let path = path.map_or_else(|| config.catalog_path(), Path::to_path_buf);
    match Catalog::load_from(&path, Utc::now()) {
        Ok(catalog) => {
            debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        Err(LarderError::CatalogNotFound(_)) => {
            if json_output {
                print_json(&serde_json::json!({"status":"error","error":"not_found","message":format!("No catalog at {}", path.display())}))?;
            } else {
                eprintln!("No catalog at {}", path.display());
                eprintln!("  Pass --catalog PATH or set catalog.path in {}", AppConfig::config_path().display());
            }
            std::process::exit(ExitCode::NotFound.code());
        }
        Err(e) => Err(e.into()),
    }
}
