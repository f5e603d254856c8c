// src/main.rs
//
// Calculatrice serveur — point d’entrée
// -------------------------------------
// - CLI (clap)           : --config, --bind, --print-config, -v
// - Configuration        : défauts -> YAML -> CALC_* -> CLI
// - Journal (tracing)    : RUST_LOG prioritaire, sinon -v, sinon log_level
// - HTTP (axum + tokio)  : arrêt propre sur Ctrl-C

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use calculatrice_serveur::app::{self, DernierResultat, ServiceCalcul};
use calculatrice_serveur::config::ConfigServeur;

/// Serveur HTTP d’évaluation d’expressions arithmétiques
#[derive(Parser, Debug)]
#[command(name = "calculatrice-serveur")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address override (ex: 127.0.0.1:8080)
    #[arg(short, long)]
    bind: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/* ------------------------ Journal ------------------------ */

/// Niveau retenu quand RUST_LOG est absent.
fn niveau_journal(verbose: u8, defaut: &str) -> &str {
    match verbose {
        0 => defaut,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn installer_journal(verbose: u8, defaut: &str) {
    let filtre = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(niveau_journal(verbose, defaut)));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .init();
}

/* ------------------------ Arrêt ------------------------ */

async fn signal_arret() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // sans signal, on tourne jusqu’à ce que le processus soit tué
        warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("HTTP server shutting down gracefully");
}

/* ------------------------ Entrée ------------------------ */

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigServeur::charger(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    installer_journal(cli.verbose, &config.log_level);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let addr = config.adresse()?;

    let service = Arc::new(ServiceCalcul::new(Arc::new(DernierResultat::default())));
    let router = app::routeur(service);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(signal_arret())
        .await
        .context("HTTP server failed")
}
