//! phonebook CLI entrypoint

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell as ClapShell};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use phonebook::{
    build_schema, server, Config, HttpPersonSource, MemoryStore, PersonSource, PhonebookSchema,
    Store,
};

mod cli;
use cli::*;

// ══════════════════════════════════════════════════════════════════════════════
// UTILITIES
// ══════════════════════════════════════════════════════════════════════════════

/// Defaults, then the config file, then flags and env vars
fn effective_config(global: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load(global.config.as_deref().map(Path::new))?;

    if let Some(level) = global.log_level {
        config.log.level = level.as_str().to_string();
    }
    if let Some(url) = &global.upstream {
        config.upstream.url = url.clone();
    }
    if let Some(secs) = global.upstream_timeout {
        config.upstream.timeout_secs = secs;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).map_err(|e| anyhow!("Invalid log level {:?}: {}", level, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn schema_from_config(config: &Config) -> Result<PhonebookSchema> {
    let store: Arc<dyn Store> = Arc::new(MemoryStore::seeded());
    let source: Arc<dyn PersonSource> = Arc::new(HttpPersonSource::new(
        config.upstream.url.clone(),
        config.upstream.timeout(),
    )?);
    Ok(build_schema(store, source))
}

fn read_document(arg: String) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path)),
        None => Ok(arg),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// MAIN
// ══════════════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = effective_config(&cli.global)?;
    init_logging(&config.log.level)?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            handle_serve_command(&config).await?;
        }

        Commands::Schema { output } => {
            let sdl = schema_from_config(&config)?.sdl();
            if output == "-" {
                println!("{}", sdl);
            } else {
                std::fs::write(&output, sdl)?;
                println!("Schema written to {}", output);
            }
        }

        Commands::Query {
            query,
            variables,
            operation,
            pretty,
        } => {
            handle_query_command(&config, query, variables, operation, pretty).await?;
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => print!("{}", config.to_toml()?),
        },

        Commands::Completions { shell } => {
            let shell = match shell {
                Shell::Bash => ClapShell::Bash,
                Shell::Zsh => ClapShell::Zsh,
                Shell::Fish => ClapShell::Fish,
                Shell::Elvish => ClapShell::Elvish,
                Shell::PowerShell => ClapShell::PowerShell,
            };
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "phonebook", &mut std::io::stdout());
        }
    }

    Ok(())
}

// ══════════════════════════════════════════════════════════════════════════════
// HANDLERS
// ══════════════════════════════════════════════════════════════════════════════

async fn handle_serve_command(config: &Config) -> Result<()> {
    let schema = schema_from_config(config)?;
    let addr = config.server.addr();

    tracing::info!(upstream = %config.upstream.url, "allPersons reads from upstream");
    println!("GraphQL server running at http://{}/graphql", addr);
    println!("GraphiQL playground at http://{}/graphql", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    server::serve(listener, schema).await?;
    Ok(())
}

async fn handle_query_command(
    config: &Config,
    query: String,
    variables: Option<String>,
    operation: Option<String>,
    pretty: bool,
) -> Result<()> {
    let schema = schema_from_config(config)?;

    let mut request = async_graphql::Request::new(read_document(query)?);
    if let Some(vars) = variables {
        let vars: serde_json::Value = serde_json::from_str(&vars).context("Variables must be JSON")?;
        request = request.variables(async_graphql::Variables::from_json(vars));
    }
    if let Some(op) = operation {
        request = request.operation_name(op);
    }

    let response = schema.execute(request).await;
    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}
