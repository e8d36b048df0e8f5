use clap::{Args, Parser, Subcommand, ValueEnum};

// ══════════════════════════════════════════════════════════════════════════════
// GLOBAL OPTIONS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GraphQL API over a small set of contact records")]
#[command(long_about = r#"
phonebook serves a GraphQL schema for contact records (name, phone, address).

Mutations and `findPerson` act on an in-memory store seeded with three
records. `allPersons` reads from a separate upstream HTTP source that
returns a JSON array of records.

EXAMPLES:
  # Start the server
  phonebook serve --port 4000

  # Print the schema
  phonebook schema

  # Run a query against a fresh seeded store
  phonebook query '{ findPerson(name: "Nicolas") { phone address { city } } }'

ENVIRONMENT VARIABLES:
  PHONEBOOK_CONFIG     Config file path (TOML)
  PHONEBOOK_LOG        Log filter (trace, debug, info, warn, error)
  PHONEBOOK_HOST       Server host (default: 127.0.0.1)
  PHONEBOOK_PORT       Server port (default: 4000)
  PHONEBOOK_UPSTREAM   Upstream record list URL
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "PHONEBOOK_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log level (overrides the config file)
    #[arg(short, long, env = "PHONEBOOK_LOG", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Upstream record list URL used by `allPersons`
    #[arg(short, long, env = "PHONEBOOK_UPSTREAM", global = true)]
    pub upstream: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, global = true)]
    pub upstream_timeout: Option<u64>,
}

// ══════════════════════════════════════════════════════════════════════════════
// VALUE ENUMS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Elvish,
    PowerShell,
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMANDS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    #[command(visible_alias = "srv")]
    Serve {
        /// Host to bind
        #[arg(long, env = "PHONEBOOK_HOST")]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long, env = "PHONEBOOK_PORT")]
        port: Option<u16>,
    },

    /// Print the schema in SDL form
    Schema {
        /// Output file (- for stdout)
        #[arg(default_value = "-")]
        output: String,
    },

    /// Execute a query or mutation against a fresh seeded store
    #[command(visible_alias = "q")]
    Query {
        /// Document text, or @path to read it from a file
        query: String,

        /// Variables as a JSON object
        #[arg(short, long)]
        variables: Option<String>,

        /// Operation to run when the document has several
        #[arg(short, long)]
        operation: Option<String>,

        /// Pretty print the response
        #[arg(short, long)]
        pretty: bool,
    },

    /// Configuration management
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}
