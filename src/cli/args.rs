//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use common::ServerConfig;

/// Task Manager - HTTP CRUD backend for tasks, users and labels
#[derive(Parser, Debug)]
#[command(name = "task-manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command.
///
/// Unset flags keep the values loaded from the environment.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seconds to wait for in-flight requests on shutdown
    #[arg(short, long)]
    pub graceful_timeout: Option<u64>,
}

impl ServeArgs {
    /// Override server settings with the flags that were given.
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(seconds) = self.graceful_timeout {
            server.shutdown_grace_seconds = seconds;
        }
    }
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Drop all tables and re-run every migration, seed included
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::parse_from(["task-manager", "serve", "--port", "9000", "-g", "3"]);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };

        let mut server = ServerConfig::default();
        args.apply(&mut server);
        assert_eq!(server.addr(), "0.0.0.0:9000");
        assert_eq!(server.shutdown_grace_seconds, 3);
    }

    #[test]
    fn parses_migrate_actions() {
        let cli = Cli::parse_from(["task-manager", "-v", "migrate", "status"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
