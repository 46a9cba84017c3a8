//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Customer API - customer management with JWT authentication
#[derive(Parser, Debug)]
#[command(name = "customer-api")]
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

    /// Manage login accounts
    Users(UsersArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
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
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Account management actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Create a login account
    Create {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password (minimum 8 characters)
        #[arg(short, long, env = "NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,

        /// Granted authority; repeat for several (defaults to ROLE_USER)
        #[arg(short, long = "authority")]
        authorities: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["customer-api", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_users_create_with_authorities() {
        let cli = Cli::try_parse_from([
            "customer-api",
            "users",
            "create",
            "--username",
            "admin",
            "--password",
            "SecurePass123!",
            "--authority",
            "ROLE_USER",
            "--authority",
            "ROLE_ADMIN",
        ])
        .unwrap();

        match cli.command {
            Commands::Users(UsersArgs {
                action:
                    UsersAction::Create {
                        username,
                        authorities,
                        ..
                    },
            }) => {
                assert_eq!(username, "admin");
                assert_eq!(authorities, vec!["ROLE_USER", "ROLE_ADMIN"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_status() {
        let cli = Cli::try_parse_from(["customer-api", "-v", "migrate", "status"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
