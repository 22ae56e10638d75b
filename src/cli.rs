// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Defines all subcommands and global flags

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(about = "Read and write notes on a remote note storage service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Service base URL (overrides env/settings file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Settings file (defaults to $XDG_CONFIG_HOME/notekeep/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = parse_timeout)]
    pub timeout_secs: Option<u64>,
}

fn parse_timeout(s: &str) -> Result<u64, String> {
    let secs: u64 = s.parse().map_err(|_| "Invalid timeout value")?;
    if secs == 0 {
        return Err("timeout must be greater than 0".into());
    }
    Ok(secs)
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check that the endpoint is reachable (default)
    Ping,

    /// Print a note
    Read {
        #[arg(long)]
        id: String,

        #[arg(long)]
        password: String,
    },

    /// Create a note and print its server-assigned ID
    Create {
        /// Requested ID (the server may assign another)
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        password: String,

        /// Note text; read from stdin when omitted
        note: Option<String>,
    },

    /// Replace the text of an existing note
    Update {
        #[arg(long)]
        id: String,

        #[arg(long)]
        password: String,

        /// Note text; read from stdin when omitted
        note: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Ping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_valid() {
        assert_eq!(parse_timeout("15").unwrap(), 15);
    }

    #[test]
    fn test_parse_timeout_invalid() {
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("-3").is_err());
    }

    #[test]
    fn test_default_command_is_ping() {
        let cli = Cli::try_parse_from(["notekeep"]).unwrap();
        assert!(matches!(cli.command(), Commands::Ping));
    }

    #[test]
    fn test_parse_create_with_global_flags() {
        let cli = Cli::try_parse_from([
            "notekeep",
            "create",
            "--password",
            "02_+",
            "heyo",
            "--endpoint",
            "http://localhost:69",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:69"));
        match cli.command() {
            Commands::Create { id, password, note } => {
                assert!(id.is_none());
                assert_eq!(password, "02_+");
                assert_eq!(note.as_deref(), Some("heyo"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_read_requires_id() {
        assert!(Cli::try_parse_from(["notekeep", "read", "--password", "pw"]).is_err());
    }
}
