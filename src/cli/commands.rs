use clap::{Parser, Subcommand};
use std::str::FromStr;

/// Project file format for commands that write or print configuration
#[derive(Debug, Clone, Copy)]
pub enum FormatArg {
    Toml,
    Json,
}

impl FromStr for FormatArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(FormatArg::Toml),
            "json" => Ok(FormatArg::Json),
            _ => Err(format!("Invalid format: {s}. Valid options: toml, json")),
        }
    }
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatArg::Toml => write!(f, "toml"),
            FormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "chainsmith")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "init", about = "Create a project file with the built-in configuration")]
    Init {
        #[arg(long = "format", help = "Project file format (toml, json)")]
        format: Option<FormatArg>,
        #[arg(long = "force", help = "Overwrite an existing project file")]
        force: bool,
    },
    #[command(name = "show", about = "Print the resolved project configuration")]
    Show {
        #[arg(long = "format", help = "Output format (toml, json)")]
        format: Option<FormatArg>,
    },
    #[command(name = "networks", about = "List network profiles")]
    Networks,
    #[command(name = "compilers", about = "List compiler pins")]
    Compilers,
    #[command(name = "getnetwork", about = "Print a single network profile")]
    GetNetwork {
        #[arg(help = "The network profile name")]
        name: String,
    },
    #[command(name = "check", about = "Check the configuration for authoring defects")]
    Check,
    #[command(name = "addnetwork", about = "Add or replace a network profile")]
    AddNetwork {
        #[arg(help = "The network profile name")]
        name: String,
        #[arg(help = "Hostname or IP literal of the node")]
        host: String,
        #[arg(help = "TCP port of the node (1-65535)")]
        port: u16,
        #[arg(help = "Gas limit per operation")]
        gas: u64,
        #[arg(help = "Network id to accept ('*' accepts any)")]
        network_id: String,
    },
    #[command(name = "setcompiler", about = "Add or replace a compiler pin")]
    SetCompiler {
        #[arg(help = "The compiler name (e.g. solc)")]
        name: String,
        #[arg(help = "Version constraint (e.g. '^0.5.0')")]
        version: String,
    },
}
