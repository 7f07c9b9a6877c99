//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Compile audio directories into an inline sound registry
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: soundsprite.toml)
    #[arg(short = 'C', long, global = true, default_value = "soundsprite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Sound directories, replacing `[sound] dirs` (relative to project root)
    #[arg(short, long = "dir", global = true, value_hint = clap::ValueHint::DirPath)]
    pub dirs: Vec<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compile once and write the generated modules
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        compile_args: CompileArgs,

        /// Output directory path (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Also write `use-sound.d.ts`
        #[arg(short = 'D', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        declaration: Option<bool>,
    },

    /// Serve the generated modules over HTTP for development
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        compile_args: CompileArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the symbol IDs of every known sound
    Ids {
        #[command(flatten)]
        compile_args: CompileArgs,

        /// Print as a JSON array
        #[arg(short, long)]
        json: bool,
    },
}

/// Shared compile arguments for every command
#[derive(clap::Args, Debug, Clone)]
pub struct CompileArgs {
    /// Symbol ID pattern, e.g. `sound-[dir]-[name]`
    #[arg(short = 'S', long = "symbol-id")]
    pub symbol_id: Option<String>,

    /// Drop cached entries whose files disappeared
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub prune_stale: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    pub const fn compile_args(&self) -> &CompileArgs {
        match self {
            Self::Build { compile_args, .. }
            | Self::Serve { compile_args, .. }
            | Self::Ids { compile_args, .. } => compile_args,
        }
    }
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_ids(&self) -> bool {
        matches!(self.command, Commands::Ids { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from([
            "soundsprite",
            "serve",
            "--port",
            "9000",
            "--dir",
            "a",
            "--dir",
            "b",
        ]);
        assert!(cli.is_serve());
        assert_eq!(cli.dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
        match cli.command {
            Commands::Serve { port, interface, .. } => {
                assert_eq!(port, Some(9000));
                assert!(interface.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_build_declaration_flag() {
        let cli = Cli::parse_from(["soundsprite", "b", "-D", "false", "-V"]);
        assert!(cli.is_build());
        assert!(cli.command.compile_args().verbose);
        match cli.command {
            Commands::Build { declaration, .. } => assert_eq!(declaration, Some(false)),
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["soundsprite", "ids", "--json"]);
        assert_eq!(cli.config, PathBuf::from("soundsprite.toml"));
        assert!(cli.is_ids());
    }
}
