//! CLI argument parsing using clap.

use crate::flavor::Flavor;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Workspace commands for md5-wasm.
///
/// Run `cargo xtask <command> --help` for command-specific options.
#[derive(Parser, Debug)]
#[command(name = "cargo xtask")]
#[command(about = "Workspace commands for md5-wasm")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available xtask subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the JavaScript packages for every distribution flavor.
    Dist(DistArgs),
}

/// Cargo profile used by `wasm-pack`.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Profile {
    /// Optimized build (`--release`).
    #[default]
    Release,
    /// Unoptimized build with debug assertions (`--dev`).
    Dev,
    /// Optimized build with debug info (`--profiling`).
    Profiling,
}

impl Profile {
    /// The `wasm-pack build` flag selecting this profile.
    pub const fn flag(self) -> &'static str {
        match self {
            Profile::Release => "--release",
            Profile::Dev => "--dev",
            Profile::Profiling => "--profiling",
        }
    }
}

/// Arguments for the `dist` command.
#[derive(Parser, Debug)]
pub struct DistArgs {
    /// Flavor to build; repeat for several (default: all four).
    #[arg(long = "flavor", value_enum, value_name = "FLAVOR")]
    pub flavors: Vec<Flavor>,

    /// Output root, relative to the workspace; each flavor gets a subdirectory.
    #[arg(long, value_name = "DIR", default_value = "pkg")]
    pub out_dir: PathBuf,

    /// npm scope of the generated packages.
    #[arg(long, default_value = "gogors")]
    pub scope: String,

    /// Build profile.
    #[arg(long, value_enum, default_value = "release")]
    pub profile: Profile,

    /// The wasm-pack executable.
    #[arg(long, value_name = "PROGRAM", env = "WASM_PACK", default_value = "wasm-pack")]
    pub wasm_pack: PathBuf,

    /// Build one flavor at a time instead of concurrently.
    #[arg(long)]
    pub sequential: bool,
}
