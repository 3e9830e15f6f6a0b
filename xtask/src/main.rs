#![deny(unsafe_code)]

//! # Overview
//!
//! The `xtask` utility hosts workspace commands that are not part of the
//! shipped library. Its `dist` command packages the WebAssembly build of
//! `md5-wasm` for every JavaScript host with `wasm-pack`: one module tree per
//! flavor under `pkg/` (`web`, `node`, `bundler`, `no-modules`).
//!
//! Invocations follow the conventional `cargo xtask <command>` pattern.
//!
//! # Examples
//!
//! Build all four flavors:
//!
//! ```no_run
//! std::process::Command::new("cargo")
//!     .args(["xtask", "dist"])
//!     .status()
//!     .expect("invoke xtask dist");
//! ```
//!
//! Build only the Node.js flavor with verbose logging:
//!
//! ```no_run
//! std::process::Command::new("cargo")
//!     .args(["xtask", "dist", "--flavor", "nodejs"])
//!     .env("RUST_LOG", "debug")
//!     .status()
//!     .expect("invoke xtask dist for nodejs");
//! ```

mod cli;
mod commands;
mod error;
mod flavor;
mod workspace;

use crate::cli::{Cli, Command};
use crate::commands::dist;
use crate::error::TaskError;
use crate::workspace::workspace_root;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: Cli) -> Result<(), TaskError> {
    let workspace = workspace_root()?;

    match cli.command {
        Command::Dist(args) => {
            let options = dist::DistOptions {
                flavors: args.flavors,
                out_dir: args.out_dir,
                scope: args.scope,
                profile: args.profile,
                wasm_pack: args.wasm_pack,
                sequential: args.sequential,
            };
            dist::execute(&workspace, &options)
        }
    }
}
