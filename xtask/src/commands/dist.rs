//! Packaging of the WebAssembly build for every JavaScript host.
//!
//! Each flavor is an independent `wasm-pack build` writing into its own
//! directory, so a failing flavor leaves the others untouched. Cargo's build
//! directory lock serializes the compilation steps that share `target/`.

use crate::cli::Profile;
use crate::error::{map_command_error, TaskError, TaskResult};
use crate::flavor::Flavor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

const INSTALL_HINT: &str = "install it with `cargo install wasm-pack` or set WASM_PACK";

/// Options accepted by the `dist` command.
#[derive(Clone, Debug)]
pub struct DistOptions {
    /// Flavors to build; empty means all.
    pub flavors: Vec<Flavor>,
    /// Output root, relative to the workspace unless absolute.
    pub out_dir: PathBuf,
    /// npm scope of the generated packages.
    pub scope: String,
    /// Build profile.
    pub profile: Profile,
    /// The wasm-pack executable.
    pub wasm_pack: PathBuf,
    /// Build one flavor at a time.
    pub sequential: bool,
}

/// A successfully built flavor.
#[derive(Debug)]
pub struct FlavorBuild {
    pub flavor: Flavor,
    pub out_dir: PathBuf,
    pub elapsed: Duration,
}

/// Builds every requested flavor and reports the outcome of each.
pub fn execute(workspace: &Path, options: &DistOptions) -> TaskResult<()> {
    let flavors = requested_flavors(&options.flavors);
    info!(
        flavors = flavors.len(),
        sequential = options.sequential,
        "building distribution flavors"
    );

    let started = Instant::now();
    let results = build_all(workspace, &flavors, options);
    let elapsed = started.elapsed();

    let mut failed = Vec::new();
    for (flavor, result) in results {
        match result {
            Ok(build) => info!(
                flavor = %build.flavor,
                out_dir = %build.out_dir.display(),
                "built in {:.2}s",
                build.elapsed.as_secs_f64()
            ),
            Err(error) => {
                error!(flavor = %flavor, "build failed: {error}");
                failed.push(flavor);
            }
        }
    }

    if failed.is_empty() {
        info!("all builds finished in {:.2}s", elapsed.as_secs_f64());
        Ok(())
    } else {
        Err(TaskError::FlavorsFailed(failed))
    }
}

fn requested_flavors(flavors: &[Flavor]) -> Vec<Flavor> {
    if flavors.is_empty() {
        return Flavor::ALL.to_vec();
    }
    let mut unique = Vec::with_capacity(flavors.len());
    for &flavor in flavors {
        if !unique.contains(&flavor) {
            unique.push(flavor);
        }
    }
    unique
}

fn build_all(
    workspace: &Path,
    flavors: &[Flavor],
    options: &DistOptions,
) -> Vec<(Flavor, TaskResult<FlavorBuild>)> {
    if options.sequential {
        return flavors
            .iter()
            .map(|&flavor| (flavor, build_flavor(workspace, flavor, options)))
            .collect();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = flavors
            .iter()
            .map(|&flavor| {
                let handle = scope.spawn(move || build_flavor(workspace, flavor, options));
                (flavor, handle)
            })
            .collect();
        handles
            .into_iter()
            .map(|(flavor, handle)| {
                let result = handle
                    .join()
                    .unwrap_or_else(|_| Err(TaskError::Panicked(flavor)));
                (flavor, result)
            })
            .collect()
    })
}

fn build_flavor(workspace: &Path, flavor: Flavor, options: &DistOptions) -> TaskResult<FlavorBuild> {
    let out_dir = workspace.join(&options.out_dir).join(flavor.dir_name());
    fs::create_dir_all(&out_dir).map_err(|source| TaskError::Path {
        path: out_dir.clone(),
        source,
    })?;

    info!(flavor = %flavor, "starting build");
    let started = Instant::now();

    let program = options.wasm_pack.display().to_string();
    let output = Command::new(&options.wasm_pack)
        .current_dir(workspace)
        .arg("build")
        .arg("--out-dir")
        .arg(&out_dir)
        .args(["--target", flavor.target()])
        .args(["--scope", options.scope.as_str()])
        .arg(options.profile.flag())
        .output()
        .map_err(|error| map_command_error(error, &program, INSTALL_HINT))?;

    if !output.status.success() {
        return Err(TaskError::CommandFailed {
            program: format!("{program} build --target {}", flavor.target()),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    if remove_gitignore(&out_dir)? {
        debug!(flavor = %flavor, "removed generated .gitignore");
    }

    Ok(FlavorBuild {
        flavor,
        out_dir,
        elapsed: started.elapsed(),
    })
}

/// Removes the `.gitignore` wasm-pack writes into its output directory.
///
/// Returns whether a file was removed.
pub(crate) fn remove_gitignore(out_dir: &Path) -> TaskResult<bool> {
    let path = out_dir.join(".gitignore");
    match fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(TaskError::Path { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options(wasm_pack: &str) -> DistOptions {
        DistOptions {
            flavors: Vec::new(),
            out_dir: PathBuf::from("pkg"),
            scope: String::from("gogors"),
            profile: Profile::Release,
            wasm_pack: PathBuf::from(wasm_pack),
            sequential: false,
        }
    }

    #[test]
    fn requested_flavors_default_to_all() {
        assert_eq!(requested_flavors(&[]), Flavor::ALL.to_vec());
    }

    #[test]
    fn requested_flavors_drop_duplicates() {
        let flavors = requested_flavors(&[Flavor::Web, Flavor::Bundler, Flavor::Web]);
        assert_eq!(flavors, vec![Flavor::Web, Flavor::Bundler]);
    }

    #[test]
    fn remove_gitignore_tolerates_missing_file() {
        let dir = tempdir().expect("create temp dir");
        assert!(!remove_gitignore(dir.path()).expect("remove succeeds"));
    }

    #[test]
    fn remove_gitignore_deletes_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(".gitignore");
        fs::write(&path, "*\n").expect("write .gitignore");
        assert!(remove_gitignore(dir.path()).expect("remove succeeds"));
        assert!(!path.exists());
    }

    #[test]
    fn missing_wasm_pack_fails_every_flavor() {
        let workspace = tempdir().expect("create temp dir");
        let error = execute(workspace.path(), &options("definitely-not-wasm-pack"))
            .expect_err("build fails");
        assert!(matches!(error, TaskError::FlavorsFailed(ref failed) if failed.len() == 4));

        let error = build_flavor(
            workspace.path(),
            Flavor::Web,
            &options("definitely-not-wasm-pack"),
        )
        .expect_err("build fails");
        assert!(matches!(error, TaskError::ToolMissing(_)));
    }

    #[cfg(unix)]
    #[test]
    fn successful_builds_get_their_own_directories() {
        let workspace = tempdir().expect("create temp dir");
        let stale = workspace.path().join("pkg").join("bundler");
        fs::create_dir_all(&stale).expect("create output dir");
        fs::write(stale.join(".gitignore"), "*\n").expect("write .gitignore");

        execute(workspace.path(), &options("true")).expect("build succeeds");

        for flavor in Flavor::ALL {
            let dir = workspace.path().join("pkg").join(flavor.dir_name());
            assert!(dir.is_dir(), "{flavor} directory exists");
            assert!(!dir.join(".gitignore").exists());
        }
    }

    #[cfg(unix)]
    #[test]
    fn failed_flavor_is_reported() {
        let workspace = tempdir().expect("create temp dir");
        let mut options = options("false");
        options.flavors = vec![Flavor::Nodejs];
        options.sequential = true;

        let error = execute(workspace.path(), &options).expect_err("build fails");
        assert!(matches!(error, TaskError::FlavorsFailed(ref failed) if failed == &[Flavor::Nodejs]));

        let error = build_flavor(workspace.path(), Flavor::Nodejs, &options).expect_err("fails");
        assert!(matches!(error, TaskError::CommandFailed { status, .. } if !status.success()));
    }
}
