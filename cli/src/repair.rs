#![deny(missing_docs)]

//! # Repair Command
//!
//! Loads the target, runs every pass, writes the result back and prints the
//! confirmation line. A pass that finds nothing does not stop the run.

use fixfmt_core::{repair_file, AppResult, WriteMode, CONFIRMATION};
use std::path::Path;
use tracing::debug;

/// Arguments for the repair run.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RepairArgs {
    /// Run every pass and print what matched, without writing the file.
    #[clap(long)]
    pub dry_run: bool,
}

impl RepairArgs {
    fn write_mode(&self) -> WriteMode {
        if self.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Overwrite
        }
    }
}

/// Executes the repair against `target`.
pub fn execute(args: &RepairArgs, target: &Path) -> AppResult<()> {
    debug!(target = %target.display(), dry_run = args.dry_run, "starting repair");

    let report = repair_file(target, args.write_mode())?;

    if args.dry_run {
        for outcome in &report.outcomes {
            println!("{}", outcome);
        }
        println!("Dry run: {:?} left untouched.", target);
    } else {
        println!("{}", CONFIRMATION);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MINIMAL: &str = "function App() {\n  return null\n}\n";

    #[test]
    fn test_execute_rewrites_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        fs::write(&path, MINIMAL).unwrap();

        execute(&RepairArgs::default(), &path).unwrap();

        let new_code = fs::read_to_string(&path).unwrap();
        assert!(new_code.contains("const ___DEV_ICONS___"));
        assert!(new_code.ends_with(MINIMAL));
    }

    #[test]
    fn test_execute_dry_run_keeps_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        fs::write(&path, MINIMAL).unwrap();

        let args = RepairArgs { dry_run: true };
        execute(&args, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), MINIMAL);
    }

    #[test]
    fn test_execute_missing_target_fails() {
        let dir = tempdir().unwrap();
        let res = execute(&RepairArgs::default(), &dir.path().join("nope.tsx"));
        assert!(res.is_err());
    }
}
