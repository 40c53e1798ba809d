#![deny(missing_docs)]

//! # Repair Pipeline
//!
//! Load -> normalize -> restore state -> restore buttons -> restore import ->
//! append -> write.
//!
//! Each pass is a [`Rewrite`]. The passes never fail: a pass whose anchor is
//! missing returns the content unchanged and reports zero matches.

use crate::error::{AppError, AppResult};
use crate::patcher::{append, blocks, spacing, Patched};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A single text pass over the whole file content.
pub trait Rewrite {
    /// The step this pass implements.
    fn step(&self) -> Step;

    /// Rewrites `source`, reporting how many regions were touched.
    fn rewrite(&self, source: &str) -> Patched;
}

/// The passes of the repair, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Collapse spacing inside `className` values.
    NormalizeSpacing,
    /// Put the state hook declarations back.
    RestoreState,
    /// Put the settings and equalizer buttons back in the footer.
    RestoreFooterButtons,
    /// Rewrite the icon import.
    RestoreIconImport,
    /// Insert the dev icon block before `function App() {`.
    AppendDevIcons,
}

/// Every pass, in pipeline order.
pub const PIPELINE: [Step; 5] = [
    Step::NormalizeSpacing,
    Step::RestoreState,
    Step::RestoreFooterButtons,
    Step::RestoreIconImport,
    Step::AppendDevIcons,
];

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::NormalizeSpacing => "normalize className spacing",
            Step::RestoreState => "restore state declarations",
            Step::RestoreFooterButtons => "restore footer buttons",
            Step::RestoreIconImport => "restore icon import",
            Step::AppendDevIcons => "append dev icons",
        };
        f.write_str(name)
    }
}

impl Rewrite for Step {
    fn step(&self) -> Step {
        *self
    }

    fn rewrite(&self, source: &str) -> Patched {
        match self {
            Step::NormalizeSpacing => spacing::patch_class_spacing(source),
            Step::RestoreState => blocks::patch_state(source),
            Step::RestoreFooterButtons => blocks::patch_footer(source),
            Step::RestoreIconImport => blocks::patch_icon_import(source),
            Step::AppendDevIcons => append::patch_dev_icons(source),
        }
    }
}

/// What one pass found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// The pass.
    pub step: Step,
    /// Regions matched; zero means the pass was a no-op.
    pub matches: usize,
}

impl Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.matches == 0 {
            write!(f, "{}: no match", self.step)
        } else {
            write!(f, "{}: {} match(es)", self.step, self.matches)
        }
    }
}

/// Per-pass outcomes of one run, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// One entry per pass that ran.
    pub outcomes: Vec<StepOutcome>,
    changed: bool,
}

impl PatchReport {
    /// Whether the output differs from the input.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Matches recorded for `step`, if it ran.
    pub fn matches(&self, step: Step) -> Option<usize> {
        self.outcomes
            .iter()
            .find(|o| o.step == step)
            .map(|o| o.matches)
    }

    /// Passes that matched nothing.
    pub fn missed(&self) -> impl Iterator<Item = Step> + '_ {
        self.outcomes
            .iter()
            .filter(|o| o.matches == 0)
            .map(|o| o.step)
    }
}

/// How [`repair_file`] treats the target once the content is repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write the result back over the target, even when nothing changed.
    #[default]
    Overwrite,
    /// Run every pass but leave the file alone.
    DryRun,
}

/// Runs `passes` over `source` in order, each on the previous pass's output.
pub fn run_passes<R: Rewrite>(source: &str, passes: &[R]) -> (String, PatchReport) {
    let mut content = source.to_string();
    let mut outcomes = Vec::with_capacity(passes.len());

    for pass in passes {
        let Patched {
            content: rewritten,
            matches,
        } = pass.rewrite(&content);
        content = rewritten;
        debug!(step = %pass.step(), matches, "pass finished");
        outcomes.push(StepOutcome {
            step: pass.step(),
            matches,
        });
    }

    let changed = content != source;
    (content, PatchReport { outcomes, changed })
}

/// Applies the full repair to in-memory content.
pub fn repair_source(source: &str) -> (String, PatchReport) {
    run_passes(source, &PIPELINE)
}

/// Reads the whole target into memory.
pub fn load(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| AppError::read(path, e))
}

/// Overwrites the target with `content`. No backup is kept.
pub fn write(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content).map_err(|e| AppError::write(path, e))
}

/// Loads `path`, repairs it and, unless `mode` is a dry run, writes it back.
pub fn repair_file(path: &Path, mode: WriteMode) -> AppResult<PatchReport> {
    let content = load(path)?;
    let (repaired, report) = repair_source(&content);

    match mode {
        WriteMode::Overwrite => {
            write(path, &repaired)?;
            info!(path = %path.display(), changed = report.changed(), "target written");
        }
        WriteMode::DryRun => {
            info!(path = %path.display(), changed = report.changed(), "dry run, target left untouched");
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Rewrite for Upper {
        fn step(&self) -> Step {
            Step::NormalizeSpacing
        }

        fn rewrite(&self, source: &str) -> Patched {
            Patched {
                content: source.to_ascii_uppercase(),
                matches: source.chars().filter(|c| c.is_ascii_lowercase()).count(),
            }
        }
    }

    #[test]
    fn test_run_passes_with_custom_rewrite() {
        let (out, report) = run_passes("ab1", &[Upper]);
        assert_eq!(out, "AB1");
        assert!(report.changed());
        assert_eq!(report.matches(Step::NormalizeSpacing), Some(2));
    }

    #[test]
    fn test_pipeline_order() {
        let (_, report) = repair_source("");
        let steps: Vec<Step> = report.outcomes.iter().map(|o| o.step).collect();
        assert_eq!(steps, PIPELINE.to_vec());
        assert_eq!(report.missed().count(), 5);
        assert!(!report.changed());
    }

    #[test]
    fn test_normalized_class_feeds_later_passes() {
        let code = "<div className=\" flex - col \">\nfunction App() {}\n";
        let (out, report) = repair_source(code);
        assert!(out.contains("className=\"flex-col\""));
        assert!(out.contains("___DEV_ICONS___"));
        assert_eq!(report.matches(Step::NormalizeSpacing), Some(1));
        assert_eq!(report.matches(Step::AppendDevIcons), Some(1));
        assert_eq!(report.matches(Step::RestoreIconImport), Some(0));
    }

    #[test]
    fn test_outcome_display() {
        let hit = StepOutcome {
            step: Step::RestoreIconImport,
            matches: 1,
        };
        let miss = StepOutcome {
            step: Step::RestoreState,
            matches: 0,
        };
        assert_eq!(hit.to_string(), "restore icon import: 1 match(es)");
        assert_eq!(miss.to_string(), "restore state declarations: no match");
    }
}
