//! Main workflow orchestration logic
//!
//! Runs one release: read the current tag, pick a bump, confirm, then tag and
//! push. Argument parsing lives in `main.rs`; this module only sees
//! [WorkflowArgs], so the workflow can be driven programmatically and tested
//! against a [crate::git::MockRepository] with scripted input.

use std::io::{BufRead, Write};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{apply_bump, BumpKind, BumpOutcome, VersionTag};
use crate::error::{SemverTagError, Result};
use crate::git::TagRepository;
use crate::ui::{formatter, Console};

/// Arguments for the release workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowArgs {
    /// Option token given on the command line; prompt for one when `None`
    pub option: Option<String>,

    /// Annotation message for the new tag
    pub description: Option<String>,

    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Compute and confirm, but neither tag nor push
    pub dry_run: bool,
}

/// How a run ended. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// The tag was created and pushed
    Tagged { tag: String, remote: String },
    /// Dry run: the tag that would have been created
    DryRun { tag: String },
    /// The operator chose `q`
    Quit,
    /// The operator chose `h`
    Help,
    /// The operator answered `n` at the confirmation
    Declined,
}

/// Why a run stopped without applying anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Quit,
    Help,
    Declined,
}

/// States of a single run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    AwaitingOption,
    Computed { next: VersionTag },
    AwaitingConfirmation { next: VersionTag },
    Applying { next: VersionTag },
    Done { tag: String },
    /// Dry run stopped short of applying
    Previewed { tag: String },
    Aborted(AbortReason),
}

/// Release workflow driver
///
/// Holds everything a run needs; [Workflow::run] walks the state machine
/// from [WorkflowState::AwaitingOption] to `Done` or `Aborted`.
pub struct Workflow<'a, T, R, W> {
    args: &'a WorkflowArgs,
    config: &'a Config,
    repo: &'a T,
    console: &'a mut Console<R, W>,
    current_raw: String,
    current: VersionTag,
}

impl<'a, T, R, W> Workflow<'a, T, R, W>
where
    T: TagRepository,
    R: BufRead,
    W: Write,
{
    /// Discover and parse the current tag.
    ///
    /// A missing or oddly shaped tag is a warning and the run starts from
    /// `v0.0.0`; a failed lookup or a non-numeric component is fatal.
    pub fn new(
        args: &'a WorkflowArgs,
        config: &'a Config,
        repo: &'a T,
        console: &'a mut Console<R, W>,
    ) -> Result<Self> {
        let current_raw = repo
            .latest_tag(&config.tags.pattern)?
            .unwrap_or_default()
            .trim()
            .to_string();

        if let Some(warning) = BoundaryWarning::for_discovered_tag(&current_raw, &config.tags.pattern)
        {
            console.warning(&warning)?;
        }

        let current = VersionTag::parse(&current_raw)?;
        tracing::info!(raw = %current_raw, parsed = %current, "current tag");

        Ok(Workflow {
            args,
            config,
            repo,
            console,
            current_raw,
            current,
        })
    }

    /// The parsed current tag
    pub fn current(&self) -> VersionTag {
        self.current
    }

    /// Current tag as shown to the operator; `v0.0.0` when there is none
    fn current_display(&self) -> String {
        if self.current_raw.is_empty() {
            self.current.format()
        } else {
            self.current_raw.clone()
        }
    }

    fn description(&self) -> &str {
        self.args.description.as_deref().unwrap_or("")
    }

    /// Run the state machine to completion
    pub fn run(mut self) -> Result<WorkflowOutcome> {
        let mut state = WorkflowState::AwaitingOption;

        loop {
            tracing::debug!(?state, "workflow state");
            state = match state {
                WorkflowState::AwaitingOption => self.await_option()?,
                WorkflowState::Computed { next } => self.present(next)?,
                WorkflowState::AwaitingConfirmation { next } => self.await_confirmation(next)?,
                WorkflowState::Applying { next } => self.apply(next)?,
                WorkflowState::Done { tag } => {
                    self.console.success(&format!("Tagged {}", tag))?;
                    return Ok(WorkflowOutcome::Tagged {
                        tag,
                        remote: self.config.remote.name.clone(),
                    });
                }
                WorkflowState::Previewed { tag } => {
                    return Ok(WorkflowOutcome::DryRun { tag });
                }
                WorkflowState::Aborted(reason) => {
                    return Ok(match reason {
                        AbortReason::Quit => WorkflowOutcome::Quit,
                        AbortReason::Help => WorkflowOutcome::Help,
                        AbortReason::Declined => WorkflowOutcome::Declined,
                    });
                }
            };
        }
    }

    fn await_option(&mut self) -> Result<WorkflowState> {
        let kind = match &self.args.option {
            Some(token) => {
                BumpKind::from_token(token).ok_or_else(|| SemverTagError::invalid_option(token))?
            }
            None => {
                let banner = formatter::current_tag_line(&self.current_display());
                self.console.line(&banner)?;
                if self.config.behavior.show_usage {
                    self.console.line(&formatter::usage())?;
                }
                self.console.select_bump_kind()?
            }
        };

        tracing::debug!(%kind, "selected option");
        Ok(match apply_bump(self.current, kind) {
            BumpOutcome::Next(next) => {
                self.console
                    .status(&format!("Incrementing {} version", kind))?;
                WorkflowState::Computed { next }
            }
            BumpOutcome::Quit => WorkflowState::Aborted(AbortReason::Quit),
            BumpOutcome::Help => {
                self.console.line(&formatter::usage())?;
                WorkflowState::Aborted(AbortReason::Help)
            }
        })
    }

    fn present(&mut self, next: VersionTag) -> Result<WorkflowState> {
        tracing::info!(current = %self.current, %next, "computed next tag");
        Ok(WorkflowState::AwaitingConfirmation { next })
    }

    fn await_confirmation(&mut self, next: VersionTag) -> Result<WorkflowState> {
        let next_name = next.format();

        let confirmed = if self.args.assume_yes {
            self.console.status(&format!(
                "{} --> {} (confirmation skipped)",
                self.current_display(),
                next_name
            ))?;
            true
        } else {
            let current = self.current_display();
            let description = self.description().to_string();
            self.console.confirm_tag(
                &current,
                &next_name,
                &self.config.remote.name,
                &description,
            )?
        };

        Ok(if confirmed {
            WorkflowState::Applying { next }
        } else {
            WorkflowState::Aborted(AbortReason::Declined)
        })
    }

    fn apply(&mut self, next: VersionTag) -> Result<WorkflowState> {
        let tag = next.format();
        let remote = self.config.remote.name.clone();

        if self.args.dry_run {
            self.console.status("Dry run:")?;
            self.console
                .success(&format!("  Step 1: would create annotated tag {}", tag))?;
            self.console
                .success(&format!("  Step 2: would push {} to {}", tag, remote))?;
            return Ok(WorkflowState::Previewed { tag });
        }

        self.console.status(&format!("Creating tag: {}", tag))?;
        self.repo.create_annotated_tag(&tag, self.description())?;

        self.console
            .status(&format!("Pushing tag: {} to {}", tag, remote))?;
        if let Err(err) = self.repo.push_tag(&remote, &tag) {
            // The local tag stays; tell the operator how to finish by hand
            self.console
                .line(&formatter::manual_push_instruction(&tag, &remote))?;
            return Err(err);
        }

        Ok(WorkflowState::Done { tag })
    }
}

/// Main release workflow
///
/// Orchestrates the whole run:
/// 1. Discover and parse the latest version tag
/// 2. Take the option from `args` or prompt for it
/// 3. Compute the next tag
/// 4. Confirm with the operator (unless `assume_yes`)
/// 5. Create the annotated tag and push it to the configured remote
///
/// # Returns
/// * `Ok(WorkflowOutcome)` - How the run ended; all outcomes are successful exits
/// * `Err` - Invalid option argument, discovery/parse failure, or a failed tag or push
pub fn run_workflow<T, R, W>(
    args: &WorkflowArgs,
    config: &Config,
    repo: &T,
    console: &mut Console<R, W>,
) -> Result<WorkflowOutcome>
where
    T: TagRepository,
    R: BufRead,
    W: Write,
{
    Workflow::new(args, config, repo, console)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use std::io::Cursor;

    fn run(
        repo: &MockRepository,
        args: WorkflowArgs,
        input: &str,
    ) -> (Result<WorkflowOutcome>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run_workflow(&args, &Config::default(), repo, &mut console);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_workflow_parses_current_tag() {
        let repo = MockRepository::new().with_tag("v0.3.1-rc2");
        let args = WorkflowArgs::default();
        let config = Config::default();
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());

        let workflow = Workflow::new(&args, &config, &repo, &mut console).unwrap();
        assert_eq!(workflow.current(), VersionTag::candidate(0, 3, 1, 2));
    }

    #[test]
    fn test_quit_from_argument_prints_nothing_extra() {
        let repo = MockRepository::new().with_tag("v1.0.0");
        let args = WorkflowArgs {
            option: Some("q".to_string()),
            ..Default::default()
        };

        let (result, output) = run(&repo, args, "");
        assert_eq!(result.unwrap(), WorkflowOutcome::Quit);
        assert!(!output.contains("Current Tag"));
        assert_eq!(repo.tag_names(), vec!["v1.0.0".to_string()]);
    }

    #[test]
    fn test_decline_leaves_repository_untouched() {
        let repo = MockRepository::new().with_tag("v1.0.0");
        let args = WorkflowArgs {
            option: Some("p".to_string()),
            ..Default::default()
        };

        let (result, _) = run(&repo, args, "n\n");
        assert_eq!(result.unwrap(), WorkflowOutcome::Declined);
        assert!(repo.pushed().is_empty());
        assert_eq!(repo.tag_names().len(), 1);
    }

    #[test]
    fn test_dry_run_does_not_apply() {
        let repo = MockRepository::new().with_tag("v1.0.0");
        let args = WorkflowArgs {
            option: Some("M".to_string()),
            assume_yes: true,
            dry_run: true,
            ..Default::default()
        };

        let (result, output) = run(&repo, args, "");
        assert_eq!(
            result.unwrap(),
            WorkflowOutcome::DryRun {
                tag: "v2.0.0".to_string()
            }
        );
        assert!(output.contains("would push v2.0.0 to origin"));
        assert!(repo.tag_message("v2.0.0").is_none());
    }
}
