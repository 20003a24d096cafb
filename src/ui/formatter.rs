//! Pure formatting functions for UI output.
//!
//! Functions here build the styled lines; [`super::Console`] decides where they go.
//! Only the leading marker is colored so message text stays greppable.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::BumpKind;

/// Name shown in the usage block
pub const PROGRAM_NAME: &str = "semver";

/// Format an error message with a red prefix.
pub fn error_line(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a success message with a green checkmark.
pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn status_line(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format a boundary warning with a yellow warning marker.
pub fn warning_line(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", error_line(message));
}

/// The usage block listing every option token.
///
/// ```text
/// semver [rc|p|m|M|h|q] [description]
///     rc to increment release candidate
///     ...
/// ```
pub fn usage() -> String {
    let tokens: Vec<&str> = BumpKind::ALL.iter().map(|kind| kind.token()).collect();
    let mut text = format!("{} [{}] [description]\n", PROGRAM_NAME, tokens.join("|"));

    for kind in BumpKind::ALL {
        text.push_str(&format!("\t{} {}\n", kind.token(), kind.describe()));
    }
    text.push_str("\t[description] tag description (optional)");
    text
}

/// The current-tag banner shown before the interactive option prompt.
pub fn current_tag_line(current: &str) -> String {
    format!("Current Tag :: {}", style(current).bold())
}

/// The confirmation question for a proposed tag.
pub fn confirmation_prompt(current: &str, next: &str, remote: &str, description: &str) -> String {
    format!(
        "{} --> {}. Confirm tag and push to {}? (description: {}) [y/n]: ",
        current,
        style(next).green(),
        remote,
        description
    )
}

/// How to finish by hand after a push failure left a local tag behind.
pub fn manual_push_instruction(tag: &str, remote: &str) -> String {
    format!(
        "{} Tag {} exists locally. To push it later, run:\n  {}",
        style("→").yellow(),
        tag,
        style(format!("git push {} {}", remote, tag)).cyan()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_token() {
        let text = usage();
        assert!(text.starts_with("semver [rc|p|m|M|h|q] [description]"));
        for kind in BumpKind::ALL {
            assert!(text.contains(&format!("\t{} ", kind.token())));
        }
        assert!(text.contains("M for major"));
        assert!(text.contains("m for minor"));
    }

    #[test]
    fn test_lines_keep_message_text() {
        assert!(error_line("boom").ends_with("boom"));
        assert!(success_line("Tagged v1.0.0").ends_with("Tagged v1.0.0"));
        assert!(status_line("working").ends_with("working"));
    }

    #[test]
    fn test_confirmation_prompt_mentions_remote_and_description() {
        let prompt = confirmation_prompt("v1.0.0", "v1.0.1", "origin", "hotfix");
        assert!(prompt.starts_with("v1.0.0 --> "));
        assert!(prompt.contains("push to origin?"));
        assert!(prompt.contains("(description: hotfix)"));
        assert!(prompt.ends_with("[y/n]: "));
    }

    #[test]
    fn test_manual_push_instruction() {
        let text = manual_push_instruction("v2.0.0", "origin");
        assert!(text.contains("git push origin v2.0.0"));
    }
}
