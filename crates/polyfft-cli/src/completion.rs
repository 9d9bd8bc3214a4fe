//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell` to `out`.
///
/// The binary name is taken from the command itself.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

/// Render the completion script for `shell` into a string.
#[must_use]
pub fn completion_script(cmd: &mut Command, shell: Shell) -> String {
    let mut buf = Vec::new();
    generate_completion(cmd, shell, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ValueEnum};

    fn command() -> Command {
        Command::new("polyfft")
            .arg(Arg::new("lhs").long("lhs"))
            .arg(Arg::new("rhs").long("rhs"))
    }

    #[test]
    fn every_shell_produces_a_script() {
        for shell in Shell::value_variants() {
            let script = completion_script(&mut command(), *shell);
            assert!(!script.is_empty(), "{shell} produced nothing");
        }
    }

    #[test]
    fn bash_script_completes_flags() {
        let script = completion_script(&mut command(), Shell::Bash);
        assert!(script.contains("polyfft"));
        assert!(script.contains("--lhs"));
    }
}
