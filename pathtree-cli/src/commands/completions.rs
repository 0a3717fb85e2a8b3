//! Shell completion scripts.
//!
//! The script goes to stdout; installation hints go to stderr so the output
//! can be redirected straight into a completions directory.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathtree";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        if let Some(hint) = install_hint(self.shell) {
            eprintln!("# Install with:");
            eprintln!("#   {hint}");
        }
        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some(
            "pathtree completions bash > ~/.local/share/bash-completion/completions/pathtree",
        ),
        Shell::Zsh => Some("pathtree completions zsh > ~/.zsh/completions/_pathtree"),
        Shell::Fish => {
            Some("pathtree completions fish > ~/.config/fish/completions/pathtree.fish")
        }
        Shell::PowerShell => Some("pathtree completions powershell >> $PROFILE"),
        _ => None,
    }
}
