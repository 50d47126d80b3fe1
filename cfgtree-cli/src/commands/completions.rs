//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "cfgtree";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            eprintln!("# Run the following command to enable completions:");

            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   cfgtree completions bash > ~/.local/share/bash-completion/completions/cfgtree"
                    );
                    eprintln!("# Or source it directly in ~/.bashrc:");
                    eprintln!("#   eval \"$(cfgtree completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   cfgtree completions zsh > ~/.zsh/completions/_cfgtree");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   cfgtree completions fish > ~/.config/fish/completions/cfgtree.fish"
                    );
                }
                Shell::PowerShell => {
                    eprintln!("#   cfgtree completions powershell > $PROFILE");
                }
                _ => {}
            }

            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
