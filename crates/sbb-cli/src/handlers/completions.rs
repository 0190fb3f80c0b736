//! Shell completion scripts for the `sbb` binary

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::Result;
use clap::CommandFactory;
use std::io::Write;
use tracing::debug;

/// Handle the completions command
pub fn handle_completions<W: Write>(args: CompletionsArgs, out: &mut W) -> Result<()> {
    write_completions(args.shell, out)?;
    out.flush()?;
    Ok(())
}

/// Write the completion script for `shell` into `out`
fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    debug!(shell = ?shell, bin = %bin_name, "Generating completions");

    // generate() panics on write errors, so render into memory first
    let mut script = Vec::new();
    clap_complete::generate(shell.to_clap_shell(), &mut command, bin_name, &mut script);
    out.write_all(&script)?;
    Ok(())
}
