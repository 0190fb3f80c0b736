//! Command handlers for CLI subcommands

mod completions;

pub use completions::handle_completions;

use crate::cli::{BuildArgs, JoinArgs, WrapArgs};
use crate::error::Result;
use crate::output::OutputWriter;
use crate::recipe::Recipe;
use sbb_core::{Builder, Enclosure};
use std::io::Write;
use tracing::info;

/// Handle the build command
pub fn handle_build<W: Write>(args: BuildArgs, output: &OutputWriter, out: &mut W) -> Result<()> {
    info!(recipe = %args.recipe.display(), "Loading recipe");
    let recipe = Recipe::from_file(&args.recipe)?;
    finish(recipe.to_builder(), output, out)
}

/// Handle the join command
pub fn handle_join<W: Write>(args: JoinArgs, output: &OutputWriter, out: &mut W) -> Result<()> {
    let recipe = Recipe::from_tokens(args.seed, &args.tokens)?;
    finish(recipe.to_builder(), output, out)
}

/// Handle the wrap command
pub fn handle_wrap<W: Write>(args: WrapArgs, output: &OutputWriter, out: &mut W) -> Result<()> {
    finish(wrap_all(args.with.into(), &args.separator, &args.values), output, out)
}

fn wrap_all(enclosure: Enclosure, separator: &str, values: &[String]) -> Builder {
    let mut builder = Builder::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 && !separator.is_empty() {
            builder.append(separator);
        }
        builder.wrap(enclosure, value);
    }
    builder
}

fn finish<W: Write>(mut builder: Builder, output: &OutputWriter, out: &mut W) -> Result<()> {
    let fragments = builder.fragments().to_vec();
    let text = builder.build();
    output.write_result(out, &fragments, &text)
}
