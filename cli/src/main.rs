//! chardiff: inline character diffs on the command line.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use chardiff_engine::Edit;

mod args;
mod input;

use args::{Cli, Command};

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Diff {
            first,
            second,
            text,
            json,
            max_bytes,
        } => {
            let (old, new) = if text {
                (first, second)
            } else {
                (
                    input::read_text(Path::new(&first), max_bytes)?,
                    input::read_text(Path::new(&second), max_bytes)?,
                )
            };

            let edits = chardiff_engine::diff(&old, &new);
            debug!(
                edits = edits.len(),
                changes = edits.iter().filter(|edit| edit.is_change()).count(),
                "computed edit script"
            );

            println!("{}", format_output(&edits, json)?);
        }
    }

    Ok(())
}

/// Renders the script inline, or as the raw JSON edit list.
fn format_output(edits: &[Edit], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(edits)?)
    } else {
        Ok(chardiff_engine::render(edits))
    }
}

/// Installs a global stderr subscriber filtered by `RUST_LOG`.
fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chardiff_engine::diff;

    #[test]
    fn renders_inline_by_default() {
        let edits = diff("ac", "abc");
        assert_eq!(format_output(&edits, false).unwrap(), "a[+b]c");
    }

    #[test]
    fn json_mode_emits_the_raw_script() {
        let edits = diff("a", "b");
        assert_eq!(
            format_output(&edits, true).unwrap(),
            r#"[{"kind":"Delete","value":"a"},{"kind":"Insert","value":"b"}]"#
        );
    }
}
