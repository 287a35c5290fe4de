// SPDX-License-Identifier: MIT
//
// tinct — print syntax-highlighted source code to the terminal.
//
// A thin shell over tinct-highlight: flags become `Options`, the file (or
// stdin) goes through the highlighting pipeline, and the styled block goes
// to stdout. Diagnostics go to stderr via tracing, filtered by `TINCT_LOG`.
//
//   tinct src/app.ts
//   tinct --theme github --line-numbers src/main.rs
//   cat page.html | tinct -l html

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tinct_highlight::{themes, Options};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "TINCT_LOG";

#[derive(Parser, Debug)]
#[command(name = "tinct", version)]
#[command(about = "Syntax-highlight source code for the terminal")]
struct Cli {
    /// File to highlight. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Language of the code. Inferred from the file extension when omitted,
    /// `tsx` for stdin.
    #[arg(short, long)]
    language: Option<String>,

    /// Built-in theme name (see --list-themes).
    #[arg(short, long, env = "TINCT_THEME", default_value = themes::DEFAULT)]
    theme: String,

    /// Prefix each line with its line number.
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Spaces on each side of every line.
    #[arg(short, long, default_value_t = 1)]
    padding: usize,

    /// Minimum block width in columns.
    #[arg(long, default_value_t = 0)]
    min_width: usize,

    /// Maximum block width in columns. Defaults to the terminal width.
    #[arg(long)]
    max_width: Option<usize>,

    /// Print the built-in theme names and exit.
    #[arg(long)]
    list_themes: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            language: self.language.clone(),
            theme: self.theme.as_str().into(),
            min_width: self.min_width,
            max_width: self.max_width,
            padding: self.padding,
            line_numbers: self.line_numbers,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();

    if cli.list_themes {
        for name in themes::names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let options = cli.options();
    let output = match &cli.file {
        Some(path) => {
            debug!(path = %path.display(), "highlighting file");
            tinct_highlight::highlight_file_sync(path, &options)
                .with_context(|| format!("could not highlight {}", path.display()))?
        }
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("could not read stdin")?;
            tinct_highlight::highlight(&code, &options).context("could not highlight stdin")?
        }
    };

    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tinct_highlight::ThemeChoice;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::parse_from([
            "tinct",
            "--language",
            "rust",
            "--theme",
            "github",
            "-n",
            "--padding",
            "2",
            "--min-width",
            "10",
            "--max-width",
            "60",
            "main.rs",
        ]);
        let options = cli.options();
        assert_eq!(options.language.as_deref(), Some("rust"));
        assert!(matches!(options.theme, ThemeChoice::Named(ref n) if n == "github"));
        assert!(options.line_numbers);
        assert_eq!(options.padding, 2);
        assert_eq!(options.min_width, 10);
        assert_eq!(options.max_width, Some(60));
        assert_eq!(cli.file, Some(PathBuf::from("main.rs")));
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli = Cli::parse_from(["tinct", "--theme", themes::DEFAULT]);
        let options = cli.options();
        let defaults = Options::default();
        assert_eq!(options.language, defaults.language);
        assert_eq!(options.padding, defaults.padding);
        assert_eq!(options.min_width, defaults.min_width);
        assert_eq!(options.max_width, defaults.max_width);
        assert_eq!(options.line_numbers, defaults.line_numbers);
        assert!(cli.file.is_none());
    }
}
