use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Args, Parser};

use manifest::{Config, Separator, SeparatorChoice};

/// Maintain a sorted file-list manifest for a build system
///
/// Reads a list of filenames on stdin, sorts it and writes it to OUTPUT
/// only if the sorted content changed. When the content is unchanged but a
/// listed file is newer than OUTPUT, the mtime of OUTPUT is advanced
/// instead, so build rules depending on it re-run.
///
/// EXAMPLE:
///
///   find src -name '*.c' | manifest build/srcs.list
///   find src -name '*.c' -print0 | manifest -0 build/srcs.list
///
/// When no separator is given, stdin is split on automatically-detected
/// line endings (LF, CR, CRLF or LFCR). Input with no line ending is a
/// single filename.
#[derive(Parser, Debug)]
#[command(name = "manifest")]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    separator: SeparatorArgs,

    /// Separator by name; the separator flags take precedence
    #[arg(long = "sep", value_enum, env = "MANIFEST_SEPARATOR")]
    sep: Option<Separator>,

    /// Report what was done to OUTPUT on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Manifest file to maintain
    output: PathBuf,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct SeparatorArgs {
    /// Split on NUL bytes
    #[arg(short = '0', long = "nul")]
    nul: bool,

    /// Split on CR
    #[arg(long)]
    cr: bool,

    /// Split on LF
    #[arg(long)]
    lf: bool,

    /// Split on CRLF
    #[arg(long)]
    crlf: bool,

    /// Split on LFCR
    #[arg(long)]
    lfcr: bool,
}

impl SeparatorArgs {
    /// The flagged separator, falling back to `named`.
    fn choice(&self, named: Option<Separator>) -> SeparatorChoice {
        let flagged = [
            (self.nul, Separator::Nul),
            (self.cr, Separator::Cr),
            (self.lf, Separator::Lf),
            (self.crlf, Separator::CrLf),
            (self.lfcr, Separator::LfCr),
        ]
        .into_iter()
        .find_map(|(set, sep)| set.then_some(sep));
        SeparatorChoice::from(flagged.or(named))
    }
}

impl Cli {
    fn separator(&self) -> SeparatorChoice {
        self.separator.choice(self.sep)
    }

    fn config(&self) -> Config {
        Config::new(&self.output).with_separator(self.separator())
    }
}

/// Rewrite the single-dash separator flags (`-cr`, `-lf`, `-crlf`, `-lfcr`)
/// to their double-dash forms. Arguments after `--` are left alone.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_dashdash = false;
    args.into_iter()
        .map(|arg| {
            if after_dashdash {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_dashdash = true;
                    arg
                }
                Some(flag @ ("-cr" | "-lf" | "-crlf" | "-lfcr")) => {
                    OsString::from(format!("-{flag}"))
                }
                _ => arg,
            }
        })
        .collect()
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();

    let input = manifest::read_input(std::io::stdin().lock())?;
    let outcome = manifest::run(&config, &input)
        .with_context(|| format!("updating manifest {}", config.output().display()))?;

    if cli.verbose {
        eprintln!("{}: {outcome}", config.output().display());
    }
    Ok(())
}

/// Fatal errors print as `manifest: <context>: <cause>...` and exit 1.
/// Usage errors are reported by clap and exit 2.
fn main() -> ExitCode {
    manifest::telemetry::init();

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("manifest: {e:#}");
            ExitCode::FAILURE
        }
    }
}
