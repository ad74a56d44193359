use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{ArgAction, Parser};
use minic::{
    check_source,
    compiler::{compiler::generate_to_string, stdlib::write_runtime},
    render_error,
    source::source::SourceUnit,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Compiles one minic source file to C.
#[derive(Debug, Parser)]
#[command(name = "minic", version, about = "Compiles minic source files to C")]
struct Cli {
    /// Source file to compile
    input: PathBuf,

    /// Where to write the generated C (defaults to the input with a `.c` extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop after type checking, write nothing
    #[arg(long)]
    check: bool,

    /// Also write minic.h and minic.c next to the output
    #[arg(long)]
    emit_runtime: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "minic=warn",
        1 => "minic=info",
        2 => "minic=debug",
        _ => "minic=trace",
    }
}

fn source_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

fn run(cli: &Cli) -> Result<(), ExitCode> {
    let start = Instant::now();

    let text = fs::read_to_string(&cli.input).map_err(|err| {
        error!(path = %cli.input.display(), "failed to read input: {}", err);
        ExitCode::from(2)
    })?;

    let mut source = SourceUnit::new(text, source_name(&cli.input));
    let program = match check_source(&mut source) {
        Ok(program) => program,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            return Err(ExitCode::FAILURE);
        }
    };

    info!(elapsed = ?start.elapsed(), "checked {}", source.name());

    if cli.check {
        return Ok(());
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("c"));

    if output_path == cli.input {
        error!(path = %output_path.display(), "refusing to overwrite the input file");
        return Err(ExitCode::from(2));
    }

    let generated = generate_to_string(&program).map_err(|_| {
        error!("failed to format generated C");
        ExitCode::FAILURE
    })?;

    fs::write(&output_path, generated).map_err(|err| {
        error!(path = %output_path.display(), "failed to write output: {}", err);
        ExitCode::from(2)
    })?;

    info!(path = %output_path.display(), elapsed = ?start.elapsed(), "wrote C output");

    if cli.emit_runtime {
        let directory = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        write_runtime(&directory).map_err(|err| {
            error!(path = %directory.display(), "failed to write runtime: {}", err);
            ExitCode::from(2)
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_verbosity() {
        assert_eq!(directive_for_verbosity(0), "minic=warn");
        assert_eq!(directive_for_verbosity(1), "minic=info");
        assert_eq!(directive_for_verbosity(2), "minic=debug");
        assert_eq!(directive_for_verbosity(7), "minic=trace");
    }

    #[test]
    fn test_source_name_is_the_file_name() {
        assert_eq!(source_name(Path::new("programs/dir/main.mc")), "main.mc");
        assert_eq!(source_name(Path::new("main.mc")), "main.mc");
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["minic", "main.mc", "-o", "out.c", "--emit-runtime", "-vv"]);

        assert_eq!(cli.input, PathBuf::from("main.mc"));
        assert_eq!(cli.output, Some(PathBuf::from("out.c")));
        assert!(cli.emit_runtime);
        assert!(!cli.check);
        assert_eq!(cli.verbose, 2);
    }
}
