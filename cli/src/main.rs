use clap::Parser;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tagenum::Builder;
use tagenum_compiler::{error::TagEnumError, DEFAULT_PACKAGE};

#[derive(Parser)]
#[command(name = "tagenum")]
#[command(about = "Generate enum types from tagged struct declarations", long_about = None)]
struct Cli {
    /// Comma-separated list of type names to generate
    #[arg(short, long, value_delimiter = ',', required = true)]
    types: Vec<String>,

    /// Output file (defaults to `<dir>/enum.rs`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Module wrapping the generated code
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Write the generated code without running rustfmt
    #[arg(long)]
    no_format: bool,

    /// Source directory or files (defaults to the current directory)
    inputs: Vec<PathBuf>,
}

fn main() -> Result<(), TagEnumError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Recorded verbatim in the generated file's provenance comment.
    let invocation = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let cli = Cli::parse();

    let mut builder = Builder::new()
        .types(cli.types)
        .package(cli.package)
        .invocation(invocation)
        .format(!cli.no_format);
    for input in cli.inputs {
        builder = builder.input(input);
    }
    if let Some(output) = cli.output {
        builder = builder.output(output);
    }

    let path = builder.write()?;
    println!("Generated enum code written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_types_list() {
        let cli = Cli::parse_from(["tagenum", "--types", "ColorEnum,Status", "enums"]);
        assert_eq!(cli.types, ["ColorEnum", "Status"]);
        assert_eq!(cli.package, DEFAULT_PACKAGE);
        assert_eq!(cli.inputs, [PathBuf::from("enums")]);
        assert!(cli.output.is_none());
        assert!(!cli.no_format);
    }

    #[test]
    fn test_types_are_required() {
        assert!(Cli::try_parse_from(["tagenum", "enums"]).is_err());
    }

    #[test]
    fn test_package_and_output() {
        let cli = Cli::parse_from([
            "tagenum", "-t", "ColorEnum", "-p", "palette", "-o", "out/colors.rs", "--no-format",
        ]);
        assert_eq!(cli.package, "palette");
        assert_eq!(cli.output, Some(PathBuf::from("out/colors.rs")));
        assert!(cli.no_format);
        assert!(cli.inputs.is_empty());
    }
}
