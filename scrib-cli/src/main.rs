// Command-line interface for scrib
//
// This binary provides commands for inspecting and converting scrib files.
//
// The main role of the scrib program is to interface with scrib content:
// converting it to other formats or inspecting how it parses. The core
// capabilities use the scrib-babel crate; this crate is a shell around that
// library plus configuration loading from scrib-config.
//
// Converting:
//
// The conversion needs a from/to pair. The from is auto-detected from the file
// extension (falling back to scrib), the to defaults from configuration, and
// both are overridable with explicit flags.
// Usage:
//  scrib <input> [--to <format>] [--from <format>] [--output <file>]  - Convert between formats (default)
//  scrib convert <input> ...             - Same as above (explicit)
//  scrib inspect <path> [<transform>]    - Execute a transform (defaults from config)
//  scrib --list-transforms               - List available transforms
//  scrib --list-formats                  - List registered formats

use scrib_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use scrib_babel::FormatRegistry;
use scrib_config::{Loader, ScribConfig};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn convert_args() -> Vec<Arg> {
    vec![
        Arg::new("input")
            .help("Path to the input file")
            .index(1)
            .value_hint(ValueHint::FilePath),
        Arg::new("to")
            .long("to")
            .value_name("FORMAT")
            .help("Output format (defaults from configuration)"),
        Arg::new("from")
            .long("from")
            .value_name("FORMAT")
            .help("Input format (defaults from the file extension)"),
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write to a file instead of stdout")
            .value_hint(ValueHint::FilePath),
    ]
}

fn build_cli() -> Command {
    Command::new("scrib")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting scrib files")
        .long_about(
            "scrib is a command-line tool for working with scrib notation files.\n\n\
            Commands:\n  \
            - inspect: View internal representations (symbol tree, JSON)\n  \
            - convert: Transform scrib into other formats (markdown, treeviz)\n\n\
            Examples:\n  \
            scrib inspect notes.scrib               # View symbol tree visualization\n  \
            scrib inspect notes.scrib ast-json      # View symbol tree as JSON\n  \
            scrib notes.scrib --to markdown         # Convert to markdown (stdout)\n  \
            scrib notes.scrib -o notes.md           # Convert to a file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List registered formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a scrib.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .args(convert_args())
        .subcommand(
            Command::new("convert")
                .about("Convert scrib files between formats")
                .args(convert_args()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of scrib files")
                .arg(
                    Arg::new("path")
                        .help("Path to the scrib file")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (e.g., 'ast-treeviz', 'ast-json')")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-transforms") {
        for transform in transforms::AVAILABLE_TRANSFORMS {
            println!("{transform}");
        }
        return ExitCode::SUCCESS;
    }

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        for name in registry.list_formats() {
            match registry.get(&name) {
                Ok(format) => println!("{name}: {}", format.description()),
                Err(_) => println!("{name}"),
            }
        }
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&matches, &registry) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("scrib: {message}");
            return ExitCode::FAILURE;
        }
    };

    let result = match matches.subcommand() {
        Some(("inspect", sub)) => run_inspect(sub, &config),
        Some(("convert", sub)) => run_convert(sub, &config, &registry),
        _ => run_convert(&matches, &config, &registry),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("scrib: {message}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(matches: &ArgMatches, registry: &FormatRegistry) -> Result<ScribConfig, String> {
    let mut loader = Loader::new();
    match matches.get_one::<String>("config") {
        Some(path) => loader = loader.with_file(Path::new(path)),
        // conventional location, skipped when absent
        None => loader = loader.with_file(Path::new("scrib.toml")),
    }
    let config = loader.load().map_err(|e| format!("config: {e}"))?;
    config
        .validate(registry)
        .map_err(|e| format!("config: {e}"))?;
    Ok(config)
}

fn run_convert(
    matches: &ArgMatches,
    config: &ScribConfig,
    registry: &FormatRegistry,
) -> Result<(), String> {
    let Some(input) = matches.get_one::<String>("input") else {
        return Err("no input file given (see --help)".to_string());
    };
    let source = fs::read_to_string(input).map_err(|e| format!("{input}: {e}"))?;

    let from = match matches.get_one::<String>("from") {
        Some(from) => from.clone(),
        None => registry
            .detect_format_from_filename(input)
            .unwrap_or_else(|| "scrib".to_string()),
    };
    let to = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.convert.to.clone());

    let doc = registry.parse(&source, &from).map_err(|e| e.to_string())?;
    let rendered = registry.serialize(&doc, &to).map_err(|e| e.to_string())?;

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, rendered).map_err(|e| format!("{path}: {e}"))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_inspect(matches: &ArgMatches, config: &ScribConfig) -> Result<(), String> {
    let Some(path) = matches.get_one::<String>("path") else {
        return Err("no input file given (see --help)".to_string());
    };
    let source = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;

    let transform = matches
        .get_one::<String>("transform")
        .cloned()
        .unwrap_or_else(|| config.inspect.transform.clone());

    let output = transforms::execute_transform(&source, &transform)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
