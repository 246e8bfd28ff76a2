//! Command-line interface for jsrc
//! Inspects Java source files: package, declared type, generic parameters.
//!
//! Usage:
//!   jsrc package `<path>` [--base] [--suffix `<suffix>`]   - Print the (base) package name
//!   jsrc type `<path>`                                   - Print the unique declared type
//!   jsrc declarations `<path>` [--json]                  - List every type declaration
//!   jsrc generics `<type-name>` [--names]                - Print generic parameters
//!   jsrc strip `<path>`                                  - Print the source without block comments
//!   jsrc write `<path>` [--root `<dir>`] [--overwrite]     - Copy a class below its package path

use clap::{Arg, ArgAction, ArgMatches, Command};
use jsrc::config::{JsrcConfig, Loader};
use jsrc::io::{read_file, WriteResult};
use jsrc::java::classes::{class_file_path, write_class};
use jsrc::java::declarations::type_declarations_in;
use jsrc::java::generics::{extract_generic_types, extract_type_parameter_names};
use jsrc::{extract_base_package_name, extract_package_name, find_unique_type_name, remove_block_comments};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let result = load_config(&matches).and_then(|config| run(&matches, &config));
    if let Err(e) = result {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the Java source file")
            .required(true)
            .index(1)
    };

    Command::new("jsrc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Java source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("package")
                .about("Print the package declared by a source file")
                .arg(path_arg())
                .arg(
                    Arg::new("base")
                        .long("base")
                        .action(ArgAction::SetTrue)
                        .help("Strip the package suffix and print the base package"),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .help("Suffix removed with --base (default: packages.base_suffix)"),
                ),
        )
        .subcommand(
            Command::new("type")
                .about("Print the unique type declared by a source file")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("declarations")
                .about("List every type declaration line in a source file")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as JSON"),
                ),
        )
        .subcommand(
            Command::new("generics")
                .about("Print the generic parameters of a type name, one per line")
                .arg(
                    Arg::new("type-name")
                        .help("Type name, e.g. 'Map<K, V extends Number>'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("names")
                        .long("names")
                        .action(ArgAction::SetTrue)
                        .help("Strip extends/super bounds"),
                ),
        )
        .subcommand(
            Command::new("strip")
                .about("Print a source file with block comments removed")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("write")
                .about("Write a source file below its package directory")
                .arg(path_arg())
                .arg(
                    Arg::new("root")
                        .long("root")
                        .short('r')
                        .help("Content root (default: writing.content_root)"),
                )
                .arg(
                    Arg::new("overwrite")
                        .long("overwrite")
                        .action(ArgAction::SetTrue)
                        .help("Replace an existing file"),
                ),
        )
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<JsrcConfig, Box<dyn Error>> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    if let Some(("write", sub)) = matches.subcommand() {
        if sub.get_flag("overwrite") {
            loader = loader.set_override("writing.overwrite", true)?;
        }
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches, config: &JsrcConfig) -> CliResult {
    match matches.subcommand() {
        Some(("package", sub)) => handle_package_command(sub, config),
        Some(("type", sub)) => handle_type_command(sub),
        Some(("declarations", sub)) => handle_declarations_command(sub),
        Some(("generics", sub)) => handle_generics_command(sub),
        Some(("strip", sub)) => handle_strip_command(sub),
        Some(("write", sub)) => handle_write_command(sub, config),
        _ => unreachable!("subcommand_required is set"),
    }
}

fn source_from(matches: &ArgMatches) -> Result<(PathBuf, String), Box<dyn Error>> {
    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .ok_or("path is required")?;
    let source = read_file(&path)?;
    Ok((path, source))
}

/// Handle the package command
fn handle_package_command(matches: &ArgMatches, config: &JsrcConfig) -> CliResult {
    let (_, source) = source_from(matches)?;
    let package = if matches.get_flag("base") {
        let suffix = matches
            .get_one::<String>("suffix")
            .map(String::as_str)
            .unwrap_or(config.packages.base_suffix.as_str());
        extract_base_package_name(&source, suffix)?
    } else {
        extract_package_name(&source)?
    };
    println!("{}", package);
    Ok(())
}

/// Handle the type command
fn handle_type_command(matches: &ArgMatches) -> CliResult {
    let (_, source) = source_from(matches)?;
    println!("{}", find_unique_type_name(&source)?);
    Ok(())
}

/// Handle the declarations command
fn handle_declarations_command(matches: &ArgMatches) -> CliResult {
    let (_, source) = source_from(matches)?;
    let declarations = type_declarations_in(&remove_block_comments(&source))?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&declarations)?);
        return Ok(());
    }
    for declaration in &declarations {
        let visibility = if declaration.is_public { "public" } else { "non-public" };
        println!("{}\t{}", declaration.name, visibility);
    }
    Ok(())
}

/// Handle the generics command
fn handle_generics_command(matches: &ArgMatches) -> CliResult {
    let type_name = matches
        .get_one::<String>("type-name")
        .ok_or("type name is required")?;
    let parameters = if matches.get_flag("names") {
        extract_type_parameter_names(type_name)
    } else {
        extract_generic_types(type_name)
    };
    for parameter in parameters {
        println!("{}", parameter);
    }
    Ok(())
}

/// Handle the strip command
fn handle_strip_command(matches: &ArgMatches) -> CliResult {
    let (_, source) = source_from(matches)?;
    print!("{}", remove_block_comments(&source));
    Ok(())
}

/// Handle the write command
fn handle_write_command(matches: &ArgMatches, config: &JsrcConfig) -> CliResult {
    let (path, source) = source_from(matches)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("no file name in {}", path.display()))?;
    let root = matches
        .get_one::<String>("root")
        .map(Path::new)
        .unwrap_or(config.writing.content_root.as_path());

    let options = config.writing.write_options();
    match write_class(file_name, &source, root, &options)? {
        WriteResult::Success => {
            println!("{}", class_file_path(root, file_name, &source)?.display());
            Ok(())
        }
        WriteResult::FileAlreadyExists(existing) => Err(format!(
            "{} already exists (use --overwrite)",
            existing.display()
        )
        .into()),
        WriteResult::DirectoryMissing(directory) => {
            Err(format!("directory {} does not exist", directory.display()).into())
        }
        WriteResult::Error { cause, .. } => Err(cause.into()),
    }
}
