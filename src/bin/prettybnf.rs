//! Command-line interface for prettybnf
//! This binary checks, reformats and inspects grammar files.
//!
//! Usage:
//!   prettybnf check `<path>`                        - Parse a grammar and report errors
//!   prettybnf format `<path>` [--check]             - Print the canonical form of a grammar
//!   prettybnf inspect `<path>` [--format `<name>`]  - Print a grammar in another format
//!   prettybnf list-formats                        - List all available formats
//!
//! A path of `-` reads the grammar from stdin. Settings come from the built-in
//! defaults, then `./prettybnf.toml` if present, then `--config <file>`, then flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use prettybnf::bnf::formats::{FormatRegistry, TreevizFormatter};
use prettybnf::bnf::loader::{GrammarLoader, LoadError, TrailingInputWarning};
use prettybnf::bnf::parsing::ParseOptions;
use prettybnf::{stringify, Grammar};
use prettybnf_config::{Loader, PrettyBnfConfig};

const LOCAL_CONFIG: &str = "prettybnf.toml";

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the grammar file ('-' for stdin)")
        .required(true)
        .index(1)
}

fn build_cli() -> Command {
    Command::new("prettybnf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking, formatting and inspecting BNF grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .help("Reject anything but whitespace after the last production")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .help("Only print errors (no success messages or warnings)")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a grammar and report the first syntax error")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Print the canonical form of a grammar")
                .arg(path_arg())
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Exit with an error if the file is not already canonical")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print a grammar in one of the registered formats")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'tag', 'json'); see list-formats"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    let matches = build_cli().get_matches();
    let config = load_config(&matches);
    let quiet = matches.get_flag("quiet");

    let loader = GrammarLoader::with_options(ParseOptions {
        strict: config.parsing.strict,
    });

    match matches.subcommand() {
        Some(("check", sub)) => handle_check_command(&loader, path_of(sub), quiet),
        Some(("format", sub)) => {
            handle_format_command(&loader, path_of(sub), sub.get_flag("check"), quiet)
        }
        Some(("inspect", sub)) => {
            let format = sub
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.inspect.format.clone());
            handle_inspect_command(&loader, path_of(sub), &format, &config, quiet)
        }
        Some(("list-formats", _)) => handle_list_formats_command(&config),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn path_of(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-")
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

/// Defaults, then the local file, then --config, then flags
fn load_config(matches: &ArgMatches) -> PrettyBnfConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("strict") {
        loader = loader
            .set_override("parsing.strict", true)
            .unwrap_or_else(|e| fail(format!("Invalid configuration: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(format!("Invalid configuration: {}", e)))
}

/// Unwrap a loaded grammar, reporting ignored trailing input on stderr
fn report(
    result: Result<(Grammar, Option<TrailingInputWarning>), LoadError>,
    quiet: bool,
) -> Grammar {
    let (grammar, warning) = result.unwrap_or_else(|e| fail(e));
    if let Some(warning) = warning.filter(|_| !quiet) {
        eprintln!("{}", warning);
    }
    grammar
}

fn build_registry(config: &PrettyBnfConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(config.inspect.treeviz.max_label_chars));
    registry
}

/// Handle the check command
fn handle_check_command(loader: &GrammarLoader, path: &str, quiet: bool) {
    let grammar = report(loader.load_reporting(path), quiet);
    if !quiet {
        let noun = if grammar.len() == 1 { "production" } else { "productions" };
        println!("ok: {} {}", grammar.len(), noun);
    }
}

/// Handle the format command
fn handle_format_command(loader: &GrammarLoader, path: &str, check: bool, quiet: bool) {
    let source = loader.read_source(path).unwrap_or_else(|e| fail(e));
    let grammar = report(loader.parse_source_reporting(path, &source), quiet);
    let canonical = stringify(&grammar);

    if !check {
        print!("{}", canonical);
        return;
    }

    if source == canonical {
        if !quiet {
            println!("{} is canonical", path);
        }
    } else {
        fail(format!("{} is not canonical", path));
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    loader: &GrammarLoader,
    path: &str,
    format: &str,
    config: &PrettyBnfConfig,
    quiet: bool,
) {
    let registry = build_registry(config);
    if !registry.has(format) {
        fail(format!(
            "Format '{}' not supported\nAvailable formats: {}",
            format,
            registry.list_formats().join(", ")
        ));
    }

    let grammar = report(loader.load_reporting(path), quiet);
    let output = registry
        .serialize(&grammar, format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &PrettyBnfConfig) {
    let registry = build_registry(config);
    println!("Available formats:\n");

    for (name, description) in registry.descriptions() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
