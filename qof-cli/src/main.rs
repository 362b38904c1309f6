// Command-line interface for qof
//
// This binary provides commands for inspecting and converting quiz question files.
//
// The main role of the qof program is to move question sets between the Question Output
// Format (the text a generation service emits) and structured representations consumed
// by rendering. The core capabilities use the qof-babel crate; this crate is a shell
// over that library.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file
// extension, while being overwrittable by an explicit --from flag.
// Usage:
//  qof <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  qof convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  qof inspect <path> [--from <format>]  - Print a summary of a question set
//  qof --list-formats                    - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  qof questions.qof --to json --extra-pretty false

use clap::{Arg, ArgAction, Command, ValueHint};
use qof_babel::{CurriculumMap, FormatRegistry, QuestionSet};
use qof_config::{Loader, QofConfig};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("qof")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting quiz question files")
        .long_about(
            "qof is a command-line tool for working with quiz question sets.\n\n\
            Commands:\n  \
            - convert: Transform between question set formats (qof, json)\n  \
            - inspect: Print a readable summary of a question set\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            qof questions.qof --to json              # Convert to JSON (stdout)\n  \
            qof questions.json --to qof -o out.qof   # Re-emit generator text\n  \
            qof inspect questions.qof                # Summarize the set",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a qof.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between question set formats (default command)")
                .long_about(
                    "Convert question sets between different formats.\n\n\
                    Supported formats:\n  \
                    - qof:  Question Output Format (.qof, .txt)\n  \
                    - json: Structured JSON (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    A [curriculum] section in the configuration is applied while\n\
                    decoding qof input: entries override the subject/unit/topic of\n\
                    the question with the matching order.\n\n\
                    Examples:\n  \
                    qof convert gen.qof --to json            # Convert to JSON (stdout)\n  \
                    qof convert set.json --to qof -o out.qof # JSON back to generator text\n  \
                    qof gen.qof --to json                    # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: qof, json\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print a readable summary of a question set")
                .long_about(
                    "Parse a question set and print a plain-text summary: title,\n\
                    description, question count, and per question the order,\n\
                    difficulty, options (correct one starred), classification and\n\
                    image tag.\n\n\
                    Examples:\n  \
                    qof inspect questions.qof\n  \
                    qof inspect export.json --from json",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the question set file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = resolve_from(sub_matches.get_one::<String>("from"), input);
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let from = resolve_from(sub_matches.get_one::<String>("from"), path);
            handle_inspect_command(path, &from, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Resolve the source format: explicit --from wins, otherwise detect from the
/// file extension.
fn resolve_from(explicit: Option<&String>, input: &str) -> String {
    if let Some(f) = explicit {
        return f.to_string();
    }
    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QofConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Read input file
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let set = parse_with_config(&registry, &source, from, config);

    // Serialize (format-specific parameters allowed via --extra-*)
    let mut format_options = HashMap::new();
    if to == "json" && !config.convert.json.pretty {
        format_options.insert("pretty".to_string(), "false".to_string());
    }
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&set, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    // Output
    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{result}");
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, from: &str, config: &QofConfig) {
    let registry = FormatRegistry::default();

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let set = parse_with_config(&registry, &source, from, config);
    print_summary(&set);
}

/// Parse a source document, threading the configured curriculum override into the
/// decode when one is present.
fn parse_with_config(
    registry: &FormatRegistry,
    source: &str,
    from: &str,
    config: &QofConfig,
) -> QuestionSet {
    let curriculum: CurriculumMap = config.curriculum_map().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });
    let curriculum_ref = if curriculum.is_empty() {
        None
    } else {
        Some(&curriculum)
    };

    registry
        .parse_with_curriculum(source, from, curriculum_ref)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        })
}

fn print_summary(set: &QuestionSet) {
    let title = if set.title.is_empty() {
        "(untitled)"
    } else {
        set.title.as_str()
    };
    println!("Title: {title}");
    if !set.description.is_empty() {
        println!("Description: {}", set.description);
    }
    println!("Questions: {}", set.questions.len());

    for question in &set.questions {
        println!();
        println!(
            "Q{} [{}] {}",
            question.order, question.difficulty, question.text
        );
        if !question.instruction.is_empty() {
            println!("  instruction: {}", question.instruction);
        }
        if question.options.is_empty() {
            println!("  (no options)");
        }
        for (index, option) in question.options.iter().enumerate() {
            let marker = if index == question.correct_index {
                "*"
            } else {
                "-"
            };
            println!("  {marker} {option}");
        }
        if let Some(tag) = &question.image_tag {
            println!("  image: {tag}");
        }
        println!(
            "  {} / {} / {} ({} marks)",
            question.subject, question.unit, question.topic, question.plusmarks
        );
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format exists");
        let mut directions = Vec::new();
        if format.supports_parsing() {
            directions.push("parse");
        }
        if format.supports_serialization() {
            directions.push("serialize");
        }
        println!(
            "  {:<6} {} ({})",
            name,
            format.description(),
            directions.join(", ")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> QofConfig {
    let loader = Loader::new().with_optional_file("qof.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
