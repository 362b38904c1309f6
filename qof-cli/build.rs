use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Simplified mirror of the CLI surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("qof")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting quiz question files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format (qof, json)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "qof", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "qof", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "qof", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
