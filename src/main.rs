//! # Command Line Interface
//!
//! Argument handling only; the subcommand bodies are in the `commands` module.

use clap::{arg,crate_version,Command,ArgAction};
use env_logger;
use log::error;
use bastok::commands;
use bastok::commands::CommandError;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let long_help =
"bastok is always invoked with exactly one of several subcommands.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
program file to text:  `bastok detokenize game.prg > game.bas`
T64 archive to text:   `bastok detokenize -t tape.t64 -d listing.bas`
strict tok64 text:     `bastok detokenize -s game.prg`
text to program files: `bastok tokenize listing.bas`
text to T64 archive:   `bastok tokenize -t listing.bas`
force a dialect:       `bastok tokenize -m basic71 listing.bas`";

    let dialects = ["basic2","basic35","basic4","graphics52","tfc3","basic7","basic71","vicsuper"];

    let mut main_cmd = Command::new("bastok")
        .about("Converts Commodore BASIC between tokenized binary and text.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("detokenize")
        .arg(arg!(-s --strict "strict tok64 compatibility").action(ArgAction::SetTrue))
        .arg(arg!(-a --all "convert all programs, not only recognized start addresses")
            .action(ArgAction::SetTrue))
        .arg(arg!(-t --t64 "read programs from T64 archives").action(ArgAction::SetTrue))
        .arg(arg!(-d --dest <PATH> "append output to file instead of stdout").required(false))
        .arg(arg!(<FILE> ... "input files"))
        .about("convert tokenized programs to text"));
    main_cmd = main_cmd.subcommand(Command::new("tokenize")
        .arg(arg!(-m --dialect <DIALECT> "force a BASIC dialect, otherwise the start address decides")
            .required(false).value_parser(dialects))
        .arg(arg!(-t --t64 "append programs to bastok.t64 instead of writing files")
            .action(ArgAction::SetTrue))
        .arg(arg!(<FILE> ... "input files"))
        .about("convert text to tokenized programs"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("detokenize") {
        return commands::detokenize::run(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("tokenize") {
        return commands::tokenize::run(cmd);
    }

    error!("No subcommand was found, try `bastok --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
