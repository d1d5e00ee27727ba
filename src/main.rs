use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::{bail, IntoDiagnostic, Result};

use lacetip::output::{file_message, message, MsgColor};
use lacetip::{error, lexer, render, scope};
use lacetip::{Catalog, Payload, Resolver, SimConfig, Simulation};

/// Lacetip shows what LC3 instructions do, the way an editor tooltip would.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Produce minimal output, suited for blackbox tests
    #[arg(short, long, global = true)]
    minimal: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a single word, such as `ADD` or `BRnz`
    Lookup {
        /// Word as it appears in source
        word: String,
        /// Behave as if the cursor were outside assembly source
        #[arg(long)]
        no_scope: bool,
        /// Print popup markup instead of terminal text
        #[arg(long)]
        html: bool,
    },
    /// Show the tooltip for the word at a byte offset of a `.asm` or `.ssraw` file
    Hover {
        /// Source file
        name: PathBuf,
        /// Byte offset of the cursor
        offset: usize,
        /// Print popup markup instead of terminal text
        #[arg(long)]
        html: bool,
    },
    /// List every known instruction and its operands
    List,
    /// Launch an LC3 simulator, once per object file
    Sim {
        /// `.obj` files to load
        objects: Vec<PathBuf>,
        /// Simulator executable, overriding LACETIP_SIMULATOR
        #[arg(short, long)]
        simulator: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    lacetip::env::init();
    let minimal = args.minimal || lacetip::env::is_minimal();
    lacetip::output::set_minimal(minimal);
    if minimal {
        colored::control::set_override(false);
    }

    let resolver = Resolver::default();
    match args.command {
        Some(Command::Lookup {
            word,
            no_scope,
            html,
        }) => {
            let payload = resolver
                .resolve(&word, !no_scope)
                .ok_or_else(|| error::lookup_no_match(&word))?;
            show(&payload, html);
            Ok(())
        }
        Some(Command::Hover { name, offset, html }) => {
            let Some(scope_name) = scope::scope_for_path(&name) else {
                return Err(error::lookup_no_scope(&name));
            };
            let contents = fs::read_to_string(&name).into_diagnostic()?;
            if offset > contents.len() {
                return Err(error::lookup_bad_offset(offset, contents.len()));
            }
            let word = lexer::word_at(&contents, offset);
            let payload = resolver
                .resolve_at(&contents, offset, scope_name)
                .ok_or_else(|| error::lookup_no_match(word))?;
            show(&payload, html);
            Ok(())
        }
        Some(Command::List) => {
            list(resolver.catalog());
            Ok(())
        }
        Some(Command::Sim { objects, simulator }) => {
            let simulator = simulator.unwrap_or_else(lacetip::env::simulator);
            for object in &objects {
                if !object.exists() {
                    bail!("Object file `{}` does not exist. Exiting...", object.display());
                }
            }
            message(MsgColor::Green, "Simulating", &simulator.display().to_string());
            for object in &objects {
                file_message(MsgColor::Cyan, "Loading", object);
            }
            let completion = Simulation::spawn(SimConfig::new(simulator).with_objects(objects))
                .join()
                .inspect_err(|_| message(MsgColor::Red, "Failed", "simulator did not complete"))?;
            message(
                MsgColor::Green,
                "Completed",
                &format!("{} simulator run(s)", completion.runs),
            );
            Ok(())
        }
        None => {
            println!("\n~ lacetip v{VERSION} ~");
            println!("{SHORT_INFO}");
            Ok(())
        }
    }
}

fn show(payload: &Payload, html: bool) {
    if html {
        print!("{}", render::popup_markup(payload));
    } else {
        print!("{}", render::terminal(payload));
    }
}

fn list(catalog: &Catalog) {
    for instr in catalog.iter() {
        println!("{:<8}{}", instr.mnemonic.red(), instr.operands);
    }
}

const SHORT_INFO: &str = r"
Instruction tooltips for LC3 assembly, outside of any editor.
Please use `-h` or `--help` to access the usage instructions.
";

const VERSION: &str = env!("CARGO_PKG_VERSION");
