use std::{io, path::Path, process::ExitStatus};

use miette::{miette, Report, Severity};

// Simulator errors

pub fn sim_spawn(simulator: &Path, e: io::Error) -> Report {
    miette!(
        severity = Severity::Error,
        code = "sim::spawn",
        help = "set LACETIP_SIMULATOR or pass --simulator with the path to an LC3 simulator",
        "Could not start simulator `{}`: {e}",
        simulator.display(),
    )
}

pub fn sim_exit(simulator: &Path, object: Option<&Path>, status: ExitStatus) -> Report {
    let target = match object {
        Some(object) => format!(" on `{}`", object.display()),
        None => String::new(),
    };
    miette!(
        severity = Severity::Error,
        code = "sim::exit",
        help = "the simulator reported a failure; its output is shown above",
        "Simulator `{}` exited with {status}{target}",
        simulator.display(),
    )
}

pub fn sim_panicked() -> Report {
    miette!(
        severity = Severity::Error,
        code = "sim::worker",
        "Simulator worker thread panicked",
    )
}

// Lookup errors, only raised by the command line

pub fn lookup_no_match(word: &str) -> Report {
    miette!(
        severity = Severity::Warning,
        code = "lookup::no_match",
        help = "run `lacetip list` to see every known instruction",
        "No instruction matches `{word}`",
    )
}

pub fn lookup_no_scope(path: &Path) -> Report {
    miette!(
        severity = Severity::Warning,
        code = "lookup::scope",
        help = "tooltips are only offered for `.asm` and `.ssraw` files",
        "`{}` is not an assembly source",
        path.display(),
    )
}

pub fn lookup_bad_offset(offset: usize, len: usize) -> Report {
    miette!(
        severity = Severity::Error,
        code = "lookup::offset",
        help = "offsets are counted in bytes from the start of the file",
        "Offset {offset} is past the end of the file ({len} bytes)",
    )
}
