//! Native Exposer CLI
//!
//! Generates C++ bindings for the exported members of a managed assembly.

use std::io::IsTerminal;
use std::process::ExitCode;

use nx_diagnostic::emitter::TerminalEmitter;
use nx_model::{NoopObserver, Observer, SnapshotSource};
use nxc::{Command, GenerateError, ProgressReporter, USAGE};

fn main() -> ExitCode {
    nxc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Command::parse(&args) {
        Ok(Command::Generate(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("nxc {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
    let mut progress = ProgressReporter::new(std::io::stdout());
    let mut silent = NoopObserver;
    let observer: &mut dyn Observer = if options.quiet {
        &mut silent
    } else {
        &mut progress
    };

    let source = SnapshotSource::new(&options.project);
    match nxc::generate(&source, &options.output_dir, &mut emitter, observer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if let GenerateError::Compile { errors } = &e {
                tracing::debug!(errors, "analyzer reported errors");
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("nxc {}", env!("CARGO_PKG_VERSION"));
    println!("Generate native C++ bindings for exported managed types.");
    println!();
    println!("{USAGE}");
    println!();
    println!("Arguments:");
    println!("  <project>        Symbol snapshot file, or a directory containing symbols.json");
    println!("  <output-dir>     Directory receiving lib.h, lib.cxx and CMakeLists.txt");
    println!();
    println!("Options:");
    println!("  --color=<when>   Colorize diagnostics: auto, always, never (default: auto)");
    println!("  -q, --quiet      Do not print progress");
    println!("  -h, --help       Print this help");
    println!("  -V, --version    Print version");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Enable debug logging (e.g. RUST_LOG=nx_codegen=debug)");
    println!("  NX_LOG_TREE=1    Render log spans as a tree");
}
