//! Disk usage scanner (dusk) - Main binary entry point

use dusk::cli::args::{Command, ScanArgs, parse_args};
use dusk::cli::output::format_diagnostics;
use std::io::Write;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug dusk /path
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let command = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &command {
        Command::Scan(scan_args) => handle_scan(scan_args),
        Command::Help => {
            print_help();
            0
        }
        Command::Version => {
            println!("dusk {}", env!("CARGO_PKG_VERSION"));
            0
        }
    };

    process::exit(exit_code);
}

fn handle_scan(args: &ScanArgs) -> i32 {
    let report = match dusk::run(&args.path, &args.scan_options(), &args.render_options()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                dusk::Error::InvalidInput(_) => 2,
                _ => 4,
            };
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(report.output.as_bytes()) {
        // Closed pipes (`dusk . | head`) are not worth a complaint.
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error: {e}");
            return 4;
        }
    }
    let _ = stdout.flush();

    if args.verbose {
        eprint!("{}", format_diagnostics(&report));
    }

    0
}

fn print_help() {
    println!("dusk - Find what takes up space in a directory tree");
    println!();
    println!("USAGE:");
    println!("    dusk <PATH> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tree          Print every entry as an indented tree");
    println!("    --top <N>           Show only the N largest entries (default: 0 = all)");
    println!("    -d, --dirs          Rank directories alongside files (flat mode)");
    println!("    -i, --inverted      Sort ascending instead of descending");
    println!("    --depth <N>         Maximum listing depth (default: 0 = unlimited)");
    println!("    -a, --all           Include entries whose name starts with '.'");
    println!("    -H, --human         Human readable sizes (1024-based)");
    println!("    --json              Emit machine-readable output");
    println!("    --threads <N>       Walk on a dedicated pool of N threads");
    println!("    -v, --verbose       Print counts and timings to stderr");
    println!("    -h, --help          Show this help message");
    println!("    -V, --version       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    dusk ~/Downloads --top 20 -H");
    println!("    dusk /var/log --tree --depth 2");
    println!("    dusk . --dirs --json");
}
