//! CLI argument parsing

use crate::{OutputMode, RenderOptions, ScanOptions};

#[derive(Debug, Clone)]
pub enum Command {
    Scan(ScanArgs),
    Help,
    Version,
}

#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub path: String,
    pub inverted: bool,
    pub max_depth: u32,
    pub all: bool,
    pub tree: bool,
    pub top: usize,
    pub include_dirs: bool,
    pub human_readable: bool,
    pub verbose: bool,
    pub json: bool,
    pub threads: Option<usize>,
}

impl ScanArgs {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.max_depth,
            include_hidden: self.all,
            threads: self.threads,
        }
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: if self.tree {
                OutputMode::Tree
            } else {
                OutputMode::Flat
            },
            invert: self.inverted,
            top: self.top,
            include_dirs: self.include_dirs,
            human_readable: self.human_readable,
            json: self.json,
        }
    }
}

/// Parse command line arguments (`args[0]` is the program name)
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut scan_args = ScanArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-i" | "--inverted" => scan_args.inverted = true,
            "-a" | "--all" => scan_args.all = true,
            "-t" | "--tree" => scan_args.tree = true,
            "-d" | "--dirs" => scan_args.include_dirs = true,
            "-H" | "--human" => scan_args.human_readable = true,
            "-v" | "--verbose" => scan_args.verbose = true,
            "--json" => scan_args.json = true,
            "--depth" => {
                i += 1;
                scan_args.max_depth = parse_number(args.get(i), "--depth")?;
            }
            "--top" => {
                i += 1;
                scan_args.top = parse_number(args.get(i), "--top")?;
            }
            "--threads" => {
                i += 1;
                let threads: usize = parse_number(args.get(i), "--threads")?;
                if threads == 0 {
                    return Err("--threads must be greater than zero".to_string());
                }
                scan_args.threads = Some(threads);
            }
            arg if !arg.starts_with('-') || arg == "-" => {
                if scan_args.path.is_empty() {
                    scan_args.path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if scan_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(Command::Scan(scan_args))
}

fn parse_number<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} must be a non-negative integer"))
}
