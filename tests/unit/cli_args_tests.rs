//! Unit tests for CLI argument parsing
#[cfg(test)]
mod tests {
    use dusk::OutputMode;
    use dusk::cli::args::{Command, ScanArgs, parse_args};

    fn make_args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn parse_scan(raw: &[&str]) -> ScanArgs {
        match parse_args(&make_args(raw)).expect("parse scan args") {
            Command::Scan(scan) => scan,
            other => panic!("expected scan command, got {other:?}"),
        }
    }

    #[test]
    fn parse_defaults() {
        let scan = parse_scan(&["dusk", "/tmp/work"]);

        assert_eq!(scan.path, "/tmp/work");
        assert_eq!(scan.max_depth, 0);
        assert_eq!(scan.top, 0);
        assert!(!scan.inverted && !scan.all && !scan.tree && !scan.include_dirs);
        assert!(!scan.human_readable && !scan.verbose && !scan.json);
        assert!(scan.threads.is_none());

        let render = scan.render_options();
        assert_eq!(render.mode, OutputMode::Flat);
        assert!(!render.invert);
    }

    #[test]
    fn parse_all_flags() {
        let scan = parse_scan(&[
            "dusk", "-i", "--depth", "3", "-a", "-t", "--top", "10", "-d", "-H", "-v", "--json",
            "--threads", "4", "/data",
        ]);

        assert_eq!(scan.path, "/data");
        assert!(scan.inverted && scan.all && scan.tree && scan.include_dirs);
        assert!(scan.human_readable && scan.verbose && scan.json);
        assert_eq!(scan.max_depth, 3);
        assert_eq!(scan.top, 10);
        assert_eq!(scan.threads, Some(4));

        let opts = scan.scan_options();
        assert_eq!(opts.max_depth, 3);
        assert!(opts.include_hidden);
        assert_eq!(opts.threads, Some(4));

        let render = scan.render_options();
        assert_eq!(render.mode, OutputMode::Tree);
        assert!(render.invert && render.include_dirs && render.human_readable && render.json);
        assert_eq!(render.top, 10);
    }

    #[test]
    fn parse_long_forms() {
        let scan = parse_scan(&[
            "dusk",
            ".",
            "--inverted",
            "--all",
            "--tree",
            "--dirs",
            "--human",
            "--verbose",
        ]);

        assert_eq!(scan.path, ".");
        assert!(scan.inverted && scan.all && scan.tree);
        assert!(scan.include_dirs && scan.human_readable && scan.verbose);
    }

    #[test]
    fn parse_help_and_version() {
        assert!(matches!(
            parse_args(&make_args(&["dusk", "--help"])),
            Ok(Command::Help)
        ));
        assert!(matches!(
            parse_args(&make_args(&["dusk", "/x", "-h"])),
            Ok(Command::Help)
        ));
        assert!(matches!(
            parse_args(&make_args(&["dusk", "--version"])),
            Ok(Command::Version)
        ));
    }

    #[test]
    fn parse_errors() {
        let err = |raw: &[&str]| parse_args(&make_args(raw)).expect_err("should fail");

        assert_eq!(err(&["dusk"]), "Missing required argument: PATH");
        assert_eq!(err(&["dusk", "/x", "--depth"]), "--depth requires a value");
        assert_eq!(
            err(&["dusk", "/x", "--top", "-1"]),
            "--top must be a non-negative integer"
        );
        assert_eq!(
            err(&["dusk", "/x", "--depth", "two"]),
            "--depth must be a non-negative integer"
        );
        assert_eq!(
            err(&["dusk", "/x", "--threads", "0"]),
            "--threads must be greater than zero"
        );
        assert_eq!(err(&["dusk", "/x", "/y"]), "Unexpected argument: /y");
        assert_eq!(err(&["dusk", "/x", "--frobnicate"]), "Unknown option: --frobnicate");
    }
}
