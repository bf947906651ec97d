//! Argument parsing.
//!
//! Hand-rolled parser over an arbitrary string iterator, so tests can
//! feed argv slices directly. Unknown commands and options degrade to
//! help output rather than erroring.

use std::path::PathBuf;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Selected subcommand with its options.
    pub command: Command,
}

/// Subcommands the binary understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fly a launch to ground and report the result
    Run {
        /// Path to the config YAML file; defaults apply when omitted.
        config_path: Option<PathBuf>,
        /// Optional time-scale exponent override.
        time_scale_override: Option<f64>,
        /// Force the drag-free motion model.
        drag_free: bool,
        /// Emit the flight report as JSON.
        json: bool,
        /// Verbose logging.
        verbose: bool,
    },
    /// Validate a config YAML file
    Validate {
        /// Path to the config file.
        config_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse from any iterator of argument strings.
    ///
    /// The first element is the program name, as in `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse the process's own arguments.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Shared parsing core: dispatch on the subcommand word.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "validate" => Self::parse_validate_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the options following `run`.
    fn parse_run_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut time_scale_override = None;
        let mut drag_free = false;
        let mut json = false;
        let mut verbose = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--time-scale" => {
                    if i + 1 < args.len() {
                        if let Ok(log10) = args[i + 1].parse() {
                            time_scale_override = Some(log10);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--drag-free" => {
                    drag_free = true;
                    i += 1;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                flag if flag.starts_with('-') => {
                    eprintln!("Unknown option: {flag}");
                    i += 1;
                }
                path => {
                    if config_path.is_none() {
                        config_path = Some(PathBuf::from(path));
                    }
                    i += 1;
                }
            }
        }

        Command::Run {
            config_path,
            time_scale_override,
            drag_free,
            json,
            verbose,
        }
    }

    /// Parse the config path following `validate`.
    fn parse_validate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'validate' command requires a config path");
            return Command::Help;
        }

        Command::Validate {
            config_path: PathBuf::from(&args[2]),
        }
    }
}
