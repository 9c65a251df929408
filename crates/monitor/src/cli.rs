use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "cvmfs-mon.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config_path: PathBuf,
    pub dry_run: bool,
    pub once: bool,
    pub json_logs: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            dry_run: false,
            once: false,
            json_logs: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Args),
    Version,
    Help,
}

pub const USAGE: &str = "Usage: cvmfs-mon [OPTIONS]

Options:
  -c, --config <PATH>  Configuration file path (default: cvmfs-mon.yml)
      --dry-run        Log notifications instead of sending them
      --once           Run a single polling cycle and exit
      --json           Emit JSON log lines
  -V, --version        Print version
  -h, --help           Print help";

pub fn parse() -> Args {
    match parse_from(std::env::args().skip(1)) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Version) => {
            println!("cvmfs-mon {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            std::process::exit(0);
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

pub fn parse_from<I>(args: I) -> Result<Invocation, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Invocation::Version),
            "--help" | "-h" => return Ok(Invocation::Help),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--config requires a path argument".to_string())?;
                parsed.config_path = PathBuf::from(path);
            }
            "--dry-run" => parsed.dry_run = true,
            "--once" => parsed.once = true,
            "--json" => parsed.json_logs = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(Invocation::Run(parsed))
}
