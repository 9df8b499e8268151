use std::io;
use std::process::ExitCode;

use bm::clipboard::ShellClipboard;
use bm::config::{Action, CONTROLS, Cli, Settings, TerminalConfig, USAGE};
use bm::pipeline::query_terminal_config;
use bm::{Console, Result};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[Error]: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let (mode, paths) = match Cli::parse_args(std::env::args_os())?.action() {
        Action::Help => {
            println!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
        Action::Controls => {
            println!("{CONTROLS}");
            return Ok(ExitCode::SUCCESS);
        }
        Action::Run { mode, paths } => (mode, paths),
    };

    let settings = Settings::from_env(mode)?;
    let console = Console {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
        terminal: if paths.is_empty() {
            query_terminal_config()
        } else {
            TerminalConfig::FALLBACK
        },
        raw_mode: true,
    };
    let mut clipboard = ShellClipboard::detect();

    let report = bm::run(&settings, &paths, console, &mut clipboard)?;
    log::debug!("{report:?}");
    Ok(ExitCode::SUCCESS)
}
