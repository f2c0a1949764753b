#![forbid(unsafe_code)]

use ada_launcher::config::{ColorOption, Config, SCRIPT_DIR_ENV};
use ada_launcher::launcher::{ProcessRunner, executable_dir};
use ada_launcher::output::StandardConsole;
use ada_launcher::{Dispatcher, LaunchError, ParsedInvocation, parse};
use log::debug;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    std::process::exit(run());
}

fn run() -> i32 {
    // Parsed before config is loaded so --help and argument errors never depend on it
    let invocation = match parse(std::env::args_os().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => return report_parse_error(e),
    };
    debug!("parsed invocation: {:?}", invocation);

    launch(&invocation).unwrap_or_else(|e| {
        let mut console = StandardConsole::standard(ColorOption::Auto);
        // Nothing is left to report to if stderr itself is broken
        let _ = console.error(&e.to_string());
        e.exit_code()
    })
}

fn report_parse_error(error: LaunchError) -> i32 {
    let mut console = StandardConsole::standard(ColorOption::Auto);
    let _ = match &error {
        LaunchError::HelpRequested => console.usage(),
        e => console.usage_error(&e.to_string()),
    };
    error.exit_code()
}

fn launch(invocation: &ParsedInvocation) -> Result<i32, LaunchError> {
    let exe_dir = executable_dir()?;
    let config = Config::load_beside(&exe_dir)?;
    let script_dir = config.script_dir(&exe_dir, std::env::var_os(SCRIPT_DIR_ENV).as_deref());
    debug!("script directory: {}", script_dir.display());

    let mut console = StandardConsole::standard(config.output.color);
    let mut dispatcher =
        Dispatcher::new(script_dir, ProcessRunner).with_banner(config.output.banner);
    dispatcher.dispatch(invocation, &mut console)
}
