use autocomplete_config::logging::{init_debug_logging, init_stderr_logging};
use autocomplete_config::{init_global, Cli, ConfigError, Result};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = cli.validate() {
        report(&err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    if cli.debug {
        let path = init_debug_logging()?;
        eprintln!("Debug log: {}", path.display());
    } else {
        init_stderr_logging();
    }

    let config = init_global(cli.loader().load()?)?;
    cli.render(config)
}

fn report(err: &ConfigError) {
    eprintln!("{}", err);
    if let Some(suggestion) = err.get_recovery_suggestion() {
        eprintln!("{}", suggestion);
    }
}
