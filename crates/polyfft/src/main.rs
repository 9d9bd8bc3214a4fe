//! polyfft: multiply integer polynomials with a radix-2 FFT.

use polyfft_lib::{app, config, errors};

fn main() {
    // Parse CLI args first so `--verbose` can raise the log level
    let config = config::AppConfig::parse();

    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let result = app::run(&config);
    if let Err(ref err) = result {
        polyfft_cli::ui::print_error(&format!("{err:#}"));
    }
    std::process::exit(errors::run_exit_code(&result));
}
