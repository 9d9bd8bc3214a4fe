//! Application entry point and dispatch.

use anyhow::{Context, Result};

use polyfft_cli::output::write_to_file;
use polyfft_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use polyfft_cli::ui::print_verdict;
use polyfft_core::registry::DefaultFactory;
use polyfft_orchestration::interfaces::ResultPresenter;
use polyfft_orchestration::multiplier_selection::get_multipliers_to_run;
use polyfft_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        polyfft_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let (a, b) = config.operands()?;
    let opts = config.options();
    tracing::debug!(?opts, lhs_len = a.len(), rhs_len = b.len(), "starting");

    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory, a.len().max(b.len()))?;
    let results = execute_multiplications(&multipliers, &a, &b, &opts);

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter::new())
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    };

    if config.details && !config.quiet && !config.json {
        println!("{}", full_version());
    }

    // Present results
    let comparing = results.len() > 1;
    let mut presented = false;
    for result in &results {
        match &result.outcome {
            Ok(product) => {
                // Quiet output prints the product once
                if config.quiet && presented {
                    continue;
                }
                presenter.present_result(
                    &result.algorithm,
                    &a,
                    &b,
                    product,
                    result.duration,
                    config.details,
                );
                presented = true;
            }
            // A lone failure is reported once by the caller
            Err(e) if comparing => presenter.present_error(&format!("{}: {e}", result.algorithm)),
            Err(_) => {}
        }
    }

    if comparing {
        presenter.present_comparison(&results);
    }

    analyze_comparison_results(&results)?;

    if comparing && !config.quiet && !config.json {
        let agreeing = results.iter().filter(|r| r.outcome.is_ok()).count();
        print_verdict(agreeing);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(product) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, product)
                .with_context(|| format!("writing product to {}", path.display()))?;
        }
    }

    Ok(())
}
