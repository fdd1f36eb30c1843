use anyhow::Context;
use log::{debug, info, warn};
use sidelobe::config::ConfigManager;
use sidelobe::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use sidelobe::report;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ConfigManager::from_env()
        .context("Failed to load configuration")?
        .get();
    debug!("Effective configuration:\n{}", config.to_toml_string()?);

    let mut engine = EvolutionEngine::new(config.evolution.clone())?;
    let report_every = config.reporting.report_every;

    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_flag = Arc::clone(&cancel);

    // The search is CPU-bound; keep it off the runtime thread so Ctrl+C
    // is observed while a generation is in progress.
    let mut run = tokio::task::spawn_blocking(move || {
        let mut callback = ConsoleProgressCallback::new(report_every);
        engine.run(&mut callback, &cancel_flag)
    });

    let (history, reason) = tokio::select! {
        joined = &mut run => joined.context("Evolution task panicked")??,
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            warn!("Interrupted, finishing the current generation");
            cancel.store(true, Ordering::SeqCst);
            run.await.context("Evolution task panicked")??
        }
    };
    info!("Run finished: {:?} after {} recorded generations", reason, history.len());

    print!("\r");
    if config.reporting.plot && history.len() > 1 {
        println!(
            "{}",
            report::render_plot(
                &history,
                config.reporting.plot_width,
                config.reporting.plot_height
            )
        );
    }
    println!("{}", report::conclude(&history));

    if let Some(path) = &config.reporting.history_path {
        history
            .save_json(path)
            .with_context(|| format!("Failed to write history to {}", path.display()))?;
        info!("History saved to {}", path.display());
    }

    Ok(())
}
