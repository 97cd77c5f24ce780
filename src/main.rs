use anyhow::anyhow;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod sampler;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = config::Settings::from_env()?;

    let (stop_tx, stop_rx) = flume::bounded(1);

    ctrlc::set_handler(move || {
        info!("received ctrl+c, exiting");
        let _ = stop_tx.try_send(());
    })?;

    let sampler_join = sampler::spawn_thread(settings, stop_rx);
    sampler_join
        .join()
        .map_err(|_| anyhow!("sampler thread panicked"))??;

    info!("exit");

    Ok(())
}
