use sdlaunch_runner::WebuiLauncher;
use std::process;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A failed directory change, interpreter lookup, or spawn propagates
    // out of main; only the child's own non-zero exit maps to code 1.
    let outcome = WebuiLauncher::new().run()?;
    process::exit(outcome.process_exit_code());
}
