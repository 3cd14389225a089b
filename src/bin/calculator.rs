use anyhow::{Context, Result};
use calc::cli::{Console, Options, Script};
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let opts = Options::parse();

    let env = env_logger::Env::default().default_filter_or(opts.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    let sink = |msg: &str| println!("{msg}");

    match &opts.script {
        Some(path) => {
            info!("reading commands from {}", path.display());
            let mut script = Script::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            calc::run(&mut script, sink);
            script
                .finish()
                .with_context(|| format!("failed to read script {}", path.display()))?;
        }
        None => {
            let console = Console::new(&opts.prompt).context("failed to initialize console")?;
            calc::run(console, sink);
        }
    }

    Ok(())
}
