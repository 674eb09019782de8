use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dockerfile_gen::agent::{DockerfileGenerator, StatelessLLMFactory};
use dockerfile_gen::cli;
use dockerfile_gen::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the question and the Dockerfile
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dockerfile_gen=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let llm = StatelessLLMFactory::create_llm(&config)?;
    let generator = DockerfileGenerator::new(llm, config.model());
    info!("Using model {}", generator.model());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&generator, &mut stdin.lock(), &mut stdout.lock()).await
}
