use clap::Parser;
use commander::{
    cli::{Cli, Command},
    commands,
    framework::{self, secrets::SecretFiles, Config},
    response::{Body, Response},
    Context,
};
use thisslime::TracingError as _;

use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    framework::logging::init_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::List => {
            for name in commands::NAMES {
                println!("{name}");
            }
        }
        Command::Run(ref run) => {
            let response = match run.read_invocation() {
                Ok(mut invocation) => {
                    if let Some(ref dir) = cli.secrets_dir {
                        invocation.secrets.fill_from(&SecretFiles::new(dir)).await;
                    }

                    let ctx = Context::new(config);
                    commander::handle(&ctx, &run.name, invocation).await
                }
                Err(err) => {
                    err.trace();
                    Response::from(Body::error(err))
                }
            };

            let stdout = std::io::stdout().lock();
            if cli.pretty {
                serde_json::to_writer_pretty(stdout, &response)?;
            } else {
                serde_json::to_writer(stdout, &response)?;
            }
            println!();

            debug!("done!");
        }
    }

    Ok(())
}
