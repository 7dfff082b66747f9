use clap::{CommandFactory, Parser};
use svckeys::{normalize_args, Cli, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_from(normalize_args(std::env::args()));
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            println!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
    };

    svckeys_utils::init(config.log_filter()).map_err(|e| eyre::eyre!(e))?;

    svckeys::run(config).await?;
    Ok(())
}
