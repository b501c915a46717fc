mod app;
mod config;

use clap::Parser;
use tictactoe_engine::logger;

use app::App;
use config::RunnerConfig;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to a YAML config file with presentation settings.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = RunnerConfig::load(args.config.as_deref())?;

    let mut app = App::new(config);
    app.run()?;

    Ok(())
}
