use anyhow::Result;
use clap::Parser;
use slither::app::App;
use slither::game::GameConfig;
use slither::store::HighScoreStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slither")]
#[command(version, about = "Terminal snake with smooth movement and a collision mercy window")]
struct Cli {
    /// Playfield width in cells
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Playfield height in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Snake moves per second
    #[arg(long, default_value = "10", value_parser = parse_speed)]
    speed: f64,

    /// Where the high score is kept
    #[arg(long, default_value = "high_score.txt")]
    high_score_file: PathBuf,
}

/// The tick interval is the reciprocal of the speed, so zero, negative,
/// and non-finite rates are rejected up front.
fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err("speed must be a positive number of moves per second".to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height, cli.speed);
    let store = HighScoreStore::new(cli.high_score_file);

    let mut app = App::new(config, store);
    app.run().await
}
