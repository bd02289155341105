#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{
    init_logging, AdjacencyRule, ConsoleView, GameConfig, GameController, GameModel, ShipKind,
};

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum AdjacencyArg {
    /// Ships may touch each other.
    Allowed,
    /// No edge contact between ships.
    Four,
    /// No edge or corner contact between ships.
    Eight,
}

#[cfg(feature = "std")]
impl From<AdjacencyArg> for AdjacencyRule {
    fn from(arg: AdjacencyArg) -> Self {
        match arg {
            AdjacencyArg::Allowed => AdjacencyRule::Allowed,
            AdjacencyArg::Four => AdjacencyRule::FourNeighbor,
            AdjacencyArg::Eight => AdjacencyRule::EightNeighbor,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship in the terminal")]
#[cfg(feature = "std")]
struct Cli {
    /// Board rows (A..).
    #[arg(long, default_value_t = 10)]
    rows: usize,
    /// Board columns (0..).
    #[arg(long, default_value_t = 10)]
    cols: usize,
    /// Guess budget for the session.
    #[arg(long, default_value_t = 50)]
    max_guesses: u32,
    /// Placement constraint between ships.
    #[arg(long, value_enum, default_value_t = AdjacencyArg::Eight)]
    adjacency: AdjacencyArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        rows: cli.rows,
        cols: cli.cols,
        fleet: ShipKind::ALL.to_vec(),
        max_guesses: cli.max_guesses,
        adjacency: cli.adjacency.into(),
    };

    let rng = if let Some(seed) = cli.seed {
        log::info!("using fixed seed {} (game will be reproducible)", seed);
        SmallRng::seed_from_u64(seed)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut model = GameModel::new(config, rng)?;
    log::debug!(
        "starting {}x{} session with {} max guesses",
        cli.rows,
        cli.cols,
        cli.max_guesses
    );

    let stdin = std::io::stdin();
    let view = ConsoleView::new(std::io::stdout());
    let mut controller = GameController::new(stdin.lock(), view);
    controller.play_game(&mut model)
}
