use anyhow::{Context, Result, bail};
use tessera_core::{GameStatus, Position};
use tessera_engine::{Searcher, evaluate, win_probability};
use tracing::info;

const DEFAULT_DEPTH: u8 = 4;
const TOP_LINES: usize = 3;

/// Parsed command line: `tessera [--depth N] [move ...]`.
struct Args {
    depth: u8,
    moves: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut depth = DEFAULT_DEPTH;
    let mut moves = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--depth" {
            let value = args.next().context("--depth needs a value")?;
            depth = value
                .parse()
                .with_context(|| format!("invalid depth {value:?}"))?;
            if depth == 0 {
                bail!("depth must be at least 1");
            }
        } else {
            moves.push(arg);
        }
    }

    Ok(Args { depth, moves })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = parse_args(std::env::args().skip(1))?;
    info!(depth = args.depth, "tessera starting");

    let mut pos = Position::starting_position();
    for text in &args.moves {
        pos = pos
            .play(text)
            .with_context(|| format!("cannot play {text:?} in {pos}"))?;
    }

    let score = evaluate(&pos);
    info!(fen = %pos, eval = score, white_win_pct = %format!("{:.1}", win_probability(score)), "position");

    match pos.status() {
        GameStatus::Checkmate => {
            info!(winner = %pos.side_to_move().flip(), "checkmate");
            return Ok(());
        }
        GameStatus::Stalemate => {
            info!("stalemate");
            return Ok(());
        }
        GameStatus::Ongoing => {}
    }

    let searcher = Searcher::new();
    let result = searcher.search(&pos, args.depth);
    if let Some(best) = result.best_move() {
        info!(
            best = %best,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            pv = %tessera_engine::format_line(&result.pv),
            "search complete"
        );
    }

    for (rank, line) in searcher.top_moves(&pos, args.depth, TOP_LINES).iter().enumerate() {
        info!(rank = rank + 1, line = %line, "candidate");
    }
    Ok(())
}
