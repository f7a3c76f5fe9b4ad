use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::{debug, error, info};
use simplelog::{Config, LevelFilter, SimpleLogger};

use flowtrace::{Board, Location, Solution, SquareBoardBuilder, Swipe};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// A JSON array of rows of `["R", 3]` pairs, as the solver prints it.
    Json,
    /// Lines of whitespace-separated tokens such as `R3 R12 .`.
    Tokens,
}

/// The rectangle of the screen the board is drawn in, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Screen {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

impl FromStr for Screen {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y, w, h) = s.split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .context("screen rectangle must be four integers")?
            .into_iter()
            .collect_tuple()
            .ok_or_else(|| anyhow!("screen rectangle must be x,y,w,h"))?;

        Ok(Self { x, y, w, h })
    }
}

impl Screen {
    /// The pixel at the center of `location`'s cell on a board of `dims` cells.
    fn to_pixel(&self, location: Location, dims: (usize, usize)) -> (i64, i64) {
        let width = self.w / dims.0 as i64;
        let height = self.h / dims.1 as i64;

        (location.0 as i64 * width + width / 2 + self.x, location.1 as i64 * height + height / 2 + self.y)
    }
}

#[derive(Parser, Debug)]
#[command(name = "player", about = "Print the swipes that draw a solved Flow Free board")]
struct Args {
    /// The board, one row of color symbols per line, `.` for blank.
    #[arg(name = "BOARD")]
    board: PathBuf,

    /// The solver's annotation of the board.
    #[arg(name = "SOLUTION")]
    solution: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Map waypoints onto this screen rectangle, given as x,y,w,h.
    #[arg(long)]
    screen: Option<Screen>,

    #[arg(short, long)]
    verbose: bool,
}

// the game finishes a flow by itself once the drag is next to its far terminus
fn drag_points(swipe: &Swipe) -> &[Location] {
    match swipe.waypoints() {
        [.., before, last] if before.0.abs_diff(last.0) <= 1 && before.1.abs_diff(last.1) <= 1 => {
            &swipe.waypoints()[..swipe.waypoints().len() - 1]
        }
        all => all,
    }
}

/// One line per flow that traced, and the number of flows that did not.
fn render(board: Board, screen: Option<Screen>) -> (Vec<String>, usize) {
    let dims = board.dims();
    let mut lines = vec![];
    let mut failed = 0;

    for (color, swipe) in board.swipes() {
        let swipe = match swipe {
            Ok(swipe) => swipe,
            Err(failure) => {
                error!("skipping {}: {}", color, failure);
                failed += 1;
                continue;
            }
        };

        lines.push(match screen {
            None => format!("{}: {}", color, swipe.waypoints().iter().join(" -> ")),
            Some(screen) => format!("{}: {}", color, drag_points(&swipe).iter()
                .map(|location| screen.to_pixel(*location, dims))
                .map(|(x, y)| format!("({},{})", x, y))
                .join(" -> ")),
        });
    }

    (lines, failed)
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::init(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info }, Config::default())?;

    let board_text = std::fs::read_to_string(&args.board)
        .with_context(|| format!("reading {}", args.board.display()))?;
    let rows = board_text.lines().map(str::trim).filter(|row| !row.is_empty()).collect_vec();

    let mut board = SquareBoardBuilder::from_rows(&rows)
        .build()
        .map_err(|reasons| anyhow!("invalid board: {:?}", reasons))?;
    let dims = board.dims();
    info!("playing a {}x{} board", dims.0, dims.1);

    let solution_text = std::fs::read_to_string(&args.solution)
        .with_context(|| format!("reading {}", args.solution.display()))?;
    let solution = match args.format {
        Format::Json => Solution::from_json(&solution_text)?,
        Format::Tokens => Solution::from_token_rows(&solution_text.lines().filter(|row| !row.trim().is_empty()).collect_vec())?,
    };
    board.annotate(solution)?;
    debug!("annotated board:\n{}", board);

    let (lines, failed) = render(board, args.screen);
    for line in lines {
        println!("{}", line);
    }

    if failed > 0 {
        bail!("{} flow(s) could not be traced", failed);
    }

    Ok(())
}
