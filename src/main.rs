use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use prettytable::{row, Table};
use rayon::prelude::*;

use crucible::debugln;
use crucible::helpers::parse;
use crucible::routing::{pos, CostGrid, Pos, RouteError, Router, RunBounds};

const HELP: &str = "\
Finds the cheapest crucible route through a grid of single-digit costs.

USAGE:
  crucible [OPTIONS] <GRID_FILE>

OPTIONS:
  --start R,C        Start cell [default: 0,0]
  --goal R,C         Goal cell [default: bottom-right cell]
  --bounds MIN,MAX   Run length bounds, may be repeated [default: 1,3 and 4,10]
  --limit N          Give up after expanding N states
  --path             Also draw each route over the grid
  -h, --help         Print this help
";

#[derive(Debug)]
struct Args {
    grid_file: PathBuf,
    start: Option<Pos>,
    goal: Option<Pos>,
    bounds: Vec<RunBounds>,
    limit: Option<usize>,
    show_path: bool,
}

fn parse_cell(s: &str) -> anyhow::Result<Pos> {
    let (row, col) = parse::from_str(s, parse::integer_pair())
        .map_err(|err| anyhow!("invalid cell {s:?}, expected ROW,COL: {err}"))?;
    Ok(pos(row, col))
}

fn parse_bounds(s: &str) -> anyhow::Result<RunBounds> {
    let (min, max) = parse::from_str(s, parse::integer_pair())
        .map_err(|err| anyhow!("invalid bounds {s:?}, expected MIN,MAX: {err}"))?;
    Ok(RunBounds::new(min, max)?)
}

/// Returns `None` if help was requested.
fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut args = Args {
        start: pargs.opt_value_from_fn("--start", parse_cell)?,
        goal: pargs.opt_value_from_fn("--goal", parse_cell)?,
        bounds: pargs.values_from_fn("--bounds", parse_bounds)?,
        limit: pargs.opt_value_from_str("--limit")?,
        show_path: pargs.contains("--path"),
        grid_file: pargs.free_from_str()?,
    };

    if args.bounds.is_empty() {
        args.bounds = vec![RunBounds::CRUCIBLE, RunBounds::ULTRA_CRUCIBLE];
    }

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("unexpected arguments: {remaining:?}"));
    }

    Ok(Some(args))
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        print!("{HELP}");
        return Ok(());
    };
    debugln!("{args:?}");

    let input = fs::read_to_string(&args.grid_file)
        .with_context(|| format!("could not read {}", args.grid_file.display()))?;
    let grid = CostGrid::parse(&input)
        .with_context(|| format!("could not load a grid from {}", args.grid_file.display()))?;

    let start = args.start.unwrap_or_else(|| grid.top_left());
    let goal = args.goal.unwrap_or_else(|| grid.bottom_right());

    let routers = args
        .bounds
        .iter()
        .map(|&bounds| {
            let router = Router::new(&grid, start, goal, bounds)?;
            Ok(match args.limit {
                Some(limit) => router.with_expansion_limit(limit),
                None => router,
            })
        })
        .collect::<Result<Vec<_>, RouteError>>()?;

    // Each pair of bounds is an independent search over the same grid.
    let results: Vec<_> = routers.par_iter().map(|router| router.route()).collect();

    let mut table = Table::new();
    table.set_titles(row!["min run", "max run", "least cost"]);
    for (bounds, result) in args.bounds.iter().zip(&results) {
        let cost = match result {
            Ok(Some(route)) => route.cost.to_string(),
            Ok(None) => "unreachable".to_owned(),
            Err(err) => format!("error: {err}"),
        };
        table.add_row(row![bounds.min(), bounds.max(), cost]);
    }
    table.printstd();

    if args.show_path {
        for (bounds, result) in args.bounds.iter().zip(&results) {
            if let Ok(Some(route)) = result {
                println!();
                println!("Runs {bounds}:");
                println!("{}", route.overlay(&grid));
            }
        }
    }

    results
        .into_iter()
        .try_for_each(|result| result.map(drop))
        .context("search failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(parse_cell("0,0").unwrap(), pos(0, 0));
        assert_eq!(parse_cell("12,3").unwrap(), pos(12, 3));
        assert!(parse_cell("12").is_err());
        assert!(parse_cell("-1,3").is_err());
    }

    #[test]
    fn bounds() {
        assert_eq!(parse_bounds("4,10").unwrap(), RunBounds::ULTRA_CRUCIBLE);
        assert!(parse_bounds("0,3").is_err());
        assert!(parse_bounds("5,4").is_err());
        assert!(parse_bounds("4;10").is_err());
    }
}
