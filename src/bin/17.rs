#![doc = include_str!("../puzzles/17.md")]

use crucible::debugln;
use crucible::routing::{CostGrid, Router, RunBounds};

/// Returns the least heat loss of a route from the top-left to the
/// bottom-right block of the city.
fn least_heat_loss(input: &str, bounds: RunBounds) -> Option<u64> {
    let city = CostGrid::parse(input).ok()?;
    debugln!("{city}");

    let router = Router::new(&city, city.top_left(), city.bottom_right(), bounds).ok()?;
    let route = router.route().ok()??;

    debugln!();
    debugln!("{}", route.overlay(&city));

    Some(route.cost)
}

pub fn part_one(input: &str) -> Option<u64> {
    least_heat_loss(input, RunBounds::CRUCIBLE)
}

pub fn part_two(input: &str) -> Option<u64> {
    least_heat_loss(input, RunBounds::ULTRA_CRUCIBLE)
}

fn main() {
    let input = &crucible::read_file("inputs", 17);
    crucible::solve!(1, part_one, input);
    crucible::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = crucible::read_file("examples", 17);
        assert_eq!(part_one(&input), Some(102));
    }

    #[test]
    fn test_part_two() {
        let input = crucible::read_file("examples", 17);
        assert_eq!(part_two(&input), Some(94));
    }

    #[test]
    fn test_part_two_unfortunate_path() {
        let input = "111111111111\n999999999991\n999999999991\n999999999991\n999999999991\n";
        assert_eq!(part_two(input), Some(71));
    }

    #[test]
    fn test_windows_line_endings() {
        let input = crucible::read_file("examples", 17).replace('\n', "\r\n");
        assert_eq!(part_one(&input), Some(102));
    }
}
