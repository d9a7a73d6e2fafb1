//! Command-line configuration.

use clap::Parser;

use crate::traversal::Strategy;

/// Runtime configuration of a maze session.
///
/// Dimensions are not validated here; [`Maze::build`](crate::maze::Maze::build) rejects zero
/// dimensions so that library callers and the command line share one error path.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of columns in the maze.
    #[arg(short, long, default_value_t = 30)]
    pub length: usize,
    /// Number of rows in the maze.
    #[arg(short = 'H', long, default_value_t = 20)]
    pub height: usize,
    /// Seed for the random generator. A fresh OS seed is used when absent.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Search strategy used to solve the maze.
    #[arg(long, value_enum, default_value_t = Strategy::BreadthFirst)]
    pub strategy: Strategy,
    /// Default log filter, overridden by `RUST_LOG` when set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
    /// Print the full visitation order of the search.
    #[arg(long)]
    pub show_order: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["kruskal-maze"]).expect("Defaults should parse");

        assert_eq!(config.length, 30);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, None);
        assert_eq!(config.strategy, Strategy::BreadthFirst);
        assert_eq!(config.log_level, "warn");
        assert!(!config.show_order);
    }

    #[test]
    fn test_all_arguments() {
        let config = Config::try_parse_from([
            "kruskal-maze",
            "-l",
            "5",
            "-H",
            "7",
            "--seed",
            "99",
            "--strategy",
            "depth-first",
            "--log-level",
            "debug",
            "--show-order",
        ])
        .expect("Arguments should parse");

        assert_eq!(config.length, 5);
        assert_eq!(config.height, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.strategy, Strategy::DepthFirst);
        assert_eq!(config.log_level, "debug");
        assert!(config.show_order);
    }

    #[test]
    fn test_zero_dimensions_parse() {
        let config = Config::try_parse_from(["kruskal-maze", "--length", "0"])
            .expect("Zero is left for the builder to reject");

        assert_eq!(config.length, 0);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Config::try_parse_from(["kruskal-maze", "--strategy", "a-star"]).is_err());
    }

    #[test]
    fn test_negative_length_rejected() {
        assert!(Config::try_parse_from(["kruskal-maze", "--length", "-3"]).is_err());
    }
}
