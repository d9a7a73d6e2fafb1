//! Maze session state and the command-line runner.

use std::{
    fmt,
    io::{self, Write as _},
};

use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    config::Config,
    maze::Maze,
    traversal::{Strategy, Traversal},
};

/// Initializes the global logger.
///
/// The `RUST_LOG` environment variable takes precedence over `default_filter`.
///
/// # Errors
///
/// This function may return errors if a global logger was already installed.
pub fn init_logging(default_filter: &str) -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init()
        .wrap_err("failed to initialize logger")
}

/// State of one maze session.
///
/// This structure owns the random source, the current maze and the result of the last search.
/// Resetting replaces the maze with a freshly built one and forgets the previous search.
pub struct App {
    /// Configuration the session was started with.
    config: Config,
    /// Random source shared by every maze built in this session.
    rng: StdRng,
    /// Maze currently being explored.
    maze: Maze,
    /// Result of the last search over the current maze.
    traversal: Option<Traversal>,
}

impl App {
    /// Starts a session and builds its first maze.
    ///
    /// The random source is seeded from [`Config::seed`] when present, otherwise from the
    /// operating system.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions are invalid.
    pub fn new(config: Config) -> Result<Self> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let maze = Maze::build(config.length, config.height, &mut rng)
            .wrap_err("failed to build maze")?;
        info!("new {}x{} maze", maze.length(), maze.height());

        Ok(Self {
            config,
            rng,
            maze,
            traversal: None,
        })
    }

    /// Returns the configuration of the session.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current maze.
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the last search over the current maze, if any.
    pub const fn traversal(&self) -> Option<&Traversal> {
        self.traversal.as_ref()
    }

    /// Replaces the current maze with a newly built one.
    ///
    /// The new maze draws from the same random source, so a seeded session produces the same
    /// sequence of mazes every time.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions are invalid.
    pub fn reset(&mut self) -> Result<()> {
        self.maze = Maze::build(self.config.length, self.config.height, &mut self.rng)
            .wrap_err("failed to rebuild maze")?;
        self.traversal = None;
        info!("maze reset");

        Ok(())
    }

    /// Searches the current maze from its entrance to its exit and keeps the result.
    pub fn solve(&mut self, strategy: Strategy) -> &Traversal {
        self.traversal.insert(self.maze.solve(strategy))
    }

    /// Returns a printable summary of the maze and the last search.
    pub const fn report(&self) -> Report<'_> {
        Report { app: self }
    }

    /// Solves the maze with the configured strategy and prints the report to standard output.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self) -> Result<()> {
        let _ = self.solve(self.config.strategy);
        writeln!(io::stdout().lock(), "{}", self.report())?;

        Ok(())
    }
}

/// Plain-text summary of a session.
pub struct Report<'app> {
    /// Session being summarized.
    app: &'app App,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let maze = self.app.maze();
        writeln!(
            formatter,
            "maze: {}x{} ({} cells, {} passages)",
            maze.length(),
            maze.height(),
            maze.grid().cell_count(),
            maze.grid().passage_count()
        )?;

        let Some(traversal) = self.app.traversal() else {
            return write!(formatter, "search: not run");
        };
        writeln!(
            formatter,
            "search: from {} to {}",
            traversal.start, traversal.goal
        )?;
        writeln!(formatter, "visited: {} cells", traversal.order.len())?;
        writeln!(
            formatter,
            "reached: {}",
            if traversal.reached { "yes" } else { "no" }
        )?;

        match traversal.path() {
            Some(path) => {
                writeln!(formatter, "solution: {} cells", path.len())?;
                write!(formatter, "path:")?;
                for id in &path {
                    write!(formatter, " {id}")?;
                }
            }
            None => write!(formatter, "solution: none")?,
        }

        if self.app.config().show_order {
            write!(formatter, "\norder:")?;
            for id in &traversal.order {
                write!(formatter, " {id}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(["kruskal-maze"].iter().chain(args))
            .expect("Arguments should parse")
    }

    #[test]
    fn test_new_builds_configured_maze() {
        let app = App::new(config(&["-l", "4", "-H", "3", "-s", "5"])).expect("App should start");

        assert_eq!(app.maze().length(), 4);
        assert_eq!(app.maze().height(), 3);
        assert_eq!(app.maze().grid().passage_count(), 11);
        assert!(app.traversal().is_none());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(App::new(config(&["--length", "0"])).is_err());
        assert!(App::new(config(&["--height", "0"])).is_err());
    }

    #[test]
    fn test_new_rejects_unallocatable_dimensions() {
        let result = App::new(config(&["--length", "9223372036854775807", "--height", "1"]));

        assert!(result.is_err());
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut first = App::new(config(&["-s", "7"])).expect("App should start");
        let mut second = App::new(config(&["-s", "7"])).expect("App should start");

        assert_eq!(first.maze(), second.maze());
        first.reset().expect("Reset should succeed");
        second.reset().expect("Reset should succeed");
        assert_eq!(first.maze(), second.maze());
    }

    #[test]
    fn test_reset_replaces_maze_and_clears_search() {
        let mut app = App::new(config(&["-l", "8", "-H", "8", "-s", "3"])).expect("App should start");
        let before = app.maze().clone();
        let _ = app.solve(Strategy::DepthFirst);

        app.reset().expect("Reset should succeed");

        assert_ne!(app.maze(), &before);
        assert!(app.traversal().is_none());
        assert_eq!(app.maze().grid().passage_count(), 63);
    }

    #[test]
    fn test_solve_reaches_exit() {
        let mut app = App::new(config(&["-l", "6", "-H", "5", "-s", "11"])).expect("App should start");

        let traversal = app.solve(Strategy::BreadthFirst);

        assert!(traversal.reached);
        assert_eq!(traversal.goal.index(), 29);
        assert!(app.traversal().is_some());
    }

    #[test]
    fn test_report_before_search() {
        let app = App::new(config(&["-l", "2", "-H", "2", "-s", "5"])).expect("App should start");

        assert_eq!(
            app.report().to_string(),
            "maze: 2x2 (4 cells, 3 passages)\nsearch: not run"
        );
    }

    #[test]
    fn test_report_single_cell() {
        let mut app = App::new(config(&["-l", "1", "-H", "1", "--show-order"]))
            .expect("App should start");
        let _ = app.solve(Strategy::DepthFirst);

        assert_eq!(
            app.report().to_string(),
            "maze: 1x1 (1 cells, 0 passages)\n\
             search: from 0 to 0\n\
             visited: 1 cells\n\
             reached: yes\n\
             solution: 1 cells\n\
             path: 0\n\
             order: 0"
        );
    }
}
