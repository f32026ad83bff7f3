//! Dependency injection container for noughts sessions.
//!
//! The container owns process-wide defaults and wires configurations into
//! controllers and strategies, so shells never construct the AI directly.

use super::config::GameConfig;
use crate::{
    Result,
    ai::{self, Difficulty},
    ports::{SessionObserver, Strategy},
    session::GameController,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ```
/// use noughts::app::{App, GameConfig, GameMode};
///
/// let app = App::new();
/// let mut controller = app.create_controller(GameConfig::new(GameMode::SinglePlayer))?;
/// controller.apply_move(4)?;
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct App {
    /// Seed used when a config carries none (None = non-deterministic)
    default_seed: Option<u64>,
    /// Observers attached to every controller this app creates
    observer_factories: Vec<Box<dyn Fn() -> Box<dyn SessionObserver> + Send + Sync>>,
}

impl App {
    /// Create a new app with production defaults: entropy-seeded AI, no observers.
    pub fn new() -> Self {
        Self {
            default_seed: None,
            observer_factories: Vec::new(),
        }
    }

    /// Create a builder for an app with custom defaults.
    ///
    /// ```
    /// use noughts::app::App;
    ///
    /// let app = App::for_testing().with_default_seed(42).build();
    /// assert_eq!(app.default_seed(), Some(42));
    /// ```
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    /// Build a controller for `config`, filling in the default seed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config fails validation.
    pub fn create_controller(&self, config: GameConfig) -> Result<GameController> {
        let config = self.apply_defaults(config);
        let strategy = self.create_strategy(config.difficulty, config.seed);
        let mut controller = GameController::with_strategy(config, strategy)?;
        if self.default_seed.is_some() {
            controller.set_default_seed(self.default_seed);
        }
        for factory in &self.observer_factories {
            controller.add_observer(factory());
        }
        Ok(controller)
    }

    /// Build the strategy for `difficulty`; a missing seed falls back to the app default.
    pub fn create_strategy(&self, difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Strategy> {
        ai::strategy_for(difficulty, seed.or(self.default_seed))
    }

    /// The config a controller created by this app would use.
    pub fn apply_defaults(&self, mut config: GameConfig) -> GameConfig {
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        config
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an [`App`] with custom defaults.
pub struct AppBuilder {
    default_seed: Option<u64>,
    observer_factories: Vec<Box<dyn Fn() -> Box<dyn SessionObserver> + Send + Sync>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            default_seed: None,
            observer_factories: Vec::new(),
        }
    }

    /// Set a default random seed for every strategy created by the app.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Attach an observer built by `factory` to every new controller.
    pub fn with_observer<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn SessionObserver> + Send + Sync + 'static,
    {
        self.observer_factories.push(Box::new(factory));
        self
    }

    pub fn build(self) -> App {
        App {
            default_seed: self.default_seed,
            observer_factories: self.observer_factories,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
