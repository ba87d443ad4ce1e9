//! Game session state.
//!
//! Tracks the learner's running score, level, streaks and per-mode game
//! counts. Levels are recomputed only when a game completes, so mid-game
//! score changes never move the level. All methods are plain synchronous
//! counter updates.

use serde::{Deserialize, Serialize};
use tracing::debug;
use util::validation_config::GameOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Speed,
    Challenge,
    Build,
}

/// Aggregate counters exposed to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub total_games: u32,
    pub best_streak: u32,
    pub speed_rounds: u32,
    pub challenges_completed: u32,
    pub build_challenges: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u32,
    pub level: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub total_games: u32,
    pub speed_rounds: u32,
    pub challenges_completed: u32,
    pub build_challenges: u32,
    pub current_game: Option<GameType>,

    #[serde(default = "default_level_step")]
    level_step: u32,
    #[serde(default = "default_points_per_match")]
    points_per_match: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_options(&GameOptions::default())
    }

    pub fn from_options(options: &GameOptions) -> Self {
        GameSession {
            score: 0,
            level: 1,
            streak: 0,
            best_streak: 0,
            total_games: 0,
            speed_rounds: 0,
            challenges_completed: 0,
            build_challenges: 0,
            current_game: None,
            level_step: options.level_step.max(1),
            points_per_match: options.points_per_match,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Awards one correct match: the configured points plus a streak bump.
    pub fn record_match(&mut self) {
        self.add_score(self.points_per_match);
        self.increment_streak();
    }

    pub fn increment_streak(&mut self) {
        self.streak += 1;
        if self.streak > self.best_streak {
            self.best_streak = self.streak;
        }
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }

    pub fn start_game(&mut self, game: GameType) {
        self.current_game = Some(game);
    }

    /// Closes the current game: bumps the total and per-mode counters,
    /// recomputes the level from the accumulated score and clears the
    /// current game marker.
    pub fn complete_game(&mut self) {
        self.total_games += 1;
        match self.current_game {
            Some(GameType::Speed) => self.speed_rounds += 1,
            Some(GameType::Challenge) => self.challenges_completed += 1,
            Some(GameType::Build) => self.build_challenges += 1,
            None => {}
        }

        let new_level = self.score / self.level_step + 1;
        if new_level != self.level {
            debug!("level changed from {} to {}", self.level, new_level);
            self.level = new_level;
        }
        self.current_game = None;
    }

    /// Zeroes every counter and returns the level to 1. The configured step
    /// and match points are kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 1;
        self.streak = 0;
        self.best_streak = 0;
        self.total_games = 0;
        self.speed_rounds = 0;
        self.challenges_completed = 0;
        self.build_challenges = 0;
        self.current_game = None;
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            total_games: self.total_games,
            best_streak: self.best_streak,
            speed_rounds: self.speed_rounds,
            challenges_completed: self.challenges_completed,
            build_challenges: self.build_challenges,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

//Default Functions

fn default_level_step() -> u32 {
    GameOptions::default().level_step
}

fn default_points_per_match() -> u32 {
    GameOptions::default().points_per_match
}
