#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::info;
use std::time::Duration;

use crate::bridge::BridgeTrack;
use crate::components::{FallingPiece, GameState, HighScore, Input, PieceRng};
use crate::menu_types::{Menu, MenuOption, MenuState};
use crate::polyomino::Cell;
use crate::systems::{TickOutcome, game_tick_system, reset_game};

/// What a rendered cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Bridge,
    Falling,
}

/// The session: owns the game world, the scene machine and the high score.
pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub menu: Menu,
    pub high_score: HighScore,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(PieceRng::new())
    }

    /// Session whose pieces come from `rng`; pass a seeded one for a reproducible run.
    #[must_use]
    pub fn with_rng(rng: PieceRng) -> Self {
        let mut world = World::new();
        world.insert_resource(rng);
        reset_game(&mut world);

        Self {
            world,
            should_quit: false,
            menu: Menu::new(),
            high_score: HighScore::default(),
        }
    }

    /// Leaves the title screen and starts a fresh game.
    pub fn start_game(&mut self) {
        reset_game(&mut self.world);
        self.menu.state = MenuState::Game;
        info!("Game started, high score {}", self.high_score.get());
    }

    /// Ends the current game, keeping its score if it beats the record.
    pub fn finish_game(&mut self) {
        let score = self.score();
        if self.high_score.commit(score) {
            info!("New high score {score}");
        }
        info!("Game over with score {score}");
        self.menu.state = MenuState::Title;
        self.menu.selected_option = MenuOption::Start;
    }

    /// Advances the session by `delta` of wall-clock time.
    pub fn update(&mut self, delta: Duration) {
        if self.menu.state != MenuState::Game {
            return;
        }

        if game_tick_system(&mut self.world, delta) == TickOutcome::GameOver {
            self.finish_game();
        }
    }

    pub fn next_option(&mut self) {
        self.menu.selected_option = self.menu.selected_option.next();
    }

    pub fn prev_option(&mut self) {
        self.menu.selected_option = self.menu.selected_option.prev();
    }

    /// Acts on the highlighted title option.
    pub fn activate(&mut self) {
        if self.menu.state != MenuState::Title {
            return;
        }
        match self.menu.selected_option {
            MenuOption::Start => self.start_game(),
            MenuOption::Exit => self.should_quit = true,
        }
    }

    pub fn rotate_left(&mut self) {
        self.press(|input| input.rotate_left = true);
    }

    pub fn rotate_right(&mut self) {
        self.press(|input| input.rotate_right = true);
    }

    pub fn drop_piece(&mut self) {
        self.press(|input| input.drop = true);
    }

    fn press(&mut self, set: impl FnOnce(&mut Input)) {
        if self.menu.state == MenuState::Game {
            set(&mut self.world.resource_mut::<Input>());
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.world.resource::<GameState>().score
    }

    #[must_use]
    pub fn bridge(&self) -> &BridgeTrack {
        self.world.resource::<BridgeTrack>()
    }

    #[must_use]
    pub fn falling_piece(&self) -> &FallingPiece {
        self.world.resource::<FallingPiece>()
    }

    /// Bridge cells followed by the falling piece's cells, in lane coordinates.
    #[must_use]
    pub fn get_render_blocks(&self) -> Vec<(Cell, BlockKind)> {
        let mut blocks: Vec<(Cell, BlockKind)> = self
            .bridge()
            .cells()
            .iter()
            .map(|&cell| (cell, BlockKind::Bridge))
            .collect();

        blocks.extend(
            self.falling_piece()
                .absolute_cells()
                .map(|cell| (cell, BlockKind::Falling)),
        );
        blocks
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
