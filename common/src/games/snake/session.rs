use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log;
use super::combo::ComboTracker;
use super::events::{GameEvent, GameObserver};
use super::food::Food;
use super::grid::Grid;
use super::input::InputBuffer;
use super::modes::{GameMode, ModeClock};
use super::obstacles::Obstacles;
use super::power_up::{PowerUp, SpeedBoost};
use super::scoreboard::Scoreboard;
use super::settings::SnakeSettings;
use super::entity::Snake;
use super::types::{Direction, GameOverReason, GamePhase, GameSnapshot, Position};

/// Which entity is being placed; everything else counts as occupied.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Placing {
    Food,
    PowerUp,
    Obstacles,
}

/// One game session: owns every entity and advances them once per tick.
pub struct SnakeSession {
    settings: SnakeSettings,
    grid: Grid,
    mode: GameMode,
    next_mode: GameMode,
    phase: GamePhase,
    snake: Snake,
    food: Food,
    power_up: PowerUp,
    boost: SpeedBoost,
    obstacles: Obstacles,
    combo: ComboTracker,
    scoreboard: Scoreboard,
    clock: ModeClock,
    input: InputBuffer,
    rng: SessionRng,
    game_over_reason: Option<GameOverReason>,
    frames_played: u64,
    observers: Vec<Box<dyn GameObserver>>,
}

impl SnakeSession {
    pub fn new(settings: SnakeSettings) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        Self::with_rng(settings, rng)
    }

    pub fn with_rng(settings: SnakeSettings, rng: SessionRng) -> Self {
        let mode = settings.mode;
        let mut session = Self {
            grid: settings.grid(),
            mode,
            next_mode: mode,
            phase: GamePhase::Ready,
            snake: Snake::new(settings.initial_length, settings.move_interval_secs),
            food: Food::new(),
            power_up: PowerUp::new(),
            boost: SpeedBoost::default(),
            obstacles: Obstacles::new(),
            combo: ComboTracker::new(
                settings.combo_window_frames,
                settings.combo_threshold,
                settings.combo_bonus_multiplier,
            ),
            scoreboard: Scoreboard::new(settings.level_up_threshold, settings.power_up_speed_bonus, mode),
            clock: ModeClock::default(),
            input: InputBuffer::new(Direction::Right),
            rng,
            game_over_reason: None,
            frames_played: 0,
            observers: Vec::new(),
            settings,
        };
        let mut discarded = Vec::new();
        session.reset_entities(&mut discarded);
        session
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Selects the mode used from the next `start`/`restart` on.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.next_mode = mode;
    }

    pub fn start(&mut self) -> Vec<GameEvent> {
        self.mode = self.next_mode;
        let mut events = vec![GameEvent::GameStarted { mode: self.mode }];
        self.reset_entities(&mut events);
        self.phase = GamePhase::Playing;
        log!(
            "Game started: mode {}, {} obstacles, seed {}",
            self.mode.name(),
            self.obstacles.len(),
            self.rng.seed()
        );
        self.dispatch(&events);
        events
    }

    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.start()
    }

    pub fn toggle_pause(&mut self) -> Vec<GameEvent> {
        let event = match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                GameEvent::Paused
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                GameEvent::Resumed
            }
            GamePhase::Ready | GamePhase::GameOver => return Vec::new(),
        };
        let events = vec![event];
        self.dispatch(&events);
        events
    }

    /// Buffers a turn for the next tick. Repeats and reversals are dropped.
    pub fn submit_direction(&mut self, direction: Direction) -> bool {
        self.input.submit(direction)
    }

    /// Advances the session by one frame. `delta_frames` is the elapsed time in
    /// 60 Hz frames (1.0 at a steady 60 fps). Outside `Playing` this is a no-op.
    pub fn tick(&mut self, delta_frames: f64) -> Vec<GameEvent> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.frames_played += 1;

        if let Some(direction) = self.input.take() {
            self.snake.set_next_direction(direction);
        }

        self.maybe_spawn_power_up(&mut events);

        self.snake.update(delta_frames * self.scoreboard.speed());
        self.input.set_current(self.snake.direction());

        self.combo.tick();

        if self.boost.tick() {
            self.scoreboard.recompute_speed(self.mode, &self.clock, false);
            log!("Speed boost expired, speed back to {:.2}", self.scoreboard.speed());
            events.push(GameEvent::PowerUpExpired);
        }

        if let Some(difficulty) = self.mode.advance(&mut self.clock, 1) {
            self.scoreboard.recompute_speed(self.mode, &self.clock, self.boost.is_running());
            log!("Difficulty increased to {} (speed {:.2})", difficulty, self.scoreboard.speed());
            events.push(GameEvent::DifficultyIncreased { difficulty });
        }

        self.resolve_collisions(&mut events);

        self.dispatch(&events);
        events
    }

    fn maybe_spawn_power_up(&mut self, events: &mut Vec<GameEvent>) {
        if self.power_up.is_active() || self.boost.is_running() {
            return;
        }
        if !self.rng.chance(self.settings.power_up_chance) {
            return;
        }
        let occupied = self.occupied_cells(Placing::PowerUp);
        if let Some(position) = self.power_up.spawn(&self.grid, &occupied, &mut self.rng) {
            events.push(GameEvent::PowerUpSpawned { position });
        }
    }

    fn resolve_collisions(&mut self, events: &mut Vec<GameEvent>) {
        let head = self.snake.head();

        if self.snake.collides_with(self.food.position()) {
            self.eat_food(head, events);
        }

        if self.power_up.collides_with(head) {
            self.power_up.hide();
            self.boost.start(self.settings.power_up_duration_frames);
            self.scoreboard.recompute_speed(self.mode, &self.clock, true);
            log!("Power-up collected, speed {:.2}", self.scoreboard.speed());
            events.push(GameEvent::PowerUpCollected { position: head });
        }

        if self.obstacles.collides_with(head) {
            events.push(GameEvent::ObstacleHit { position: head });
            self.finish(GameOverReason::ObstacleCollision, events);
            return;
        }

        if self.snake.hits_wall(&self.grid) {
            events.push(GameEvent::WallHit { position: head });
            self.finish(GameOverReason::WallCollision, events);
            return;
        }

        if self.snake.hits_self() {
            events.push(GameEvent::SelfHit { position: head });
            self.finish(GameOverReason::SelfCollision, events);
            return;
        }

        if let Some(reason) = self.mode.end_condition(self.scoreboard.score(), &self.clock) {
            self.finish(reason, events);
        }
    }

    fn eat_food(&mut self, head: Position, events: &mut Vec<GameEvent>) {
        self.snake.grow();
        events.push(GameEvent::FoodEaten { position: head });

        let combo = self.combo.on_food_eaten();
        if combo.triggered() {
            log!("{} foods in a row, +{}", combo.count, combo.bonus);
            events.push(GameEvent::ComboTriggered {
                count: combo.count,
                bonus: combo.bonus,
            });
        }

        let points = self.mode.food_points(
            self.settings.food_points,
            self.scoreboard.score(),
            self.scoreboard.level(),
            &self.clock,
        ) + combo.bonus;

        let occupied = self.occupied_cells(Placing::Food);
        let position = self.food.respawn(&self.grid, &occupied, &mut self.rng);
        events.push(GameEvent::FoodSpawned { position });

        let score = self.scoreboard.add_score(points);
        events.push(GameEvent::ScoreChanged { score });

        if let Some(level) = self.scoreboard.check_level_up(self.mode, &self.clock, self.boost.is_running()) {
            log!("Level up: {} (speed {:.2})", level, self.scoreboard.speed());
            events.push(GameEvent::LevelChanged { level });
            self.place_obstacles(events);
        }
    }

    fn finish(&mut self, reason: GameOverReason, events: &mut Vec<GameEvent>) {
        self.phase = GamePhase::GameOver;
        self.game_over_reason = Some(reason);
        let final_score = self.scoreboard.score();
        log!(
            "Game over ({}): score {}, level {}, {} frames",
            reason.describe(),
            final_score,
            self.scoreboard.level(),
            self.frames_played
        );
        events.push(GameEvent::GameOver {
            final_score,
            reason,
            frames_played: self.frames_played,
        });
    }

    fn reset_entities(&mut self, events: &mut Vec<GameEvent>) {
        self.snake.reset();
        self.obstacles.clear();
        self.power_up.hide();
        self.boost.cancel();
        self.combo.reset();
        self.scoreboard.reset(self.mode);
        self.clock = ModeClock::default();
        self.input.reset(self.snake.direction());
        self.game_over_reason = None;
        self.frames_played = 0;

        let occupied = self.occupied_cells(Placing::Food);
        let position = self.food.respawn(&self.grid, &occupied, &mut self.rng);
        events.push(GameEvent::FoodSpawned { position });

        self.place_obstacles(events);
    }

    fn place_obstacles(&mut self, events: &mut Vec<GameEvent>) {
        let count = self.mode.obstacle_count(
            self.scoreboard.level(),
            &self.clock,
            self.settings.obstacle_base_count,
            self.settings.obstacle_cap,
        );
        let occupied = self.occupied_cells(Placing::Obstacles);
        let placed = self.obstacles.regenerate(count, &self.grid, &occupied, &mut self.rng);
        events.push(GameEvent::ObstaclesPlaced { count: placed });
    }

    fn occupied_cells(&self, placing: Placing) -> HashSet<Position> {
        let mut occupied: HashSet<Position> = self.snake.body().iter().copied().collect();
        if placing != Placing::Food {
            occupied.insert(self.food.position());
        }
        if placing != Placing::PowerUp
            && let Some(position) = self.power_up.position()
        {
            occupied.insert(position);
        }
        if placing != Placing::Obstacles {
            occupied.extend(self.obstacles.positions().iter().copied());
        }
        occupied
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            for observer in self.observers.iter_mut() {
                observer.notify(event);
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn next_mode(&self) -> GameMode {
        self.next_mode
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_body(&self) -> Vec<Position> {
        self.snake.body().iter().copied().collect()
    }

    pub fn food_position(&self) -> Position {
        self.food.position()
    }

    pub fn power_up_position(&self) -> Option<Position> {
        self.power_up.position()
    }

    pub fn obstacle_positions(&self) -> &[Position] {
        self.obstacles.positions()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.scoreboard.score(),
            level: self.scoreboard.level(),
            speed: self.scoreboard.speed(),
            is_game_over: self.phase == GamePhase::GameOver,
        }
    }

    pub fn combo_count(&self) -> u32 {
        self.combo.count()
    }

    pub fn combo_timer(&self) -> u32 {
        self.combo.timer()
    }

    pub fn boost_remaining_frames(&self) -> Option<u32> {
        self.boost.is_running().then(|| self.boost.remaining_frames())
    }

    pub fn time_remaining_secs(&self) -> Option<f64> {
        (self.mode == GameMode::TimeAttack).then(|| GameMode::time_remaining_secs(&self.clock))
    }

    pub fn difficulty(&self) -> u32 {
        self.clock.difficulty
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn frames_played(&self) -> u64 {
        self.frames_played
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
