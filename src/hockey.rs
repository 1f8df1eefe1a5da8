//! ASCII air hockey
//!
//! A fixed 30x9 field with one puck and two 3-row paddles, advanced one
//! tick per period and rendered as a bordered text frame after every tick.
//! Frames go to a [`FrameSink`]; the sink hears `complete` exactly once,
//! after the goal or draw line.
//!
//! The left paddle never moves. The right paddle chases the puck.

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Deadline, SharedTimeSource};

/// Field width in columns.
pub const WIDTH: i32 = 30;
/// Field height in rows.
pub const HEIGHT: i32 = 9;
/// Rows covered by a paddle.
pub const PADDLE_HEIGHT: i32 = 3;
/// Ticks before the game is called a draw.
pub const MAX_TICKS: u32 = 120;
/// Default tick period.
pub const DEFAULT_TICK: Duration = Duration::from_millis(120);

const PUCK_GLYPH: char = '●';
const PADDLE_GLYPH: char = '|';

/// Receiver of rendered output.
pub trait FrameSink {
    /// Append these lines.
    fn push_lines(&mut self, lines: Vec<String>);

    /// The game is over; no more lines will follow.
    fn complete(&mut self);
}

/// Collects everything into memory. Handy for headless runs.
#[derive(Debug, Default)]
pub struct VecSink {
    pub lines: Vec<String>,
    pub frames: usize,
    pub completions: usize,
}

impl FrameSink for VecSink {
    fn push_lines(&mut self, lines: Vec<String>) {
        self.frames += 1;
        self.lines.extend(lines);
    }

    fn complete(&mut self) {
        self.completions += 1;
    }
}

/// Puck position and per-axis unit velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puck {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Puck reached the left goal column
    LeftGoal,
    /// Puck reached the right goal column
    RightGoal,
    /// Tick limit reached
    Draw,
}

impl GameResult {
    /// Line printed after the final frame.
    pub fn message(self, home_name: &str) -> String {
        match self {
            GameResult::LeftGoal => "GOAL! Player 2 scores.".to_string(),
            GameResult::RightGoal => format!("GOAL! {} scores.", home_name),
            GameResult::Draw => "Draw. No winner.".to_string(),
        }
    }
}

/// Pure game state, stepped one tick at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub puck: Puck,
    /// Top row of the left paddle
    pub left_paddle: i32,
    /// Top row of the right paddle
    pub right_paddle: i32,
    pub ticks: u32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    /// Kick-off position.
    pub fn new() -> Self {
        Self {
            puck: Puck {
                x: 15,
                y: 4,
                dx: 1,
                dy: 1,
            },
            left_paddle: 3,
            right_paddle: 3,
            ticks: 0,
        }
    }

    fn covers(paddle_top: i32, y: i32) -> bool {
        y >= paddle_top && y < paddle_top + PADDLE_HEIGHT
    }

    /// Advance one tick and report the result if the game just ended.
    pub fn step(&mut self) -> Option<GameResult> {
        let puck = &mut self.puck;

        if puck.y + puck.dy < 0 || puck.y + puck.dy >= HEIGHT {
            puck.dy = -puck.dy;
        }
        if puck.x + puck.dx == 1 && Self::covers(self.left_paddle, puck.y) {
            puck.dx = -puck.dx;
        }
        if puck.x + puck.dx == WIDTH - 2 && Self::covers(self.right_paddle, puck.y) {
            puck.dx = -puck.dx;
        }

        puck.x += puck.dx;
        puck.y += puck.dy;

        if self.right_paddle + 1 < puck.y && self.right_paddle + PADDLE_HEIGHT < HEIGHT {
            self.right_paddle += 1;
        } else if self.right_paddle > puck.y && self.right_paddle > 0 {
            self.right_paddle -= 1;
        }

        self.ticks += 1;

        if self.puck.x <= 0 {
            Some(GameResult::LeftGoal)
        } else if self.puck.x >= WIDTH - 1 {
            Some(GameResult::RightGoal)
        } else if self.ticks >= MAX_TICKS {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// Render the bordered frame. Paddles are drawn over the puck.
    pub fn render(&self) -> Vec<String> {
        let border = format!("+{}+", "-".repeat(WIDTH as usize));
        let mut lines = Vec::with_capacity(HEIGHT as usize + 2);
        lines.push(border.clone());

        for y in 0..HEIGHT {
            let mut row = String::with_capacity(WIDTH as usize + 4);
            row.push('|');
            for x in 0..WIDTH {
                let glyph = if x == 0 && Self::covers(self.left_paddle, y) {
                    PADDLE_GLYPH
                } else if x == WIDTH - 1 && Self::covers(self.right_paddle, y) {
                    PADDLE_GLYPH
                } else if x == self.puck.x && y == self.puck.y {
                    PUCK_GLYPH
                } else {
                    ' '
                };
                row.push(glyph);
            }
            row.push('|');
            lines.push(row);
        }

        lines.push(border);
        lines
    }
}

/// A running game that owns its own tick deadline.
#[derive(Debug)]
pub struct AirHockey {
    field: Field,
    clock: SharedTimeSource,
    tick: Duration,
    home_name: String,
    deadline: Option<Deadline>,
    result: Option<GameResult>,
}

impl AirHockey {
    /// Start a game; the first tick is due one period from now.
    pub fn new(clock: SharedTimeSource, tick: Duration, home_name: impl Into<String>) -> Self {
        let deadline = Deadline::after(clock.now(), tick);
        info!(tick_ms = tick.as_millis() as u64, "air hockey started");
        Self {
            field: Field::new(),
            clock,
            tick,
            home_name: home_name.into(),
            deadline: Some(deadline),
            result: None,
        }
    }

    /// Run every tick that is due, pushing frames into `sink`.
    ///
    /// Returns the result on the poll that ended the game, `None` otherwise.
    pub fn poll(&mut self, sink: &mut dyn FrameSink) -> Option<GameResult> {
        let now = self.clock.now();
        while let Some(deadline) = self.deadline {
            if !deadline.is_due(now) {
                break;
            }
            self.deadline = Some(Deadline::after(deadline.due, self.tick));
            if let Some(result) = self.tick_once(sink) {
                return Some(result);
            }
        }
        None
    }

    /// Play to the end without waiting on the clock.
    pub fn run_to_end(&mut self, sink: &mut dyn FrameSink) -> GameResult {
        loop {
            if let Some(result) = self.result {
                return result;
            }
            if let Some(result) = self.tick_once(sink) {
                return result;
            }
        }
    }

    fn tick_once(&mut self, sink: &mut dyn FrameSink) -> Option<GameResult> {
        if self.result.is_some() {
            return None;
        }
        let outcome = self.field.step();
        sink.push_lines(self.field.render());

        let result = outcome?;
        debug!(ticks = self.field.ticks, ?result, "air hockey finished");
        self.deadline = None;
        self.result = Some(result);
        sink.push_lines(vec![result.message(&self.home_name)]);
        sink.complete();
        Some(result)
    }

    /// Current field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Result once the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TestTimeSource;

    fn frame(rows: &[&str]) -> Vec<String> {
        let border = format!("+{}+", "-".repeat(30));
        std::iter::once(border.clone())
            .chain(rows.iter().map(|r| r.to_string()))
            .chain(std::iter::once(border))
            .collect()
    }

    #[test]
    fn first_frame_matches_reference() {
        let mut field = Field::new();
        assert_eq!(field.step(), None);
        assert_eq!(field.puck, Puck { x: 16, y: 5, dx: 1, dy: 1 });
        assert_eq!(field.right_paddle, 4);

        let expected = frame(&[
            "|                              |",
            "|                              |",
            "|                              |",
            "||                             |",
            "||                            ||",
            "||               ●            ||",
            "|                             ||",
            "|                              |",
            "|                              |",
        ]);
        assert_eq!(field.render(), expected);
    }

    #[test]
    fn frames_are_eleven_lines_of_equal_width() {
        let lines = Field::new().render();
        assert_eq!(lines.len(), 11);
        for line in &lines {
            assert_eq!(line.chars().count(), 32);
        }
    }

    #[test]
    fn kickoff_game_ends_with_left_goal() {
        let mut field = Field::new();
        let mut result = None;
        while result.is_none() {
            result = field.step();
        }
        assert_eq!(result, Some(GameResult::LeftGoal));
        assert_eq!(field.ticks, 39);
    }

    #[test]
    fn puck_stays_inside_field() {
        let mut field = Field::new();
        loop {
            let done = field.step();
            assert!((0..WIDTH).contains(&field.puck.x), "x = {}", field.puck.x);
            assert!((0..HEIGHT).contains(&field.puck.y), "y = {}", field.puck.y);
            assert!(field.right_paddle >= 0 && field.right_paddle + PADDLE_HEIGHT <= HEIGHT);
            if done.is_some() {
                break;
            }
        }
    }

    #[test]
    fn left_paddle_never_moves() {
        let mut field = Field::new();
        while field.step().is_none() {
            assert_eq!(field.left_paddle, 3);
        }
    }

    #[test]
    fn wall_bounce_inverts_vertical_velocity() {
        let mut field = Field::new();
        field.puck = Puck { x: 10, y: HEIGHT - 1, dx: 1, dy: 1 };
        field.step();
        assert_eq!(field.puck.dy, -1);
        assert_eq!(field.puck.y, HEIGHT - 2);
    }

    #[test]
    fn right_paddle_returns_puck() {
        let mut field = Field::new();
        field.right_paddle = 3;
        field.puck = Puck { x: WIDTH - 3, y: 4, dx: 1, dy: 0 };
        field.step();
        assert_eq!(field.puck.dx, -1);
        assert_eq!(field.puck.x, WIDTH - 4);
    }

    #[test]
    fn unguarded_right_goal() {
        let mut field = Field::new();
        field.right_paddle = 0;
        field.puck = Puck { x: WIDTH - 2, y: 8, dx: 1, dy: 0 };
        assert_eq!(field.step(), Some(GameResult::RightGoal));
    }

    #[test]
    fn draw_after_max_ticks() {
        let mut field = Field::new();
        field.ticks = MAX_TICKS - 1;
        assert_eq!(field.step(), Some(GameResult::Draw));
    }

    #[test]
    fn left_goal_wins_over_draw() {
        let mut field = Field::new();
        field.ticks = MAX_TICKS - 1;
        field.left_paddle = 6;
        field.puck = Puck { x: 1, y: 2, dx: -1, dy: 0 };
        assert_eq!(field.step(), Some(GameResult::LeftGoal));
    }

    #[test]
    fn result_messages() {
        assert_eq!(GameResult::LeftGoal.message("Rushist"), "GOAL! Player 2 scores.");
        assert_eq!(GameResult::RightGoal.message("Rushist"), "GOAL! Rushist scores.");
        assert_eq!(GameResult::RightGoal.message("Ada"), "GOAL! Ada scores.");
        assert_eq!(GameResult::Draw.message("Rushist"), "Draw. No winner.");
    }

    #[test]
    fn poll_waits_for_tick_period() {
        let clock = TestTimeSource::shared();
        let mut game = AirHockey::new(clock.clone(), DEFAULT_TICK, "Rushist");
        let mut sink = VecSink::default();

        clock.advance(Duration::from_millis(119));
        assert_eq!(game.poll(&mut sink), None);
        assert_eq!(sink.frames, 0);

        clock.advance(Duration::from_millis(1));
        game.poll(&mut sink);
        assert_eq!(sink.frames, 1);

        clock.advance(Duration::from_millis(360));
        game.poll(&mut sink);
        assert_eq!(sink.frames, 4);
    }

    #[test]
    fn completion_fires_once_and_stops_frames() {
        let clock = TestTimeSource::shared();
        let mut game = AirHockey::new(clock.clone(), DEFAULT_TICK, "Rushist");
        let mut sink = VecSink::default();

        clock.advance(Duration::from_secs(60));
        assert_eq!(game.poll(&mut sink), Some(GameResult::LeftGoal));
        assert_eq!(sink.completions, 1);
        assert_eq!(sink.lines.last().map(String::as_str), Some("GOAL! Player 2 scores."));

        let frames = sink.frames;
        clock.advance(Duration::from_secs(60));
        assert_eq!(game.poll(&mut sink), None);
        assert_eq!(sink.frames, frames);
        assert_eq!(sink.completions, 1);
    }

    #[test]
    fn run_to_end_matches_timed_run() {
        let clock = TestTimeSource::shared();
        let mut headless = AirHockey::new(clock.clone(), DEFAULT_TICK, "Rushist");
        let mut headless_sink = VecSink::default();
        let result = headless.run_to_end(&mut headless_sink);

        let mut timed = AirHockey::new(clock.clone(), DEFAULT_TICK, "Rushist");
        let mut timed_sink = VecSink::default();
        for _ in 0..200 {
            clock.advance(DEFAULT_TICK);
            timed.poll(&mut timed_sink);
        }

        assert_eq!(timed.result(), Some(result));
        assert_eq!(timed_sink.lines, headless_sink.lines);
        // 39 frames plus the goal line
        assert_eq!(headless_sink.frames, 40);
        assert_eq!(headless.run_to_end(&mut headless_sink), result);
        assert_eq!(headless_sink.completions, 1);
    }
}
