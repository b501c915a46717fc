use std::io::{self, BufRead, Write};

use tictactoe_engine::{
    Board, GameState, GameStatus, Mark, Outcome, WinningLine, is_valid_move, select_move,
};

use crate::config::RunnerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { row: usize, col: usize },
    Restart,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let trimmed = input.trim();
    match trimmed {
        "restart" => return Ok(Command::Restart),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let mut parts = trimmed.split_whitespace();
    let row = parts.next().and_then(|p| p.parse::<usize>().ok());
    let col = parts.next().and_then(|p| p.parse::<usize>().ok());

    match (row, col, parts.next()) {
        (Some(row), Some(col), None) if row < 3 && col < 3 => Ok(Command::Move { row, col }),
        _ => Err(format!(
            "Expected 'row col' with values 0..2, 'restart' or 'quit', got '{}'",
            trimmed
        )),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scores {
    /// The human plays X, the computer plays O. Called once per finished
    /// game; `restart` never touches the tally.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.human_wins += 1,
            GameStatus::OWon => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::Empty => '.',
        Mark::X => 'X',
        Mark::O => 'O',
    }
}

pub fn render_board(board: &Board, highlight: Option<&WinningLine>) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, cells) in board.iter().enumerate() {
        out.push_str(&format!("{} ", row));
        for (col, &cell) in cells.iter().enumerate() {
            let highlighted = highlight
                .map(|line| line.cells.iter().any(|p| p.row == row && p.col == col))
                .unwrap_or(false);
            if highlighted {
                out.push_str(&format!("[{}] ", mark_char(cell)));
            } else {
                out.push_str(&format!(" {}  ", mark_char(cell)));
            }
        }
        out.push('\n');
    }
    out
}

pub struct App {
    config: RunnerConfig,
    state: GameState,
    scores: Scores,
}

impl App {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
            scores: Scores::default(),
        }
    }

    pub fn run(&mut self) -> Result<(), String> {
        println!(
            "{} plays X and moves first, {} plays O.",
            self.config.human_name, self.config.computer_name
        );
        println!("Enter moves as 'row col' (0..2), or 'restart' / 'quit'.");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("\n{}", render_board(self.state.board(), None));
            print!("Your move: ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            let line = match lines.next() {
                Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
                None => return Ok(()),
            };

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Restart) => {
                    self.state.restart();
                    tictactoe_engine::log!("Game restarted");
                    continue;
                }
                Ok(Command::Move { row, col }) => {
                    if !is_valid_move(self.state.board(), row, col) {
                        println!("Cell ({}, {}) is not available.", row, col);
                        continue;
                    }
                    self.state.apply_move(row, col);
                    tictactoe_engine::log!("{} played ({}, {})", self.config.human_name, row, col);
                }
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            }

            if self.state.status() == GameStatus::InProgress {
                let pos = select_move(self.state.board(), Mark::O)?;
                self.state.apply_move(pos.row, pos.col);
                tictactoe_engine::log!(
                    "{} played ({}, {})",
                    self.config.computer_name,
                    pos.row,
                    pos.col
                );
            }

            if self.state.status() != GameStatus::InProgress
                && !self.finish_game(&mut lines)?
            {
                return Ok(());
            }
        }
    }

    /// Announces the result, updates the tally and waits for 'restart' or
    /// 'quit'. Returns false when the player wants out.
    fn finish_game(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<bool, String> {
        let status = self.state.status();
        self.scores.record(status);

        let highlight = match self.state.outcome() {
            Outcome::Win(line) if self.config.highlight_winning_line => Some(line),
            _ => None,
        };
        println!("\n{}", render_board(self.state.board(), highlight.as_ref()));

        match status {
            GameStatus::XWon => println!("X wins ({})", self.config.human_name),
            GameStatus::OWon => println!("O wins ({})", self.config.computer_name),
            GameStatus::Draw => println!("It's a tie!"),
            GameStatus::InProgress => {}
        }
        println!(
            "{}: {}  {}: {}  Ties: {}",
            self.config.human_name,
            self.scores.human_wins,
            self.config.computer_name,
            self.scores.computer_wins,
            self.scores.draws
        );

        loop {
            print!("Type 'restart' to play again, 'quit' to exit: ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            let line = match lines.next() {
                Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
                None => return Ok(false),
            };

            match parse_command(&line) {
                Ok(Command::Restart) => {
                    self.state.restart();
                    return Ok(true);
                }
                Ok(Command::Quit) => return Ok(false),
                _ => continue,
            }
        }
    }
}
