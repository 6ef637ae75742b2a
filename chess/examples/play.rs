// Simple command-line application to play chess with a friend

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use tchess::{board::PrettyStyle, Cell, Game};
use tracing::Level;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Color and type names of every cell
    Plain,
    /// Unicode chess glyphs
    Utf8,
}

impl From<Style> for PrettyStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Plain => PrettyStyle::Plain,
            Style::Utf8 => PrettyStyle::Utf8,
        }
    }
}

/// Two-player chess in the terminal
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// How to draw the board
    #[arg(short, long, value_enum, default_value_t = Style::Utf8)]
    style: Style,

    /// Verbosity level of the log written to stderr
    #[arg(short, long, default_value = "warn")]
    verbosity: Level,
}

fn prompt(stdin: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut s = String::new();
    if stdin.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

fn read_cell(stdin: &mut impl BufRead, text: &str) -> io::Result<Option<Cell>> {
    loop {
        let Some(s) = prompt(stdin, text)? else {
            return Ok(None);
        };
        match s.parse() {
            Ok(cell) => return Ok(Some(cell)),
            Err(e) => println!("invalid argument {:?}: {}", s, e),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity)
        .with_writer(io::stderr)
        .init();

    let mut stdin = io::stdin().lock();
    let mut game = Game::new_initial();
    let mut status = String::new();

    loop {
        println!("{}", game.board().pretty(args.style.into()));
        println!(
            "score: {}, moves: [{}]",
            game.score(),
            game.moves_number()
        );
        println!("status: {}", status);
        status.clear();

        let Some(command) = prompt(&mut stdin, "Enter command (move[m], undo[u], quit[q]): ")?
        else {
            break;
        };
        match command.as_str() {
            "q" | "quit" => break,
            "u" | "undo" => {
                status = match game.undo() {
                    Ok(()) => "move has been undone".to_string(),
                    Err(e) => e.to_string(),
                };
            }
            "m" | "move" => {
                println!("Turn of {} to move", game.side());
                let Some(from) = read_cell(&mut stdin, "Enter 'from' position (e2): ")? else {
                    break;
                };
                let Some(to) = read_cell(&mut stdin, "Enter 'to' position (e4): ")? else {
                    break;
                };
                if let Err(e) = game.try_move(from, to) {
                    status = e.to_string();
                }
            }
            other => status = format!("unknown command {:?}", other),
        }
        println!();
    }

    Ok(())
}
