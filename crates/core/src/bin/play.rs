//! Terminal checkers: type `row col` to select a piece or a destination

use std::io::{self, BufRead, Write};

use checkers_core::{analyze_position, GameSession};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    println!("Checkers");
    println!("==================");
    print_help();

    let mut session = GameSession::new();
    print_state(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} > ", session.turn());
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("[ERROR] Failed to read input: {}", e);
                std::process::exit(1);
            }
            None => break,
        };

        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "help" | "?" => {
                print_help();
                continue;
            }
            "reset" => {
                session.reset();
                print_state(&session);
                continue;
            }
            input => {
                let Some((row, col)) = parse_square(input) else {
                    println!("Expected `row col`, got '{}'", input);
                    continue;
                };
                if !session.select(row, col) {
                    println!("Nothing to do at ({}, {})", row, col);
                }
                print_state(&session);
            }
        }

        if let Some(winner) = session.winner() {
            println!();
            println!("[OK] {} wins!", winner);
            break;
        }
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  <row> <col>   Select a piece, or move the selected piece there");
    println!("  reset         Start a new game");
    println!("  quit          Leave");
    println!();
    println!("Pieces: r/w are men, R/W are kings. Red moves up, White moves down.");
    println!();
}

fn print_state(session: &GameSession) {
    println!();
    print!("{}", session.board());

    let info = analyze_position(session);
    println!(
        "{} to move: {} piece(s) can move{}",
        info.side_to_move,
        info.movable_pieces,
        if info.captures_available { ", captures available" } else { "" }
    );

    if let Some(piece) = session.selected() {
        let targets: Vec<String> = session
            .valid_moves()
            .iter()
            .map(|(square, captured)| match captured.len() {
                0 => square.to_string(),
                n => format!("{} x{}", square, n),
            })
            .collect();
        println!("Selected {}: {}", piece.square(), targets.join(", "));
    }
}

fn parse_square(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}
