use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::render;
use crate::session::Session;

pub fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn confirm(label: &str) -> Result<bool> {
    let answer = prompt(&format!("{label} [y/N]"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Quit,
    History,
    Rerun(usize),
    Help,
    Question(String),
}

fn parse_line(line: &str) -> Line {
    let l = line.trim();
    match l {
        "/quit" | "/exit" | "/q" => Line::Quit,
        "/history" | "/h" => Line::History,
        "/help" | "?" => Line::Help,
        _ => {
            if let Some(rest) = l.strip_prefix("/rerun") {
                if let Ok(n) = rest.trim().parse::<usize>() {
                    return Line::Rerun(n);
                }
            }
            Line::Question(l.to_string())
        }
    }
}

const HELP: &str = "Type a question and press Enter.\n  /history      list recent questions\n  /rerun N      ask question N again\n  /quit         leave";

pub fn run_repl(session: &mut Session) -> Result<()> {
    println!("studymatch: ask about your course. /help for commands.\n");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().ok();
        let Some(line) = lines.next() else { break };
        let line = line?;

        let reply = match parse_line(&line) {
            Line::Quit => break,
            Line::Help => {
                println!("{HELP}\n");
                continue;
            }
            Line::History => {
                println!("{}", render::render_history(session.history()));
                continue;
            }
            Line::Rerun(n) if n >= 1 => session.rerun(n - 1, chrono::Utc::now()),
            Line::Rerun(_) => {
                println!("History entries are numbered from 1.\n");
                continue;
            }
            Line::Question(q) => session.ask(&q, chrono::Utc::now()),
        };

        match reply {
            Ok(r) => println!("{}\n", render::render_reply(&r, session.knowledge())),
            Err(e) => println!("{e}\n"),
        }
    }

    Ok(())
}
