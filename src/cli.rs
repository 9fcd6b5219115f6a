// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::HISTORY_LIMIT;
use crate::config::options::AppOptions;
use crate::data::StatsTable;
use crate::history::History;
use crate::progress::Progress;
use crate::runner::{self, WebSources};

pub struct Params {
    pub player: Option<String>,
    pub show_history: bool,
    pub limit: usize,
    pub db: Option<PathBuf>,
    pub model: Option<String>,
    pub no_log: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            player: None,
            show_history: false,
            limit: HISTORY_LIMIT,
            db: None,
            model: None,
            no_log: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let mut options = AppOptions::from_env();
    if let Some(db) = &params.db {
        options.db_path = db.clone();
    }
    if let Some(m) = &params.model {
        options.model = m.clone();
    }

    let history = if params.no_log {
        History::disabled()
    } else {
        History::open(&options.db_path)
    };

    if params.show_history {
        for rec in history.recent(params.limit) {
            println!(
                "{}  {}  {}",
                rec.timestamp.format("%Y-%m-%d %H:%M"),
                rec.query,
                rec.source
            );
        }
        return Ok(());
    }

    let player = params.player.ok_or("Missing player name (see --help)")?;
    let sources = WebSources::new(&options)?;

    let mut prog = CliProgress;
    let lookup = runner::run(&player, &sources, &history, Some(&mut prog))?;

    println!();
    println!("Source: {}", lookup.label.label());
    println!("Image:  {}", lookup.image_url);
    println!();
    print_table(&lookup.table);
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--history" => params.show_history = true,
            "-n" | "--limit" => {
                let v: usize = args.next().ok_or("Missing value for --limit")?.parse()?;
                params.limit = v;
            }
            "--db" => params.db = Some(PathBuf::from(args.next().ok_or("Missing value for --db")?)),
            "--model" => params.model = Some(args.next().ok_or("Missing value for --model")?),
            "--no-log" => params.no_log = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            name => {
                // Bare words accumulate into the player name
                match &mut params.player {
                    Some(p) => {
                        p.push(' ');
                        p.push_str(name);
                    }
                    None => params.player = Some(s!(name)),
                }
            }
        }
    }

    Ok(params)
}

/* ---------- output ---------- */

/// Column-aligned plain-text table.
fn print_table(table: &StatsTable) {
    let cols = table.column_count();
    if cols == 0 {
        return;
    }

    let mut widths = vec![0usize; cols];
    let measure = |widths: &mut Vec<usize>, row: &[String]| {
        for (i, c) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(c.chars().count());
        }
    };
    if let Some(h) = &table.headers {
        measure(&mut widths, h);
    }
    for row in &table.rows {
        measure(&mut widths, row);
    }

    let print_row = |row: &[String], widths: &[usize]| {
        let mut line = String::new();
        for i in 0..widths.len() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!("{:<w$}  ", cell, w = widths[i]));
        }
        println!("{}", line.trim_end());
    };

    if let Some(h) = &table.headers {
        print_row(h, &widths);
        println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (cols - 1)));
    }
    for row in &table.rows {
        print_row(row, &widths);
    }
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: &str) {
        eprintln!("  ✓ {stage}");
    }
}
