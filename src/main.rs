//! Boggle Solver CLI
//!
//! Solve boards, check typed words, and highlight word paths from the command line.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use boggle_solver::{
    load_dictionary, logging, query, read_word_list, Board, MatchMode, Solver, Validation,
    WordQuery, DEFAULT_MIN_WORD_LEN, MAX_CELLS,
};
use clap::{Parser, Subcommand};

/// Find words on a Boggle-style letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list file, one word per line. The built-in list is a small
    /// sample; pass a full list (tens of thousands of words) for real play.
    #[arg(short, long, global = true, env = "BOGGLE_DICT")]
    dict: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every dictionary word on one or more boards
    Solve {
        /// Board text, rows separated by '/', e.g. "cats/ored/qlin/esta"
        #[arg(short, long = "board", required = true)]
        boards: Vec<String>,

        /// Minimum word length to report
        #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_WORD_LEN)]
        min_len: usize,
    },
    /// Check whether typed text can be traced on a board
    Check {
        typed: String,

        #[arg(short, long)]
        board: String,
    },
    /// Show every path that spells a word
    Paths {
        word: String,

        #[arg(short, long)]
        board: String,
    },
    /// Validate each line typed on stdin against a board
    Interactive {
        #[arg(short, long)]
        board: String,
    },
    /// Browse the word list by fragment or '_' wildcard pattern
    Words {
        /// Fragment to match, or a pattern like "c_t" ('_' is any one letter)
        #[arg(default_value = "")]
        pattern: String,

        /// Where the fragment must occur: starts-with, ends-with, contains
        #[arg(long, default_value_t = MatchMode::StartsWith)]
        mode: MatchMode,

        /// Minimum word length
        #[arg(long, default_value_t = 1)]
        min_len: usize,

        /// Maximum word length (0 for no limit)
        #[arg(long, default_value_t = 0)]
        max_len: usize,

        /// Words per page
        #[arg(short, long, default_value_t = PAGE_SIZE)]
        limit: usize,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
}

const PAGE_SIZE: usize = 50;

fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    logging::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let words = match &cli.dict {
        Some(path) => read_word_list(path)?,
        None => load_dictionary(),
    };
    let solver = Solver::with_words(&words);
    log::info!(
        "Loaded {} words in {:.3}s",
        words.len(),
        t_load.elapsed().as_secs_f64()
    );

    match cli.command {
        Command::Solve { boards, min_len } => {
            let boards = boards
                .iter()
                .map(|text| Board::parse(text))
                .collect::<Result<Vec<_>, _>>()?;
            for board in boards.iter().filter(|b| b.len() > MAX_CELLS) {
                log::warn!(
                    "{}x{} board is larger than {} cells; solving may be slow",
                    board.rows(),
                    board.cols(),
                    MAX_CELLS
                );
            }

            let t_solve = Instant::now();
            let results = solver.solve_batch(&boards, min_len)?;
            let elapsed = t_solve.elapsed();

            for (board, found) in boards.iter().zip(&results) {
                println!("{board}");
                println!();
                let mut sorted: Vec<&String> = found.iter().collect();
                sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                for word in sorted {
                    println!("{}", word.to_uppercase());
                }
                println!();
                println!("{} words (min length {})", found.len(), min_len);
                println!();
            }
            eprintln!("Solved {} board(s) in {:.2?}", boards.len(), elapsed);
        }
        Command::Check { typed, board } => {
            let board = Board::parse(&board)?;
            let validation = solver.validate(&typed, &board)?;
            print_validation(&solver, &typed, &validation)?;
        }
        Command::Paths { word, board } => {
            let board = Board::parse(&board)?;
            let paths = solver.find_paths(&word, &board)?;
            if paths.is_empty() {
                println!("{} cannot be traced on this board.", word.to_uppercase());
            }
            for path in &paths {
                println!("{}", format_path(&board, path));
            }
        }
        Command::Interactive { board } => {
            let board = Board::parse(&board)?;
            run_interactive(&solver, &board)?;
        }
        Command::Words {
            pattern,
            mode,
            min_len,
            max_len,
            limit,
            page,
        } => {
            let filter = WordQuery::new(&pattern)
                .mode(mode)
                .lengths(min_len, Some(max_len));
            let matched = query(&words, &filter);

            let limit = limit.max(1);
            let pages = matched.len().div_ceil(limit).max(1);
            let page = page.clamp(1, pages);
            for word in matched.iter().skip((page - 1) * limit).take(limit) {
                println!("{}", word.to_uppercase());
            }
            println!();
            println!("{} words · Page {} of {}", matched.len(), page, pages);
        }
    }

    Ok(())
}

fn run_interactive(solver: &Solver, board: &Board) -> Result<(), Box<dyn std::error::Error>> {
    println!("{board}");
    println!();
    println!("Type a word and press enter. An empty line or 'quit' exits.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let typed = line.trim();
        if typed.is_empty() || typed.eq_ignore_ascii_case("quit") {
            break;
        }

        let validation = solver.validate(typed, board)?;
        print_validation(solver, typed, &validation)?;
    }

    Ok(())
}

fn print_validation(
    solver: &Solver,
    typed: &str,
    validation: &Validation,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}: {}", typed.to_uppercase(), validation.status);
    if validation.is_valid() {
        let legal = solver.is_word(typed)?;
        println!(
            "  {} the dictionary",
            if legal { "✓ in" } else { "✗ not in" }
        );
        let longer = solver
            .dictionary()?
            .words_with_prefix(typed)
            .into_iter()
            .filter(|w| w.chars().count() > typed.chars().count())
            .count();
        if longer > 0 {
            println!("  {longer} longer word(s) start this way");
        }
        for path in &validation.complete_paths {
            println!("  path: {path:?}");
        }
    } else if let Some(deepest) = validation.deepest_partial() {
        println!("  stops after: {deepest:?}");
    }
    Ok(())
}

fn format_path(board: &Board, path: &[usize]) -> String {
    path.iter()
        .map(|&i| {
            format!(
                "{}({},{})",
                board.tile(i).to_uppercase(),
                i / board.cols(),
                i % board.cols()
            )
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}
