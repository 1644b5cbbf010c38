//! Command-line schedule generator.
//!
//! Usage: `u-timetable [INPUT] [OUTPUT]`, defaulting to `lectures.txt`
//! and `schedules.txt` in the working directory. Reads candidate
//! sections from INPUT, writes every ranked schedule to OUTPUT as a
//! text grid, and prints per-schedule summary lines to stdout.
//!
//! Parsing is lenient: malformed lines are skipped with a logged
//! warning. Structurally invalid sections (empty course codes,
//! inverted time ranges) abort the run before generation.

use std::env;
use std::fs;
use std::io::Write as _;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info, warn};

use u_timetable::generator::generate_schedules;
use u_timetable::ingest::{parse_sections, ParseOptions};
use u_timetable::render::{render_grid, render_summary, GridOptions, TimetableGrid};
use u_timetable::validation::validate_sections;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let input_path = args.get(1).map(String::as_str).unwrap_or("lectures.txt");
    let output_path = args.get(2).map(String::as_str).unwrap_or("schedules.txt");

    match run(input_path, output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &str, output_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let input = fs::read_to_string(input_path)?;

    let outcome = parse_sections(&input, &ParseOptions::new())?;
    if !outcome.is_clean() {
        warn!(
            "Skipped {} malformed line(s) in {input_path}",
            outcome.skipped.len()
        );
    }

    if let Err(errors) = validate_sections(&outcome.sections) {
        for e in &errors {
            error!("{e}");
        }
        return Err(format!("{} invalid section(s) in {input_path}", errors.len()).into());
    }

    let schedules = generate_schedules(&outcome.sections);
    info!(
        "Generated {} schedule(s) from {} section(s)",
        schedules.len(),
        outcome.sections.len()
    );

    let mut file = fs::File::create(output_path)?;
    let options = GridOptions::new();

    for (i, schedule) in schedules.iter().enumerate() {
        let grid = TimetableGrid::build(schedule, &options);
        write!(file, "\nSchedule {}\n{}\n", i + 1, render_grid(&grid))?;

        println!("Schedule {}:", i + 1);
        print!("{}", render_summary(schedule));
        println!();
    }

    if schedules.is_empty() {
        println!("No schedules found.");
    }
    println!("Schedules have been saved to {output_path}");

    Ok(())
}
