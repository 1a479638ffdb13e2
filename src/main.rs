use advent2024::{read_input, solve};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "advent2024", version, about = "Advent of Code 2024 solutions")]
struct Args {
    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,
    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,
    /// Run on example N (`day{DAY}test{N}.in`) instead of the puzzle input
    #[arg(long)]
    test: Option<u32>,
    /// Directory holding the `day{N}.in` and `day{N}test{T}.in` files
    #[arg(long, default_value = "inputs")]
    input_dir: PathBuf,
    /// More logging; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let input = read_input(&args.input_dir, args.day, args.test)?;
    let time = Instant::now();
    println!("{}", solve(args.day, args.part, &input)?);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
