mod os_signal_termination;
mod parser;
mod report;
mod result;

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use parser::parse_instance;
use parser::ParseError;
use report::format_result;
use report::FAILURE;
use result::TinctError;
use result::TinctResult;
use tinct_solver::asserts::TINCT_ASSERT_LEVEL_DEFINITION;
use tinct_solver::asserts::TINCT_ASSERT_MODERATE;
use tinct_solver::results::SatisfactionResult;
use tinct_solver::statistics::configure_statistic_logging;
use tinct_solver::termination::Combinator;
use tinct_solver::termination::TimeBudget;
use tinct_solver::Solver;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve. Each line of the file is one of:
    ///  - 'colors=<k>', the number of colours (required),
    ///  - '<u>,<v>', a constraint requiring the vertices u and v to get different colours,
    ///  - '# ...', a comment.
    ///
    /// The result is printed as a single line: 'SOLUTION: {vertex: colour, ...}' when a colouring
    /// was found, 'failure' when none exists (or the instance is malformed), and 'unknown' when
    /// the solver was stopped before it reached a verdict.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The time budget for the search, in milliseconds.
    ///
    /// When the budget is spent the solver stops and reports 'unknown'. Without a budget the
    /// solver runs until it reaches a verdict or receives SIGINT/SIGTERM.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// Enables log messages of the solver (written to stderr).
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Prints the statistics of the search after the result.
    #[arg(short = 's', long = "log-statistics", default_value_t = false)]
    log_statistics: bool,

    /// If `--verbose` is enabled removes the timestamp from the log messages.
    #[arg(long = "omit-timestamp", default_value_t = false)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled removes the call site information from the log messages.
    /// Call site is the file and line in it that originated the message.
    #[arg(long = "omit-call-site", default_value_t = false)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) {
    if log_statistics {
        configure_statistic_logging("c STAT", None, None, None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> TinctResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    );

    if TINCT_ASSERT_LEVEL_DEFINITION >= TINCT_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the Tinct assert level is set to {TINCT_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let file = File::open(&args.instance_path).map_err(|e| {
        warn!("{e}");
        TinctError::invalid_instance(args.instance_path.display())
    })?;

    let problem = match parse_instance(BufReader::new(file)) {
        Ok(problem) => problem,
        Err(e @ ParseError::Io(_)) => return Err(e.into()),
        Err(e) => {
            // A malformed instance has no colouring, as far as the caller is concerned.
            warn!("{e}");
            println!("{FAILURE}");
            return Ok(());
        }
    };

    let mut termination = Combinator::new(
        args.time_limit
            .map(|time_limit| TimeBudget::starting_now(Duration::from_millis(time_limit))),
        OsSignal::install()?,
    );

    match Solver::new(&problem) {
        Ok(mut solver) => {
            let result = solver.satisfy(&mut termination);
            println!("{}", format_result(&result));
            solver.log_statistics();
        }
        Err(reason) => {
            info!("No colouring exists: {reason}");
            println!("{}", format_result(&SatisfactionResult::Unsatisfiable(reason)));
        }
    }

    Ok(())
}
