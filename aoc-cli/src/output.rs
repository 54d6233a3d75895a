//! Printing of solver results and the closing summary

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Prints answers to stdout and failures to stderr
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Quiet mode prints the bare answer only
    pub fn print_result(&self, result: &SolverResult) {
        let label = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(answer), false) => println!("{label}: {answer} ({})", timings(result)),
            (Err(e), _) => eprintln!("{label}: Error - {e}"),
        }
    }

    /// Totals over `results` plus the wall-clock time since construction
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::of(results);
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", summary.solved, summary.failed);
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
        if let Some(speedup) = summary.speedup(elapsed) {
            println!("Speedup factor: {speedup:.2}x");
        }
    }
}

fn timings(result: &SolverResult) -> String {
    let solve = format!("solve: {}", format_duration(result.solve_duration));
    match result.parse_duration {
        Some(parse) => format!("parse: {}, {solve}", format_duration(parse)),
        None => solve,
    }
}

/// Aggregate counts and times; durations only count solved parts
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let solved: Vec<_> = results.iter().filter(|r| r.answer.is_ok()).collect();
        Self {
            solved: solved.len(),
            failed: results.len() - solved.len(),
            parse_time: solved.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved.iter().map(|r| r.solve_duration).sum(),
        }
    }

    /// Compute time over wall-clock time
    fn speedup(&self, elapsed: Duration) -> Option<f64> {
        if elapsed.is_zero() {
            return None;
        }
        let compute = (self.parse_time + self.solve_time).num_microseconds()?;
        Some(compute as f64 / 1_000_000.0 / elapsed.as_secs_f64())
    }
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Wall-clock counterpart of [`format_duration`]
fn format_std_duration(d: Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;

    fn result(part: u8, ok: bool) -> SolverResult {
        SolverResult {
            year: 2024,
            day: 16,
            part,
            answer: if ok {
                Ok("7036".to_string())
            } else {
                Err(ExecutorError::ChannelSend.into())
            },
            parse_duration: Some(TimeDelta::milliseconds(3)),
            solve_duration: TimeDelta::milliseconds(20),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(850)), "850µs");
        assert_eq!(format_duration(TimeDelta::microseconds(12_346)), "12.35ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-40)), "-40µs");
        assert_eq!(format_std_duration(Duration::from_millis(1_250)), "1.25s");
    }

    #[test]
    fn test_summary_counts_only_solved_time() {
        let summary = Summary::of(&[result(1, true), result(2, false)]);
        assert_eq!(
            summary,
            Summary {
                solved: 1,
                failed: 1,
                parse_time: TimeDelta::milliseconds(3),
                solve_time: TimeDelta::milliseconds(20),
            }
        );
        let speedup = summary.speedup(Duration::from_millis(46)).unwrap();
        assert!((speedup - 0.5).abs() < 1e-9);
        assert_eq!(summary.speedup(Duration::ZERO), None);
    }

    #[test]
    fn test_timings_without_parse() {
        let mut r = result(1, true);
        assert_eq!(timings(&r), "parse: 3.00ms, solve: 20.00ms");
        r.parse_duration = None;
        assert_eq!(timings(&r), "solve: 20.00ms");
    }
}
