//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Time spent parsing the input; `None` when parsing never happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        SolverResult {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: ExecutionContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs; shared by reference across the pool
struct ExecutionContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        let mut inputs = InputStore::new(config.input_dir.clone());
        if let (Some(path), Some(day)) = (&config.input_override, config.day_filter) {
            inputs = inputs.with_override(config.year, day, path.clone());
        }

        Ok(Self {
            context: ExecutionContext {
                registry,
                inputs,
                parallelize_by: config.parallelize_by,
                year: config.year,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.context.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.context;
        ctx.registry
            .storage()
            .iter_info()
            .filter(|info| info.year == ctx.year)
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.context.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.context.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work(&work, &tx, &self.context) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part differs from Day only inside run_work
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singletons = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel_grouped(singletons, &tx)
            }
        }
    }

    /// Run groups in parallel; items within a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let context = &self.context;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work(&work, tx, context) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same error as the result of every part of `work`
fn send_failure(
    tx: &Sender<SolverResult>,
    work: &WorkItem,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

/// Load the input for one day and solve its requested parts
fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    context: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match context.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            let error = ExecutorError::Input { year, day, source }.into();
            return send_failure(tx, work, error);
        }
    };

    if matches!(context.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, context)
    } else {
        run_parts_sequential(work, &input, tx, context)
    }
}

/// Each part parses its own copy of the input; results are re-ordered by the
/// aggregator downstream
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    context: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let registry = &context.registry;

    work.parts
        .clone()
        .into_par_iter()
        .map(|part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part(year, day, part, &mut *solver),
                Err(e) => SolverResult::failed(year, day, part, ExecutorError::from(e).into()),
            };
            send(tx, result).err()
        })
        .reduce_with(|err1, err2| match (err1, err2) {
            (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
            (None, e2) => e2,
        })
        .flatten()
        .map_or(Ok(()), Err)
}

/// Parse once, then solve the parts in order so later parts may reuse
/// earlier results
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    context: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match context.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_failure(tx, work, ExecutorError::from(e).into()),
    };
    for part in work.parts.clone() {
        send(tx, solve_part(year, day, part, &mut *solver))?;
    }
    Ok(())
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            parse_duration,
            ..SolverResult::failed(
                year,
                day,
                part,
                ExecutorError::Solver(e.into()).into(),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Part 1 sums the numbers, part 2 multiplies them
    struct Arith;

    impl AocParser for Arith {
        type SharedData<'a> = Vec<i64>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            input
                .split_whitespace()
                .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
                .collect()
        }
    }

    impl Solver for Arith {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.iter().sum::<i64>().to_string()),
                _ if shared.is_empty() => Err(SolveError::failed("nothing to multiply")),
                _ => Ok(shared.iter().product::<i64>().to_string()),
            }
        }
    }

    fn config(dir: &Path, parallelize_by: ParallelizeBy) -> Config {
        Config {
            year: 2024,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: dir.to_path_buf(),
            input_override: None,
            thread_count: 2,
            parallelize_by,
            quiet: true,
        }
    }

    fn executor(config: &Config) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Arith>(2024, 1)
            .and_then(|b| b.register_solver::<Arith>(2024, 2))
            .and_then(|b| b.register_solver::<Arith>(2024, 3))
            .and_then(|b| b.register_solver::<Arith>(2023, 1))
            .unwrap()
            .build();
        Executor::new(registry, config).unwrap()
    }

    /// Results as `(day, part, answer or error text)`, sorted
    fn run(executor: &Executor) -> Vec<(u8, u8, String)> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx
            .into_iter()
            .map(|r| {
                let text = r.answer.unwrap_or_else(|e| format!("error: {e}"));
                (r.day, r.part, text)
            })
            .collect();
        results.sort();
        results
    }

    fn write_inputs(dir: &Path) {
        fs::write(dir.join("2024_day01.txt"), "1 2 3\n").unwrap();
        fs::write(dir.join("2024_day02.txt"), "x\n").unwrap();
    }

    #[test]
    fn test_collect_filters_year_day_part() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path(), ParallelizeBy::Day);
        assert_eq!(executor(&cfg).collect_work_items().len(), 3);

        cfg.day_filter = Some(2);
        cfg.part_filter = Some(2);
        assert_eq!(
            executor(&cfg).collect_work_items(),
            vec![WorkItem {
                year: 2024,
                day: 2,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_every_mode_reports_every_part() {
        let temp = TempDir::new().unwrap();
        write_inputs(temp.path());

        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
            ParallelizeBy::Part,
        ] {
            let results = run(&executor(&config(temp.path(), mode)));
            assert_eq!(results.len(), 6, "{mode:?}");
            assert_eq!(results[0], (1, 1, "6".to_string()));
            assert_eq!(results[1], (1, 2, "6".to_string()));
            // Unparseable and missing inputs become per-part errors
            assert!(results[2].2.starts_with("error: Parse error"), "{:?}", results[2]);
            assert!(results[5].2.contains("not found"), "{:?}", results[5]);
        }
    }

    #[test]
    fn test_input_override() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.txt");
        fs::write(&custom, "4 5").unwrap();

        let mut cfg = config(&temp.path().join("missing"), ParallelizeBy::Sequential);
        cfg.day_filter = Some(3);
        cfg.input_override = Some(custom);
        let results = run(&executor(&cfg));
        assert_eq!(
            results,
            vec![(3, 1, "9".to_string()), (3, 2, "20".to_string())]
        );
    }
}
