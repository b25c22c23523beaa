//! Parallel executor for running puzzle units

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::request::{RunRequest, WorkItem};
use aoc_solver::{
    Answer, InputError, InputLoader, InputSet, PuzzleId, PuzzlePart, PuzzleUnit, SolverError,
    SolverRegistry,
};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Once};
use std::thread;
use std::time::{Duration, Instant};

/// Result of running one part
#[derive(Debug)]
pub struct ExecutionResult {
    pub part: PuzzlePart,
    pub outcome: Result<Answer, SolverError>,
    pub elapsed: TimeDelta,
}

/// Lifecycle of one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Pending,
    Loading,
    Solving,
    Succeeded,
    Failed,
}

impl TargetState {
    fn advance(&mut self, id: PuzzleId, next: TargetState) {
        tracing::debug!(%id, from = ?*self, to = ?next, "target state");
        *self = next;
    }
}

/// Parallel executor for running puzzle units
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker needs to run a target, shared read-only
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    loader: InputLoader,
    request: RunRequest,
    variant: Option<String>,
    timeout: Option<Duration>,
    parallelize_by: ParallelizeBy,
}

impl SyncExecutorConfig {
    fn load_input(&self, unit: &dyn PuzzleUnit) -> Result<InputSet, InputError> {
        self.loader.load(unit, self.variant.as_deref())
    }
}

thread_local! {
    static SOLVING: Cell<bool> = const { Cell::new(false) };
}

/// Route panics raised inside a solver to the log instead of stderr
///
/// Those panics are already reported as failed parts. Panics anywhere else
/// still reach the previous hook.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if SOLVING.with(Cell::get) {
                let thread = thread::current();
                tracing::debug!(
                    thread = thread.name().unwrap_or("<unnamed>"),
                    location = %info.location().map(ToString::to_string).unwrap_or_default(),
                    message = %panic_message(info.payload()),
                    "solver panicked"
                );
            } else {
                previous(info);
            }
        }));
    });
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                loader: InputLoader::new(config.input_dir.clone()),
                request: config.request.clone(),
                variant: config.variant.clone(),
                timeout: config.timeout,
                parallelize_by: config.parallelize_by,
            },
            thread_pool,
        })
    }

    /// Expand the request against the registry
    pub fn collect_work_items(&self) -> Result<Vec<WorkItem>, aoc_solver::InvalidPuzzleId> {
        let cfg = &self.sync_executor_config;
        cfg.request.work_items(&cfg.registry)
    }

    /// Reject a request for a single day that cannot run at all
    ///
    /// With one day there is no meaningful partial report, so an unknown day
    /// or a missing input fails the whole request instead.
    pub fn preflight(&self) -> Result<(), SolverError> {
        let cfg = &self.sync_executor_config;
        let Some(id) = cfg.request.single_day()? else {
            return Ok(());
        };
        let unit = cfg.registry.resolve(id)?;
        let path = cfg.loader.path_for(unit.as_ref(), cfg.variant.as_deref());
        if !path.is_file() {
            return Err(InputError::NotFound { path }.into());
        }
        Ok(())
    }

    /// Execute all work items and send results to channel
    pub fn execute(
        &self,
        work_items: Vec<WorkItem>,
        tx: Sender<ExecutionResult>,
    ) -> Result<(), ArcExecutorError> {
        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_target(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.id.year())
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            ParallelizeBy::Day => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<ExecutionResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .filter_map(|work| run_target(&work, tx, sync_executor_config).err())
                .reduce_with(ArcExecutorError::combine)
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<ExecutionResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .filter_map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_target(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(ArcExecutorError::combine)
                .map_or(Ok(()), Err)
        })
    }
}

/// Run every requested part of one target
///
/// Failures of the target or its parts become results; only a closed channel
/// is an error.
fn run_target(
    work: &WorkItem,
    tx: &Sender<ExecutionResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let id = work.id;
    let send = |result: ExecutionResult| {
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
    };
    let mut state = TargetState::Pending;

    let unit: Arc<dyn PuzzleUnit> = match cfg.registry.resolve(id) {
        Ok(unit) => Arc::from(unit),
        Err(e) => {
            tracing::debug!(%id, error = %e, "target not registered");
            state.advance(id, TargetState::Failed);
            for &part in &work.parts {
                let error = SolverError::NotRegistered(id);
                send(failed_before_solving(id.part(part), error, TimeDelta::zero()))?;
            }
            return Ok(());
        }
    };

    state.advance(id, TargetState::Loading);
    let start = Instant::now();
    let input = match cfg.load_input(unit.as_ref()) {
        Ok(input) => Arc::new(input),
        Err(e) => {
            let elapsed = elapsed_since(start);
            tracing::debug!(%id, error = %e, "input unavailable");
            state.advance(id, TargetState::Failed);
            for &part in &work.parts {
                send(failed_before_solving(id.part(part), replicate(&e).into(), elapsed))?;
            }
            return Ok(());
        }
    };

    state.advance(id, TargetState::Solving);
    let mut all_succeeded = true;
    for &part in &work.parts {
        let result = solve_part(&unit, &input, part, cfg.timeout);
        all_succeeded &= result.outcome.is_ok();
        send(result)?;
    }
    state.advance(
        id,
        if all_succeeded {
            TargetState::Succeeded
        } else {
            TargetState::Failed
        },
    );
    Ok(())
}

fn failed_before_solving(
    part: PuzzlePart,
    error: SolverError,
    elapsed: TimeDelta,
) -> ExecutionResult {
    ExecutionResult {
        part,
        outcome: Err(error),
        elapsed,
    }
}

/// Copy of an input error for each part it fails
fn replicate(error: &InputError) -> InputError {
    match error {
        InputError::NotFound { path } => InputError::NotFound { path: path.clone() },
        InputError::Io { path, source } => InputError::Io {
            path: path.clone(),
            source: std::io::Error::new(source.kind(), source.to_string()),
        },
    }
}

/// Solve one part under a measured span
fn solve_part(
    unit: &Arc<dyn PuzzleUnit>,
    input: &Arc<InputSet>,
    part: u8,
    timeout: Option<Duration>,
) -> ExecutionResult {
    let start = Instant::now();
    let outcome = match timeout {
        Some(limit) => solve_guarded(unit, input, part, limit),
        None => solve_caught(unit.as_ref(), input, part),
    };
    ExecutionResult {
        part: unit.id().part(part),
        outcome,
        elapsed: elapsed_since(start),
    }
}

/// Solve on the current thread, turning a panic into a failure
fn solve_caught(unit: &dyn PuzzleUnit, input: &InputSet, part: u8) -> Result<Answer, SolverError> {
    let was_solving = SOLVING.replace(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| unit.solve(part, input)));
    SOLVING.set(was_solving);
    outcome.unwrap_or_else(|payload| Err(SolverError::Aborted(panic_message(payload.as_ref()))))
}

/// Solve on a watched thread, giving up after `limit`
///
/// A part that overruns keeps its thread until it returns; its result is
/// discarded.
fn solve_guarded(
    unit: &Arc<dyn PuzzleUnit>,
    input: &Arc<InputSet>,
    part: u8,
    limit: Duration,
) -> Result<Answer, SolverError> {
    let (result_tx, result_rx) = mpsc::channel();
    let (worker_unit, worker_input) = (Arc::clone(unit), Arc::clone(input));
    let spawned = thread::Builder::new()
        .name(format!("{} part {part}", unit.id()))
        .spawn(move || {
            let _ = result_tx.send(solve_caught(worker_unit.as_ref(), &worker_input, part));
        });
    if let Err(e) = spawned {
        return Err(SolverError::Aborted(format!("could not start solver thread: {e}")));
    }

    match result_rx.recv_timeout(limit) {
        Ok(outcome) => outcome,
        Err(RecvTimeoutError::Timeout) => {
            tracing::warn!(part = %unit.id().part(part), ?limit, "part timed out");
            Err(SolverError::Timeout { part, limit })
        }
        Err(RecvTimeoutError::Disconnected) => Err(SolverError::Aborted(
            "solver thread exited without a result".to_string(),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

fn elapsed_since(start: Instant) -> TimeDelta {
    TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Report;
    use aoc_solver::{ErrorKind, RegistryBuilder, SolveError};
    use std::borrow::Cow;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    type Behaviour = fn(u8, &InputSet) -> Result<Answer, SolverError>;

    struct Stub {
        id: PuzzleId,
        parts: u8,
        file: Option<&'static str>,
        behaviour: Behaviour,
    }

    impl PuzzleUnit for Stub {
        fn id(&self) -> PuzzleId {
            self.id
        }

        fn parts(&self) -> u8 {
            self.parts
        }

        fn input_file(&self) -> Cow<'static, str> {
            match self.file {
                Some(name) => Cow::Borrowed(name),
                None => Cow::Owned(self.id.default_input_file()),
            }
        }

        fn solve(&self, part: u8, input: &InputSet) -> Result<Answer, SolverError> {
            if !(1..=self.parts).contains(&part) {
                return Err(SolveError::PartOutOfRange(part).into());
            }
            (self.behaviour)(part, input)
        }
    }

    fn count_lines(part: u8, input: &InputSet) -> Result<Answer, SolverError> {
        Ok(Answer::from(input.len() * usize::from(part)))
    }

    fn fails_part_one(part: u8, input: &InputSet) -> Result<Answer, SolverError> {
        match part {
            1 => Err(SolveError::failed("malformed claim").into()),
            _ => count_lines(part, input),
        }
    }

    fn panics(_part: u8, _input: &InputSet) -> Result<Answer, SolverError> {
        panic!("index out of bounds")
    }

    fn sleeps(part: u8, input: &InputSet) -> Result<Answer, SolverError> {
        thread::sleep(Duration::from_millis(500));
        count_lines(part, input)
    }

    fn registry(units: &[(u8, Behaviour)]) -> SolverRegistry {
        registry_with_files(&units.iter().map(|&(day, b)| (day, None, b)).collect::<Vec<_>>())
    }

    fn registry_with_files(units: &[(u8, Option<&'static str>, Behaviour)]) -> SolverRegistry {
        units
            .iter()
            .fold(RegistryBuilder::new(), |builder, &(day, file, behaviour)| {
                let id = PuzzleId::new(2018, day).unwrap();
                builder
                    .register(2018, day, 2, move || {
                        Box::new(Stub {
                            id,
                            parts: 2,
                            file,
                            behaviour,
                        }) as Box<dyn PuzzleUnit>
                    })
                    .unwrap()
            })
            .build()
    }

    /// Three-line default inputs for the given 2018 days
    fn inputs(days: impl IntoIterator<Item = u8>) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("2018")).unwrap();
        for day in days {
            fs::write(dir.path().join(format!("2018/day{day:02}.txt")), "a\nb\nc\n").unwrap();
        }
        dir
    }

    fn config(root: &Path, request: RunRequest, parallelize_by: ParallelizeBy) -> Config {
        Config {
            request,
            tags: Vec::new(),
            input_dir: root.to_path_buf(),
            variant: None,
            thread_count: 2,
            parallelize_by,
            timeout: None,
            quiet: true,
        }
    }

    fn run(executor: &Executor) -> Report {
        let items = executor.collect_work_items().unwrap();
        let (tx, rx) = mpsc::channel();
        executor.execute(items, tx).unwrap();
        Report::new(rx.into_iter().collect())
    }

    fn part(day: u8, part: u8) -> PuzzlePart {
        PuzzleId::new(2018, day).unwrap().part(part)
    }

    fn seven_days() -> SolverRegistry {
        let mut units: Vec<(u8, Behaviour)> = (1..=6).map(|d| (d, count_lines as Behaviour)).collect();
        units.push((7, fails_part_one));
        registry(&units)
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let dir = inputs(1..=7);
        for mode in [ParallelizeBy::Sequential, ParallelizeBy::Year, ParallelizeBy::Day] {
            let cfg = config(dir.path(), RunRequest::AllOfYear(2018), mode);
            let report = run(&Executor::new(seven_days(), &cfg).unwrap());

            assert_eq!(report.results().len(), 14, "{mode:?}");
            let order: Vec<_> = report.results().iter().map(|r| r.part).collect();
            let expected: Vec<_> = (1..=7).flat_map(|d| [part(d, 1), part(d, 2)]).collect();
            assert_eq!(order, expected);

            let failures: Vec<_> = report.failures().collect();
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].part, part(7, 1));
            let err = failures[0].outcome.as_ref().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Puzzle);
            assert!(err.to_string().contains("malformed claim"));

            for result in report.results().iter().filter(|r| r.part != part(7, 1)) {
                let expected = Answer::from(3 * usize::from(result.part.part));
                assert_eq!(result.outcome.as_ref().unwrap(), &expected);
            }
            assert!(!report.all_succeeded());
        }
    }

    #[test]
    fn test_missing_input_fails_each_part() {
        let dir = inputs([1, 3]);
        let reg = registry(&[(1, count_lines), (2, count_lines), (3, count_lines)]);
        let cfg = config(dir.path(), RunRequest::AllOfYear(2018), ParallelizeBy::Day);
        let report = run(&Executor::new(reg, &cfg).unwrap());

        let failed: Vec<_> = report.failures().map(|r| r.part).collect();
        assert_eq!(failed, vec![part(2, 1), part(2, 2)]);
        for r in report.failures() {
            assert_eq!(r.outcome.as_ref().unwrap_err().kind(), ErrorKind::NotFound);
        }
        assert_eq!(report.succeeded(), 4);
    }

    #[test]
    fn test_unregistered_requested_day_is_reported() {
        let dir = inputs([1]);
        let request = RunRequest::SpecificDays {
            year: 2018,
            days: BTreeSet::from([1, 9]),
        };
        let cfg = config(dir.path(), request, ParallelizeBy::Sequential);
        let report = run(&Executor::new(registry(&[(1, count_lines)]), &cfg).unwrap());

        assert_eq!(report.results().len(), 3);
        let last = &report.results()[2];
        assert_eq!(last.part, part(9, 1));
        assert_eq!(last.outcome.as_ref().unwrap_err().kind(), ErrorKind::NotRegistered);
    }

    #[test]
    fn test_unknown_part_is_not_registered() {
        let dir = inputs([1]);
        let request = RunRequest::SpecificParts {
            year: 2018,
            parts: BTreeSet::from([(1, 2), (1, 3)]),
        };
        let cfg = config(dir.path(), request, ParallelizeBy::Day);
        let report = run(&Executor::new(registry(&[(1, count_lines)]), &cfg).unwrap());

        assert_eq!(report.succeeded(), 1);
        let failed: Vec<_> = report.failures().collect();
        assert_eq!(failed[0].part, part(1, 3));
        assert_eq!(failed[0].outcome.as_ref().unwrap_err().kind(), ErrorKind::NotRegistered);
    }

    #[test]
    fn test_timeout_guard() {
        let dir = inputs([1, 2]);
        let mut cfg = config(dir.path(), RunRequest::AllOfYear(2018), ParallelizeBy::Day);
        cfg.timeout = Some(Duration::from_millis(50));
        let reg = registry(&[(1, count_lines), (2, sleeps)]);
        let report = run(&Executor::new(reg, &cfg).unwrap());

        assert_eq!(report.succeeded(), 2);
        for r in report.failures() {
            assert_eq!(r.part.id, PuzzleId::new(2018, 2).unwrap());
            let err = r.outcome.as_ref().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Timeout);
        }
        assert_eq!(report.failures().count(), 2);
    }

    #[test]
    fn test_panic_is_a_puzzle_failure() {
        let dir = inputs([1, 2]);
        for timeout in [None, Some(Duration::from_secs(5))] {
            let mut cfg = config(dir.path(), RunRequest::AllOfYear(2018), ParallelizeBy::Sequential);
            cfg.timeout = timeout;
            let reg = registry(&[(1, panics), (2, count_lines)]);
            let report = run(&Executor::new(reg, &cfg).unwrap());

            assert_eq!(report.succeeded(), 2);
            for r in report.failures() {
                let err = r.outcome.as_ref().unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Puzzle);
                assert!(err.to_string().contains("index out of bounds"), "{err}");
            }
        }
    }

    #[test]
    fn test_variant_input() {
        let dir = inputs([1]);
        fs::write(dir.path().join("2018/day01-sample.txt"), "x\n").unwrap();
        let mut cfg = config(dir.path(), RunRequest::AllOfYear(2018), ParallelizeBy::Day);
        cfg.variant = Some("sample".to_string());
        let report = run(&Executor::new(registry(&[(1, count_lines)]), &cfg).unwrap());

        let answers: Vec<_> = report
            .results()
            .iter()
            .map(|r| r.outcome.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(answers, vec!["1", "2"]);
    }

    #[test]
    fn test_declared_input_file_with_variant() {
        let dir = inputs([5]);
        fs::write(dir.path().join("2018/day05-sample.txt"), "wrong\n").unwrap();
        fs::write(dir.path().join("2018/polymer-sample.txt"), "a\nb\n").unwrap();
        let request = RunRequest::SpecificDays {
            year: 2018,
            days: BTreeSet::from([5]),
        };
        let mut cfg = config(dir.path(), request, ParallelizeBy::Day);
        cfg.variant = Some("sample".to_string());
        let reg = || registry_with_files(&[(5, Some("polymer.txt"), count_lines)]);

        let executor = Executor::new(reg(), &cfg).unwrap();
        assert!(executor.preflight().is_ok());
        let answers: Vec<_> = run(&executor)
            .results()
            .iter()
            .map(|r| r.outcome.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(answers, vec!["2", "4"]);

        fs::remove_file(dir.path().join("2018/polymer-sample.txt")).unwrap();
        let err = Executor::new(reg(), &cfg).unwrap().preflight().unwrap_err();
        assert!(err.to_string().contains("polymer-sample.txt"), "{err}");
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_solver_panic_goes_to_log() {
        install_panic_hook();
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let unit = Stub {
            id: PuzzleId::new(2018, 1).unwrap(),
            parts: 1,
            file: None,
            behaviour: panics,
        };
        let outcome = tracing::subscriber::with_default(subscriber, || {
            solve_caught(&unit, &InputSet::default(), 1)
        });

        assert_eq!(outcome.unwrap_err().kind(), ErrorKind::Puzzle);
        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("solver panicked"), "{logged}");
        assert!(logged.contains("index out of bounds"), "{logged}");
        assert!(!SOLVING.with(Cell::get));
    }

    #[test]
    fn test_preflight_single_day() {
        let dir = inputs([1]);
        let single = |day: u8| RunRequest::SpecificDays {
            year: 2018,
            days: BTreeSet::from([day]),
        };
        let reg = || registry(&[(1, count_lines), (2, count_lines)]);

        let ok = Executor::new(reg(), &config(dir.path(), single(1), ParallelizeBy::Day)).unwrap();
        assert!(ok.preflight().is_ok());

        let missing = Executor::new(reg(), &config(dir.path(), single(2), ParallelizeBy::Day)).unwrap();
        assert_eq!(missing.preflight().unwrap_err().kind(), ErrorKind::NotFound);

        let unknown = Executor::new(reg(), &config(dir.path(), single(9), ParallelizeBy::Day)).unwrap();
        assert_eq!(unknown.preflight().unwrap_err().kind(), ErrorKind::NotRegistered);

        let year = config(dir.path(), RunRequest::AllOfYear(2018), ParallelizeBy::Day);
        let batch = Executor::new(reg(), &year).unwrap();
        assert!(batch.preflight().is_ok());
    }

    #[test]
    fn test_closed_channel_is_an_error() {
        let dir = inputs([1]);
        let cfg = config(dir.path(), RunRequest::AllOfYear(2018), ParallelizeBy::Sequential);
        let executor = Executor::new(registry(&[(1, count_lines)]), &cfg).unwrap();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let items = executor.collect_work_items().unwrap();
        let err = executor.execute(items, tx).unwrap_err();
        assert!(matches!(err.inner(), ExecutorError::ChannelSend));
    }
}
