use importguard::commands::{execute_check, CheckArgs};
use importguard::guard::{check_import, CheckOptions};
use importguard::output::read_report;
use importguard::runner::ImportTimer;
use importguard::utils::{GuardError, RunnerError};
use importguard::violations::ViolationKind;
use std::cell::RefCell;
use std::collections::VecDeque;

const OS_TRACE: &str = "\
import time: self [us] | cumulative | imported package
import time:       100 |        100 |   posix
import time:       200 |        300 |   os
";

/// Hands out canned traces in order, repeating the last one
struct CannedTimer {
    traces: RefCell<VecDeque<String>>,
    last: RefCell<String>,
}

impl CannedTimer {
    fn new(traces: &[&str]) -> Self {
        Self {
            traces: RefCell::new(traces.iter().map(|t| t.to_string()).collect()),
            last: RefCell::new(String::new()),
        }
    }

    fn totals(totals_us: &[u64]) -> Self {
        let traces: Vec<String> = totals_us
            .iter()
            .map(|t| format!("import time: 1 | {} | app", t))
            .collect();
        let refs: Vec<&str> = traces.iter().map(String::as_str).collect();
        Self::new(&refs)
    }
}

impl ImportTimer for CannedTimer {
    fn time_import(&self, _module: &str) -> Result<String, RunnerError> {
        if let Some(next) = self.traces.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }
        Ok(self.last.borrow().clone())
    }
}

struct FailingTimer;

impl ImportTimer for FailingTimer {
    fn time_import(&self, _module: &str) -> Result<String, RunnerError> {
        Err(RunnerError::SpawnFailed {
            python: "python3".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    }
}

#[test]
fn test_end_to_end_budget_failure() {
    let timer = CannedTimer::new(&[OS_TRACE]);
    let options = CheckOptions::new("os").with_max_ms(0.001);

    let result = check_import(&timer, &options).unwrap();

    assert!(!result.passed());
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].kind, ViolationKind::BudgetExceeded);
    assert_eq!(result.total_ms(), 0.3);
}

#[test]
fn test_end_to_end_pass() {
    let timer = CannedTimer::new(&[OS_TRACE]);
    let options = CheckOptions::new("os").with_max_ms(5000.0);

    let result = check_import(&timer, &options).unwrap();

    assert!(result.passed());
    assert_eq!(result.module, "os");
    assert_eq!(result.num_runs(), 1);
    assert_eq!(result.imports().len(), 2);
}

#[test]
fn test_banned_module_found() {
    let timer = CannedTimer::new(&[OS_TRACE]);
    let options = CheckOptions::new("os").with_banned(["posix", "nt"]);

    let result = check_import(&timer, &options).unwrap();

    assert!(!result.passed());
    assert_eq!(result.banned_found, vec!["posix"]);
    assert_eq!(result.violations[0].subject_module, "posix");
}

#[test]
fn test_repeat_uses_median_and_last_trace() {
    let timer = CannedTimer::new(&[
        "import time: 1 | 30000 | app",
        "import time: 1 | 10000 | app",
        "import time: 7 | 20000 | app",
    ]);
    let options = CheckOptions::new("app").with_repeat(3).with_max_ms(20.0);

    let result = check_import(&timer, &options).unwrap();

    assert_eq!(result.runs, vec![30000, 10000, 20000]);
    assert_eq!(result.median_us, 20000);
    assert_eq!(result.min_us, 10000);
    // Exactly on budget
    assert!(result.passed());
    // Breakdown comes from the final run
    assert_eq!(result.representative_trace.records[0].self_time_us, 7);
}

#[test]
fn test_repeat_even_count() {
    let timer = CannedTimer::totals(&[10000, 20000]);
    let options = CheckOptions::new("app").with_repeat(2);

    let result = check_import(&timer, &options).unwrap();

    assert_eq!(result.median_us, 15000);
    assert_eq!(result.min_ms(), 10.0);
}

#[test]
fn test_failed_import_is_not_an_error() {
    let timer = CannedTimer::new(&["ModuleNotFoundError: No module named 'nope'"]);
    let options = CheckOptions::new("nope").with_max_ms(100.0);

    let result = check_import(&timer, &options).unwrap();

    assert!(result.passed());
    assert_eq!(result.median_us, 0);
    assert!(result.representative_trace.is_empty());
}

#[test]
fn test_zero_repeat_rejected() {
    let timer = CannedTimer::new(&[OS_TRACE]);
    let options = CheckOptions::new("os").with_repeat(0);

    assert!(matches!(
        check_import(&timer, &options),
        Err(GuardError::InvalidOptions(_))
    ));
}

#[test]
fn test_timer_failure_propagates() {
    let options = CheckOptions::new("os");
    assert!(matches!(
        check_import(&FailingTimer, &options),
        Err(GuardError::Runner(RunnerError::SpawnFailed { .. }))
    ));
}

#[test]
fn test_execute_check_writes_outputs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("reports/os.json");
    let svg_path = temp_dir.path().join("reports/os.svg");

    let args = CheckArgs {
        module: "os".to_string(),
        max_ms: Some(0.001),
        banned: vec!["posix".to_string()],
        quiet: true,
        output_json: Some(json_path.clone()),
        output_svg: Some(svg_path.clone()),
        ..Default::default()
    };

    let result = execute_check(&args, &CannedTimer::new(&[OS_TRACE])).unwrap();
    assert!(!result.passed());

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.module, "os");
    assert!(!report.passed);
    assert_eq!(report.violations.len(), 2);
    assert_eq!(report.violations[0].kind, ViolationKind::BudgetExceeded);
    assert_eq!(report.violations[1].kind, ViolationKind::BannedImport);
    assert_eq!(report.top_imports[0].module, "os");

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("posix"));
}

#[test]
fn test_empty_trace_skips_flamegraph() {
    let temp_dir = tempfile::tempdir().unwrap();
    let svg_path = temp_dir.path().join("nope.svg");

    let args = CheckArgs {
        module: "nope".to_string(),
        max_ms: Some(100.0),
        quiet: true,
        output_svg: Some(svg_path.clone()),
        ..Default::default()
    };

    let result = execute_check(&args, &CannedTimer::new(&[""])).unwrap();

    assert!(result.passed());
    assert!(!svg_path.exists());
}

#[test]
fn test_zero_duration_trace_skips_flamegraph() {
    let temp_dir = tempfile::tempdir().unwrap();
    let svg_path = temp_dir.path().join("sys.svg");

    let args = CheckArgs {
        module: "sys".to_string(),
        max_ms: Some(100.0),
        quiet: true,
        output_svg: Some(svg_path.clone()),
        ..Default::default()
    };

    let timer = CannedTimer::new(&["import time: 0 | 0 | sys"]);
    let result = execute_check(&args, &timer).unwrap();

    assert!(result.passed());
    assert!(!svg_path.exists());
}
