use importguard::parser::{decode_line, parse_trace, TimingRecord};
use pretty_assertions::assert_eq;

const ROUND_TRIP: &str = "\
import time: self [us] | cumulative | imported package
import time:       100 |        100 |   posix
import time:       200 |        300 |   os
";

#[test]
fn test_round_trip_scenario() {
    let trace = parse_trace(ROUND_TRIP, "os");

    assert_eq!(
        trace.records,
        vec![
            TimingRecord::new("posix", 100, 100),
            TimingRecord::new("os", 200, 300),
        ]
    );
    assert_eq!(trace.total_time_us, 300);
}

#[test]
fn test_empty_stream() {
    let trace = parse_trace("", "os");
    assert!(trace.records.is_empty());
    assert_eq!(trace.total_time_us, 0);
}

#[test]
fn test_noise_only_stream() {
    let raw = "\
Traceback (most recent call last):
  File \"<string>\", line 1, in <module>
ModuleNotFoundError: No module named 'nonexistent_module_xyz'
";
    let trace = parse_trace(raw, "nonexistent_module_xyz");
    assert!(trace.records.is_empty());
    assert_eq!(trace.total_time_us, 0);
}

#[test]
fn test_interleaved_noise_is_skipped() {
    let raw = "\
import time: self [us] | cumulative | imported package
import time:        20 |         20 |     _json
DeprecationWarning: something old
import time: garbage | 12 | broken

import time:        80 |        100 |   json
";
    let trace = parse_trace(raw, "json");

    assert_eq!(
        trace.records,
        vec![
            TimingRecord::new("_json", 20, 20),
            TimingRecord::new("json", 80, 100),
        ]
    );
    assert_eq!(trace.total_time_us, 100);
}

#[test]
fn test_duplicates_and_zero_durations_kept() {
    let raw = "\
import time:         0 |          0 |       pandas
import time:        10 |         10 |     a
import time:         0 |          0 |     pandas
import time:        30 |         40 |   app
";
    let trace = parse_trace(raw, "app");

    let names: Vec<&str> = trace.records.iter().map(|r| r.module.as_str()).collect();
    assert_eq!(names, vec!["pandas", "a", "pandas", "app"]);
    assert_eq!(trace.records[0].self_time_us, 0);
    assert_eq!(trace.total_time_us, 40);
}

#[test]
fn test_windows_line_endings() {
    let raw = "import time: 5 | 5 |   posix\r\nimport time: 7 | 12 |   os\r\n";
    let trace = parse_trace(raw, "os");

    assert_eq!(trace.records[1].module, "os");
    assert_eq!(trace.total_time_us, 12);
}

#[test]
fn test_decoded_records_respect_cumulative_invariant() {
    let raw = "\
import time: 10 | 20 |   a
import time: 30 | 20 |   corrupt
import time: 0 | 0 |   b
import time: 5 | 99 | c
";
    let trace = parse_trace(raw, "c");

    assert_eq!(trace.records.len(), 3);
    assert!(trace
        .records
        .iter()
        .all(|r| r.cumulative_time_us >= r.self_time_us));
}

#[test]
fn test_arbitrary_input_never_panics() {
    let inputs = [
        "|||||",
        "import time:",
        "import time: |",
        "import time: 1 |",
        "import time: 1 | 2 |",
        "import time: 1 | 2 | \u{00a0}\u{00a0}é",
        "import time: 18446744073709551615 | 18446744073709551615 | big",
        "import time: 18446744073709551616 | 1 | overflow",
        "\0\0\0",
        "import time: 1 | 2 | 3 | 4",
        "🦀 import time: 1 | 1 | crab",
    ];

    for input in inputs {
        let trace = parse_trace(input, "x");
        assert!(trace.records.len() <= 1, "input {:?}", input);
    }

    // Every prefix of a real line, cut at char boundaries
    let line = "import time:       331 |        331 |     encodings.aliases";
    for (cut, _) in line.char_indices() {
        let _ = decode_line(&line[..cut]);
        let _ = parse_trace(&line[cut..], "encodings");
    }
}

#[test]
fn test_max_u64_accepted() {
    let trace = parse_trace(
        "import time: 18446744073709551615 | 18446744073709551615 | big",
        "big",
    );
    assert_eq!(trace.total_time_us, u64::MAX);
}

#[test]
fn test_extra_delimiters_stay_in_module_name() {
    // Only the first two bars are delimiters
    let line = decode_line("import time: 1 | 2 | 3 | 4").unwrap();
    assert_eq!(line.module, "3 | 4");
}
