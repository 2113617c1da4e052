use std::fs;
use std::io::Cursor;

use portfolio_sim::app;
use portfolio_sim::io::{reader, writer};
use portfolio_sim::worker::processor::Processor;

fn run_case(input_csv: &str, horizon_months: u32) -> String {
    let mut portfolio = app::demo_portfolio().expect("seed portfolio is valid");
    let mut worker = Processor::new();

    let rdr = Cursor::new(input_csv.as_bytes());
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    for row in reader::read_events(&mut csv_reader) {
        let event = row.expect("failed to parse input row");
        // Rejected operations are skipped; the ledger only syncs on success.
        if worker.process(&mut portfolio, event).is_ok() {
            portfolio.sync_ledger();
        }
    }

    let mut out = Vec::<u8>::new();
    writer::write_report(&mut out, &portfolio, horizon_months)
        .expect("failed to write output CSV");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    // Also allows tests to be stable across platforms.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn case1_deposits_withdrawals_and_rejections() {
    let input = fs::read_to_string("tests/fixtures/case1_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case1_expected.csv").unwrap();

    let actual = run_case(&input, 3);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn case2_replace_and_close_cdt() {
    let input = fs::read_to_string("tests/fixtures/case2_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case2_expected.csv").unwrap();

    let actual = run_case(&input, 2);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn case3_rejected_operations_leave_the_seed_report_untouched() {
    let input = fs::read_to_string("tests/fixtures/case3_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case3_expected.csv").unwrap();

    let actual = run_case(&input, 1);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}
