// crates/tidelink-cli/tests/cli_codec.rs

use std::process::{Command, Output};

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tidelink-cli"))
        .args(args)
        .output()
        .expect("spawn tidelink-cli")
}

fn run_ok(args: &[&str]) -> String {
    let out = cli(args);
    assert!(
        out.status.success(),
        "command failed: args={:?} status={:?}\nstdout:\n{}\nstderr:\n{}",
        args,
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

fn first_line(args: &[&str]) -> String {
    run_ok(args).lines().next().unwrap_or("").to_string()
}

#[test]
fn encode_known_fields() {
    assert_eq!(first_line(&["encode", "--value", "4.123", "--right-digits", "3"]), "A@[");
    assert_eq!(first_line(&["encode", "--value", "-4.123", "--right-digits", "3"]), "~?e");
    assert_eq!(
        first_line(&["encode", "--value", "1000", "--width", "2", "--unsigned"]),
        "Oh"
    );
    assert_eq!(first_line(&["encode", "--value", "5000", "--width", "1"]), "_");
    assert_eq!(first_line(&["encode", "--value", "4123", "--width", "3", "--wide"]), "A@[");
    assert_eq!(first_line(&["encode", "--value", "1", "--width", "5", "--wide"]), "@@@@A");
}

#[test]
fn encode_missing_follows_marker_style() {
    assert_eq!(first_line(&["encode", "--value", "-99999", "--width", "2"]), "//");
    assert_eq!(
        first_line(&["--missing-style", "legacy", "encode", "--value", "-99999", "--width", "2"]),
        "??"
    );
}

#[test]
fn encode_rejects_bad_width() {
    let out = cli(&["encode", "--value", "1", "--width", "4"]);
    assert!(!out.status.success());
}

#[test]
fn decode_fields() {
    assert_eq!(first_line(&["decode", "--field", "A@[", "--right-digits", "3"]), "4.123");
    assert_eq!(first_line(&["decode", "--field", "~?e", "--right-digits", "3"]), "-4.123");
    assert_eq!(first_line(&["decode", "--field", "?"]), "-1");
    assert_eq!(first_line(&["decode", "--field", "///"]), "NaN");
    assert_eq!(first_line(&["decode", "--field", "_??"]), "overflow-high");
    assert_eq!(first_line(&["decode", "--field", "`@@"]), "overflow-low");
    assert_eq!(first_line(&["decode", "--field", "??", "--unsigned"]), "overflow-high");
    assert_eq!(first_line(&["decode", "--field", "@@@@A", "--wide"]), "1");
}

#[test]
fn decode_rejects_bytes_outside_alphabet() {
    let out = cli(&["decode", "--field", "A/"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("malformed"));
}

#[test]
fn sutron_day_from_date_or_julian_day() {
    assert_eq!(first_line(&["sutron-day", "--date", "2022-08-09"]), "1447 Vg");
    assert_eq!(first_line(&["sutron-day", "--julian-day", "1", "--year", "1985"]), "1 @A");
    assert_eq!(first_line(&["sutron-day", "--julian-day", "366", "--year", "1984"]), "0 @@");
    assert!(!cli(&["sutron-day", "--date", "2023-02-29"]).status.success());
    assert!(!cli(&["sutron-day"]).status.success());
}

#[test]
fn tsunami_burst_fields() {
    let out = run_ok(&[
        "tsunami",
        "--hour",
        "14",
        "--minute",
        "36",
        "--readings",
        "4.123,4.123,4.123,4.123,4.123,4.123",
    ]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(&lines[..3], ["N", "d", "P"]);
    assert!(lines[3..9].iter().all(|l| *l == "A{"));
    assert_eq!(lines[9], "TNdPA{A{A{A{A{A{");
}

#[test]
fn tsunami_missing_sample_blanks_burst() {
    let out = run_ok(&[
        "tsunami",
        "--hour",
        "14",
        "--minute",
        "36",
        "--readings",
        "4.123,-,4.123,4.123,4.123,4.123",
    ]);
    assert_eq!(out.lines().last(), Some(format!("T{}", "/".repeat(15)).as_str()));

    let short = cli(&["tsunami", "--hour", "1", "--minute", "2", "--readings", "1,2,3"]);
    assert!(!short.status.success());
}

#[test]
fn tsunami_huge_readings_saturate() {
    let out = run_ok(&[
        "tsunami",
        "--hour",
        "1",
        "--minute",
        "2",
        "--right-digits",
        "0",
        "--readings=1e30,-1e30,0,0,0,0",
    ]);
    assert_eq!(out.lines().last(), Some("TAB`_?_?_?_?_?_?"));
}
