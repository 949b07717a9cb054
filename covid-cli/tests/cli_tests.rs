use assert_cmd::Command;
use predicates::prelude::*;

fn covidstats() -> Command {
    Command::cargo_bin("covidstats").expect("binary builds")
}

#[test]
fn no_flags_prints_help_and_exits_zero() {
    covidstats()
        .assert()
        .success()
        .stdout(predicate::str::contains("Covid-19 statistics"))
        .stdout(predicate::str::contains("--summary"))
        .stdout(predicate::str::contains("--details"));
}

#[test]
fn chart_without_a_report_flag_prints_help() {
    covidstats()
        .arg("--chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("--summary"));
}

#[test]
fn summary_and_details_together_are_rejected() {
    covidstats()
        .args(["--summary", "--details", "canada"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn details_requires_a_country_id() {
    covidstats().arg("--details").assert().failure();
}

#[test]
fn help_flag_shows_flag_descriptions() {
    covidstats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("covid19api.com"))
        .stdout(predicate::str::contains("lower case with a '-' for spaces"));
}
