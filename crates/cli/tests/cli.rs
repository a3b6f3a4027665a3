use assert_cmd::Command;
use predicates::prelude::*;

fn polyline() -> Command {
    Command::cargo_bin("polyline").unwrap()
}

#[test]
fn walkthrough_prints_every_step() {
    polyline()
        .args(&["--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polyline 1: (1, 2)\n"))
        .stdout(predicate::str::contains(
            "Polyline 4, (-1, -1) then polyline 2: (-1, -1) -> (1, 2) -> (2, 3) -> (4, 5)\n",
        ))
        .stdout(predicate::str::contains(
            "Polyline 4 after appending (3, 4): (-1, -1) -> (1, 2) -> (2, 3) -> (4, 5) -> (3, 4)\n",
        ))
        .stdout(predicate::str::contains("Equal: true\n"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        polyline()
            .args(&["--seed", "11", "--points", "4"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_random_points_is_an_error() {
    polyline()
        .args(&["--points", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: failed to generate a random polyline",
        ))
        .stderr(predicate::str::contains(
            "caused by: invalid argument: number of points must be greater than 0",
        ));
}

#[test]
fn inverted_bounds_are_an_error() {
    polyline()
        .args(&["--min", "9", "--max", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lower bound must not exceed upper bound"));
}

#[test]
fn single_random_point_warns() {
    polyline()
        .args(&["--points", "1", "--seed", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: a single random point has no length"))
        .stdout(predicate::str::contains("Length of polyline 3: 0\n"));
}
