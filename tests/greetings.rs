use std::{collections::HashMap, time::Duration};

use assert_cmd::Command;
use greet_groups::{report_area, Coordinator, Error, GreetPlan, Rect, Shape, ShapeError, Sink};

fn tally(lines: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for line in lines {
        *counts.entry(line.as_str()).or_default() += 1;
    }
    counts
}

#[test]
fn binary_prints_ten_greetings() {
    let output = Command::cargo_bin("greet_groups")
        .unwrap()
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<String> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(lines.len(), 10);
    let counts = tally(&lines);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["Hello Minh"], 5);
    assert_eq!(counts["Hello Linh"], 5);
}

#[test]
fn repeated_runs_never_lose_a_greeting() {
    for _ in 0..20 {
        let (sink, captured) = Sink::memory();
        Coordinator::new(["Minh", "Linh"], GreetPlan::new(5, Duration::ZERO), sink).run();
        // run() has returned, so every greeting must already be there
        let lines = captured.lines();
        assert_eq!(lines.len(), 10);
        let counts = tally(&lines);
        assert_eq!(counts["Hello Minh"], 5);
        assert_eq!(counts["Hello Linh"], 5);
    }
}

#[test]
fn more_names_than_cores() {
    let names: Vec<String> = (0..16).map(|index| format!("greeter-{index}")).collect();
    let (sink, captured) = Sink::memory();
    Coordinator::new(names.clone(), GreetPlan::new(3, Duration::from_millis(1)), sink).run();

    let lines = captured.lines();
    assert_eq!(lines.len(), 48);
    let counts = tally(&lines);
    for name in &names {
        assert_eq!(counts[format!("Hello {name}").as_str()], 3);
    }
}

#[test]
fn shape_errors_convert_into_the_crate_error() {
    fn area(rect: Rect) -> greet_groups::Result<f64> {
        Ok(rect.area()?)
    }

    assert_eq!(area(Rect::new(1.0, 2.0)).unwrap(), 2.0);
    assert!(matches!(
        area(Rect::new(0.0, 2.0)),
        Err(Error::Shape(ShapeError::InvalidDimension { .. }))
    ));

    let mut out = Vec::new();
    report_area(&Rect::new(2.5, 2.0), &mut out).unwrap();
    assert_eq!(out, b"5\n");
}
