//! End to end: console answers → parameters → sampling → output.

use std::io::{self, Cursor};
use parametric_curves::{config::ParamsFile,
                        input::{read_params, Parsed},
                        shapes::{Hyperboloid, Lissajous, Shape, SineWave,
                                 Spiral, Trefoil},
                        Topology};

fn ask<P>(answers: &str) -> Parsed<P>
where P: parametric_curves::input::Prompted + Shape {
    read_params(Cursor::new(answers.to_string()), io::sink()).unwrap()
}

#[test_log::test]
fn sine_all_defaults() {
    let parsed: Parsed<SineWave> = ask("\n\n");
    assert!(parsed.diagnostics.is_empty());
    let s = parsed.value.sample();
    assert_eq!(s.len(), 1000);
    assert_eq!(s.segments().count(), 999);
    assert!((s.points()[0][0] + 2. * std::f64::consts::PI).abs() < 1e-9);
}

#[test_log::test]
fn sine_bad_answer_falls_back() {
    let parsed: Parsed<SineWave> = ask("zero\n180\n");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.value.start_deg, -360.);
    assert_eq!(parsed.value.end_deg, 180.);
    let last = *parsed.value.sample().points().last().unwrap();
    assert!((last[0] - std::f64::consts::PI).abs() < 1e-9);
    assert!(last[1].abs() < 1e-9);
}

#[test_log::test]
fn lissajous_defaults_start_point() {
    let parsed: Parsed<Lissajous> = ask("");
    assert_eq!(parsed.value, Lissajous::default());
    assert_eq!(parsed.value.sample().points()[0], [0., 1., 1.]);
}

#[test_log::test]
fn trefoil_single_point() {
    let parsed: Parsed<Trefoil> = ask("0\n5\n1\n");
    let s = parsed.value.sample();
    assert_eq!(s.points(), &[[0., -1., 0.]]);
    assert_eq!(s.segment_count(), 0);
}

#[test_log::test]
fn hyperboloid_json() {
    let parsed: Parsed<Hyperboloid> = ask("\n\n\n\n\n\n\n3\n4\n");
    let s = parsed.value.sample();
    assert_eq!(s.topology(), Topology::Grid { u_steps: 3, v_steps: 4 });
    let mut out = vec![];
    s.write_json(&mut out).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["points"].as_array().unwrap().len(), 4 * 5);
    let lines = v["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2 * 3 * 4);
    // current → next v, then current → next u.
    assert_eq!(lines[0], serde_json::json!([0, 1]));
    assert_eq!(lines[1], serde_json::json!([0, 5]));
}

#[test_log::test]
fn spiral_gnuplot() {
    let parsed: Parsed<Spiral> = ask("1\n5\n1\n");
    let s = parsed.value.sample();
    assert_eq!(s.len(), 100);
    let mut out = vec![];
    s.write(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 100);
    assert_eq!(text.lines().next(), Some("5e0 0e0 0e0"));
}

#[test_log::test]
fn spiral_huge_turns() {
    let parsed: Parsed<Spiral> = ask("1\n5\n184467440737095517\n");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.value.turns, 5);
    assert_eq!(parsed.value.sample().len(), 500);
}

#[test_log::test]
fn hyperboloid_latex_wireframe() {
    let parsed: Parsed<Hyperboloid> = ask("\n\n\n\n\n\n\n2\n3\n");
    let s = parsed.value.sample();
    let mut out = vec![];
    s.latex().write(&mut out).unwrap();
    let tex = String::from_utf8(out).unwrap();
    // 2 constant-u lines of 3 segments, 3 constant-v lines of 2 segments.
    assert_eq!(tex.matches("\\pgfpathmoveto").count(), 2 + 3);
    assert_eq!(tex.matches("\\pgfpathlineto").count(), s.segment_count());
}

#[test]
fn parameter_file_overrides() {
    let p: ParamsFile = toml::from_str(
        "[spiral]\npitch = 2.0\npoints_per_turn = 10\n").unwrap();
    let s = p.spiral.sample();
    assert_eq!(s.len(), 50);
    let [x, y, z] = s.points()[10];
    assert!((x - 5.).abs() < 1e-9 && y.abs() < 1e-9 && (z - 2.).abs() < 1e-9);
}
