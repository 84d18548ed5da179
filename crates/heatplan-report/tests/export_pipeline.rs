//! Export a freshly initialized grid and read it back.

use heatplan_grid::{GridBuffers, PlanConfig, Scenario};
use heatplan_region::Region;
use heatplan_report::{read_interior, save_interior, validate, write_grid};

fn point_scenario() -> Scenario {
    Scenario::new(
        "point",
        Region::points([(2.0, 2.0, 100.0)]),
        Region::points([(1.0, 1.0), (3.0, 3.0)]),
        PlanConfig::new(0.2, 1.0, 1.0),
    )
}

#[test]
fn interior_of_point_scenario() {
    let setup = point_scenario().run_setup().unwrap();
    let mut out = Vec::new();
    write_grid(&mut out, &setup.buffers, &setup.plan).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "0 0 0");
    assert_eq!(lines[4], "1 1 100");
    assert_eq!(lines[8], "2 2 0");

    let grid = read_interior(text.as_bytes()).unwrap();
    assert_eq!((grid.rows, grid.cols), (3, 3));
    assert_eq!(grid.get(1, 1), Some(100.0));
}

#[test]
fn saved_file_round_trips() {
    let setup = point_scenario().run_setup().unwrap();
    let path = std::env::temp_dir().join(format!("heatplan-export-{}.txt", std::process::id()));
    save_interior(
        &path,
        setup.buffers.u1(),
        setup.plan.rows,
        setup.plan.cols,
        setup.plan.iterations,
    )
    .unwrap();
    let file = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
    let grid = read_interior(file).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(grid.values.iter().sum::<f64>(), 100.0);
}

#[test]
fn two_setups_validate_clean() {
    let a = point_scenario().run_setup().unwrap();
    let b = GridBuffers::sample(&point_scenario().source, &a.plan);
    let cmp = validate(a.buffers.u1(), b.u2(), a.plan.rows, a.plan.cols).unwrap();
    assert!(cmp.is_match());
    assert_eq!(cmp.cells, 169);
}
