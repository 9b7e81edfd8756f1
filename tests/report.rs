use maze_flood::{Error, Grid, Report, Stage};

fn solved(text: &str) -> Grid {
    let mut grid = maze_flood::parse_maze(text).unwrap();
    maze_flood::solve(&mut grid).unwrap();
    grid
}

const SCENARIO_A_REPORT: &str = "\
Stage 1
=======
maze has 3 rows and 3 columns
..##..
......
..##..

Stage 2
=======
maze has a solution
++##++
++++++
++##++

Stage 3
=======
maze has solution with cost 2
00##00
++02++
02##02

Stage 4
=======
maze solution
00##  
..    
02##  
";

#[test]
fn report_with_solution_has_four_stages() {
    let grid = solved(".#.\n...\n.#.");
    let report = Report::new(&grid).unwrap();

    assert_eq!(report.stages().len(), 4);
    assert_eq!(report.to_string(), SCENARIO_A_REPORT);

    let mut written = Vec::new();
    report.write_to(&mut written).unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), SCENARIO_A_REPORT);
}

#[test]
fn report_without_solution_stops_after_costs() {
    let grid = solved("..#\n.#.\n###");
    let report = Report::new(&grid).unwrap();

    assert_eq!(
        report.stages(),
        &[Stage::Dimensions, Stage::Reachability, Stage::Costs]
    );
    assert_eq!(
        report.to_string(),
        "\
Stage 1
=======
maze has 3 rows and 3 columns
....##
..##..
######

Stage 2
=======
maze has no solution
++++##
++##--
######

Stage 3
=======
maze has no solution
0000##
++##--
######
"
    );
}

#[test]
fn costs_wrap_at_one_hundred() {
    // Down the left column, through the bottom gap, then back up the right one.
    let mut text = String::from(".##\n");
    for _ in 1..99 {
        text.push_str(".#.\n");
    }
    text.push_str("...\n");
    let grid = solved(&text);
    assert_eq!(grid.solution_cost(), Some(99));

    let costs = Report::new(&grid).unwrap().stage(Stage::Costs).to_string();
    let lines = costs.lines().collect::<Vec<_>>();
    // Three header lines come before the first maze row.
    assert_eq!(lines[3 + 12], "12##88");
    assert_eq!(lines[3 + 97], "++##++");
    assert_eq!(lines[3 + 98], "98##02");
    assert_eq!(lines[3 + 99], "++00++");
}

#[test]
fn solution_stage_shows_only_path_costs() {
    let grid = solved("#.#\n...\n.#.");
    let stage = Report::new(&grid).unwrap().stage(Stage::Solution).to_string();
    assert_eq!(
        stage,
        "\
Stage 4
=======
maze solution
##00##
02..  
..##  
"
    );
}

#[test]
fn unsolved_grid_cannot_be_reported() {
    let mut grid = maze_flood::parse_maze(".#.\n...").unwrap();
    assert!(matches!(Report::new(&grid), Err(Error::NotSearched)));

    maze_flood::flood::flood(&mut grid).unwrap();
    assert!(matches!(Report::new(&grid), Err(Error::NotSearched)));
}
