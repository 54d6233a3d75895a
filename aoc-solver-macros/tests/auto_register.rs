use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2030, day = 1, tags = ["test", "lines"])]
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2030, day = 2)]
struct ByteSum;

impl AocParser for ByteSum {
    type SharedData<'a> = Vec<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.bytes().collect())
    }
}

impl PartSolver<1> for ByteSum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|&b| b as u32).sum::<u32>().to_string())
    }
}

impl PartSolver<2> for ByteSum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_plugins_are_collected() {
    let plugins: Vec<_> = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .filter(|p| p.year == 2030)
        .map(|p| (p.day, p.tags, p.solver.parts()))
        .collect();

    assert_eq!(plugins.len(), 2);
    assert!(plugins.contains(&(1, &["test", "lines"][..], 1)));
    assert!(plugins.contains(&(2, &[][..], 2)));
}

#[test]
fn test_register_all_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2030, 1, "a\nb\nc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");

    let mut solver = registry.create_solver(2030, 2, "AB").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "131");
    assert_eq!(solver.solve(2).unwrap().answer, "2");
}

#[test]
fn test_register_filtered_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"lines"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2030, 1));
    assert!(!registry.storage().contains(2030, 2));
}
