use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["simulation"])]
pub struct Solver;

/// A contiguous run of blocks on the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct DiskMap {
    /// Indexed by file id
    files: Vec<Span>,
    gaps: Vec<Span>,
}

impl AocParser for Solver {
    type SharedData<'a> = DiskMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut disk = DiskMap {
            files: Vec::new(),
            gaps: Vec::new(),
        };
        let mut start = 0;
        for (i, c) in input.trim().chars().enumerate() {
            let len = c
                .to_digit(10)
                .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {c:?}")))?
                as usize;
            let span = Span { start, len };
            if i % 2 == 0 {
                disk.files.push(span);
            } else {
                disk.gaps.push(span);
            }
            start += len;
        }
        if disk.files.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        Ok(disk)
    }
}

fn checksum(files: &[Span]) -> usize {
    files
        .iter()
        .enumerate()
        .map(|(id, span)| id * (span.start..span.start + span.len).sum::<usize>())
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.files.last().map_or(0, |last| last.start + last.len);
        let mut blocks: Vec<Option<usize>> = vec![None; total];
        for (id, span) in shared.files.iter().enumerate() {
            blocks[span.start..span.start + span.len].fill(Some(id));
        }

        let (mut front, mut back) = (0, blocks.len());
        loop {
            while front < back && blocks[front].is_some() {
                front += 1;
            }
            while back > front && blocks[back - 1].is_none() {
                back -= 1;
            }
            if back <= front + 1 {
                break;
            }
            blocks.swap(front, back - 1);
        }

        let sum: usize = blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| pos * id))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut files = shared.files.clone();
        let mut gaps = shared.gaps.clone();

        for file in files.iter_mut().rev() {
            let Some(gap) = gaps
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.len >= file.len)
            else {
                continue;
            };
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }

        Ok(checksum(&files).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::solve_sample;

    #[test]
    fn test_sample() {
        let sample = "2333133121414131402\n";
        assert_eq!(solve_sample::<Solver>(sample, 1), "1928");
        assert_eq!(solve_sample::<Solver>(sample, 2), "2858");
    }

    #[test]
    fn test_tiny_disk() {
        // 0..111....22222 -> 022111222......
        assert_eq!(solve_sample::<Solver>("12345", 1), "60");
        assert!(Solver::parse("12x").is_err());
    }
}
