use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod boundary;
pub mod geom;
pub mod interior;
pub mod plan;
pub mod range;

pub use geom::{Direction, Position};
pub use interior::{interior_points, interior_points_n};
pub use plan::{DigPlan, Instruction};
pub use range::{PositionRange, PositionRanges, Region};

#[derive(Debug)]
pub enum Error {
    BoundaryTooShort(usize),
    ReversedBoundary(usize),
    DisjointBoundary(usize),
    AmbiguousInterior,
    InvalidInstructionText(String),
    InvalidInstructionDistance(u64),
    InvalidColorInstruction(u32),
    OpenDigPlan(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::BoundaryTooShort(len) => write!(
                f,
                "Expect at least 3 positions in boundary walk, given {}.",
                len
            ),
            Error::ReversedBoundary(ind) => write!(
                f,
                "Boundary walk turns back on itself at position {}.",
                ind
            ),
            Error::DisjointBoundary(ind) => write!(
                f,
                "Position {} in boundary walk isn't adjacent to the one before it.",
                ind
            ),
            Error::AmbiguousInterior => write!(
                f,
                "Can't tell inside from outside, boundary walk may not enclose a simple polygon."
            ),
            Error::InvalidInstructionText(s) => {
                write!(f, "Invalid text({}) for dig instruction.", s)
            }
            Error::InvalidInstructionDistance(distance) => {
                write!(f, "Dig distance({}) is too large.", distance)
            }
            Error::InvalidColorInstruction(color) => write!(
                f,
                "Invalid direction digit in color(#{:06x}) of dig instruction.",
                color
            ),
            Error::OpenDigPlan(pos) => write!(
                f,
                "Expect dig plan to end where it starts, but it ends at {}.",
                pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_dig_plan<P: AsRef<Path>>(path: P) -> Result<DigPlan> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut instructions = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        instructions.push(
            Instruction::try_from(line.as_str())
                .with_context(|| format!("Failed to parse dig instruction in line {}.", ind + 1))?,
        );
    }

    Ok(DigPlan::new(instructions))
}
