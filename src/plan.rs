use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    geom::{Direction, Position},
    interior, Error,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    dir: Direction,
    distance: u64,
    color: u32,
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static INSTRUCTION_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([UDLR]) (\d+) \(#([0-9a-f]{6})\)$").unwrap());

        let invalid = || Error::InvalidInstructionText(value.to_string());
        let caps = INSTRUCTION_PATTERN.captures(value.trim()).ok_or_else(invalid)?;
        let dir = match &caps[1] {
            "U" => Direction::North,
            "D" => Direction::South,
            "L" => Direction::West,
            _ => Direction::East,
        };
        let distance = caps[2].parse::<u64>().map_err(|_| invalid())?;
        let color = u32::from_str_radix(&caps[3], 16).map_err(|_| invalid())?;

        Ok(Instruction::new(dir, distance, color))
    }
}

impl Instruction {
    pub fn new(dir: Direction, distance: u64, color: u32) -> Self {
        Self {
            dir,
            distance,
            color,
        }
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Real instruction hidden in the color: five hex digits of distance,
    /// then one digit of direction.
    pub fn decode_color(&self) -> Result<Instruction, Error> {
        let dir = match self.color & 0xf {
            0 => Direction::East,
            1 => Direction::South,
            2 => Direction::West,
            3 => Direction::North,
            _ => return Err(Error::InvalidColorInstruction(self.color)),
        };

        Ok(Instruction::new(dir, u64::from(self.color >> 4), self.color))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DigPlan {
    instructions: Vec<Instruction>,
}

impl DigPlan {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn decode_colors(&self) -> Result<DigPlan, Error> {
        self.instructions
            .iter()
            .map(|inst| inst.decode_color())
            .collect::<Result<Vec<_>, _>>()
            .map(DigPlan::new)
    }

    /// Trench corners, starting at the origin, without repeating it at the end.
    pub fn vertices(&self) -> Result<Vec<Position>, Error> {
        let mut vertices = vec![Position::new(0, 0)];
        let mut cur_pos = Position::new(0, 0);
        for inst in &self.instructions {
            let distance = i64::try_from(inst.distance)
                .map_err(|_| Error::InvalidInstructionDistance(inst.distance))?;
            cur_pos = cur_pos.offset(inst.dir, distance);
            vertices.push(cur_pos);
        }

        if cur_pos != Position::new(0, 0) {
            return Err(Error::OpenDigPlan(cur_pos));
        }
        vertices.pop();

        Ok(vertices)
    }

    /// Every trench position in digging order, one unit step apart.
    pub fn boundary_walk(&self) -> Result<Vec<Position>, Error> {
        self.vertices()?;

        let mut cur_pos = Position::new(0, 0);
        let mut path = Vec::new();
        for inst in &self.instructions {
            for _ in 0..inst.distance {
                path.push(cur_pos);
                cur_pos = cur_pos.neighbor(inst.dir);
            }
        }

        Ok(path)
    }

    /// Cubic meters of the lagoon, trench plus interior, from the sparse interior search.
    pub fn lagoon_volume(&self) -> Result<u64, Error> {
        let path = self.boundary_walk()?;
        let region = interior::interior_points(&path)?;

        Ok(path.len() as u64 + region.points_n())
    }

    /// Same volume as [`DigPlan::lagoon_volume`], from the corners alone.
    pub fn lagoon_volume_by_vertices(&self) -> Result<u64, Error> {
        let vertices = self.vertices()?;
        let boundary_n = self.instructions.iter().map(|inst| inst.distance).sum::<u64>();
        let area = interior::shoelace_area(&vertices);

        Ok(area + boundary_n / 2 + 1)
    }
}
