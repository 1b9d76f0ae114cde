#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use acotsp_core::models::{Coordinate, DistanceKind, Problem};
use acotsp_core::utils::{GenericError, GenericResult};
use std::io::{BufReader, Read};

/// A TSP instance as it is described in a TSPLIB95 file.
#[derive(Clone, Debug, PartialEq)]
pub struct TsplibInstance {
    /// Instance name, empty when the file has no `NAME` entry.
    pub name: String,
    /// All `COMMENT` entries joined by a new line.
    pub comment: Option<String>,
    /// Distance function derived from `EDGE_WEIGHT_TYPE`.
    pub kind: DistanceKind,
    /// City coordinates ordered by node id.
    pub coordinates: Vec<Coordinate>,
}

impl TsplibInstance {
    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    /// Converts the instance into a solver problem with candidate lists of `k_backup` size.
    pub fn into_problem(self, k_backup: usize) -> GenericResult<Problem> {
        Problem::new(self.coordinates, self.kind, k_backup).map_err(GenericError::from)
    }
}

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification:
/// only `TSP` instances with node coordinates are supported.
pub trait TsplibProblem {
    /// Reads tsplib95 problem.
    fn read_tsplib(self) -> GenericResult<TsplibInstance>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> GenericResult<TsplibInstance> {
        TsplibReader::new(self).read_instance()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> GenericResult<TsplibInstance> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_instance()
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    name: Option<String>,
    comment: Option<String>,
    problem_type: Option<String>,
    dimension: Option<usize>,
    kind: Option<DistanceKind>,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self {
            buffer: String::new(),
            reader,
            name: None,
            comment: None,
            problem_type: None,
            dimension: None,
            kind: None,
        }
    }

    fn read_instance(mut self) -> GenericResult<TsplibInstance> {
        let (dimension, kind) = self.read_meta()?;
        let coordinates = self.read_coordinates(dimension)?;
        self.read_tail()?;

        Ok(TsplibInstance { name: self.name.unwrap_or_default(), comment: self.comment, kind, coordinates })
    }

    /// Reads specification part until `NODE_COORD_SECTION`, keys can come in any order.
    fn read_meta(&mut self) -> GenericResult<(usize, DistanceKind)> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line.to_string(),
                None => return Err("unexpected end of file, expecting NODE_COORD_SECTION".into()),
            };

            if line.is_empty() {
                continue;
            }

            if line.trim_end_matches(':').trim() == "NODE_COORD_SECTION" {
                break;
            }

            if line.ends_with("_SECTION") {
                return Err(format!("unsupported section: '{line}'").into());
            }

            let (key, value) =
                split_key_value(&line).ok_or_else(|| format!("expected colon separated string, got: '{line}'"))?;

            match key {
                "NAME" => self.name = Some(value.to_string()),
                "COMMENT" => {
                    self.comment = Some(match self.comment.take() {
                        Some(comment) => format!("{comment}\n{value}"),
                        None => value.to_string(),
                    })
                }
                "TYPE" => {
                    if value != "TSP" {
                        return Err(format!("expecting 'TSP' as TYPE, got '{value}'").into());
                    }
                    self.problem_type = Some(value.to_string());
                }
                "DIMENSION" => self.dimension = Some(parse_usize(value, "cannot parse DIMENSION")?),
                "EDGE_WEIGHT_TYPE" => self.kind = Some(parse_edge_weight_type(value)?),
                // NOTE other keys, e.g. DISPLAY_DATA_TYPE, do not affect coordinate based instances
                _ => {}
            }
        }

        if self.problem_type.is_none() {
            return Err("missing TYPE".into());
        }

        let dimension = self.dimension.filter(|&dimension| dimension > 0).ok_or("missing or empty DIMENSION")?;
        let kind = self.kind.ok_or("missing EDGE_WEIGHT_TYPE")?;

        Ok((dimension, kind))
    }

    fn read_coordinates(&mut self, dimension: usize) -> GenericResult<Vec<Coordinate>> {
        // NOTE storage grows with lines actually read, DIMENSION alone is not trusted
        let mut nodes = Vec::new();

        for _ in 0..dimension {
            let line = self.read_line()?.ok_or("unexpected end of file in NODE_COORD_SECTION")?;
            let data = line.split_whitespace().collect::<Vec<_>>();

            if data.len() != 3 {
                return Err(format!("unexpected coord data: '{line}'").into());
            }

            let id = parse_usize(data[0], "cannot parse node id")?;
            if id == 0 || id > dimension {
                return Err(format!("node id {id} is out of range [1, {dimension}]").into());
            }

            let (x, y) = (parse_real(data[1], "cannot parse x")?, parse_real(data[2], "cannot parse y")?);
            nodes.push((id, Coordinate::new(x, y)));
        }

        nodes.sort_by_key(|(id, _)| *id);

        // NOTE exactly `dimension` unique ids in range cover all of them
        if let Some(pair) = nodes.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(format!("duplicate node id: {}", pair[0].0).into());
        }

        Ok(nodes.into_iter().map(|(_, coordinate)| coordinate).collect())
    }

    /// Accepts either end of input or `EOF` marker.
    fn read_tail(&mut self) -> GenericResult<()> {
        while let Some(line) = self.read_line()? {
            match line {
                "" => continue,
                "EOF" => return Ok(()),
                _ => return Err(format!("expecting EOF, got: '{line}'").into()),
            }
        }

        Ok(())
    }

    /// Returns trimmed line or `None` at the end of input.
    fn read_line(&mut self) -> GenericResult<Option<&str>> {
        let bytes = read_line(&mut self.reader, &mut self.buffer)?;
        Ok(if bytes == 0 { None } else { Some(self.buffer.trim()) })
    }
}

fn parse_edge_weight_type(value: &str) -> GenericResult<DistanceKind> {
    match value {
        "EUC_2D" => Ok(DistanceKind::RoundedEuclidean),
        "CEIL_2D" => Ok(DistanceKind::CeilEuclidean),
        "ATT" => Ok(DistanceKind::Pseudo),
        "EXACT_2D" => Ok(DistanceKind::Euclidean),
        _ => Err(format!("unsupported EDGE_WEIGHT_TYPE: '{value}'").into()),
    }
}
