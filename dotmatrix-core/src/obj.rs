/// Wavefront OBJ vertex ingestion
use nalgebra::Point2;
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1},
    combinator::opt,
    number::complete::float,
    sequence::preceded,
    IResult,
};

/// Parse the `v` statements of a Wavefront OBJ document into a planar
/// vertex list, in file order.
///
/// The pipeline is 2D, so only x and y are kept; a trailing z coordinate
/// is accepted and dropped. Every other statement (`vn`, `vt`, `f`,
/// comments, object/group names) is skipped — face and normal data have
/// no consumer here.
pub fn parse_obj(input: &str) -> Result<Vec<Point2<f32>>, String> {
    let mut vertices = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if is_vertex_line(trimmed) {
            match parse_vertex(trimmed) {
                Ok((_, vertex)) => vertices.push(vertex),
                Err(e) => {
                    return Err(format!("malformed vertex on line {}: {:?}", number + 1, e))
                }
            }
        }
    }

    Ok(vertices)
}

/// A `v` statement, as opposed to `vn`, `vt` or anything else.
fn is_vertex_line(line: &str) -> bool {
    line == "v" || line.starts_with("v ") || line.starts_with("v\t")
}

fn parse_vertex(input: &str) -> IResult<&str, Point2<f32>> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, _) = opt(preceded(multispace1, float))(input)?;
    let (input, _) = multispace0(input)?;

    Ok((input, Point2::new(x, y)))
}
