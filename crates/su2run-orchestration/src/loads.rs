//! Export of surface loads for the structural model.

use std::fmt::Write as _;
use std::path::Path;

use su2run_core::constants::{LOADS_FILE, SURFACE_FLOW};
use su2run_core::error::Su2Error;

const REQUIRED_COLUMNS: [&str; 6] = [
    "PointID",
    "x",
    "y",
    "z",
    "Pressure",
    "Pressure_Coefficient",
];

const LOADS_HEADER: &str = "point_id,x,y,z,pressure,pressure_coefficient";

/// Convert `surface_flow.csv` into `loads.csv` in the same directory.
///
/// Returns the number of surface points written.
pub fn extract_loads(wkdir: &Path) -> Result<usize, Su2Error> {
    let surface_path = wkdir.join(SURFACE_FLOW);
    if !surface_path.is_file() {
        return Err(Su2Error::MissingFile(surface_path));
    }
    let text = std::fs::read_to_string(&surface_path).map_err(|e| Su2Error::io(&surface_path, e))?;
    let origin = surface_path.display().to_string();

    let loads = surface_loads(&text, &origin)?;
    let loads_path = wkdir.join(LOADS_FILE);
    std::fs::write(&loads_path, &loads.csv).map_err(|e| Su2Error::io(&loads_path, e))?;
    tracing::info!("{} load points written to {}", loads.points, loads_path.display());
    Ok(loads.points)
}

#[derive(Debug)]
struct Loads {
    csv: String,
    points: usize,
}

fn surface_loads(text: &str, origin: &str) -> Result<Loads, Su2Error> {
    let mut lines = text.lines().enumerate();
    let Some((_, header)) = lines.next() else {
        return Err(parse_error(origin, 1, "empty surface flow file"));
    };
    let columns: Vec<String> = split_row(header);

    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| parse_error(origin, 1, &format!("missing column \"{name}\"")))?;
    }

    let mut csv = String::from(LOADS_HEADER);
    csv.push('\n');
    let mut points = 0;
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_row(line);
        let mut row = Vec::with_capacity(indices.len());
        for &col in &indices {
            let field = fields
                .get(col)
                .ok_or_else(|| parse_error(origin, idx + 1, "row has too few columns"))?;
            if field.parse::<f64>().is_err() {
                return Err(parse_error(
                    origin,
                    idx + 1,
                    &format!("\"{field}\" is not a number"),
                ));
            }
            row.push(field.as_str());
        }
        let _ = writeln!(csv, "{}", row.join(","));
        points += 1;
    }
    Ok(Loads { csv, points })
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|field| field.trim().trim_matches('"').to_string())
        .collect()
}

fn parse_error(origin: &str, line: usize, message: &str) -> Su2Error {
    Su2Error::Parse {
        path: origin.to_string(),
        line,
        message: message.to_string(),
    }
}
