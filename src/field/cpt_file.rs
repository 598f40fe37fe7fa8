use crate::Error;
use russell_lab::Vector;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Number of header lines preceding the data of a CPT file
const N_HEADER_LINES: usize = 24;

/// Converts q_c from MPa (as stored in CPT files) to kPa
const MPA_TO_KPA: f64 = 1000.0;

/// Holds the data of a cone penetration test (CPT)
#[derive(Clone, Debug)]
pub struct Cpt {
    /// Depths (m)
    pub depth: Vector,

    /// Cone tip resistance (kPa)
    pub q_c: Vector,

    /// Sleeve friction (kPa)
    pub f_s: Vector,

    /// Pore pressure behind the cone (kPa)
    pub u_2: Vector,

    /// Groundwater level (m)
    pub gwl: Option<f64>,

    /// Area ratio of the cone
    pub a_ratio: Option<f64>,

    /// Folder containing the source file
    pub folder_path: String,

    /// Name of the source file
    pub file_name: String,

    /// Column delimiter of the source file
    pub delimiter: String,
}

impl Cpt {
    /// Reads a CPT text file
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    /// * `delimiter` -- the column delimiter (`;` if None)
    ///
    /// # Notes
    ///
    /// * The first 24 lines are the header; the remaining non-empty lines must have the
    ///   four numeric columns depth, q_c (MPa), f_s, u_2
    /// * A header line containing `Assumed GWL:` gives the groundwater level in its second field
    /// * A header line containing `aratio` gives the area ratio in its second field; unreadable
    ///   values are ignored
    pub fn read_file<P>(full_path: &P, delimiter: Option<&str>) -> Result<Self, Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let delimiter = delimiter.unwrap_or(";");
        let path = Path::new(full_path);
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::File(format!("cannot read {}: {}", path.display(), e)))?;
        let mut gwl = None;
        let mut a_ratio = None;
        let mut columns: [Vec<f64>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        for (i, line) in contents.lines().enumerate() {
            if line.contains("Assumed GWL:") {
                let value = second_field(line, delimiter)
                    .and_then(|s| s.parse::<f64>().ok())
                    .ok_or_else(|| Error::File(format!("line {}: cannot read the groundwater level", i + 1)))?;
                gwl = Some(value);
            }
            if line.contains("aratio") {
                if let Some(value) = second_field(line, delimiter).and_then(|s| s.parse::<f64>().ok()) {
                    a_ratio = Some(value);
                }
            }
            if i < N_HEADER_LINES || line.trim().is_empty() {
                continue;
            }
            let fields: Vec<_> = line.split(delimiter).map(|s| s.trim()).collect();
            if fields.len() != 4 {
                return Err(Error::File(format!(
                    "line {}: expected 4 columns, found {}",
                    i + 1,
                    fields.len()
                )));
            }
            for (j, field) in fields.iter().enumerate() {
                let value = field
                    .parse::<f64>()
                    .map_err(|_| Error::File(format!("line {}: cannot parse '{}'", i + 1, field)))?;
                columns[j].push(value);
            }
        }
        let [depth, q_c, f_s, u_2] = columns;
        let q_c: Vec<_> = q_c.iter().map(|q| q * MPA_TO_KPA).collect();
        let folder_path = match path.parent() {
            Some(p) => p.to_string_lossy().to_string(),
            None => String::new(),
        };
        let file_name = match path.file_name() {
            Some(f) => f.to_string_lossy().to_string(),
            None => String::new(),
        };
        Ok(Cpt {
            depth: Vector::from(&depth),
            q_c: Vector::from(&q_c),
            f_s: Vector::from(&f_s),
            u_2: Vector::from(&u_2),
            gwl,
            a_ratio,
            folder_path,
            file_name,
            delimiter: delimiter.to_string(),
        })
    }

    /// Returns the number of readings
    pub fn n_readings(&self) -> usize {
        self.depth.dim()
    }
}

fn second_field<'a>(line: &'a str, delimiter: &str) -> Option<&'a str> {
    line.split(delimiter).nth(1).map(|s| s.trim())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
