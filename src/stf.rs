//! STF tables, as produced by `sbf2stf`
use std::{
    fmt::{Display, Formatter},
    fs::File,
    path::Path,
    str::FromStr,
};

use crate::{prelude::Error, record::ChannelStatusRecord};

/// SBF blocks `sbf2stf` knows how to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StfBlock {
    /// Satellite tracking status, with elevation and azimuth
    ChannelStatus1,
    MeasEpoch2,
    MeasExtra1,
    PvtCartesian2,
    PvtGeodetic2,
    DOP2,
}

impl StfBlock {
    /// Returns true if this block carries the sky-view angles
    pub fn has_angles(&self) -> bool {
        matches!(self, Self::ChannelStatus1)
    }
    /// Name of the table `sbf2stf` produces for this block, next to `sbf`
    pub fn table_name(&self, sbf: &Path) -> String {
        let stem = sbf
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        format!("{}_{}.stf", stem, self)
    }
}

impl Display for StfBlock {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::ChannelStatus1 => write!(f, "ChannelStatus_1"),
            Self::MeasEpoch2 => write!(f, "MeasEpoch_2"),
            Self::MeasExtra1 => write!(f, "MeasExtra_1"),
            Self::PvtCartesian2 => write!(f, "PVTCartesian_2"),
            Self::PvtGeodetic2 => write!(f, "PVTGeodetic_2"),
            Self::DOP2 => write!(f, "DOP_2"),
        }
    }
}

impl FromStr for StfBlock {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ChannelStatus_1" => Ok(Self::ChannelStatus1),
            "MeasEpoch_2" => Ok(Self::MeasEpoch2),
            "MeasExtra_1" => Ok(Self::MeasExtra1),
            "PVTCartesian_2" => Ok(Self::PvtCartesian2),
            "PVTGeodetic_2" => Ok(Self::PvtGeodetic2),
            "DOP_2" => Ok(Self::DOP2),
            _ => Err(Error::UnknownBlock(s.to_string())),
        }
    }
}

/// Parses a `ChannelStatus_1` table.
///
/// The table is comma separated, `#` starts a comment line and the
/// first row names the columns. Either `sbf2stf` naming (`CHST_TOW`..)
/// or bare SBF field names (`TOW`..) are accepted, extra columns are
/// ignored.
pub fn parse_channel_status<P: AsRef<Path>>(path: P) -> Result<Vec<ChannelStatusRecord>, Error> {
    let path = path.as_ref();
    let fd = File::open(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(fd);

    let mut records = Vec::<ChannelStatusRecord>::new();
    for result in reader.deserialize::<ChannelStatusRecord>() {
        match result {
            Ok(rec) => records.push(rec),
            Err(e) => {
                let line = e.position().map(|pos| pos.line()).unwrap_or(0);
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: e.to_string(),
                });
            },
        }
    }

    debug!("{}: {} channel status records", path.display(), records.len());
    Ok(records)
}
