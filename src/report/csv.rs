//! Waveform output formatting (CSV).

use std::io::Write;

use crate::error::Result;
use crate::waveform::Waveforms;

/// Write synthesized waveforms as CSV.
///
/// Format:
/// ```csv
/// time,switch,inductor_current
/// 0,1,1.7
/// 0.000000002002002,1,1.7041
/// ```
pub fn write_waveforms_csv<W: Write>(waveforms: &Waveforms, writer: &mut W) -> Result<()> {
    let channels: Vec<_> = waveforms.channels().collect();

    write!(writer, "time")?;
    for channel in &channels {
        write!(writer, ",{}", channel)?;
    }
    writeln!(writer)?;

    let columns: Vec<&[f64]> = channels
        .iter()
        .filter_map(|&channel| waveforms.values(channel))
        .collect();

    for (i, t) in waveforms.time().iter().enumerate() {
        write!(writer, "{}", t)?;
        for column in &columns {
            write!(writer, ",{}", column[i])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
