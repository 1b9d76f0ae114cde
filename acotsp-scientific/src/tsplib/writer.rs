#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use acotsp_core::models::Tour;
use acotsp_core::utils::GenericResult;
use std::io::{BufWriter, Write};

/// A trait to write tsplib95 tour.
pub trait TsplibTour<W: Write> {
    /// Writes tour in tsplib95 `TOUR` format with one-based node ids.
    fn write_tsplib(&self, writer: BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> TsplibTour<W> for (&str, &Tour) {
    fn write_tsplib(&self, mut writer: BufWriter<W>) -> GenericResult<()> {
        let (name, tour) = *self;

        writeln!(writer, "NAME : {name}")?;
        writeln!(writer, "COMMENT : Length = {}", tour.length())?;
        writeln!(writer, "TYPE : TOUR")?;
        writeln!(writer, "DIMENSION : {}", tour.size())?;
        writeln!(writer, "TOUR_SECTION")?;

        tour.cities().iter().try_for_each(|city| writeln!(writer, "{}", city + 1))?;

        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;

        writer.flush()?;

        Ok(())
    }
}
