#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use acotsp_core::utils::{GenericError, GenericResult};
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Reads a single line into the buffer, returns amount of bytes read. Zero means end of input.
pub fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> GenericResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(GenericError::from)
}

/// Splits `KEY : VALUE` line into trimmed key and value. Returns `None` when there is no colon.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').map(|(key, value)| (key.trim(), value.trim()))
}

/// Parses a real number.
pub fn parse_real(data: &str, err_msg: &str) -> GenericResult<f64> {
    data.parse::<f64>().map_err(|err| format!("{err_msg}: '{err}'").into())
}

/// Parses a non-negative integer.
pub fn parse_usize(data: &str, err_msg: &str) -> GenericResult<usize> {
    data.parse::<f64>()
        // NOTE some files write integers as 28.00000
        .ok()
        .filter(|value| value.is_finite() && *value >= 0. && value.fract() == 0.)
        .map(|value| value as usize)
        .ok_or_else(|| format!("{err_msg}: '{data}'").into())
}
