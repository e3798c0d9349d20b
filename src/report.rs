use std::f64::consts::PI;
use std::io::Write;

use crate::error::Result;
use crate::estimator::{Estimate, SampleCount};

pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(
        out,
        "Please enter the number of points you would like\n\
         to use to approximate pi (0 for the maximum): "
    )?;
    out.flush()?;
    Ok(())
}

pub fn write_announcement<W: Write>(out: &mut W, count: SampleCount) -> Result<()> {
    match count {
        SampleCount::Maximum => {
            writeln!(out, "The algorithm will pick {} points", count.resolve())?;
            writeln!(out, "for the calculation (this might take a while).\n")?;
        }
        SampleCount::Exactly(n) => {
            writeln!(out, "The algorithm will pick {n} points")?;
            writeln!(out, "for the calculation.\n")?;
        }
    }
    Ok(())
}

/// Fixed-point, 10 decimals.
pub fn write_estimate<W: Write>(out: &mut W, estimate: &Estimate) -> Result<()> {
    writeln!(out, "Pi (approximation)  :   {:.10}", estimate.value)?;
    writeln!(out, "Pi (real value)     :   {:.10}", PI)?;
    writeln!(out, "Difference          :   {:.10}", estimate.error)?;
    Ok(())
}
