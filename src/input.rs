use std::io::{BufRead, Write};

use claby::dims::Dims;

use crate::error::Error;

/// Asks for one positive dimension until a valid number is entered.
pub fn prompt_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<u16, Error> {
    loop {
        write!(output, "Enter the number of {} of the maze: ", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::Input(format!("no value given for {}", label)));
        }

        match line.trim().parse::<u16>() {
            Ok(value) if value > 0 => return Ok(value),
            _ => {
                log::warn!("Rejected {:?} as the number of {}", line.trim(), label);
                writeln!(output, "Please enter a positive whole number.")?;
            }
        }
    }
}

/// Asks for rows, then columns.
pub fn read_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Dims, Error> {
    let rows = prompt_dimension(input, output, "rows")?;
    let cols = prompt_dimension(input, output, "columns")?;
    writeln!(output)?;

    Ok(Dims::from((rows, cols)))
}
