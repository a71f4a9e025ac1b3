//! Numeric coercion of the duration columns

use crate::types::{Cell, Column, ReportError, ResultsTable, Result};

/// Parse every text cell of the three duration columns as `f64`
///
/// Cells that are already numeric are left alone, so running this twice is
/// the same as running it once. Stops at the first non-numeric cell.
pub fn coerce_numeric(table: &mut ResultsTable) -> Result<()> {
    let mut converted = 0usize;

    for column in Column::ALL {
        for (row, trial) in table.rows.iter_mut().enumerate() {
            let cell = trial.cell_mut(column);
            if let Cell::Text(text) = cell {
                let value = text.trim().parse::<f64>().map_err(|_| ReportError::Parse {
                    row,
                    column,
                    value: text.clone(),
                })?;
                *cell = Cell::Number(value);
                converted += 1;
            }
        }
    }

    log::debug!("Coerced {} cells to numbers", converted);
    Ok(())
}
