use crate::config::SheetSelector;
use crate::error::BatchError;
use crate::results::ResultTable;
use calamine::{Data, Range, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Longest string Excel accepts in a single cell, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

/// Read source URLs from the first column of the selected sheet.
///
/// Row 1 is a header and is skipped, as are blank cells and the falsy values
/// `0` and `FALSE`. Text is returned as stored; other cells are used in their
/// displayed form.
pub fn read_urls(path: &Path, sheet: &SheetSelector) -> Result<Vec<String>, BatchError> {
    let input_error = |source| BatchError::Input {
        path: path.to_path_buf(),
        source,
    };
    let missing_sheet = || BatchError::Sheet {
        path: path.to_path_buf(),
        sheet: sheet.to_string(),
    };

    let mut workbook = open_workbook_auto(path).map_err(input_error)?;

    let range = match sheet {
        SheetSelector::Index(index) => workbook
            .worksheet_range_at(*index)
            .ok_or_else(missing_sheet)?
            .map_err(input_error)?,
        SheetSelector::Name(name) => {
            if !workbook.sheet_names().contains(name) {
                return Err(missing_sheet());
            }
            workbook.worksheet_range(name).map_err(input_error)?
        }
    };

    let urls = first_column(&range)
        .into_iter()
        .skip(1)
        .filter_map(|cell| cell_to_url(&cell))
        .collect::<Vec<_>>();

    ::log::info!(
        "Read {} URLs from {} (sheet {})",
        urls.len(),
        path.display(),
        sheet
    );
    Ok(urls)
}

/// Cells of column A from row 1 down to the last used row
fn first_column(range: &Range<Data>) -> Vec<Data> {
    let Some((_, (last_row, _))) = range.start().zip(range.end()) else {
        return Vec::new();
    };

    (0..=last_row)
        .map(|row| range.get_value((row, 0)).cloned().unwrap_or(Data::Empty))
        .collect()
}

fn cell_to_url(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Bool(false) | Data::Int(0) => None,
        Data::Float(f) if *f == 0.0 => None,
        Data::String(s) => (!s.trim().is_empty()).then(|| s.clone()),
        other => {
            let value = other.to_string();
            (!value.trim().is_empty()).then_some(value)
        }
    }
}

/// Check that `title` is usable as a worksheet name before any work is done
pub fn validate_title(title: &str) -> Result<(), BatchError> {
    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .set_name(title)
        .map_err(|source| BatchError::SheetTitle {
            title: title.to_string(),
            source,
        })?;
    Ok(())
}

/// Cut `value` to at most [`MAX_CELL_CHARS`] characters, on a char boundary
fn truncate_cell(value: &str) -> (&str, bool) {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => (&value[..end], true),
        None => (value, false),
    }
}

/// Write the header and all rows to a new workbook at `path`, replacing any existing file
pub fn write_table(path: &Path, table: &ResultTable, sheet_title: &str) -> Result<(), BatchError> {
    let output_error = |source| BatchError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_title).map_err(output_error)?;

    for (col, title) in table.header().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *title)
            .map_err(output_error)?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, value) in row.cells().iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let (value, truncated) = truncate_cell(value);
            if truncated {
                ::log::warn!(
                    "Truncated {} for {} to {} characters",
                    table.header()[col],
                    row.source_url,
                    MAX_CELL_CHARS
                );
            }
            worksheet
                .write_string(row_num, col as u16, value)
                .map_err(output_error)?;
        }
    }

    workbook.save(path).map_err(output_error)?;

    ::log::debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
