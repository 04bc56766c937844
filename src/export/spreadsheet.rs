//! Excel workbook export of the filtered expenses.

use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};

use crate::{
    Error,
    expense::{Amount, Expense},
};

/// The download name of the workbook.
pub const SPREADSHEET_FILE_NAME: &str = "Filtered_Expenses_Report.xlsx";

/// The MIME type of an Office Open XML workbook.
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The name of the only worksheet in the workbook.
pub const SHEET_NAME: &str = "Filtered Report";

/// The header row: the expense field names in serialization order.
pub const SPREADSHEET_COLUMNS: [&str; 5] = ["date", "department", "description", "amount", "day"];

/// A single worksheet cell.
#[derive(Debug, PartialEq)]
enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

fn expense_cells(expense: &Expense) -> [Cell<'_>; 5] {
    let amount = match &expense.amount {
        Amount::Number(number) => Cell::Number(*number),
        Amount::Text(text) => Cell::Text(text),
    };

    [
        Cell::Text(&expense.date),
        Cell::Text(&expense.department),
        Cell::Text(&expense.description),
        amount,
        Cell::Text(&expense.day),
    ]
}

/// Write `expenses` to an in-memory `.xlsx` workbook.
///
/// The sheet always starts with the header row, so an empty list produces a
/// header-only workbook. Amounts are written as supplied: numbers as numeric
/// cells, text as string cells.
///
/// # Errors
/// Returns [Error::SpreadsheetExport] if the workbook cannot be written, e.g.
/// when there are more rows than a worksheet can hold.
pub fn build_spreadsheet(expenses: &[Expense]) -> Result<Vec<u8>, Error> {
    write_workbook(expenses).map_err(|error| {
        tracing::error!("could not write expense workbook: {error}");
        Error::SpreadsheetExport(error.to_string())
    })
}

fn write_workbook(expenses: &[Expense]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (column, name) in SPREADSHEET_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, column as ColNum, *name)?;
    }

    for (index, expense) in expenses.iter().enumerate() {
        let row = RowNum::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;

        for (column, cell) in expense_cells(expense).into_iter().enumerate() {
            let column = column as ColNum;

            match cell {
                Cell::Text(text) => worksheet.write_string(row, column, text)?,
                Cell::Number(number) => worksheet.write_number(row, column, number)?,
            };
        }
    }

    workbook.save_to_buffer()
}
