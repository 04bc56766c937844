//! PDF export of the filtered expenses as a titled, paginated table.

use printpdf::{
    BuiltinFont, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point,
};
use textwrap::{WordSeparator, core::Fragment, wrap_algorithms::wrap_first_fit};

use crate::{Error, expense::Expense};

use super::helvetica::{character_width, text_width};

/// The download name of the document.
pub const DOCUMENT_FILE_NAME: &str = "Filtered_Expenses_Report.pdf";

/// The MIME type of a PDF document.
pub const DOCUMENT_CONTENT_TYPE: &str = "application/pdf";

/// The title printed above the table.
pub const DOCUMENT_TITLE: &str = "Filtered Expenses Report";

/// The table header row.
pub const DOCUMENT_COLUMNS: [&str; 5] = ["Date", "Department", "Description", "Amount", "Day"];

// A4 portrait. All positions are measured in millimetres from the top left.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_TOP: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 15.0;
const TITLE_BASELINE: f32 = 16.0;
const TABLE_START: f32 = 20.0;

const TITLE_FONT_SIZE: f32 = 16.0;
const TABLE_FONT_SIZE: f32 = 8.0;
const LINE_HEIGHT: f32 = 3.4;
const CELL_PADDING: f32 = 1.5;
/// Distance from the bottom of a line box up to the text baseline.
const TEXT_DESCENT: f32 = 0.8;
const RULE_THICKNESS: f32 = 0.1;

/// Column widths, summing to the page width less both side margins.
const COLUMN_WIDTHS: [f32; 5] = [24.0, 28.0, 76.0, 30.0, 24.0];

/// One table row with each cell's text wrapped to fit its column.
#[derive(Debug, Clone, PartialEq)]
struct TableRow {
    cells: [Vec<String>; 5],
}

impl TableRow {
    fn new(texts: [&str; 5]) -> Self {
        Self {
            cells: std::array::from_fn(|column| wrap_cell(texts[column], COLUMN_WIDTHS[column])),
        }
    }

    fn line_count(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(1).max(1)
    }

    fn height(&self) -> f32 {
        self.line_count() as f32 * LINE_HEIGHT + 2.0 * CELL_PADDING
    }
}

/// A word, or a piece of a word too wide for its column, with its printed width.
#[derive(Debug)]
struct MeasuredWord<'a> {
    word: &'a str,
    whitespace: &'a str,
    width: f64,
    whitespace_width: f64,
}

impl<'a> MeasuredWord<'a> {
    fn new(word: &'a str, whitespace: &'a str) -> Self {
        Self {
            word,
            whitespace,
            width: f64::from(text_width(word, TABLE_FONT_SIZE)),
            whitespace_width: f64::from(text_width(whitespace, TABLE_FONT_SIZE)),
        }
    }
}

impl Fragment for MeasuredWord<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.whitespace_width
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Wrap `text` into lines that fit inside a column `column_width` wide.
fn wrap_cell(text: &str, column_width: f32) -> Vec<String> {
    let max_width = column_width - 2.0 * CELL_PADDING;

    text.split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, max_width))
        .collect()
}

fn wrap_paragraph(paragraph: &str, max_width: f32) -> Vec<String> {
    let words = measured_words(paragraph, max_width);

    if words.is_empty() {
        return vec![String::new()];
    }

    wrap_first_fit(&words, &[f64::from(max_width)])
        .into_iter()
        .map(|line| {
            let mut text = String::new();

            for (index, word) in line.iter().enumerate() {
                text.push_str(word.word);

                if index + 1 < line.len() {
                    text.push_str(word.whitespace);
                }
            }

            text
        })
        .collect()
}

/// Split `paragraph` into words, breaking any word wider than `max_width`
/// into pieces that fit.
fn measured_words(paragraph: &str, max_width: f32) -> Vec<MeasuredWord<'_>> {
    let mut words = Vec::new();

    for word in WordSeparator::AsciiSpace.find_words(paragraph) {
        let mut rest = word.word;

        loop {
            let split = split_at_width(rest, max_width);

            if split == rest.len() {
                words.push(MeasuredWord::new(rest, word.whitespace));
                break;
            }

            words.push(MeasuredWord::new(&rest[..split], ""));
            rest = &rest[split..];
        }
    }

    words
}

/// The byte length of the longest prefix of `word` no wider than
/// `max_width`. Always includes at least one character of a non-empty word.
fn split_at_width(word: &str, max_width: f32) -> usize {
    let mut width = 0.0;

    for (index, character) in word.char_indices() {
        width += character_width(character, TABLE_FONT_SIZE);

        if width > max_width {
            return if index == 0 {
                character.len_utf8()
            } else {
                index
            };
        }
    }

    word.len()
}

/// The body cells for `expense`: date, department, description, amount and day.
fn expense_row(expense: &Expense) -> TableRow {
    let amount = expense.display_amount();

    TableRow::new([
        expense.date.as_str(),
        expense.department.as_str(),
        expense.description.as_str(),
        amount.as_str(),
        expense.day.as_str(),
    ])
}

/// Split `rows` into pages, returning the row indices drawn on each page.
///
/// The first page starts below the title; later pages start at the top
/// margin. Every page repeats the header, so `header_height` is reserved on
/// each. A row taller than a whole page is placed alone on its page.
fn paginate(rows: &[TableRow], header_height: f32) -> Vec<Vec<usize>> {
    let page_bottom = PAGE_HEIGHT - MARGIN_BOTTOM;
    let mut pages = Vec::new();
    let mut current_page = Vec::new();
    let mut cursor = TABLE_START + header_height;

    for (index, row) in rows.iter().enumerate() {
        if cursor + row.height() > page_bottom && !current_page.is_empty() {
            pages.push(std::mem::take(&mut current_page));
            cursor = MARGIN_TOP + header_height;
        }

        current_page.push(index);
        cursor += row.height();
    }

    pages.push(current_page);
    pages
}

/// Something drawn on a page, positioned in millimetres from the top left.
#[derive(Debug, Clone, PartialEq)]
enum Mark {
    Text {
        text: String,
        left: f32,
        baseline: f32,
        font_size: f32,
        bold: bool,
    },
    Rule {
        top: f32,
    },
}

/// Place the title, the header and `rows` on pages.
///
/// The title only appears on the first page. Each page starts with the header
/// row, and every row is followed by a rule.
fn layout(rows: &[TableRow]) -> Vec<Vec<Mark>> {
    let header = TableRow::new(DOCUMENT_COLUMNS);

    paginate(rows, header.height())
        .iter()
        .enumerate()
        .map(|(page_number, row_indices)| {
            let mut marks = Vec::new();

            let mut cursor = if page_number == 0 {
                marks.push(Mark::Text {
                    text: DOCUMENT_TITLE.to_owned(),
                    left: MARGIN_LEFT,
                    baseline: TITLE_BASELINE,
                    font_size: TITLE_FONT_SIZE,
                    bold: false,
                });
                TABLE_START
            } else {
                MARGIN_TOP
            };

            marks.push(Mark::Rule { top: cursor });
            cursor = layout_row(&mut marks, &header, cursor, true);
            marks.push(Mark::Rule { top: cursor });

            for &index in row_indices {
                cursor = layout_row(&mut marks, &rows[index], cursor, false);
                marks.push(Mark::Rule { top: cursor });
            }

            marks
        })
        .collect()
}

/// Add the text of `row` with its top edge at `top` and return the position
/// of its bottom edge.
fn layout_row(marks: &mut Vec<Mark>, row: &TableRow, top: f32, bold: bool) -> f32 {
    let mut left = MARGIN_LEFT;

    for (lines, width) in row.cells.iter().zip(COLUMN_WIDTHS) {
        for (line_number, line) in lines.iter().enumerate() {
            marks.push(Mark::Text {
                text: line.clone(),
                left: left + CELL_PADDING,
                baseline: top + CELL_PADDING + (line_number + 1) as f32 * LINE_HEIGHT
                    - TEXT_DESCENT,
                font_size: TABLE_FONT_SIZE,
                bold,
            });
        }

        left += width;
    }

    top + row.height()
}

/// Render `expenses` as a PDF document.
///
/// The document holds the title followed by a table of the expenses. An empty
/// list still yields the title and the header row.
///
/// # Errors
/// Returns [Error::DocumentExport] if the PDF cannot be created.
pub fn build_document(expenses: &[Expense]) -> Result<Vec<u8>, Error> {
    let rows: Vec<TableRow> = expenses.iter().map(expense_row).collect();

    write_document(&layout(&rows)).map_err(|error| {
        tracing::error!("could not write expense document: {error:?}");
        Error::DocumentExport(format!("{error:?}"))
    })
}

fn write_document(pages: &[Vec<Mark>]) -> Result<Vec<u8>, printpdf::Error> {
    let (document, page, layer) =
        PdfDocument::new(DOCUMENT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
    let regular = document.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = document.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = document.get_page(page).get_layer(layer);

    for (page_number, marks) in pages.iter().enumerate() {
        if page_number > 0 {
            layer = add_page(&document, page_number + 1);
        }

        layer.set_outline_thickness(RULE_THICKNESS);

        for mark in marks {
            match mark {
                Mark::Text {
                    text,
                    left,
                    baseline,
                    font_size,
                    bold: is_bold,
                } => {
                    let font = if *is_bold { &bold } else { &regular };
                    layer.use_text(
                        text.as_str(),
                        *font_size,
                        Mm(*left),
                        Mm(PAGE_HEIGHT - baseline),
                        font,
                    );
                }
                Mark::Rule { top } => draw_rule(&layer, *top),
            }
        }
    }

    document.save_to_bytes()
}

fn add_page(document: &PdfDocumentReference, page_number: usize) -> PdfLayerReference {
    let (page, layer) = document.add_page(
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        format!("Page {page_number}"),
    );

    document.get_page(page).get_layer(layer)
}

/// Draw a horizontal rule across the table at `top`.
fn draw_rule(layer: &PdfLayerReference, top: f32) {
    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    let y = Mm(PAGE_HEIGHT - top);

    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), y), false),
            (Point::new(Mm(MARGIN_LEFT + table_width), y), false),
        ],
        is_closed: false,
    });
}

#[cfg(test)]
mod tests {
    use crate::expense::Expense;

    use super::{
        CELL_PADDING, COLUMN_WIDTHS, DOCUMENT_COLUMNS, DOCUMENT_TITLE, MARGIN_LEFT, Mark,
        PAGE_WIDTH, TABLE_FONT_SIZE, TableRow, build_document, expense_row, layout, paginate,
        wrap_cell,
    };
    use crate::export::helvetica::text_width;

    const PDF_MAGIC: &[u8] = b"%PDF-";

    fn expenses(count: usize) -> Vec<Expense> {
        (0..count)
            .map(|i| Expense::build("2024-01-01", "Props", &format!("Item {i}"), "10", "Mon"))
            .collect()
    }

    /// The text of each mark on a page, in drawing order.
    fn page_texts(page: &[Mark]) -> Vec<&str> {
        page.iter()
            .filter_map(|mark| match mark {
                Mark::Text { text, .. } => Some(text.as_str()),
                Mark::Rule { .. } => None,
            })
            .collect()
    }

    #[track_caller]
    fn assert_lines_fit(lines: &[String], column_width: f32) {
        let max_width = column_width - 2.0 * CELL_PADDING;

        for line in lines {
            let width = text_width(line, TABLE_FONT_SIZE);
            assert!(
                width <= max_width,
                "{line:?} is {width}mm wide, more than {max_width}mm"
            );
        }
    }

    #[test]
    fn columns_fit_between_margins() {
        let table_width: f32 = COLUMN_WIDTHS.iter().sum();

        assert_eq!(table_width, PAGE_WIDTH - 2.0 * MARGIN_LEFT);
    }

    #[test]
    fn row_cells_hold_formatted_amount() {
        let expense = Expense::build("2024-01-01", "Props", "Tape", "1500", "Mon");

        let row = expense_row(&expense);

        assert_eq!(
            row.cells,
            [
                vec!["2024-01-01".to_owned()],
                vec!["Props".to_owned()],
                vec!["Tape".to_owned()],
                vec!["RM 1,500".to_owned()],
                vec!["Mon".to_owned()],
            ]
        );
    }

    #[test]
    fn invalid_amount_prints_nan() {
        let expense = Expense::build("2024-01-01", "Props", "Tape", "n/a", "Mon");

        let row = expense_row(&expense);

        assert_eq!(row.cells[3], vec!["RM NaN".to_owned()]);
    }

    #[test]
    fn long_descriptions_wrap_and_grow_the_row() {
        let short = expense_row(&Expense::build("2024-01-01", "Props", "Tape", "1", "Mon"));
        let long = expense_row(&Expense::build(
            "2024-01-01",
            "Props",
            "Gaffer tape, spike tape, cable ties and a replacement bulb for the \
            practical lamp in the kitchen set, collected from the rental house",
            "1",
            "Mon",
        ));

        assert!(long.cells[2].len() > 1, "description did not wrap");
        assert!(long.height() > short.height());
        assert_lines_fit(&long.cells[2], COLUMN_WIDTHS[2]);
    }

    #[test]
    fn capital_letters_wrap_within_the_column() {
        let description = "WARDROBE FITTING FOR LEAD ACTRESS AND STUNT DOUBLE";

        let lines = wrap_cell(description, COLUMN_WIDTHS[2]);

        assert!(lines.len() > 1, "all-caps description did not wrap");
        assert_lines_fit(&lines, COLUMN_WIDTHS[2]);
        assert_eq!(lines.join(" "), description);
    }

    #[test]
    fn overlong_words_are_broken() {
        let word = "W".repeat(60);

        let lines = wrap_cell(&word, COLUMN_WIDTHS[2]);

        assert!(lines.len() > 1, "wide word was not broken");
        assert_lines_fit(&lines, COLUMN_WIDTHS[2]);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn large_amounts_fit_the_amount_column() {
        let expense = Expense::build("2024-01-01", "Props", "Crane", "88888888888.888", "Mon");

        let row = expense_row(&expense);

        assert_lines_fit(&row.cells[3], COLUMN_WIDTHS[3]);
        assert_eq!(row.cells[3].concat().replace(' ', ""), "RM88,888,888,888.888");
    }

    #[test]
    fn line_breaks_start_new_lines() {
        assert_eq!(wrap_cell("Tape\nGlue", COLUMN_WIDTHS[2]), ["Tape", "Glue"]);
    }

    #[test]
    fn empty_cells_still_take_one_line() {
        let row = TableRow::new(["", "", "", "", ""]);

        assert_eq!(row.line_count(), 1);
    }

    #[test]
    fn empty_table_has_one_page() {
        let header = TableRow::new(DOCUMENT_COLUMNS);

        let pages = paginate(&[], header.height());

        assert_eq!(pages, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn long_tables_span_pages_in_order() {
        let header = TableRow::new(DOCUMENT_COLUMNS);
        let rows: Vec<_> = expenses(200).iter().map(expense_row).collect();

        let pages = paginate(&rows, header.height());

        assert!(pages.len() > 1, "want several pages, got {}", pages.len());
        assert!(pages.iter().all(|page| !page.is_empty()));
        let flattened: Vec<usize> = pages.into_iter().flatten().collect();
        assert_eq!(flattened, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn empty_layout_is_title_and_header() {
        let pages = layout(&[]);

        assert_eq!(pages.len(), 1);
        assert_eq!(
            page_texts(&pages[0]),
            [DOCUMENT_TITLE, "Date", "Department", "Description", "Amount", "Day"]
        );
    }

    #[test]
    fn title_sits_above_the_table() {
        let pages = layout(&[]);

        assert_eq!(
            pages[0][0],
            Mark::Text {
                text: "Filtered Expenses Report".to_owned(),
                left: 14.0,
                baseline: 16.0,
                font_size: 16.0,
                bold: false,
            }
        );
        assert_eq!(pages[0][1], Mark::Rule { top: 20.0 });
    }

    #[test]
    fn layout_lists_each_expense_after_the_header() {
        let rows: Vec<_> = [
            Expense::build("2024-01-01", "Props", "Tape", "50", "Mon"),
            Expense::build("2024-01-02", "F&B", "Lunch", "1234.5", "Tue"),
        ]
        .iter()
        .map(expense_row)
        .collect();

        let pages = layout(&rows);

        assert_eq!(
            page_texts(&pages[0]),
            [
                DOCUMENT_TITLE,
                "Date",
                "Department",
                "Description",
                "Amount",
                "Day",
                "2024-01-01",
                "Props",
                "Tape",
                "RM 50",
                "Mon",
                "2024-01-02",
                "F&B",
                "Lunch",
                "RM 1,234.5",
                "Tue",
            ]
        );
    }

    #[test]
    fn every_page_repeats_the_header() {
        let rows: Vec<_> = expenses(200).iter().map(expense_row).collect();

        let pages = layout(&rows);

        assert!(pages.len() > 1);
        for (page_number, page) in pages.iter().enumerate() {
            let texts = page_texts(page);
            let header_start = usize::from(page_number == 0);
            assert_eq!(
                texts[header_start..header_start + 5],
                DOCUMENT_COLUMNS,
                "page {page_number} does not start with the header"
            );
            assert_eq!(
                texts.contains(&DOCUMENT_TITLE),
                page_number == 0,
                "title on page {page_number}"
            );
        }
    }

    #[test]
    fn empty_list_produces_a_pdf_with_the_title() {
        let bytes = build_document(&[]).unwrap();

        assert!(bytes.starts_with(PDF_MAGIC), "document is not a PDF");

        let document = lopdf::Document::load_mem(&bytes).unwrap();
        let text = document.extract_text(&[1]).unwrap();
        assert!(text.contains(DOCUMENT_TITLE), "got text {text:?}");
        assert!(text.contains("Description"), "got text {text:?}");
    }

    #[test]
    fn multi_page_document_has_a_page_per_layout_page() {
        let rows: Vec<_> = expenses(200).iter().map(expense_row).collect();
        let page_count = layout(&rows).len();

        let bytes = build_document(&expenses(200)).unwrap();

        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), page_count);
    }
}
