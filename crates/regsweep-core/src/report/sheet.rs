/// In-memory worksheet model.
///
/// Reports are laid out as a grid of [`Cell`]s first and rendered to xlsx
/// afterwards. Keeping the layout as plain data lets the tests check rows,
/// styles and column widths without reading a workbook back.

/// Extra characters added to every auto-sized column.
pub const COLUMN_PADDING: usize = 2;

/// Value of one cell. Counts stay numeric in the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(u64),
}

impl CellValue {
    /// The value as the user sees it, used for column sizing.
    pub fn rendered(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    fn rendered_width(&self) -> usize {
        match self {
            Self::Text(s) => s.chars().count(),
            Self::Number(n) => n.to_string().len(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// The two styling primitives the reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
    /// Thin border on all four sides.
    pub border: bool,
}

impl CellStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        border: false,
    };
    pub const TITLE: Self = Self {
        bold: true,
        border: false,
    };
    pub const BORDERED: Self = Self {
        bold: false,
        border: true,
    };
    pub const HEADER: Self = Self {
        bold: true,
        border: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// A named worksheet, row-major. Blank rows are empty vectors.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl SheetLayout {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Append a row where every cell has the same style.
    pub fn push_row<I, V>(&mut self, values: I, style: CellStyle)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let row = values
            .into_iter()
            .map(|v| Cell {
                value: v.into(),
                style,
            })
            .collect();
        self.rows.push(row);
    }

    /// Append a bold, thin-bordered header row.
    pub fn push_header_row(&mut self, labels: &[&str]) {
        self.push_row(labels.iter().copied(), CellStyle::HEADER);
    }

    pub fn push_blank_rows(&mut self, count: usize) {
        for _ in 0..count {
            self.rows.push(Vec::new());
        }
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Width of each column: the longest rendered value plus [`COLUMN_PADDING`].
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0usize; self.column_count()];
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.value.rendered_width());
            }
        }
        widths.into_iter().map(|w| w + COLUMN_PADDING).collect()
    }
}
