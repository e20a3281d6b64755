use serde::{Deserialize, Serialize};

/// Scalar value held in a single cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Serialized as JSON `null`.
    #[default]
    Empty,
}

impl CellValue {
    /// Render the value as text. `Empty` renders as the empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// True for `Empty` and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// A 2-D grid of cell values, row-major (spreadsheet-style addressing).
///
/// Single-cell fields are the common case; they are 1×1 grids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueGrid(pub Vec<Vec<CellValue>>);

impl ValueGrid {
    /// 1×1 grid holding one value.
    pub fn from_scalar(value: CellValue) -> Self {
        Self(vec![vec![value]])
    }

    /// The cell at `[0][0]`, or `None` for a grid with no rows or an
    /// empty first row.
    pub fn first(&self) -> Option<&CellValue> {
        self.0.first().and_then(|row| row.first())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Write the cell at `[0][0]`, growing the grid to 1×1 if needed.
    pub fn set_first(&mut self, value: CellValue) {
        if self.0.is_empty() {
            self.0.push(Vec::new());
        }
        let row = &mut self.0[0];
        if row.is_empty() {
            row.push(value);
        } else {
            row[0] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(CellValue::Empty.as_text(), "");
        assert_eq!(CellValue::Text("Jane".into()).as_text(), "Jane");
        assert_eq!(CellValue::Number(42.0).as_text(), "42");
        assert_eq!(CellValue::Number(1.5).as_text(), "1.5");
        assert_eq!(CellValue::Bool(true).as_text(), "true");
    }

    #[test]
    fn test_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text(String::new()).is_empty());
        assert!(!CellValue::Text("x".into()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_first_on_empty_grid() {
        assert!(ValueGrid::default().first().is_none());
        assert!(ValueGrid(vec![vec![]]).first().is_none());
    }

    #[test]
    fn test_set_first_grows_empty_grid() {
        let mut grid = ValueGrid::default();
        grid.set_first(CellValue::Text("OK".into()));
        assert_eq!(grid.first(), Some(&CellValue::Text("OK".into())));

        // Overwrites in place on a populated grid
        grid.set_first(CellValue::Text("Created".into()));
        assert_eq!(grid.0.len(), 1);
        assert_eq!(grid.0[0].len(), 1);
        assert_eq!(grid.first(), Some(&CellValue::Text("Created".into())));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = ValueGrid::from_scalar(CellValue::Number(1.0));
        assert!(grid.get(0, 1).is_none());
        assert!(grid.get(1, 0).is_none());
    }

    #[test]
    fn test_grid_json_roundtrip() {
        let json = r#"[["Jane", 42, true, null]]"#;
        let grid: ValueGrid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.get(0, 0), Some(&CellValue::Text("Jane".into())));
        assert_eq!(grid.get(0, 1), Some(&CellValue::Number(42.0)));
        assert_eq!(grid.get(0, 2), Some(&CellValue::Bool(true)));
        assert_eq!(grid.get(0, 3), Some(&CellValue::Empty));

        let back = serde_json::to_string(&grid).unwrap();
        assert_eq!(back, r#"[["Jane",42.0,true,null]]"#);
    }
}
