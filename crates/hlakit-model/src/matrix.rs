//! Junction read-count matrix.

/// One junction row; `counts` is parallel to [`CountMatrix::samples`].
#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    pub id: String,
    pub counts: Vec<f64>,
}

/// Junctions by samples. The header of the id column is kept so it can be
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountMatrix {
    pub id_header: String,
    pub samples: Vec<String>,
    pub rows: Vec<CountRow>,
}

impl CountMatrix {
    pub fn new(id_header: impl Into<String>, samples: Vec<String>) -> Self {
        Self {
            id_header: id_header.into(),
            samples,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: CountRow) {
        self.rows.push(row);
    }

    /// (junctions, samples)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.samples.len())
    }
}
