use crate::{Cell, ConfigError, GameConfig, ProbabilityTable, RngState};
use serde::{Deserialize, Serialize};

/// Symbol names laid out row by row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Matrix {
    cells: Vec<Vec<String>>,
}

impl Matrix {
    pub fn from_rows(cells: Vec<Vec<String>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, cell: Cell) -> Option<&str> {
        self.cells
            .get(cell.row)
            .and_then(|row| row.get(cell.column))
            .map(String::as_str)
    }

    /// Every cell with its symbol, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &str)> {
        self.cells.iter().enumerate().flat_map(|(row, symbols)| {
            symbols
                .iter()
                .enumerate()
                .map(move |(column, symbol)| (Cell::new(row, column), symbol.as_str()))
        })
    }

    pub fn as_rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.cells
    }
}

#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    rows: usize,
    columns: usize,
    cell_tables: Vec<(Cell, ProbabilityTable)>,
    default_table: ProbabilityTable,
    bonus_table: ProbabilityTable,
}

impl MatrixGenerator {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let entries = &config.probabilities.standard_symbols;
        let default = config
            .probabilities
            .default_distribution()
            .ok_or(ConfigError::MissingDefaultDistribution)?;
        let default_table = ProbabilityTable::new("default standard symbols", &default.symbols)?;

        let mut cell_tables = Vec::with_capacity(entries.len());
        for entry in entries {
            let cell = Cell::new(entry.row, entry.column);
            let table = ProbabilityTable::new(&format!("standard symbols at {cell}"), &entry.symbols)?;
            if config.in_bounds(entry.row, entry.column) {
                cell_tables.push((cell, table));
            } else {
                log::debug!(
                    "skipping probabilities for {} outside {}x{} grid",
                    cell,
                    config.rows,
                    config.columns
                );
            }
        }

        let bonus_table =
            ProbabilityTable::new("bonus symbols", &config.probabilities.bonus_symbols.symbols)?;

        Ok(Self {
            rows: config.rows,
            columns: config.columns,
            cell_tables,
            default_table,
            bonus_table,
        })
    }

    /// Fills listed cells first, then the rest row-major from the default
    /// distribution, then drops one bonus symbol on a random cell.
    pub fn generate(&self, rng: &mut RngState) -> Matrix {
        let mut slots: Vec<Vec<Option<String>>> = vec![vec![None; self.columns]; self.rows];

        for (cell, table) in &self.cell_tables {
            slots[cell.row][cell.column] = Some(table.sample(rng).to_string());
        }

        let mut cells = Vec::with_capacity(self.rows);
        for row in slots {
            let mut symbols = Vec::with_capacity(self.columns);
            for slot in row {
                let symbol = match slot {
                    Some(symbol) => symbol,
                    None => self.default_table.sample(rng).to_string(),
                };
                symbols.push(symbol);
            }
            cells.push(symbols);
        }
        let mut matrix = Matrix { cells };

        let bonus = self.bonus_table.sample(rng).to_string();
        let row = rng.index(self.rows);
        let column = rng.index(self.columns);
        log::debug!("placing bonus {} at {}:{}", bonus, row, column);
        matrix.cells[row][column] = bonus;

        matrix
    }
}
