//! Table renderer
//!
//! Renders an exported table as text, either as a markdown table or as
//! tab-separated values.

use trackstat_core::{Cell, Table};
use serde::{Deserialize, Serialize};

/// Display format for real-valued cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Fixed decimal places (default: 3)
    Decimal(u32),
    /// Shortest representation that round-trips
    Shortest,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Decimal(3)
    }
}

/// Text layout of the rendered table
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum TableLayout {
    #[default]
    Markdown,
    Tsv,
}

/// Table renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub layout: TableLayout,
    pub number_format: NumberFormat,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Render `table` under `title`
    pub fn render(&self, table: &Table, title: &str) -> String {
        match self.layout {
            TableLayout::Markdown => self.render_markdown(table, title),
            TableLayout::Tsv => self.render_tsv(table),
        }
    }

    fn render_markdown(&self, table: &Table, title: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", title));

        output.push_str(&format!("| {} |\n", table.columns().join(" | ")));
        let rule: Vec<&str> = table.columns().iter().map(|_| "---").collect();
        output.push_str(&format!("|{}|\n", rule.join("|")));

        for row in table.rows() {
            let cells: Vec<String> = row.cells().map(|c| self.render_cell(c)).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }

        output
    }

    fn render_tsv(&self, table: &Table) -> String {
        let mut output = table.columns().join("\t");
        output.push('\n');
        for row in table.rows() {
            let cells: Vec<String> = row.cells().map(|c| self.render_cell(c)).collect();
            output.push_str(&cells.join("\t"));
            output.push('\n');
        }
        output
    }

    pub fn render_cell(&self, cell: &Cell) -> String {
        match cell {
            Cell::IntAsString(s) | Cell::Literal(s) => s.clone(),
            Cell::Real(v) => match self.number_format {
                NumberFormat::Decimal(places) => format!("{:.*}", places as usize, v),
                NumberFormat::Shortest => format!("{:?}", v),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackstat_core::Row;

    fn table() -> Table {
        let mut t = Table::new(["ObjectNumber", "AreaShape_Center_X", "Intensity_MeanIntensity_OrigGray"]);
        let mut r = Row::new();
        r.add_value("ObjectNumber", Cell::int(3));
        r.add_value("AreaShape_Center_X", Cell::real(1.5));
        r.add_value("Intensity_MeanIntensity_OrigGray", Cell::none());
        t.push_row(r).unwrap();
        t
    }

    #[test]
    fn test_markdown() {
        let out = Renderer::new().render(&table(), "Track statistics");
        assert_eq!(
            out,
            "## Track statistics\n\n\
             | ObjectNumber | AreaShape_Center_X | Intensity_MeanIntensity_OrigGray |\n\
             |---|---|---|\n\
             | 3 | 1.500 | None |\n"
        );
    }

    #[test]
    fn test_tsv_shortest() {
        let out = Renderer::new()
            .with_layout(TableLayout::Tsv)
            .with_number_format(NumberFormat::Shortest)
            .render(&table(), "ignored");
        assert_eq!(out, "ObjectNumber\tAreaShape_Center_X\tIntensity_MeanIntensity_OrigGray\n3\t1.5\tNone\n");
    }

    #[test]
    fn test_real_keeps_decimal_point_when_shortest() {
        let r = Renderer::new().with_number_format(NumberFormat::Shortest);
        assert_eq!(r.render_cell(&Cell::real(99.0)), "99.0");
        assert_eq!(r.render_cell(&Cell::int(99)), "99");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let t = Table::new(["a", "b"]);
        let out = Renderer::new().with_layout(TableLayout::Tsv).render(&t, "x");
        assert_eq!(out, "a\tb\n");
    }
}
