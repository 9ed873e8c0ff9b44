//! Table sinks writing to byte streams

use crate::Renderer;
use trackstat_core::{SinkError, Table};
use trackstat_plugin::TableSink;
use serde::Serialize;
use std::io::Write;

/// Writes each table as text through a `Renderer`
pub struct TextSink<W: Write> {
    writer: W,
    renderer: Renderer,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            renderer: Renderer::new(),
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for TextSink<W> {
    fn show(&mut self, table: Table, title: &str) -> Result<(), SinkError> {
        let text = self.renderer.render(&table, title);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct TitledTable<'a> {
    title: &'a str,
    table: &'a Table,
}

/// Writes each table as one JSON document per line
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for JsonSink<W> {
    fn show(&mut self, table: Table, title: &str) -> Result<(), SinkError> {
        let doc = TitledTable { title, table: &table };
        serde_json::to_writer(&mut self.writer, &doc)
            .map_err(|e| SinkError::Encode(e.to_string()))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
