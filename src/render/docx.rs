//! Word (.docx) rendering.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Pic, Run, Table as DocxTable,
    TableCell as DocxCell, TableLayoutType, TableRow as DocxRow, WidthType,
};

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Document, Page, Table};

use super::options::{cm_to_emu, cm_to_twips};
use super::RenderOptions;

/// Render a document as .docx into `writer`.
pub fn to_docx<W: Write + Seek>(doc: &Document, options: &RenderOptions, writer: W) -> Result<()> {
    DocxRenderer::new(options.clone()).render(doc, writer)
}

/// Render a document as .docx into a file, creating or truncating it.
pub fn write_docx<P: AsRef<Path>>(doc: &Document, options: &RenderOptions, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    to_docx(doc, options, file)?;
    log::info!(
        "Wrote {} page(s) to {}",
        doc.page_count(),
        path.display()
    );
    Ok(())
}

/// Word renderer.
pub struct DocxRenderer {
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a new Word renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document and pack it into `writer`.
    pub fn render<W: Write + Seek>(&self, doc: &Document, writer: W) -> Result<()> {
        self.build(doc)?
            .build()
            .pack(writer)
            .map_err(|e| Error::Render(format!("DOCX packaging error: {}", e)))
    }

    /// Build the in-memory Word document.
    pub fn build(&self, doc: &Document) -> Result<Docx> {
        let setup = self.options.page_setup.as_ref().unwrap_or(&doc.setup);

        let mut docx = Docx::new()
            .page_size(cm_to_twips(setup.width_cm), cm_to_twips(setup.height_cm))
            .page_margin(
                PageMargin::new()
                    .top(cm_to_twips(setup.top_margin_cm) as i32)
                    .bottom(cm_to_twips(setup.bottom_margin_cm) as i32),
            );

        for page in &doc.pages {
            docx = self.render_page(docx, doc, page)?;
        }
        Ok(docx)
    }

    fn render_page(&self, mut docx: Docx, doc: &Document, page: &Page) -> Result<Docx> {
        for block in &page.elements {
            docx = match block {
                Block::PageBreak => docx
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
                Block::Table(table) => docx.add_table(self.render_table(table)),
                Block::Image {
                    resource_id,
                    alignment,
                } => {
                    let resource = doc.get_resource(resource_id).ok_or_else(|| {
                        Error::Render(format!(
                            "page {} refers to missing resource '{}'",
                            page.number, resource_id
                        ))
                    })?;

                    let width = self.options.stamp_width_cm;
                    let height = resource.scaled_height(width);
                    let pic =
                        Pic::new_with_dimensions(resource.data.clone(), resource.width, resource.height)
                            .size(cm_to_emu(width), cm_to_emu(height));

                    docx.add_paragraph(
                        Paragraph::new()
                            .add_run(Run::new().add_image(pic))
                            .align(alignment_type(*alignment)),
                    )
                }
            };
        }
        Ok(docx)
    }

    fn render_table(&self, table: &Table) -> DocxTable {
        let width = self.options.column_width_twips();
        let rows = table
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| {
                        let mut paragraph = Paragraph::new();
                        if !cell.is_empty() {
                            paragraph = paragraph.add_run(Run::new().add_text(&cell.text));
                        }
                        DocxCell::new()
                            .add_paragraph(paragraph)
                            .width(width, WidthType::Dxa)
                    })
                    .collect();
                DocxRow::new(cells)
            })
            .collect();

        DocxTable::new(rows)
            .set_grid(vec![width; table.column_count()])
            .layout(TableLayoutType::Fixed)
    }
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, Resource};
    use crate::paginate::{assemble_document, PaginateOptions};
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn stamp() -> Resource {
        let img = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        Resource::image(buf).unwrap()
    }

    fn document(rows: usize) -> Document {
        let mut ds = Dataset::new(["a", "b"]);
        for i in 0..rows {
            ds.push_row(vec![(i as i64).into(), "x".into()]);
        }
        assemble_document(&ds, stamp(), &PaginateOptions::default()).unwrap()
    }

    #[test]
    fn test_to_docx_writes_zip() {
        let mut out = Cursor::new(Vec::new());
        to_docx(&document(7), &RenderOptions::default(), &mut out).unwrap();
        let bytes = out.into_inner();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_missing_resource_is_render_error() {
        let mut doc = document(1);
        doc.resources.clear();
        let result = to_docx(&doc, &RenderOptions::default(), Cursor::new(Vec::new()));
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_alignment_mapping() {
        assert!(matches!(
            alignment_type(Alignment::Right),
            AlignmentType::Right
        ));
        assert!(matches!(
            alignment_type(Alignment::Center),
            AlignmentType::Center
        ));
    }
}
