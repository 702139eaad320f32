use crate::error::RenderError;
use crate::image::{flate, image_xobject};
use crate::overlay::overlay_content;
use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as PdfDocument, Object, ObjectId, Stream, StringFormat, dictionary};
use log::{debug, info};
use std::io::Write;
use std::sync::Arc;
use vitae_layout::{Document, Footer, Page};
use vitae_types::{PageFormat, RasterImage};

const FOOTER_FONT: &str = "F1";

/// Entries for the PDF `/Info` dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: String,
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: None,
            producer: concat!("vitae ", env!("CARGO_PKG_VERSION")).to_string(),
            creation_date: None,
        }
    }
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Dictionary {
        let mut dict = dictionary! {
            "Producer" => text_string(&self.producer),
        };
        if let Some(title) = &self.title {
            dict.set("Title", text_string(title));
        }
        if let Some(date) = &self.creation_date {
            let stamp = format!("D:{}Z", date.format("%Y%m%d%H%M%S"));
            dict.set("CreationDate", Object::string_literal(stamp));
        }
        dict
    }
}

/// Encodes a PDF text string. ASCII stays a literal; anything else is
/// UTF-16BE with a byte order mark, as PDFDocEncoding cannot hold it.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Writes a numbered [`Document`] as a PDF.
///
/// Pages are written in one pass: each page clips to its bounds and draws
/// its shared image shifted up by the placement offset. Footers are laid on
/// top afterwards as a separate content stream per page.
#[derive(Debug, Clone)]
pub struct PdfDocumentWriter {
    compress: bool,
    info: DocumentInfo,
}

impl Default for PdfDocumentWriter {
    fn default() -> Self {
        Self {
            compress: true,
            info: DocumentInfo::default(),
        }
    }
}

impl PdfDocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    pub fn to_bytes(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        self.write_to(document, &mut out)?;
        Ok(out)
    }

    pub fn write_to<W: Write>(&self, document: &Document, writer: &mut W) -> Result<(), RenderError> {
        let mut pdf = self.build(document)?;
        pdf.save_to(writer)?;
        Ok(())
    }

    /// Builds the in-memory PDF without serializing it.
    pub fn build(&self, document: &Document) -> Result<PdfDocument, RenderError> {
        let format = document.format();
        let (page_width, page_height) = format.dimensions_pt();
        let mut pdf = PdfDocument::with_version("1.7");
        let pages_id = pdf.new_object_id();

        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        let images = document.images();
        let mut xobjects = Dictionary::new();
        for (i, image) in images.iter().enumerate() {
            let id = pdf.add_object(image_xobject(image, self.compress)?);
            xobjects.set(xobject_name(i), Object::Reference(id));
        }
        debug!("Embedded {} image XObject(s)", images.len());

        let resources_id = pdf.add_object(dictionary! {
            "Font" => dictionary! { FOOTER_FONT => font_id },
            "XObject" => xobjects,
        });

        let mut page_ids = Vec::with_capacity(document.total_pages());
        for page in document.pages() {
            let index = image_index(&images, &page.placement.image)
                .ok_or_else(|| RenderError::Other(format!("page {} image was not embedded", page.page_number)))?;
            let content = page_content(format, page, &xobject_name(index)).encode()?;
            let content_id = pdf.add_object(self.content_stream(content)?);
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        for (page, &page_id) in document.pages().iter().zip(&page_ids) {
            let footer = footer_content(format, &page.footer).encode()?;
            overlay_content(&mut pdf, page_id, footer)?;
        }

        self.finish(&mut pdf, pages_id, &page_ids);
        info!("Wrote PDF with {} page(s)", page_ids.len());
        Ok(pdf)
    }

    fn content_stream(&self, content: Vec<u8>) -> Result<Stream, RenderError> {
        if self.compress {
            Ok(Stream::new(dictionary! { "Filter" => "FlateDecode" }, flate(&content)?))
        } else {
            Ok(Stream::new(dictionary! {}, content))
        }
    }

    fn finish(&self, pdf: &mut PdfDocument, pages_id: ObjectId, page_ids: &[ObjectId]) {
        let kids: Vec<Object> = page_ids.iter().map(|&id| id.into()).collect();
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );
        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = pdf.add_object(self.info.to_dictionary());
        pdf.trailer.set("Root", catalog_id);
        pdf.trailer.set("Info", info_id);
    }
}

fn xobject_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

fn image_index(images: &[Arc<RasterImage>], image: &Arc<RasterImage>) -> Option<usize> {
    images.iter().position(|candidate| Arc::ptr_eq(candidate, image))
}

/// Clip to the page, then draw the image window for this page.
fn page_content(format: PageFormat, page: &Page, xobject: &str) -> Content {
    let (page_width, page_height) = format.dimensions_pt();
    let rect = page.placement.image_rect();
    let width = format.to_pt(rect.width);
    let height = format.to_pt(rect.height);
    let x = format.to_pt(rect.x);
    // PDF space grows upward from the bottom edge.
    let y = page_height - format.to_pt(rect.bottom());

    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "re",
                vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            ),
            Operation::new("W", vec![]),
            Operation::new("n", vec![]),
            Operation::new(
                "cm",
                vec![width.into(), 0.into(), 0.into(), height.into(), x.into(), y.into()],
            ),
            Operation::new("Do", vec![xobject.into()]),
            Operation::new("Q", vec![]),
        ],
    }
}

fn footer_content(format: PageFormat, footer: &Footer) -> Content {
    let (_, page_height) = format.dimensions_pt();
    let [r, g, b] = footer.color.to_unit_rgb();
    let x = format.to_pt(footer.position.x);
    let y = page_height - format.to_pt(footer.position.y);

    Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![FOOTER_FONT.into(), footer.font_size.into()]),
            Operation::new("rg", vec![r.into(), g.into(), b.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(footer.text.as_str())]),
            Operation::new("ET", vec![]),
        ],
    }
}
