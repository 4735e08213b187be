use crate::content::{PageContext, font_resource};
use crate::error::RenderError;
use crate::images::{deflate, png_xobject};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use proplens_layout::{Canvas, FontFace};
use std::collections::HashMap;

/// Values for the document information dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
    /// PDF date string, e.g. `D:20240315120000`.
    pub creation_date: Option<String>,
}

/// Builds the PDF object graph for a canvas in memory and serializes it.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    info: DocumentInfo,
}

impl PdfRenderer {
    pub fn new(info: DocumentInfo) -> Self {
        Self { info }
    }

    pub fn render(&self, canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
        if canvas.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font_resource(face), font_id);
        }

        let mut xobjects = Dictionary::new();
        let mut image_names = HashMap::new();
        for (i, (key, data)) in canvas.resources.iter().enumerate() {
            let name = format!("Im{}", i + 1);
            let image_id = document.add_object(png_xobject(key, data)?);
            xobjects.set(name.as_str(), image_id);
            image_names.insert(key.clone(), name);
        }

        let mut resources = dictionary! { "Font" => font_dict };
        if !image_names.is_empty() {
            resources.set("XObject", xobjects);
        }
        document.objects.insert(resources_id, Object::Dictionary(resources));

        let (page_width, page_height) = (canvas.geometry.width, canvas.geometry.height);
        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(canvas.pages.len());
        for (index, elements) in canvas.pages.iter().enumerate() {
            let mut page_ctx = PageContext::new(index, page_height, &image_names);
            for element in elements {
                page_ctx.draw_element(element)?;
            }
            let encoded = page_ctx.finish().encode()?;
            let content_stream =
                Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflate(&encoded)?);
            let content_id = document.add_object(content_stream);

            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id =
            document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);
        let info_id = document.add_object(self.info_dictionary());
        document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        log::debug!(
            "Wrote PDF with {} pages and {} images ({} bytes)",
            page_ids.len(),
            image_names.len(),
            buffer.len()
        );
        Ok(buffer)
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! {
            "Title" => Object::string_literal(crate::to_win_ansi(&self.info.title)),
            "Producer" => Object::string_literal(concat!("proplens ", env!("CARGO_PKG_VERSION"))),
        };
        if let Some(author) = &self.info.author {
            info.set("Author", Object::string_literal(crate::to_win_ansi(author)));
        }
        if let Some(date) = &self.info.creation_date {
            info.set("CreationDate", Object::string_literal(date.as_str()));
        }
        info
    }
}
