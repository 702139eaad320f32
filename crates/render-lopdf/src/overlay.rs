use crate::error::RenderError;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// Appends a content stream to a page so it is drawn on top of the page's
/// existing content.
///
/// `/Contents` may be a single reference or an array; either way the new
/// stream ends up last.
pub fn overlay_content(doc: &mut Document, page_id: ObjectId, content_stream: Vec<u8>) -> Result<(), RenderError> {
    let new_content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, content_stream)));

    let page_dict = doc.get_object_mut(page_id)?.as_dict_mut()?;
    let contents = page_dict
        .get(b"Contents")
        .map_err(|_| RenderError::MissingContents(page_id))?;

    let mut streams = match contents.as_array() {
        Ok(arr) => arr.clone(),
        Err(_) => vec![contents.clone()],
    };
    streams.push(Object::Reference(new_content_id));
    page_dict.set("Contents", Object::Array(streams));
    Ok(())
}
