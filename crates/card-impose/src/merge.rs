//! Document merging and I/O
//!
//! Concatenates the finished single-page sheet PDFs into one document. The
//! only correctness contract at this boundary is ordering: pages come out
//! exactly as the input list orders them, and a missing intermediate is a
//! loud failure, never a silent drop.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

use crate::types::*;

/// Merge single-page documents into one, preserving input order exactly.
pub fn merge_pages(paths: &[impl AsRef<Path>]) -> Result<Document> {
    if paths.is_empty() {
        return Err(ImposeError::Merge("no pages to merge".to_string()));
    }

    let mut merged = Document::with_version("1.7");
    let pages_tree_id = merged.new_object_id();
    let mut next_id = merged.max_id + 1;
    let mut kids: Vec<Object> = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImposeError::Merge(format!(
                "intermediate page missing: {}",
                path.display()
            )));
        }

        let mut doc = Document::load(path)
            .map_err(|e| ImposeError::Merge(format!("cannot read {}: {}", path.display(), e)))?;
        doc.renumber_objects_with(next_id);
        next_id = doc.max_id + 1;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        if page_ids.is_empty() {
            return Err(ImposeError::Merge(format!(
                "{} contains no pages",
                path.display()
            )));
        }

        // The source catalog and pages tree are replaced by ours; every
        // other object moves over untouched.
        let catalog_id = doc
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .map_err(|e| ImposeError::Merge(format!("{}: no catalog: {}", path.display(), e)))?;
        let old_pages_id = doc
            .get_object(catalog_id)
            .and_then(Object::as_dict)
            .and_then(|dict| dict.get(b"Pages"))
            .and_then(Object::as_reference)
            .map_err(|e| ImposeError::Merge(format!("{}: no pages tree: {}", path.display(), e)))?;

        for (id, object) in std::mem::take(&mut doc.objects) {
            if id == catalog_id || id == old_pages_id {
                continue;
            }
            merged.objects.insert(id, object);
        }

        for page_id in page_ids {
            if let Some(Object::Dictionary(dict)) = merged.objects.get_mut(&page_id) {
                dict.set("Parent", Object::Reference(pages_tree_id));
            }
            kids.push(Object::Reference(page_id));
        }
    }

    let page_count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_count)),
    ]);
    merged
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    merged.max_id = next_id - 1;
    let catalog_id = merged.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    merged.trailer.set("Root", catalog_id);

    merged.renumber_objects();
    merged.compress();

    Ok(merged)
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save a document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
