//! Translation of provider volumes into library books

use crate::{
    error::{AppError, AppResult},
    models::{Book, VolumeInfo},
};

/// Build a [`Book`] from a provider volume.
///
/// Fails with a validation error when the volume metadata is missing or has no usable
/// title. Author and page count degrade to `None` instead of failing.
pub fn book_from_volume(id: &str, volume_info: Option<&VolumeInfo>) -> AppResult<Book> {
    let info = volume_info
        .ok_or_else(|| AppError::Validation("Volume metadata is missing".to_string()))?;

    let title = info
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Book title is required".to_string()))?;

    Ok(Book {
        id: id.to_string(),
        title: title.to_string(),
        author: first_author(info),
        page_count: page_count(info),
    })
}

fn first_author(info: &VolumeInfo) -> Option<String> {
    info.authors
        .as_ref()?
        .first()
        .filter(|a| !a.trim().is_empty())
        .cloned()
}

fn page_count(info: &VolumeInfo) -> Option<i32> {
    info.page_count.filter(|&n| n > 0)
}
