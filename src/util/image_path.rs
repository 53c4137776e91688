//! Stored-path to URL-path normalization for image assets.

#[cfg(test)]
#[path = "image_path_test.rs"]
mod image_path_test;

/// Normalize a stored file path into a URL path segment.
///
/// Strips every leading `/` or `\` and turns remaining `\` into `/`.
pub fn process_image_path(path: &str) -> String {
    path.trim_start_matches(['/', '\\']).replace('\\', "/")
}

/// Display URL for `path` under the images-serving `root`.
pub fn image_url(root: &str, path: &str) -> String {
    format!("{}/{}", root.trim_end_matches('/'), process_image_path(path))
}
