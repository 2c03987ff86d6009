use std::{
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::fs;

use crate::error::AppError;

pub const UPLOADS_DIR: &str = "uploads";

/// Writes an uploaded image under [`UPLOADS_DIR`] and returns the
/// generated filename. The stored recipe references the file by this
/// name; the uploads directory is served statically at the site root.
pub async fn store_image(original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let filename = unique_name(original_name, unix_millis());

    fs::create_dir_all(UPLOADS_DIR).await?;
    fs::write(Path::new(UPLOADS_DIR).join(&filename), bytes).await?;

    Ok(filename)
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// `<millis>-<basename>`. Browsers send a bare filename, but the name is
/// client-supplied: directory components are stripped before it touches
/// the filesystem.
fn unique_name(original: &str, millis: u128) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|b| !b.is_empty())
        .unwrap_or("upload");

    format!("{millis}-{base}")
}

#[cfg(test)]
mod tests {
    use super::unique_name;

    #[test]
    fn prefixes_the_timestamp() {
        assert_eq!(
            unique_name("pie.png", 1700000000000),
            "1700000000000-pie.png"
        );
    }

    #[test]
    fn strips_directory_components() {
        assert_eq!(unique_name("../../etc/passwd", 7), "7-passwd");
        assert_eq!(unique_name("..\\..\\boot.ini", 7), "7-boot.ini");
    }

    #[test]
    fn empty_name_gets_a_placeholder() {
        assert_eq!(unique_name("", 7), "7-upload");
        assert_eq!(unique_name("photos/", 7), "7-upload");
    }
}
