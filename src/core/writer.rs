use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{data::Translation, marshal::Format, views::ViewKind};

/// Path of the file holding `view` of `locale_id`: `<outdir>/<locale>.<view>.<ext>`.
pub fn view_file_path(outdir: &Path, locale_id: &str, view: ViewKind, format: Format) -> PathBuf {
    outdir.join(format!("{}.{}.{}", locale_id, view, format.extension()))
}

/// Serialize `entries` and write them in a single call.
///
/// Creates `outdir` if it does not exist. Returns the written path.
pub fn write_view(
    outdir: &Path,
    locale_id: &str,
    view: ViewKind,
    entries: &[Translation],
    format: Format,
) -> Result<PathBuf> {
    let buf = format
        .marshal(entries)
        .with_context(|| format!("Failed to marshal {} strings to {}", locale_id, format))?;

    fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create directory: {}", outdir.display()))?;

    let path = view_file_path(outdir, locale_id, view, format);
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_view_file_name() {
        let path = view_file_path(Path::new("out"), "en-US", ViewKind::Untranslated, Format::Json);
        assert_eq!(path, Path::new("out").join("en-US.untranslated.json"));
    }

    #[test]
    fn test_write_view_creates_outdir() {
        let dir = tempdir().unwrap();
        let outdir = dir.path().join("nested").join("out");

        let path = write_view(
            &outdir,
            "fr",
            ViewKind::All,
            &[Translation::single("greeting", "Salut")],
            Format::Json,
        )
        .unwrap();

        assert_eq!(path, outdir.join("fr.all.json"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Salut\""));
    }

    #[test]
    fn test_write_error_names_destination() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = write_view(&blocker, "fr", ViewKind::All, &[], Format::Json).unwrap_err();
        assert!(format!("{:#}", err).contains("file"));
    }
}
