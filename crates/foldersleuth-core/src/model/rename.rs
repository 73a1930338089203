/// Rename a scanned file record and reclassify it.
///
/// This only edits the in-memory record list; nothing on disk is touched.
use super::file_record::{extension_of, is_hidden_name, join_path, FileRecord};
use super::log_entry::LogEntry;
use crate::analysis::categorizer::categorize;
use crate::error::RenameError;

/// Rename the record at `index` to `new_name`.
///
/// Returns `Ok(None)` without touching the record when the name is unchanged.
/// Otherwise rewrites the name, the last segment of `full_path` and every
/// field derived from the name, and returns the `Info` entry describing the
/// rename. Extension changes are applied without question; confirming them
/// is the caller's job. Sibling paths are not checked for collisions.
pub fn rename_record(
    records: &mut [FileRecord],
    index: usize,
    new_name: &str,
) -> Result<Option<LogEntry>, RenameError> {
    let len = records.len();
    let record = records
        .get_mut(index)
        .ok_or(RenameError::OutOfRange { index, len })?;

    if record.name == new_name {
        return Ok(None);
    }
    if new_name.is_empty() || new_name.contains('/') {
        return Err(RenameError::InvalidName(new_name.to_string()));
    }

    let old_name = std::mem::replace(&mut record.name, new_name.to_string());
    record.full_path = join_path(record.parent_path(), new_name);
    record.extension = extension_of(new_name).to_string();
    record.category = categorize(new_name);
    record.is_hidden = is_hidden_name(new_name);

    tracing::debug!("Renamed record {index}: {old_name} -> {new_name}");

    Ok(Some(LogEntry::info(
        new_name,
        format!("Renamed \"{old_name}\" to \"{new_name}\""),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::categorizer::Category;
    use std::time::UNIX_EPOCH;

    fn records() -> Vec<FileRecord> {
        vec![
            FileRecord::new("notes", "a.txt", 10, UNIX_EPOCH),
            FileRecord::new("", "b.zip", 20, UNIX_EPOCH),
        ]
    }

    #[test]
    fn rename_changes_category_and_path() {
        let mut recs = records();
        let entry = rename_record(&mut recs, 0, "a.png")
            .unwrap()
            .expect("rename must log");

        assert_eq!(recs[0].name, "a.png");
        assert_eq!(recs[0].full_path, "notes/a.png");
        assert_eq!(recs[0].category, Category::Image);
        assert_eq!(recs[0].extension, "png");
        assert_eq!(entry.kind, LogEntry::INFO);
        assert_eq!(entry.path.as_deref(), Some("a.png"));
        // The other record is untouched.
        assert_eq!(recs[1], records()[1]);
    }

    #[test]
    fn rename_within_same_category() {
        let mut recs = records();
        rename_record(&mut recs, 0, "a.pdf").unwrap();
        assert_eq!(recs[0].category, Category::Document);
        assert_eq!(recs[0].full_path, "notes/a.pdf");
    }

    #[test]
    fn rename_root_level_file() {
        let mut recs = records();
        rename_record(&mut recs, 1, ".b.zip").unwrap();
        assert_eq!(recs[1].full_path, ".b.zip");
        assert!(recs[1].is_hidden);
    }

    #[test]
    fn identical_name_is_noop() {
        let mut recs = records();
        let before = recs.clone();
        assert_eq!(rename_record(&mut recs, 0, "a.txt"), Ok(None));
        assert_eq!(recs, before);
    }

    #[test]
    fn out_of_range_index() {
        let mut recs = records();
        assert_eq!(
            rename_record(&mut recs, 5, "x.txt"),
            Err(RenameError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn invalid_names_rejected() {
        let mut recs = records();
        assert!(matches!(
            rename_record(&mut recs, 0, ""),
            Err(RenameError::InvalidName(_))
        ));
        assert!(matches!(
            rename_record(&mut recs, 0, "sub/a.txt"),
            Err(RenameError::InvalidName(_))
        ));
        assert_eq!(recs[0].name, "a.txt");
    }
}
