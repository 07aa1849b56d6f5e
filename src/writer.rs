use crate::error::Result;
use crate::types::RepoSummary;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the records to `path` as a pretty-printed JSON array with a
/// 4-space indent. Does nothing when there are no records.
pub fn write_repos(repos: &[RepoSummary], path: &Path) -> Result<()> {
    if repos.is_empty() {
        return Ok(());
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        repos.serialize(&mut serializer)?;
    }
    writer.flush()?;
    Ok(())
}
