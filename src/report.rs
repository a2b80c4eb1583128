use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{error::Result, search::path::ShortestPathOutcome};

/// Writes the outcome as one line of text, or as JSON with `json` set.
pub fn write_outcome<W: Write>(
    writer: &mut W,
    outcome: &ShortestPathOutcome,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *writer, outcome).map_err(std::io::Error::from)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{}", outcome)?;
    }
    Ok(())
}

/// Creates or truncates `path` and writes the outcome line without a
/// trailing newline.
pub fn write_outcome_to_file(path: &Path, outcome: &ShortestPathOutcome) -> Result<()> {
    debug!(path = %path.display(), %outcome, "writing outcome");
    let mut writer = BufWriter::new(File::create(path)?);
    write!(writer, "{}", outcome)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_outcome, write_outcome_to_file};
    use crate::search::path::ShortestPathOutcome;

    #[test]
    fn writes_text_line() {
        let mut buffer = Vec::new();
        write_outcome(&mut buffer, &ShortestPathOutcome::Unreachable, false).unwrap();
        assert_eq!(buffer, b"No path between the cities!\n");
    }

    #[test]
    fn writes_json_line() {
        let mut buffer = Vec::new();
        write_outcome(&mut buffer, &ShortestPathOutcome::Reachable(10), true).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "{\"outcome\":\"reachable\",\"distance\":10}\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "old content that is longer").unwrap();

        write_outcome_to_file(file.path(), &ShortestPathOutcome::Reachable(3)).unwrap();
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "Shortest path length: 3"
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join("result.txt");
        assert!(write_outcome_to_file(&path, &ShortestPathOutcome::Unreachable).is_err());
    }
}
