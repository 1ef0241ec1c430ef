use interop_domain::CanonicalFormat;
use std::ffi::OsStr;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, error};

/// Canonical formats a tool only understands under another name (and extension).
pub type LocalFormats = &'static [(CanonicalFormat, &'static str)];

/// The tool-specific name of `format`, if it is remapped.
#[must_use]
pub fn local_format(map: LocalFormats, format: CanonicalFormat) -> Option<&'static str> {
    map.iter().find(|(canonical, _)| *canonical == format).map(|(_, local)| *local)
}

const SCRATCH_PREFIX: &str = ".interop-";

/// Scratch space owned by a single invocation.
///
/// The directory is created on first use, next to the final output so a staged
/// output can be renamed into place. Dropping removes it as a backstop; callers
/// should prefer [`Staging::close`] to observe removal errors.
#[derive(Debug)]
pub(crate) struct Staging {
    anchor: PathBuf,
    scratch: Option<TempDir>,
}

impl Staging {
    pub(crate) fn new(output: &Path) -> Self {
        let anchor = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self { anchor, scratch: None }
    }

    fn subdir(&mut self, name: &str) -> io::Result<PathBuf> {
        let scratch = match self.scratch.take() {
            Some(scratch) => scratch,
            None => {
                let dir = tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir_in(&self.anchor)?;
                debug!(scratch = %dir.path().display(), "Created scratch directory");
                dir
            },
        };
        let scratch = self.scratch.insert(scratch);

        let dir = scratch.path().join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Copies `input` into scratch under extension `ext`.
    pub(crate) fn stage_input(&mut self, input: &Path, ext: &str) -> io::Result<PathBuf> {
        let staged = self.subdir("in")?.join(renamed(input, ext));
        fs::copy(input, &staged)?;
        Ok(staged)
    }

    /// A scratch path for the tool to write to. Nothing is created at it.
    pub(crate) fn stage_output(&mut self, output: &Path, ext: &str) -> io::Result<PathBuf> {
        Ok(self.subdir("out")?.join(renamed(output, ext)))
    }

    /// Removes the scratch directory and everything left in it.
    pub(crate) fn close(self) -> io::Result<()> {
        self.scratch.map_or(Ok(()), TempDir::close)
    }
}

/// `path`'s file name with only its last extension swapped for `ext`.
fn renamed(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.file_stem().unwrap_or_else(|| OsStr::new("document")).to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Runs `body` with fresh scratch space and always cleans it up afterwards.
///
/// A cleanup failure is returned only when `body` succeeded. Otherwise the body's
/// error wins and the cleanup failure is logged.
pub(crate) fn with_staging<T, E>(
    output: &Path,
    body: impl FnOnce(&mut Staging) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<io::Error> + Display,
{
    let mut staging = Staging::new(output);
    let outcome = body(&mut staging);

    match (outcome, staging.close()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(cleanup)) => Err(cleanup.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup)) => {
            error!(
                error = %err,
                cleanup = %cleanup,
                "Failed to remove scratch directory after a failed invocation"
            );
            Err(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: LocalFormats = &[(CanonicalFormat::Provx, "xml")];

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("readable")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn local_format_lookup() {
        assert_eq!(local_format(MAP, CanonicalFormat::Provx), Some("xml"));
        assert_eq!(local_format(MAP, CanonicalFormat::Json), None);
        assert_eq!(local_format(&[], CanonicalFormat::Provx), None);
    }

    #[test]
    fn nothing_is_created_unless_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("b.json");

        with_staging(&output, |_| Ok::<_, io::Error>(())).expect("no-op");
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn staged_files_are_removed_on_success_and_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("a.provx");
        fs::write(&input, "<prov/>").expect("write input");
        let output = dir.path().join("b.provx");

        let staged = with_staging(&output, |staging| {
            let staged_in = staging.stage_input(&input, "xml")?;
            let staged_out = staging.stage_output(&output, "xml")?;
            assert_eq!(fs::read_to_string(&staged_in)?, "<prov/>");
            assert_eq!(staged_in.file_name().and_then(|n| n.to_str()), Some("a.xml"));
            assert_eq!(staged_out.file_name().and_then(|n| n.to_str()), Some("b.xml"));
            assert!(!staged_out.exists());
            fs::write(&staged_out, "left behind")?;
            Ok::<_, io::Error>(staged_in)
        })
        .expect("staged");
        assert!(!staged.exists());
        assert_eq!(entries(dir.path()), ["a.provx"]);

        let err = with_staging(&output, |staging| {
            staging.stage_input(&input, "xml")?;
            Err::<(), _>(io::Error::other("tool failed"))
        })
        .expect_err("body failed");
        assert_eq!(err.to_string(), "tool failed");
        assert_eq!(entries(dir.path()), ["a.provx"]);
    }

    #[test]
    fn inner_dots_survive_renaming() {
        assert_eq!(renamed(Path::new("dir/a.v1.provx"), "xml"), PathBuf::from("a.v1.xml"));
        assert_eq!(renamed(Path::new("b.provx"), "xml"), PathBuf::from("b.xml"));
        assert_eq!(renamed(Path::new("plain"), "xml"), PathBuf::from("plain.xml"));
    }

    #[test]
    fn bare_file_names_anchor_in_current_directory() {
        assert_eq!(Staging::new(Path::new("b.provx")).anchor, PathBuf::from("."));
        assert_eq!(Staging::new(Path::new("out/b.provx")).anchor, PathBuf::from("out"));
    }
}
