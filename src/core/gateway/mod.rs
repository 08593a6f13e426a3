//! One filesystem primitive per call, each reporting either a success
//! message or a [`GatewayError`]. Nothing here panics or exits; callers
//! decide how to present the outcome.

mod error;

pub use error::{ErrorKind, FsOp, GatewayError};

use super::Session;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LISTING_HEADER: &str = "Files in current directory:";

#[derive(Debug, Clone, Default)]
pub struct FsGateway;

fn require<'a>(
    arg: Option<&'a str>,
    op: FsOp,
    placeholder: &'static str,
) -> Result<&'a str, GatewayError> {
    arg.ok_or(GatewayError::MissingArgument { op, placeholder })
}

fn locate(session: &Session, name: &str, op: FsOp) -> Result<PathBuf, GatewayError> {
    session
        .resolve(name)
        .map_err(|source| GatewayError::Path { op, source })
}

/// Whether both paths name one existing file, through aliases or hard links.
fn same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        if let (Ok(ma), Ok(mb)) = (fs::metadata(a), fs::metadata(b)) {
            return ma.dev() == mb.dev() && ma.ino() == mb.ino();
        }
    }

    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}

impl FsGateway {
    pub fn new() -> Self {
        Self
    }

    /// Entry names of the session directory, sorted.
    pub fn read_dir(&self, session: &Session) -> Result<Vec<String>, GatewayError> {
        let entries = fs::read_dir(session.current_dir())
            .map_err(|e| GatewayError::io(FsOp::ListDir, e))?;

        let mut names = entries
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| GatewayError::io(FsOp::ListDir, e))?;
        names.sort();
        Ok(names)
    }

    pub fn list_dir(&self, session: &Session) -> Result<String, GatewayError> {
        let names = self.read_dir(session)?;
        let mut report = String::from(LISTING_HEADER);
        for name in names {
            report.push('\n');
            report.push_str(&name);
        }
        Ok(report)
    }

    pub fn create_dir(
        &self,
        session: &Session,
        name: Option<&str>,
    ) -> Result<String, GatewayError> {
        let name = require(name, FsOp::CreateDir, "directory_name")?;
        let target = locate(session, name, FsOp::CreateDir)?;

        fs::create_dir(&target).map_err(|e| GatewayError::io(FsOp::CreateDir, e))?;
        Ok(format!("Directory '{}' created successfully.", name))
    }

    pub fn change_dir(
        &self,
        session: &mut Session,
        name: Option<&str>,
    ) -> Result<String, GatewayError> {
        let name = require(name, FsOp::ChangeDir, "directory_name")?;
        let target = locate(session, name, FsOp::ChangeDir)?;

        // Probe first, then change. The target may disappear in between;
        // that surfaces as an error from the change step.
        if !target.exists() {
            return Err(GatewayError::DoesNotExist(name.to_string()));
        }

        let resolved =
            fs::canonicalize(&target).map_err(|e| GatewayError::io(FsOp::ChangeDir, e))?;
        let metadata =
            fs::metadata(&resolved).map_err(|e| GatewayError::io(FsOp::ChangeDir, e))?;
        if !metadata.is_dir() {
            return Err(GatewayError::io(
                FsOp::ChangeDir,
                io::Error::new(io::ErrorKind::InvalidInput, "Not a directory"),
            ));
        }

        session.set_current_dir(resolved);
        Ok(format!("Changed directory to '{}'.", name))
    }

    /// Creates `name` empty, truncating any existing file.
    pub fn create_file(
        &self,
        session: &Session,
        name: Option<&str>,
    ) -> Result<String, GatewayError> {
        let name = require(name, FsOp::CreateFile, "file_name")?;
        let target = locate(session, name, FsOp::CreateFile)?;

        fs::write(&target, "").map_err(|e| GatewayError::io(FsOp::CreateFile, e))?;
        Ok(format!("File '{}' created successfully.", name))
    }

    pub fn read_file(&self, session: &Session, name: Option<&str>) -> Result<String, GatewayError> {
        let name = require(name, FsOp::ReadFile, "file_name")?;
        let target = locate(session, name, FsOp::ReadFile)?;

        let data = fs::read_to_string(&target).map_err(|e| GatewayError::io(FsOp::ReadFile, e))?;
        Ok(format!("Contents of '{}':\n{}", name, data))
    }

    pub fn copy_file(
        &self,
        session: &Session,
        source: Option<&str>,
        destination: Option<&str>,
    ) -> Result<String, GatewayError> {
        let source = require(source, FsOp::CopyFile, "source_file")?;
        let destination = require(destination, FsOp::CopyFile, "destination_file")?;
        let from = locate(session, source, FsOp::CopyFile)?;
        let to = locate(session, destination, FsOp::CopyFile)?;

        // fs::copy truncates the destination first, which would empty a
        // file copied onto itself
        if !same_file(&from, &to) {
            fs::copy(&from, &to).map_err(|e| GatewayError::io(FsOp::CopyFile, e))?;
        }
        Ok(format!(
            "File '{}' copied to '{}' successfully.",
            source, destination
        ))
    }

    /// Removes a directory tree or a single file, decided by a stat probe.
    pub fn delete(&self, session: &Session, name: Option<&str>) -> Result<String, GatewayError> {
        let name = require(name, FsOp::Stat, "file_or_directory_name")?;
        let target = locate(session, name, FsOp::Stat)?;

        let metadata = fs::metadata(&target).map_err(|e| GatewayError::io(FsOp::Stat, e))?;
        if metadata.is_dir() {
            fs::remove_dir_all(&target).map_err(|e| GatewayError::io(FsOp::DeleteDir, e))?;
            Ok(format!("Directory '{}' deleted successfully.", name))
        } else {
            fs::remove_file(&target).map_err(|e| GatewayError::io(FsOp::DeleteFile, e))?;
            Ok(format!("File '{}' deleted successfully.", name))
        }
    }
}
