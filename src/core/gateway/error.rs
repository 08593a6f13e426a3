use crate::path::PathError;
use std::fmt;
use std::io;

/// The filesystem primitive a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    ListDir,
    CreateDir,
    ChangeDir,
    CreateFile,
    ReadFile,
    CopyFile,
    Stat,
    DeleteDir,
    DeleteFile,
}

impl FsOp {
    fn doing(&self) -> &'static str {
        match self {
            FsOp::ListDir => "reading directory",
            FsOp::CreateDir => "creating directory",
            FsOp::ChangeDir => "changing directory",
            FsOp::CreateFile => "creating file",
            FsOp::ReadFile => "reading file",
            FsOp::CopyFile => "copying file",
            FsOp::Stat => "accessing file/directory",
            FsOp::DeleteDir => "deleting directory",
            FsOp::DeleteFile => "deleting file",
        }
    }
}

/// Broad failure classes, independent of which operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    InvalidArgument,
    Malformed,
    Other,
}

#[derive(Debug)]
pub enum GatewayError {
    MissingArgument { op: FsOp, placeholder: &'static str },
    DoesNotExist(String),
    Path { op: FsOp, source: PathError },
    Io { op: FsOp, source: io::Error },
}

impl GatewayError {
    pub fn io(op: FsOp, source: io::Error) -> Self {
        GatewayError::Io { op, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::MissingArgument { .. } => ErrorKind::Malformed,
            GatewayError::DoesNotExist(_) => ErrorKind::NotFound,
            GatewayError::Path { .. } => ErrorKind::NotFound,
            GatewayError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
                io::ErrorKind::AlreadyExists
                | io::ErrorKind::InvalidInput
                | io::ErrorKind::InvalidData => ErrorKind::InvalidArgument,
                _ => ErrorKind::Other,
            },
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::MissingArgument { op, placeholder } => {
                write!(f, "Error {}: missing <{}>", op.doing(), placeholder)
            }
            GatewayError::DoesNotExist(name) => write!(f, "Directory '{}' does not exist.", name),
            GatewayError::Path { op, source } => write!(f, "Error {}: {}", op.doing(), source),
            GatewayError::Io { op, source } => write!(f, "Error {}: {}", op.doing(), source),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Io { source, .. } => Some(source),
            GatewayError::Path { source, .. } => Some(source),
            _ => None,
        }
    }
}
