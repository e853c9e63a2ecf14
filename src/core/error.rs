use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering, writing or reading back icons.
///
/// Font problems never surface here: an unusable font falls back to the
/// built-in face instead of failing.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be a positive number of pixels, got {0}")]
    InvalidSize(u32),

    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encode PNG {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type IconResult<T> = Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = IconError::io(
            "icons/icon16.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("icons/icon16.png"), "{msg}");
        assert!(msg.contains("denied"), "{msg}");
        assert_eq!(
            IconError::InvalidSize(0).to_string(),
            "icon size must be a positive number of pixels, got 0"
        );
    }
}
