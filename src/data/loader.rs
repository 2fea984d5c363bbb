use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{ContentError, PrizeLadder, Question};

use super::Content;

/// Error type for content loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ContentError,
    },
}

#[derive(Deserialize)]
struct ContentFile {
    questions: Vec<Question>,
    prizes: Vec<String>,
    #[serde(default)]
    zero_prize: Option<String>,
}

/// Load questions and their prize ladder from a JSON file.
pub fn load_content_from_json<P: AsRef<Path>>(path: P) -> Result<Content, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ContentFile = serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    };

    if file.questions.is_empty() {
        return Err(invalid(ContentError::NoQuestions));
    }
    if file.prizes.is_empty() {
        return Err(invalid(ContentError::NoPrizes));
    }

    let mut prizes = PrizeLadder::new(file.prizes);
    if let Some(zero_prize) = file.zero_prize {
        prizes = prizes.with_zero_label(zero_prize);
    }

    Content::new(file.questions, prizes).map_err(invalid)
}
