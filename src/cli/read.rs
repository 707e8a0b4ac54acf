use std::{ffi::OsString, io::BufReader, path::Path};

use otter_world::{oracle::Oracle, questionnaire::Questionnaire, types::err, world::World};

pub(super) enum ReadError {
    NoPath,
    FailedToOpen,
    UnknownExtension(OsString),
    ParseError(err::ParseError),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a questionnaire is required."),
            Self::FailedToOpen => write!(f, "Failed to open the questionnaire."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::ParseError(e) => write!(f, "Parse error: {e}."),
        }
    }
}

/// Reads the questionnaire at `path`, compiling the phrases of the questionnaire to `world`.
pub(super) fn read_questionnaire<O: Oracle>(path: Option<&Path>, world: &mut World<O>) -> Result<Questionnaire, ReadError> {
    let Some(path) = path else {
        return Err(ReadError::NoPath);
    };

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let questionnaire = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            Questionnaire::read(world, BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "txt" => Questionnaire::read(world, BufReader::new(&file)),

        Some(unknown) => return Err(ReadError::UnknownExtension(unknown.to_owned())),

        None => Questionnaire::read(world, BufReader::new(&file)),
    };

    questionnaire.map_err(ReadError::ParseError)
}
