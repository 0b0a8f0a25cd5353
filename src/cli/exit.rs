use exitcode::ExitCode;

use crate::input::EmptyInput;
use crate::paths::HomeDirNotFound;
use crate::translation::TranslateError;

/// Maps a fatal error to a sysexits-style process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<EmptyInput>().is_some() {
        return exitcode::USAGE;
    }
    if err.downcast_ref::<HomeDirNotFound>().is_some() {
        return exitcode::CONFIG;
    }
    if let Some(translate_err) = err.downcast_ref::<TranslateError>() {
        return match translate_err {
            TranslateError::Transport { .. } | TranslateError::Status { .. } => {
                exitcode::UNAVAILABLE
            }
            TranslateError::Decode { .. } | TranslateError::Api { .. } => exitcode::PROTOCOL,
        };
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return exitcode::IOERR;
    }
    exitcode::SOFTWARE
}
