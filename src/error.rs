use thiserror::Error;

/// Errors that halt the wrapper before or after running the compiler.
///
/// Configuration and discovery errors are terminal: the user is notified and the
/// process exits with code -1. A child-process failure propagates the compiler's
/// own exit code unchanged.
#[derive(Error, Debug)]
pub enum WrapperError {
    #[error("Failed to create config file in the current directory.")]
    ConfigWrite(#[source] anyhow::Error),

    #[error("The config file is invalid.")]
    ConfigParse(#[source] anyhow::Error),

    #[error("texturesPath has not been set.")]
    MissingTexturesPath,

    #[error("texturesPath \"{0}\" could not be found.")]
    TexturesPathNotFound(String),

    #[error("Could not find a map2dif executable in the current directory.")]
    ExecutableNotFound,

    #[error("Compiler exited with error code {0}")]
    ChildProcess(i32),

    #[error("Process error: {0}")]
    Io(#[from] std::io::Error),
}

impl WrapperError {
    /// The exit code the wrapper process reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WrapperError::ChildProcess(code) => *code,
            _ => -1,
        }
    }
}
