use camino::Utf8PathBuf;

/// Captured result of one compiler run.
///
/// The executable/argument pair may be executed twice per orchestrator pass:
/// the initial run (whose output is scanned) and the optional rerun (whose
/// output is drained but ignored).
#[derive(Debug, Clone)]
pub struct CompilerInvocation {
    /// Path of the selected compiler executable.
    pub executable: Utf8PathBuf,

    /// The single argument blob passed to the child, empty when the wrapper
    /// itself received no arguments.
    pub argument_string: String,

    /// Full standard output of the child, split on line feeds, in order.
    pub output_lines: Vec<String>,

    /// Numeric exit code of the child (-1 when the child was killed before
    /// reporting one).
    pub exit_code: i32,
}

/// A missing-texture diagnostic extracted from one compiler output line.
///
/// Transient: handed straight to the texture resolver and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureReference {
    /// Captured texture name with forward slashes normalized to backslashes.
    pub raw_name: String,

    /// Texture search root joined with `raw_name`; extension is unknown at
    /// this point and probed by the resolver.
    pub source_base: Utf8PathBuf,

    /// Destination directory extracted from a `-t` argument, passed through
    /// unchanged. The wrapped compiler is observed to ignore `-t`, so this is
    /// usually absent.
    pub destination_override: Option<Utf8PathBuf>,
}
