use crate::error::WrapperError;
use crate::models::CompilerInvocation;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::process::{Command, Stdio};

/// Compiler executables probed in the working directory, in priority order.
/// The first one that exists wins.
pub const EXECUTABLE_CANDIDATES: [&str; 4] = [
    "map2dif_plus.exe",
    "map2dif_plus_MBG.exe",
    "map2dif.exe",
    "map2dif_DEBUG.exe",
];

/// Argument string prepared for the compiler, plus the side value extracted
/// from a `-t` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArguments {
    /// All forwarded arguments joined into the single blob passed to the child.
    pub argument_string: String,

    /// The argument following a literal `-t`, trimmed and with forward slashes
    /// converted to backslashes. Observed to be ignored by the wrapped
    /// compiler, but extracted and passed through regardless.
    pub texture_override: Option<String>,
}

/// Runner for the wrapped map2dif executable.
///
/// Handles executable discovery, argument preparation, and synchronous child
/// execution with fully captured standard output. The child is given no
/// timeout; a hung compiler hangs the wrapper.
pub struct CompilerRunner {
    /// Regex detecting a drive-letter absolute path (`C:\...`) as the first
    /// forwarded argument, which triggers re-quoting of the whole blob.
    drive_path_pattern: Regex,
}

impl CompilerRunner {
    pub fn new() -> Self {
        Self {
            drive_path_pattern: Regex::new(r"^[A-Za-z]:\\").expect("Invalid drive path regex"),
        }
    }

    /// Scan `dir` for the first existing candidate executable.
    ///
    /// # Errors
    /// [`WrapperError::ExecutableNotFound`] when none of the candidates exist.
    pub fn locate_executable(&self, dir: &Utf8Path) -> Result<Utf8PathBuf, WrapperError> {
        for file_name in EXECUTABLE_CANDIDATES {
            let candidate = dir.join(file_name);
            if candidate.is_file() {
                tracing::debug!("Found {}", file_name);
                return Ok(candidate);
            }
        }

        Err(WrapperError::ExecutableNotFound)
    }

    /// Join the wrapper's forwarded arguments into the blob the child receives.
    ///
    /// The arguments are joined with single spaces and trimmed. When the first
    /// raw argument is a drive-letter absolute path, any surrounding double
    /// quotes are stripped from the joined string and exactly one pair is put
    /// back, so a path containing spaces stays one token for the child.
    ///
    /// The argument after a literal `-t` is extracted as a side value (see
    /// [`BuiltArguments::texture_override`]); the flag itself is still
    /// forwarded untouched.
    pub fn build_arguments(&self, raw_args: &[String]) -> BuiltArguments {
        let mut texture_override = None;
        let mut texture_arg_next = false;

        for arg in raw_args {
            if texture_arg_next {
                texture_override = Some(arg.trim().replace('/', "\\"));
                break;
            }

            if arg == "-t" {
                texture_arg_next = true;
            }
        }

        let mut argument_string = raw_args.join(" ").trim().to_string();

        if let Some(first) = raw_args.first() {
            if self.drive_path_pattern.is_match(first) {
                argument_string = format!("\"{}\"", argument_string.trim_matches('"'));
            }
        }

        BuiltArguments {
            argument_string,
            texture_override,
        }
    }

    /// Execute the compiler and capture its standard output.
    ///
    /// The non-empty argument string is passed verbatim as the single argument;
    /// an empty one means no arguments at all. No shell is involved. The
    /// invocation line is echoed to stdout unless `silent`. Blocks until the
    /// child's stdout closes and the child has exited.
    pub fn run(
        &self,
        executable: &Utf8Path,
        argument_string: &str,
        silent: bool,
    ) -> Result<CompilerInvocation, WrapperError> {
        let invocation_line = Self::invocation_line(executable, argument_string);
        if !silent {
            println!("{}", invocation_line);
        }
        tracing::debug!("{}", invocation_line);

        let output = self.spawn_and_capture(executable, argument_string)?;

        let exit_code = output.status.code().unwrap_or(-1);
        let output_lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .split('\n')
            .map(str::to_string)
            .collect();

        tracing::info!(
            "{} exited with code {} ({} output lines)",
            executable.file_name().unwrap_or(executable.as_str()),
            exit_code,
            output_lines.len()
        );

        Ok(CompilerInvocation {
            executable: executable.to_path_buf(),
            argument_string: argument_string.to_string(),
            output_lines,
            exit_code,
        })
    }

    /// Execute the same executable/argument pair a second time.
    ///
    /// Invoked only when the first run exited 0 despite missing-texture
    /// diagnostics; the freshly copied textures let the second pass complete
    /// correctly. Output is drained but not scanned, nothing is echoed, and no
    /// further reruns happen regardless of the result.
    pub fn rerun(&self, invocation: &CompilerInvocation) -> Result<i32, WrapperError> {
        tracing::info!("Rerunning {}", invocation.executable);

        let output = self.spawn_and_capture(&invocation.executable, &invocation.argument_string)?;
        let exit_code = output.status.code().unwrap_or(-1);

        tracing::info!("Rerun exited with code {}", exit_code);
        Ok(exit_code)
    }

    fn spawn_and_capture(
        &self,
        executable: &Utf8Path,
        argument_string: &str,
    ) -> Result<std::process::Output, WrapperError> {
        let mut command = Command::new(executable.as_std_path());
        if !argument_string.is_empty() {
            command.arg(argument_string);
        }
        command.stdout(Stdio::piped());

        let child = command.spawn()?;
        let output = child.wait_with_output()?;
        Ok(output)
    }

    fn invocation_line(executable: &Utf8Path, argument_string: &str) -> String {
        if argument_string.is_empty() {
            executable.to_string()
        } else {
            format!("{} {}", executable, argument_string)
        }
    }
}

impl Default for CompilerRunner {
    fn default() -> Self {
        Self::new()
    }
}
