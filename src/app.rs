//! The orchestration flow: config, discovery, compile, scan, rerun, exit code.
//!
//! One [`Orchestrator`] pass is the whole program. Every step short-circuits
//! to a non-zero exit on failure; configuration and discovery failures notify
//! the user and exit -1, while a failing compiler propagates its own exit code
//! unchanged.

use crate::config::ConfigStore;
use crate::error::WrapperError;
use crate::models::WrapperConfig;
use crate::notify::{self, Notifier, StdoutNotifier};
use crate::services::{CompilerRunner, OutputScanner, TextureResolver};
use camino::{Utf8Path, Utf8PathBuf};

/// Exit code the compiler reports for a bad argument; mapped to a readable
/// reason in the failure notification.
pub const INVALID_ARGUMENT_EXIT_CODE: i32 = -2147483645;

/// Entry-point component wiring the config store, compiler runner, output
/// scanner, and texture resolver in sequence.
pub struct Orchestrator {
    /// Working directory: holds the config file and the compiler executables,
    /// and receives copied textures.
    base_dir: Utf8PathBuf,
}

impl Orchestrator {
    pub fn new<P: AsRef<Utf8Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Run the full wrapper pass and return the process exit code.
    pub fn run(&self, raw_args: &[String]) -> i32 {
        let store = ConfigStore::new(&self.base_dir);

        // Until the config is readable the silent flag is unknown, so these
        // two failures are reported on stdout.
        if let Err(err) = store.ensure_exists() {
            return Self::fail(&StdoutNotifier, err);
        }

        let config = match store.load() {
            Ok(config) => config,
            Err(err) => return Self::fail(&StdoutNotifier, err),
        };

        let notifier = notify::for_mode(config.silent_mode);
        self.compile(&config, raw_args, notifier.as_ref())
    }

    /// Steps after the config is loaded, with an explicit notification
    /// channel. Exposed separately so tests can substitute a recorder.
    pub fn compile(
        &self,
        config: &WrapperConfig,
        raw_args: &[String],
        notifier: &dyn Notifier,
    ) -> i32 {
        let store = ConfigStore::new(&self.base_dir);
        if let Err(err) = store.validate(config) {
            return Self::fail(notifier, err);
        }

        let runner = CompilerRunner::new();
        let executable = match runner.locate_executable(&self.base_dir) {
            Ok(path) => path,
            Err(err) => return Self::fail(notifier, err),
        };

        let built = runner.build_arguments(raw_args);

        let invocation =
            match runner.run(&executable, &built.argument_string, config.silent_mode) {
                Ok(invocation) => invocation,
                Err(err) => return Self::fail(notifier, err),
            };

        // Output is fully buffered before scanning; the scan is a pure
        // function of the captured line sequence.
        let scanner = OutputScanner::new();
        let resolver = TextureResolver::with_work_dir(config.copy_textures, &self.base_dir);
        let textures_root = Utf8PathBuf::from(config.textures_path().unwrap_or_default());
        let override_dir = built.texture_override.as_deref().map(Utf8Path::new);

        let outcome = match scanner.scan(
            &invocation.output_lines,
            &textures_root,
            override_dir,
            &resolver,
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                notifier.notify(&format!("{:#}", err));
                return -1;
            }
        };

        let mut exit_code = invocation.exit_code;

        // The compiler warns and continues on a missing texture, so a clean
        // exit with warnings means the copied textures deserve a second pass.
        // Exactly one; the rerun's output is not scanned.
        if outcome.missing_detected() && exit_code == 0 {
            exit_code = match runner.rerun(&invocation) {
                Ok(code) => code,
                Err(err) => return Self::fail(notifier, err),
            };
        }

        let exe_name = executable.file_name().unwrap_or(executable.as_str());

        if exit_code != 0 {
            if !raw_args.is_empty() {
                notifier.notify(&format!(
                    "{} exited with error code {} ({})",
                    exe_name,
                    exit_code,
                    failure_reason(exit_code)
                ));
            }
            return exit_code;
        }

        tracing::debug!("{} exited with code 0 (Success)", exe_name);
        0
    }

    fn fail(notifier: &dyn Notifier, err: WrapperError) -> i32 {
        notifier.notify(&err.to_string());
        err.exit_code()
    }
}

/// Human-readable reason for a compiler failure code.
pub fn failure_reason(exit_code: i32) -> &'static str {
    if exit_code == INVALID_ARGUMENT_EXIT_CODE {
        "Invalid argument supplied"
    } else {
        "Generic error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::test_support::RecordingNotifier;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Utf8PathBuf, WrapperConfig) {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let textures = base.join("textures");
        fs::create_dir_all(&textures).unwrap();

        let config = WrapperConfig {
            textures_path: Some(textures.to_string()),
            copy_textures: true,
            silent_mode: true,
        };
        (temp_dir, base, config)
    }

    #[test]
    fn test_failure_reason_mapping() {
        assert_eq!(failure_reason(-2147483645), "Invalid argument supplied");
        assert_eq!(failure_reason(1), "Generic error");
        assert_eq!(failure_reason(-1), "Generic error");
    }

    #[test]
    fn test_validation_failure_notifies_and_exits_minus_one() {
        let (_temp_dir, base, _) = setup();
        let orchestrator = Orchestrator::new(&base);
        let notifier = RecordingNotifier::default();

        let code = orchestrator.compile(&WrapperConfig::default(), &[], &notifier);

        assert_eq!(code, -1);
        assert_eq!(
            notifier.messages.borrow().as_slice(),
            ["texturesPath has not been set."]
        );
    }

    #[test]
    fn test_missing_executable_notifies_and_exits_minus_one() {
        let (_temp_dir, base, config) = setup();
        let orchestrator = Orchestrator::new(&base);
        let notifier = RecordingNotifier::default();

        let code = orchestrator.compile(&config, &[], &notifier);

        assert_eq!(code, -1);
        assert_eq!(
            notifier.messages.borrow().as_slice(),
            ["Could not find a map2dif executable in the current directory."]
        );
    }

    #[cfg(unix)]
    mod end_to_end {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        fn install_compiler(base: &Utf8Path, body: &str) {
            let path = base.join("map2dif.exe");
            fs::write(&path, format!("#!/bin/sh\ncd \"$(dirname \"$0\")\"\n{}\n", body)).unwrap();
            let mut perms = fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).unwrap();
        }

        #[test]
        fn test_clean_compile_returns_zero() {
            let (_temp_dir, base, config) = setup();
            install_compiler(&base, "echo compiling\nexit 0");

            let orchestrator = Orchestrator::new(&base);
            let notifier = RecordingNotifier::default();
            let args = vec!["test.map".to_string()];

            assert_eq!(orchestrator.compile(&config, &args, &notifier), 0);
            assert!(notifier.messages.borrow().is_empty());
        }

        #[test]
        fn test_missing_texture_triggers_exactly_one_rerun() {
            let (_temp_dir, base, config) = setup();
            // First run warns about a texture and exits 0; each later run
            // reports its ordinal so the final exit code shows the run count.
            install_compiler(
                &base,
                "runs=$(cat runs 2>/dev/null || echo 0)\n\
                 runs=$((runs + 1))\n\
                 echo $runs > runs\n\
                 if [ $runs -eq 1 ]; then\n\
                 echo '  Unable to load texture red01'\n\
                 exit 0\n\
                 fi\n\
                 exit $((runs + 10))",
            );
            fs::write(base.join("textures").join("red01.png"), "png").unwrap();

            let orchestrator = Orchestrator::new(&base);
            let notifier = RecordingNotifier::default();
            let args = vec!["test.map".to_string()];

            let code = orchestrator.compile(&config, &args, &notifier);

            // Rerun happened once (run #2, exit 12) and its code is final
            assert_eq!(code, 12);
            assert_eq!(fs::read_to_string(base.join("runs")).unwrap().trim(), "2");
            // The copy ran before the rerun
            assert!(base.join("red01.png").is_file());
        }

        #[test]
        fn test_nonzero_exit_with_args_notifies_generic_error() {
            let (_temp_dir, base, config) = setup();
            install_compiler(&base, "exit 5");

            let orchestrator = Orchestrator::new(&base);
            let notifier = RecordingNotifier::default();
            let args = vec!["test.map".to_string()];

            assert_eq!(orchestrator.compile(&config, &args, &notifier), 5);
            let messages = notifier.messages.borrow();
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains("map2dif.exe"));
            assert!(messages[0].contains("error code 5"));
            assert!(messages[0].contains("Generic error"));
        }

        #[test]
        fn test_nonzero_exit_without_args_is_silent() {
            let (_temp_dir, base, config) = setup();
            install_compiler(&base, "exit 5");

            let orchestrator = Orchestrator::new(&base);
            let notifier = RecordingNotifier::default();

            assert_eq!(orchestrator.compile(&config, &[], &notifier), 5);
            assert!(notifier.messages.borrow().is_empty());
        }
    }
}
