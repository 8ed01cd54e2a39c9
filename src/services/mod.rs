//! Services module - the compiler-facing logic of the wrapper.
//!
//! The services are framework-agnostic: no dialog or CLI code, only subprocess
//! handling, output parsing, and file copying. All inputs are explicit
//! parameters, which keeps each piece testable on its own.
//!
//! # Components
//!
//! - [`CompilerRunner`]: Locates a map2dif executable among the fixed candidate
//!   list, builds the forwarded argument string (including the drive-letter
//!   re-quoting and the `-t` override extraction), and executes the child with
//!   captured standard output.
//!
//! - [`OutputScanner`]: Walks the captured output lines, extracts
//!   missing-texture diagnostics, and echoes everything else through untouched.
//!
//! - [`TextureResolver`]: Probes a fixed extension list next to the configured
//!   texture root and copies every match into place.

pub mod compiler;
pub mod scanner;
pub mod textures;

pub use compiler::{BuiltArguments, CompilerRunner, EXECUTABLE_CANDIDATES};
pub use scanner::{OutputScanner, ScanOutcome};
pub use textures::{CopyOutcome, TextureResolver, TEXTURE_EXTENSIONS};
