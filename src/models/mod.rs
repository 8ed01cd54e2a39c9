//! Data models for the wrapper.
//!
//! - [`WrapperConfig`]: The three-field YAML configuration read from
//!   `map2dif_wrapper.yaml` in the working directory
//! - [`CompilerInvocation`]: Captured result of one compiler run (argument
//!   string, output lines, exit code)
//! - [`TextureReference`]: A missing-texture diagnostic extracted from the
//!   compiler's output, consumed immediately by the texture resolver
//!
//! All config structs derive `Serialize`/`Deserialize` for YAML persistence.
//! The invocation and texture values are transient: they live for a single
//! orchestrator pass and are never persisted.

pub mod config;
pub mod invocation;

pub use config::WrapperConfig;
pub use invocation::{CompilerInvocation, TextureReference};
