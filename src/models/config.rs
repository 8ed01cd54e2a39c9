use serde::{Deserialize, Serialize};

/// Wrapper configuration from `map2dif_wrapper.yaml`.
///
/// The file uses camelCase keys and carries exactly three fields. It is created
/// with these defaults on first run and read back on every run:
///
/// ```yaml
/// texturesPath: null
/// copyTextures: true
/// silentMode: false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperConfig {
    /// Root directory the compiler's texture references are resolved against.
    /// Must point at an existing directory before the compiler runs.
    #[serde(default)]
    pub textures_path: Option<String>,

    /// When false, missing-texture diagnostics are still detected (and still
    /// trigger the rerun) but no files are copied.
    #[serde(default = "default_copy_textures")]
    pub copy_textures: bool,

    /// Silent mode replaces message dialogs with lines on standard output and
    /// suppresses the invocation echo.
    #[serde(default)]
    pub silent_mode: bool,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            textures_path: None,
            copy_textures: true,
            silent_mode: false,
        }
    }
}

fn default_copy_textures() -> bool {
    true
}

impl WrapperConfig {
    /// The configured textures path, treating an empty string the same as an
    /// absent one.
    pub fn textures_path(&self) -> Option<&str> {
        self.textures_path.as_deref().filter(|p| !p.is_empty())
    }
}
