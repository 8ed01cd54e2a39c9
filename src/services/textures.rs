use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Image extensions probed for each texture base name, in order. All matches
/// are copied; the order only matters for duplicate detection.
pub const TEXTURE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// Result of one copy attempt for a texture base name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Number of extension variants that existed and were copied.
    pub copied: usize,
}

impl CopyOutcome {
    /// More than one extension matched the same base name. Non-fatal; only
    /// acknowledged in the trace sink.
    pub fn duplicate(&self) -> bool {
        self.copied > 1
    }
}

/// Copies missing textures from the configured search root into the compiler's
/// working directory, where map2dif picks them up on the rerun.
pub struct TextureResolver {
    /// Mirrors the `copyTextures` config flag; false makes every call a no-op.
    copy_textures: bool,

    /// Directory the compiler runs in; destination for copies without an
    /// override directory.
    work_dir: Utf8PathBuf,
}

impl TextureResolver {
    pub fn new(copy_textures: bool) -> Self {
        Self::with_work_dir(copy_textures, Utf8PathBuf::from("."))
    }

    pub fn with_work_dir<P: AsRef<Utf8Path>>(copy_textures: bool, work_dir: P) -> Self {
        Self {
            copy_textures,
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Probe `<source_base>.<ext>` for each known extension and copy every
    /// existing match, overwriting any existing destination file.
    ///
    /// Without an override the file lands in the compiler's working directory
    /// under its bare file name. With an override the directory tree is created
    /// first and the file lands there under the same name. Entirely a no-op
    /// when texture copying is disabled.
    pub fn copy_texture(
        &self,
        source_base: &Utf8Path,
        destination_override: Option<&Utf8Path>,
    ) -> Result<CopyOutcome> {
        if !self.copy_textures {
            return Ok(CopyOutcome::default());
        }

        let mut outcome = CopyOutcome::default();

        for extension in TEXTURE_EXTENSIONS {
            let source = Utf8PathBuf::from(format!(
                "{}.{}",
                source_base.as_str().trim(),
                extension
            ));

            if !source.is_file() {
                continue;
            }

            outcome.copied += 1;
            tracing::debug!("{}", source);

            let file_name = source
                .file_name()
                .with_context(|| format!("Texture source has no file name: {}", source))?;

            let destination = match destination_override {
                Some(dir) => {
                    let dir = self.work_dir.join(dir);
                    fs::create_dir_all(&dir).with_context(|| {
                        format!("Failed to create texture directory: {}", dir)
                    })?;
                    dir.join(file_name)
                }
                None => self.work_dir.join(file_name),
            };

            fs::copy(&source, &destination)
                .with_context(|| format!("Failed to copy {} to {}", source, destination))?;
        }

        if outcome.duplicate() {
            tracing::debug!("Duplicate texture found.");
        }

        Ok(outcome)
    }
}
