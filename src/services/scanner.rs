use crate::models::TextureReference;
use crate::services::textures::TextureResolver;
use anyhow::Result;
use camino::Utf8Path;
use regex::Regex;

/// Result of scanning one captured output stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Number of lines inspected (every captured line, exactly once).
    pub lines_scanned: usize,

    /// Number of missing-texture diagnostics found across all lines.
    pub references: usize,
}

impl ScanOutcome {
    /// Whether at least one diagnostic matched. Together with a zero exit code
    /// this is what triggers the single compiler rerun.
    pub fn missing_detected(&self) -> bool {
        self.references > 0
    }
}

/// Scanner for the compiler's captured standard output.
///
/// Each line is checked against the missing-texture diagnostic pattern:
/// optional leading whitespace, the literal phrase `Unable to load texture`,
/// a space, then the texture name to end of line. Matching lines turn into
/// [`TextureReference`]s handed to the [`TextureResolver`]; everything else is
/// echoed to the user unmodified.
pub struct OutputScanner {
    /// Regex for `Unable to load texture <name>` diagnostic lines
    texture_pattern: Regex,
}

impl OutputScanner {
    pub fn new() -> Self {
        Self {
            texture_pattern: Regex::new(r"^\s*Unable to load texture (.+)$")
                .expect("Invalid texture diagnostic regex"),
        }
    }

    /// Extract every diagnostic match on one line.
    ///
    /// The captured name has its forward slashes converted to backslashes, and
    /// the source base is the texture root joined with that name.
    pub fn extract_references(
        &self,
        line: &str,
        textures_root: &Utf8Path,
        destination_override: Option<&Utf8Path>,
    ) -> Vec<TextureReference> {
        self.texture_pattern
            .captures_iter(line)
            .map(|captures| {
                let raw_name = captures[1].replace('/', "\\");
                TextureReference {
                    source_base: textures_root.join(&raw_name),
                    raw_name,
                    destination_override: destination_override.map(Utf8Path::to_path_buf),
                }
            })
            .collect()
    }

    /// Walk the captured lines in order, resolving diagnostics and echoing the
    /// rest through to stdout.
    pub fn scan(
        &self,
        lines: &[String],
        textures_root: &Utf8Path,
        destination_override: Option<&Utf8Path>,
        resolver: &TextureResolver,
    ) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        for line in lines {
            outcome.lines_scanned += 1;

            let references = self.extract_references(line, textures_root, destination_override);
            if references.is_empty() {
                // Pass-through logging path: the raw line, unmodified
                println!("{}", line);
                tracing::debug!("{}", line);
                continue;
            }

            for reference in references {
                outcome.references += 1;
                tracing::debug!("Missing texture: {}", reference.raw_name);
                resolver.copy_texture(
                    &reference.source_base,
                    reference.destination_override.as_deref(),
                )?;
            }
        }

        Ok(outcome)
    }
}

impl Default for OutputScanner {
    fn default() -> Self {
        Self::new()
    }
}
