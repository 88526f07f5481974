//! Font resolution.
//!
//! Candidates are tried in order through a [`FontSource`]; the first one that
//! loads provides every face. When none load, the built-in bitmap face is used
//! so rendering never fails for lack of a font.

use std::path::{Path, PathBuf};

use ab_glyph::FontArc;

use super::builtin_font::BuiltinFace;
use super::face::{OutlineFace, TextFace};
use super::theme;

/// Reason a single font candidate could not be used.
#[derive(Debug)]
pub enum FontLoadError {
    /// The file could not be read.
    Read(std::io::Error),
    /// The file is not a usable font.
    Parse(String),
}

impl std::fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "Failed to read font: {err}"),
            Self::Parse(reason) => write!(f, "Invalid font: {reason}"),
        }
    }
}

impl std::error::Error for FontLoadError {}

impl From<std::io::Error> for FontLoadError {
    fn from(err: std::io::Error) -> Self { Self::Read(err) }
}

/// Loads font data from a path.
pub trait FontSource {
    /// Loads the font at `path`.
    ///
    /// # Errors
    ///
    /// Returns `FontLoadError` if the font cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<FontArc, FontLoadError>;
}

/// Reads fonts from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFontSource;

impl FontSource for FileFontSource {
    fn load(&self, path: &Path) -> Result<FontArc, FontLoadError> {
        let data = std::fs::read(path)?;
        FontArc::try_from_vec(data).map_err(|err| FontLoadError::Parse(err.to_string()))
    }
}

/// Outcome of trying the font candidates.
#[derive(Clone)]
pub enum FontResolution {
    /// The first candidate that loaded.
    Loaded { path: PathBuf, font: FontArc },
    /// No candidate loaded.
    Fallback,
}

impl std::fmt::Debug for FontResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded { path, .. } => f.debug_struct("Loaded").field("path", path).finish(),
            Self::Fallback => write!(f, "Fallback"),
        }
    }
}

/// Tries each candidate in order and returns the first that loads.
///
/// Failures are logged at debug level and never propagate.
pub fn resolve_fonts<S: FontSource + ?Sized>(candidates: &[PathBuf], source: &S) -> FontResolution {
    for path in candidates {
        match source.load(path) {
            Ok(font) => {
                tracing::info!(path = %path.display(), "using font");
                return FontResolution::Loaded { path: path.clone(), font };
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "font candidate rejected");
            }
        }
    }

    tracing::warn!(
        tried = candidates.len(),
        "no font could be loaded, falling back to the built-in face; Tamil text will not render"
    );
    FontResolution::Fallback
}

/// Role a face plays in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Explanation text.
    Title,
    /// Quotation lines.
    Subtitle,
    /// Header.
    Label,
    /// Footer.
    Tiny,
}

impl FontRole {
    /// Nominal pixel size of an outline face in this role.
    #[must_use]
    pub const fn size(self) -> f32 {
        match self {
            Self::Title => theme::TITLE_SIZE,
            Self::Subtitle => theme::SUBTITLE_SIZE,
            Self::Label => theme::LABEL_SIZE,
            Self::Tiny => theme::TINY_SIZE,
        }
    }
}

/// One face per layout role.
pub struct FontSet {
    title: Box<dyn TextFace>,
    subtitle: Box<dyn TextFace>,
    label: Box<dyn TextFace>,
    tiny: Box<dyn TextFace>,
    source_path: Option<PathBuf>,
}

impl FontSet {
    /// Builds the faces for every role from a resolution result.
    #[must_use]
    pub fn from_resolution(resolution: FontResolution) -> Self {
        match resolution {
            FontResolution::Loaded { path, font } => {
                let face = |role: FontRole| -> Box<dyn TextFace> {
                    Box::new(OutlineFace::new(font.clone(), role.size()))
                };
                Self {
                    title: face(FontRole::Title),
                    subtitle: face(FontRole::Subtitle),
                    label: face(FontRole::Label),
                    tiny: face(FontRole::Tiny),
                    source_path: Some(path),
                }
            }
            FontResolution::Fallback => Self::builtin(),
        }
    }

    /// Uses the built-in bitmap face for every role.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: Box::new(BuiltinFace::default()),
            subtitle: Box::new(BuiltinFace::default()),
            label: Box::new(BuiltinFace::default()),
            tiny: Box::new(BuiltinFace::default()),
            source_path: None,
        }
    }

    /// Resolves `candidates` from the filesystem and builds the faces.
    #[must_use]
    pub fn load(candidates: &[PathBuf]) -> Self {
        Self::from_resolution(resolve_fonts(candidates, &FileFontSource))
    }

    /// Returns the face for `role`.
    #[must_use]
    pub fn face(&self, role: FontRole) -> &dyn TextFace {
        match role {
            FontRole::Title => self.title.as_ref(),
            FontRole::Subtitle => self.subtitle.as_ref(),
            FontRole::Label => self.label.as_ref(),
            FontRole::Tiny => self.tiny.as_ref(),
        }
    }

    /// Path of the loaded font file, or `None` for the built-in face.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> { self.source_path.as_deref() }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet").field("source_path", &self.source_path).finish_non_exhaustive()
    }
}

/// Returns the platform font files known to cover Tamil, in preference order.
#[must_use]
pub fn platform_font_candidates() -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        let fonts_dir = std::env::var_os("WINDIR")
            .map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from)
            .join("Fonts");
        ["Nirmala.ttc", "Nirmala.ttf", "Latha.ttf", "Vijaya.ttf"]
            .iter()
            .map(|name| fonts_dir.join(name))
            .collect()
    } else if cfg!(target_os = "macos") {
        [
            "/System/Library/Fonts/Supplemental/Tamil Sangam MN.ttc",
            "/System/Library/Fonts/Tamil Sangam MN.ttc",
            "/System/Library/Fonts/Supplemental/Tamil MN.ttc",
            "/Library/Fonts/Tamil MN.ttc",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    } else {
        [
            "/usr/share/fonts/truetype/noto/NotoSansTamil-Regular.ttf",
            "/usr/share/fonts/noto/NotoSansTamil-Regular.ttf",
            "/usr/share/fonts/google-noto/NotoSansTamil-Regular.ttf",
            "/usr/share/fonts/truetype/lohit-tamil/Lohit-Tamil.ttf",
            "/usr/share/fonts/lohit-tamil/Lohit-Tamil.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    }
}

/// Combines user-supplied font paths with the platform defaults.
///
/// User paths keep their order and come first; duplicates are dropped.
#[must_use]
pub fn font_candidates(user_fonts: &[PathBuf]) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    for path in user_fonts.iter().cloned().chain(platform_font_candidates()) {
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }

    candidates
}
