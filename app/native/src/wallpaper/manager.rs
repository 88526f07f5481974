//! Wallpaper run orchestration: load the collection, pick a quotation,
//! compose the image and hand it to the desktop.

use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::compose::{ComposeOptions, compose};
use super::desktop::{self, WallpaperError};
use super::fonts::{FontSet, font_candidates};
use super::output::ComposeError;
use crate::quotes::{self, DataError, QuotationRecord};

/// How the quotation is chosen from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniformly at random from the thread RNG.
    #[default]
    Random,
    /// Uniformly at random from an RNG seeded with the given value.
    Seeded(u64),
    /// The quotation with this number.
    Number(String),
}

/// Everything needed for one wallpaper run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperRequest {
    /// Quotation data file.
    pub data_path: PathBuf,
    /// Explicit output file; when `None` a dated file in `output_dir` is used.
    pub output_path: Option<PathBuf>,
    /// Directory for dated output files (empty means the working directory).
    pub output_dir: PathBuf,
    /// Font files tried before the platform defaults.
    pub fonts: Vec<PathBuf>,
    pub options: ComposeOptions,
    pub selection: Selection,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedWallpaper {
    /// Where the image was written.
    pub path: PathBuf,
    /// The quotation that was rendered.
    pub record: QuotationRecord,
    /// Font file used, or `None` for the built-in face.
    pub font: Option<PathBuf>,
}

/// Errors that can occur during a wallpaper run.
#[derive(Debug)]
pub enum ManagerError {
    /// Loading or selecting the quotation failed.
    Data(DataError),
    /// Preparing the output location failed.
    OutputDir { path: String, source: std::io::Error },
    /// Rendering or saving the image failed.
    Compose(ComposeError),
    /// Setting the desktop wallpaper failed.
    Desktop(WallpaperError),
}

impl std::fmt::Display for ManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(err) => write!(f, "{err}"),
            Self::OutputDir { path, source } => {
                write!(f, "Failed to create output directory {path}: {source}")
            }
            Self::Compose(err) => write!(f, "{err}"),
            Self::Desktop(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ManagerError {}

impl From<DataError> for ManagerError {
    fn from(err: DataError) -> Self { Self::Data(err) }
}

impl From<ComposeError> for ManagerError {
    fn from(err: ComposeError) -> Self { Self::Compose(err) }
}

impl From<WallpaperError> for ManagerError {
    fn from(err: WallpaperError) -> Self { Self::Desktop(err) }
}

/// File name for a wallpaper generated on `date` (`YYYY-MM-DD`).
#[must_use]
pub fn dated_file_name(date: &str) -> String { format!("wallpaper_{date}.png") }

/// Returns `wallpaper_{today}.png` inside `output_dir`, using the local date.
#[must_use]
pub fn default_output_path(output_dir: &Path) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    output_dir.join(dated_file_name(&today))
}

/// Chooses a quotation according to `selection`.
///
/// # Errors
///
/// Returns `DataError::EmptyCollection` for an empty collection and
/// `DataError::NotFound` when a requested number is absent.
pub fn select_quotation<'a>(
    collection: &'a [QuotationRecord],
    selection: &Selection,
) -> Result<&'a QuotationRecord, DataError> {
    match selection {
        Selection::Random => quotes::pick_random(collection),
        Selection::Seeded(seed) => {
            quotes::pick_random_with(collection, &mut StdRng::seed_from_u64(*seed))
        }
        Selection::Number(number) => quotes::find_by_number(collection, number),
    }
}

/// Loads the data file and selects one quotation.
///
/// # Errors
///
/// Returns `ManagerError::Data` if loading or selection fails.
pub fn load_quotation(request: &WallpaperRequest) -> Result<QuotationRecord, ManagerError> {
    let collection = quotes::load_collection(&request.data_path)?;
    let record = select_quotation(&collection, &request.selection)?.clone();

    tracing::info!(
        kural = %record.sequence_number,
        chapter = %record.chapter_name,
        "selected quotation"
    );

    Ok(record)
}

/// Resolves the output file for `request`, creating the output directory
/// when a dated file name is used.
fn output_path(request: &WallpaperRequest) -> Result<PathBuf, ManagerError> {
    if let Some(path) = &request.output_path {
        return Ok(path.clone());
    }

    if !request.output_dir.as_os_str().is_empty() {
        fs::create_dir_all(&request.output_dir).map_err(|source| ManagerError::OutputDir {
            path: request.output_dir.display().to_string(),
            source,
        })?;
    }

    Ok(default_output_path(&request.output_dir))
}

/// Renders a wallpaper for `record` with fonts resolved from `request`.
///
/// # Errors
///
/// Returns `ManagerError::OutputDir` or `ManagerError::Compose` if the image
/// cannot be written.
pub fn generate_for(
    record: QuotationRecord,
    request: &WallpaperRequest,
) -> Result<GeneratedWallpaper, ManagerError> {
    let fonts = FontSet::load(&font_candidates(&request.fonts));
    let destination = output_path(request)?;

    let path = compose(&record, &destination, &request.options, &fonts)?;
    tracing::info!(path = %path.display(), "wallpaper generated");

    Ok(GeneratedWallpaper {
        path,
        record,
        font: fonts.source_path().map(Path::to_path_buf),
    })
}

/// Loads, selects and renders a wallpaper without applying it.
///
/// # Errors
///
/// Returns `ManagerError` if any step fails.
pub fn generate(request: &WallpaperRequest) -> Result<GeneratedWallpaper, ManagerError> {
    let record = load_quotation(request)?;
    generate_for(record, request)
}

/// Generates a wallpaper and sets it as the desktop background.
///
/// # Errors
///
/// Returns `ManagerError` if generation or the desktop call fails.
pub fn apply(request: &WallpaperRequest) -> Result<GeneratedWallpaper, ManagerError> {
    let generated = generate(request)?;
    desktop::set_wallpaper(&generated.path)?;
    Ok(generated)
}
