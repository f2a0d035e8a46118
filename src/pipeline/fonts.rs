use crate::core::{Layout, TextStyle};
use crate::error::{ReplayError, ReplayResult};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use fontdue::{Font, FontSettings};
use std::path::PathBuf;
use std::sync::Arc;

const PREFERRED_FAMILY: &str = "Arial";

/// Where the faces come from. Explicit files win over the system lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSource {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

/// Regular and bold faces, loaded once per run.
#[derive(Clone)]
pub struct FontSet {
    pub regular: Arc<Font>,
    pub bold: Arc<Font>,
}

impl FontSet {
    pub fn load(source: &FontSource) -> ReplayResult<Self> {
        let explicit_bold = source.bold.as_deref().map(font_from_file).transpose()?;

        let (regular, bold) = match &source.regular {
            Some(path) => {
                let regular = Arc::new(font_from_file(path)?);
                // a lone --font is reused for bold rather than mixing families
                let bold = explicit_bold.map(Arc::new).unwrap_or_else(|| regular.clone());
                (regular, bold)
            }
            None => {
                let db = system_database();
                let regular = Arc::new(font_from_system(&db, Weight::NORMAL)?);
                let bold = match explicit_bold {
                    Some(font) => Arc::new(font),
                    None => Arc::new(font_from_system(&db, Weight::BOLD)?),
                };
                (regular, bold)
            }
        };

        Ok(Self { regular, bold })
    }

    pub fn system() -> ReplayResult<Self> {
        Self::load(&FontSource::default())
    }
}

fn system_database() -> Database {
    let mut db = Database::new();
    db.load_system_fonts();
    log::debug!("system font database has {} faces", db.len());
    db
}

fn font_from_file(path: &std::path::Path) -> ReplayResult<Font> {
    let data = std::fs::read(path)
        .map_err(|e| ReplayError::font(format!("failed to read '{}': {e}", path.display())))?;
    Font::from_bytes(data, FontSettings::default())
        .map_err(|e| ReplayError::font(format!("failed to parse '{}': {e}", path.display())))
}

fn font_from_system(db: &Database, weight: Weight) -> ReplayResult<Font> {
    let query = Query {
        families: &[Family::Name(PREFERRED_FAMILY), Family::SansSerif],
        weight,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or_else(|| ReplayError::font("no system fonts found, pass --font"))?;

    if let Some(face) = db.face(id) {
        log::debug!("using system face {:?} (weight {})", face.post_script_name, weight.0);
    }

    db.with_face_data(id, |data, index| {
        Font::from_bytes(
            data,
            FontSettings {
                collection_index: index,
                ..FontSettings::default()
            },
        )
    })
    .ok_or_else(|| ReplayError::font("system font data is unavailable"))?
    .map_err(|e| ReplayError::font(format!("failed to parse system font: {e}")))
}

/// The three text styles at pixel sizes derived from the cell size.
#[derive(Clone)]
pub struct TextStyles {
    fonts: FontSet,
    regular_px: f32,
    large_px: f32,
}

impl TextStyles {
    pub fn new(fonts: FontSet, layout: &Layout) -> Self {
        Self {
            fonts,
            regular_px: layout.font_size(),
            large_px: layout.large_font_size(),
        }
    }

    pub fn face(&self, style: TextStyle) -> (&Font, f32) {
        match style {
            TextStyle::Regular => (self.fonts.regular.as_ref(), self.regular_px),
            TextStyle::Bold => (self.fonts.bold.as_ref(), self.regular_px),
            TextStyle::Large => (self.fonts.bold.as_ref(), self.large_px),
        }
    }
}
