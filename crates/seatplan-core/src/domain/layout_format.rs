//! Room layout formats.
//!
//! A [`LayoutFormat`] names a physical room-seating template.  The wire tags
//! (`"teatro"`, `"mesa_u"`, ...) are shared with the upstream analysis and
//! with the persisted layout slot, so they must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not one of the nine layout tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown layout format: {0:?}")]
pub struct ParseLayoutError(pub String);

/// The room-seating template used to partition participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutFormat {
    /// Rows of chairs facing a stage.
    #[serde(rename = "teatro")]
    Theater,
    /// Rows of desks facing a stage.
    #[serde(rename = "sala_aula")]
    Classroom,
    /// Hollow square ("O") table.
    #[serde(rename = "mesa_o")]
    HollowSquare,
    /// One long boardroom table.
    #[serde(rename = "conferencia")]
    Conference,
    /// U-shaped table.
    #[serde(rename = "mesa_u")]
    UShape,
    /// T-shaped table.
    #[serde(rename = "mesa_t")]
    TShape,
    /// Cocktail tables with free circulation.
    #[serde(rename = "recepcao")]
    Reception,
    /// Round banquet tables.
    #[serde(rename = "buffet")]
    Banquet,
    /// Free-form; rendered with the grid fallback.
    #[serde(rename = "custom")]
    Custom,
}

impl LayoutFormat {
    /// Every format, including `custom`.
    pub const ALL: [LayoutFormat; 9] = [
        LayoutFormat::Theater,
        LayoutFormat::Classroom,
        LayoutFormat::HollowSquare,
        LayoutFormat::Conference,
        LayoutFormat::UShape,
        LayoutFormat::TShape,
        LayoutFormat::Reception,
        LayoutFormat::Banquet,
        LayoutFormat::Custom,
    ];

    /// The formats offered in the layout selector, in display order.
    pub const SELECTABLE: [LayoutFormat; 8] = [
        LayoutFormat::Banquet,
        LayoutFormat::UShape,
        LayoutFormat::Conference,
        LayoutFormat::HollowSquare,
        LayoutFormat::Theater,
        LayoutFormat::Classroom,
        LayoutFormat::Reception,
        LayoutFormat::TShape,
    ];

    /// The wire / storage tag.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutFormat::Theater => "teatro",
            LayoutFormat::Classroom => "sala_aula",
            LayoutFormat::HollowSquare => "mesa_o",
            LayoutFormat::Conference => "conferencia",
            LayoutFormat::UShape => "mesa_u",
            LayoutFormat::TShape => "mesa_t",
            LayoutFormat::Reception => "recepcao",
            LayoutFormat::Banquet => "buffet",
            LayoutFormat::Custom => "custom",
        }
    }

    /// Human-readable name shown to event organisers.
    pub fn label(self) -> &'static str {
        match self {
            LayoutFormat::Theater => "Teatro",
            LayoutFormat::Classroom => "Sala de Aula",
            LayoutFormat::HollowSquare => "Mesa em O",
            LayoutFormat::Conference => "Conferência",
            LayoutFormat::UShape => "Mesa em U",
            LayoutFormat::TShape => "Mesa em T",
            LayoutFormat::Reception => "Recepção",
            LayoutFormat::Banquet => "Buffet",
            LayoutFormat::Custom => "Livre",
        }
    }

    /// One-line selector hint.  `custom` is not selectable and has none.
    pub fn description(self) -> Option<&'static str> {
        let text = match self {
            LayoutFormat::Banquet => "Mesas redondas para 6-8 pessoas. Ideal para networking intenso.",
            LayoutFormat::UShape => "Formato de U. Todos se veem, bom para debates centrais.",
            LayoutFormat::Conference => "Mesa única retangular. Ideal para diretoria ou grupos menores.",
            LayoutFormat::HollowSquare => "Quadrado vazado. Similar ao U, mas fechado.",
            LayoutFormat::Theater => "Fileiras de cadeiras. Foco no palestrante.",
            LayoutFormat::Classroom => "Fileiras com mesas. Foco em aprendizado.",
            LayoutFormat::Reception => "Mesas de apoio e circulação livre.",
            LayoutFormat::TShape => "Formato T. Bom para painéis com destaque principal.",
            LayoutFormat::Custom => return None,
        };
        Some(text)
    }

    /// `true` when the format seats each seating group at its own table.
    pub fn uses_tables(self) -> bool {
        matches!(self, LayoutFormat::Banquet | LayoutFormat::Reception)
    }
}

impl fmt::Display for LayoutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutFormat {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        LayoutFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == tag)
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}
