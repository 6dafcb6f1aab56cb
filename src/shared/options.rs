//! Zentrale Konfiguration für den MiniMap Builder.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::MapScale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Dateiname der Optionen-Datei
const CONFIG_FILE_NAME: &str = "minimap_builder.toml";

// ── Auswahl ─────────────────────────────────────────────────────────

/// Pick-Radius in Bild-Pixeln (entspricht dem gezeichneten Node-Radius).
pub const PICK_RADIUS_PX: f64 = 5.0;

// ── Maßstab ─────────────────────────────────────────────────────────

/// Reale Einheiten pro Bild-Pixel, solange kein Maßstab gesetzt wurde.
pub const DEFAULT_SCALE_RATIO: f64 = 1.0;
/// Einheit für angezeigte Längen.
pub const DEFAULT_UNIT_NAME: &str = "m";

// ── Anzeige ─────────────────────────────────────────────────────────

/// Nachkommastellen für Routen-Längen.
pub const ROUTE_DECIMALS: usize = 2;
/// Nachkommastellen in Node- und Kantenlisten.
pub const LIST_DECIMALS: usize = 1;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `minimap_builder.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Pick-Radius für Klick-Auswahl in Bild-Pixeln
    pub pick_radius_px: f64,
    /// Reale Einheiten pro Bild-Pixel
    pub scale_ratio: f64,
    /// Name der realen Einheit
    pub unit_name: String,
    /// Nachkommastellen für Routen-Längen
    #[serde(default = "default_route_decimals")]
    pub route_decimals: usize,
    /// Nachkommastellen in Listen
    #[serde(default = "default_list_decimals")]
    pub list_decimals: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius_px: PICK_RADIUS_PX,
            scale_ratio: DEFAULT_SCALE_RATIO,
            unit_name: DEFAULT_UNIT_NAME.to_string(),
            route_decimals: ROUTE_DECIMALS,
            list_decimals: LIST_DECIMALS,
        }
    }
}

/// Serde-Default für `route_decimals` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_route_decimals() -> usize {
    ROUTE_DECIMALS
}

/// Serde-Default für `list_decimals` (Abwärtskompatibilität).
fn default_list_decimals() -> usize {
    LIST_DECIMALS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlt die Datei oder ist sie fehlerhaft, gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("Keine Optionen unter {}, verwende Standardwerte", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("Optionen nicht lesbar ({}): {}", path.display(), err);
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            log::warn!("Optionen fehlerhaft ({}), verwende Standardwerte: {}", path.display(), err);
            Self::default()
        })
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content).with_context(|| {
            format!("Optionen konnten nicht gespeichert werden: {}", path.display())
        })?;
        log::info!("Optionen gespeichert: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei: neben der ausführbaren Datei, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Aktueller Anzeige-Maßstab.
    pub fn map_scale(&self) -> MapScale {
        MapScale::new(self.scale_ratio, self.unit_name.clone())
    }

    /// Übernimmt einen neuen Maßstab.
    pub fn set_map_scale(&mut self, scale: &MapScale) {
        self.scale_ratio = scale.ratio;
        self.unit_name = scale.unit.clone();
    }
}
