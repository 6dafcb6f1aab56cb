//! Anzeige-Maßstab: Umrechnung von Bild-Pixeln in reale Einheiten.

/// Maßstab für angezeigte Längen
#[derive(Debug, Clone, PartialEq)]
pub struct MapScale {
    /// Reale Einheiten pro Bild-Pixel
    pub ratio: f64,
    /// Name der Einheit (z.B. "m")
    pub unit: String,
}

impl MapScale {
    /// Erstellt einen Maßstab
    pub fn new(ratio: f64, unit: impl Into<String>) -> Self {
        Self {
            ratio,
            unit: unit.into(),
        }
    }

    /// Maßstab aus der realen Breite des Hintergrundbilds, `None` bei ungültiger Eingabe
    pub fn from_real_width(
        real_width: f64,
        image_width_px: f64,
        unit: impl Into<String>,
    ) -> Option<Self> {
        let mut scale = Self::new(super::options::DEFAULT_SCALE_RATIO, unit);
        scale
            .set_real_width(real_width, image_width_px)
            .then_some(scale)
    }

    /// Setzt den Maßstab aus der realen Breite des Hintergrundbilds.
    ///
    /// Nicht-positive oder nicht-endliche Eingaben werden ignoriert (`false`).
    pub fn set_real_width(&mut self, real_width: f64, image_width_px: f64) -> bool {
        if !(real_width.is_finite() && real_width > 0.0) || !(image_width_px > 0.0) {
            log::warn!(
                "Maßstab unverändert: ungültige Breite {} bei Bildbreite {} px",
                real_width,
                image_width_px
            );
            return false;
        }
        self.ratio = real_width / image_width_px;
        true
    }

    /// Formatiert eine bereits skalierte Länge mit Einheit
    pub fn format_length(&self, length: f64, decimals: usize) -> String {
        format!("{:.*} {}", decimals, length, self.unit)
    }
}

impl Default for MapScale {
    fn default() -> Self {
        Self::new(super::options::DEFAULT_SCALE_RATIO, super::options::DEFAULT_UNIT_NAME)
    }
}
