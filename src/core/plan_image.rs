//! Loader für Grundriss- und Overlay-Bilder.

use anyhow::{Context, Result};
use glam::Vec2;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Ein dekodiertes Planbild (Basis-Grundriss oder Overlay).
pub struct PlanImage {
    /// Bilddaten
    image_data: DynamicImage,
    /// Herkunft (Dateipfad) für Logs und Statusanzeige
    source_label: String,
}

impl PlanImage {
    /// Lädt ein Bild aus einer Datei.
    ///
    /// Unterstützte Formate: PNG, JPG, JPEG
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();
        // Endung zuerst; falls falsch, Format über Magic Bytes bestimmen
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    label,
                    ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", label))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", label))?;
                if let Some(fmt) = reader.format() {
                    log::info!("Tatsächliches Bildformat erkannt: {:?} für '{}'", fmt, label);
                }
                reader
                    .decode()
                    .with_context(|| format!("Fehler beim Dekodieren des Planbildes: {}", label))?
            }
        };
        Self::from_image(image, &label)
    }

    /// Dekodiert ein Bild aus Bytes (z.B. Drag & Drop).
    pub fn load_from_bytes(bytes: Vec<u8>, source_label: &str) -> Result<Self> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", source_label))?
            .decode()
            .with_context(|| format!("Fehler beim Dekodieren von '{}'", source_label))?;
        Self::from_image(image, source_label)
    }

    /// Erstellt ein Planbild aus einem bereits dekodierten Bild.
    pub fn from_image(image: DynamicImage, source_label: &str) -> Result<Self> {
        let (width, height) = image.dimensions();
        anyhow::ensure!(
            width > 0 && height > 0,
            "Planbild '{}' hat keine Fläche ({}x{})",
            source_label,
            width,
            height
        );
        log::info!(
            "Planbild geladen: {}x{} Pixel von '{}'",
            width,
            height,
            source_label
        );
        Ok(Self {
            image_data: image,
            source_label: source_label.to_string(),
        })
    }

    /// Gibt die Bilddaten zurück
    pub fn image_data(&self) -> &DynamicImage {
        &self.image_data
    }

    /// Herkunft des Bildes
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Gibt die Dimensionen des Bildes zurück
    pub fn dimensions(&self) -> (u32, u32) {
        self.image_data.dimensions()
    }

    /// Natürliche Größe als Vektor.
    pub fn natural_size(&self) -> Vec2 {
        let (w, h) = self.dimensions();
        Vec2::new(w as f32, h as f32)
    }
}

impl std::fmt::Debug for PlanImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        f.debug_struct("PlanImage")
            .field("source_label", &self.source_label)
            .field("size", &(w, h))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_size_matches_dimensions() {
        let plan = PlanImage::from_image(DynamicImage::new_rgb8(640, 480), "test").expect("Bild");
        assert_eq!(plan.natural_size(), Vec2::new(640.0, 480.0));
        assert_eq!(plan.source_label(), "test");
    }

    #[test]
    fn test_empty_image_is_rejected() {
        assert!(PlanImage::from_image(DynamicImage::new_rgb8(0, 0), "leer").is_err());
    }

    #[test]
    fn test_garbage_bytes_fail_with_context() {
        let err = PlanImage::load_from_bytes(vec![1, 2, 3, 4], "kaputt.png")
            .expect_err("kein Bild");
        assert!(format!("{:#}", err).contains("kaputt.png"));
    }
}
