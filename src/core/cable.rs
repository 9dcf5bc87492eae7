//! Kabellängen-Schätzung zwischen zwei verbundenen Geräten.

use super::calibration::{ScaleCalibration, Uncalibrated};
use super::device::Device;
use super::geometry::manhattan_distance;
use super::heights::HeightSettings;

/// Aufschlüsselung einer geschätzten Kabellänge (Fuß).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableEstimate {
    /// Horizontale Strecke (Manhattan-Distanz, umgerechnet)
    pub horizontal_feet: f32,
    /// Höhenunterschied der Montagehöhen
    pub vertical_feet: f32,
    /// Anzahl Richtungswechsel (0..=2)
    pub bends: u8,
    /// Zuschlag für Richtungswechsel
    pub slack_feet: f32,
}

impl CableEstimate {
    /// Gesamtlänge in Fuß.
    pub fn total_feet(&self) -> f32 {
        self.horizontal_feet + self.vertical_feet + self.slack_feet
    }
}

/// Schätzt die Kabellänge aus Pixel-Strecke und Höhen.
///
/// Die horizontale Strecke läuft entlang orthogonaler Bauteile (Manhattan),
/// je ein Bogen für horizontalen und vertikalen Anteil ungleich 0.
pub fn estimate_run(
    planar_pixels: f32,
    height_a_feet: f32,
    height_b_feet: f32,
    calibration: &ScaleCalibration,
    bend_slack_per_bend: f32,
) -> Result<CableEstimate, Uncalibrated> {
    let horizontal_feet = calibration.pixels_to_feet(planar_pixels)?;
    let vertical_feet = (height_a_feet - height_b_feet).abs();
    let bends = u8::from(planar_pixels > 0.0) + u8::from(vertical_feet > 0.0);
    Ok(CableEstimate {
        horizontal_feet,
        vertical_feet,
        bends,
        slack_feet: f32::from(bends) * bend_slack_per_bend,
    })
}

/// Schätzt die Kabellänge zwischen zwei Geräten.
pub fn estimate_between(
    a: &Device,
    b: &Device,
    calibration: &ScaleCalibration,
    heights: &HeightSettings,
) -> Result<CableEstimate, Uncalibrated> {
    estimate_run(
        manhattan_distance(a.position, b.position),
        a.mounting_height.resolve(heights),
        b.mounting_height.resolve(heights),
        calibration,
        heights.bend_slack_per_bend,
    )
}
