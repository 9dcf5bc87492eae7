//! Maßstabs-Kalibrierung: Distanz-Eingaben parsen, Pixel pro Fuß, Fuß/Zoll-Formatierung.

use glam::Vec2;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Meter pro Fuß.
pub const METERS_PER_FOOT: f32 = 0.3048;
/// Zoll pro Fuß.
pub const INCHES_PER_FOOT: f32 = 12.0;

static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)\s*(mm|cm|m)?$").expect("gültiges Regex")
});
static FEET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*(?:feet|foot|ft|')").expect("gültiges Regex")
});
static INCH_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*(?:inches|inch|in|''|")$"#).expect("gültiges Regex"));
static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d+)?)(?:\s*-\s*|\s+))?(\d+)/(\d+)$").expect("gültiges Regex")
});
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)$").expect("gültiges Regex"));

/// Fehler beim Parsen einer Distanz-Eingabe.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceParseError {
    /// Leere Eingabe
    #[error("Please enter a distance")]
    Empty,
    /// Eingabe nicht als Distanz erkennbar
    #[error("Could not understand distance \"{0}\"")]
    Unrecognized(String),
    /// Bruch mit Nenner 0
    #[error("Invalid fraction in \"{0}\"")]
    ZeroDenominator(String),
}

/// Fehler beim Abschließen einer Kalibrierung.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    /// Eingabe nicht parsebar
    #[error(transparent)]
    Parse(#[from] DistanceParseError),
    /// Eingegebene Distanz ist 0
    #[error("Distance must be greater than zero")]
    ZeroDistance,
    /// Die beiden Kalibrierpunkte liegen aufeinander
    #[error("Calibration points must not coincide")]
    ZeroPixelDistance,
}

/// Längenabhängige Berechnung ohne gesetzten Maßstab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No scale set: calibrate the floor plan first")]
pub struct Uncalibrated;

/// Parst eine Distanz-Eingabe und liefert Fuß.
///
/// Akzeptiert reine Zahlen (Meter), `m`, `cm`, `mm`, Fuß (`'`, `ft`, `feet`),
/// Zoll (`"`, `in`, `inches`), gemischt (`6' 4"`) und Zoll-Brüche
/// (`6 1/2"`, `6-1/2"`, `1/2"`).
pub fn parse_distance_feet(input: &str) -> Result<f32, DistanceParseError> {
    // Überlange Ziffernfolgen ergeben f32::INFINITY
    match parse_feet(input)? {
        feet if feet.is_finite() => Ok(feet),
        _ => Err(DistanceParseError::Unrecognized(input.to_string())),
    }
}

fn parse_feet(input: &str) -> Result<f32, DistanceParseError> {
    let clean = input.trim().to_lowercase();
    if clean.is_empty() {
        return Err(DistanceParseError::Empty);
    }

    if let Some(caps) = METRIC_RE.captures(&clean) {
        let value: f32 = caps[1]
            .parse()
            .map_err(|_| DistanceParseError::Unrecognized(input.to_string()))?;
        let meters = match caps.get(2).map(|m| m.as_str()) {
            Some("cm") => value / 100.0,
            Some("mm") => value / 1000.0,
            _ => value,
        };
        return Ok(meters / METERS_PER_FOOT);
    }

    let mut feet = 0.0;
    let mut rest = clean.as_str();
    let has_feet = if let Some(caps) = FEET_RE.captures(rest) {
        feet = caps[1]
            .parse::<f32>()
            .map_err(|_| DistanceParseError::Unrecognized(input.to_string()))?;
        rest = &rest[caps[0].len()..];
        true
    } else {
        false
    };

    let rest = rest.trim().trim_start_matches('-').trim();
    let rest = INCH_MARK_RE.replace(rest, "");
    let rest = rest.trim();

    if rest.is_empty() {
        return if has_feet {
            Ok(feet)
        } else {
            Err(DistanceParseError::Unrecognized(input.to_string()))
        };
    }

    let inches = parse_inches(rest).ok_or_else(|| {
        if rest.ends_with("/0") {
            DistanceParseError::ZeroDenominator(input.to_string())
        } else {
            DistanceParseError::Unrecognized(input.to_string())
        }
    })?;

    Ok(feet + inches / INCHES_PER_FOOT)
}

fn parse_inches(text: &str) -> Option<f32> {
    if let Some(caps) = FRACTION_RE.captures(text) {
        let whole: f32 = caps.get(1).map_or(Some(0.0), |m| m.as_str().parse().ok())?;
        let numerator: f32 = caps[2].parse().ok()?;
        let denominator: f32 = caps[3].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(whole + numerator / denominator);
    }
    if DECIMAL_RE.is_match(text) {
        return text.parse().ok();
    }
    None
}

/// Berechnet Pixel pro Fuß aus zwei Punkten und einer Distanz-Eingabe.
pub fn pixels_per_foot(a: Vec2, b: Vec2, input: &str) -> Result<f32, CalibrationError> {
    let feet = parse_distance_feet(input)?;
    if feet <= 0.0 {
        return Err(CalibrationError::ZeroDistance);
    }
    let pixels = a.distance(b);
    if pixels <= f32::EPSILON {
        return Err(CalibrationError::ZeroPixelDistance);
    }
    Ok(pixels / feet)
}

/// Gespeicherter Maßstab; `None` = nicht kalibriert.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleCalibration {
    /// Bildpixel pro Fuß
    pub pixels_per_foot: Option<f32>,
}

impl ScaleCalibration {
    /// Kalibrierung mit festem Faktor.
    pub fn with_pixels_per_foot(pixels_per_foot: f32) -> Self {
        Self {
            pixels_per_foot: Some(pixels_per_foot),
        }
    }

    /// Ob ein Maßstab gesetzt ist.
    pub fn is_calibrated(&self) -> bool {
        self.pixels_per_foot.is_some()
    }

    /// Rechnet Bildpixel in Fuß um.
    pub fn pixels_to_feet(&self, pixels: f32) -> Result<f32, Uncalibrated> {
        match self.pixels_per_foot {
            Some(ppf) if ppf > 0.0 => Ok(pixels / ppf),
            _ => Err(Uncalibrated),
        }
    }
}

/// Formatiert Fuß als Fuß/Zoll, gerundet auf 1/16 Zoll (z.B. `10' 3 1/2"`).
pub fn format_feet_inches(feet: f32) -> String {
    const PRECISION: i64 = 16;
    let total_sixteenths = (feet.max(0.0) * INCHES_PER_FOOT * PRECISION as f32).round() as i64;
    let per_foot = 12 * PRECISION;

    let whole_feet = total_sixteenths / per_foot;
    let remainder = total_sixteenths % per_foot;
    let inches = remainder / PRECISION;
    let mut numerator = remainder % PRECISION;
    let mut denominator = PRECISION;
    while numerator > 0 && numerator % 2 == 0 {
        numerator /= 2;
        denominator /= 2;
    }

    let fraction = if numerator > 0 {
        format!(" {}/{}", numerator, denominator)
    } else {
        String::new()
    };

    match (whole_feet, inches, fraction.is_empty()) {
        (0, 0, true) => "0\"".to_string(),
        (0, _, _) => format!("{}{}\"", inches, fraction),
        (_, 0, true) => format!("{}'", whole_feet),
        _ => format!("{}' {}{}\"", whole_feet, inches, fraction),
    }
}
