//! Reine Geometrie-Funktionen für die Routen-Darstellung.
//!
//! Konsumiert nur die fertig aufgelöste Positionsfolge aus `core` und hat
//! keine Meinung zu Material, Farbe oder Styling — das bleibt Sache des
//! Rendering-Collaborators. Zwei Konsum-Modi:
//! - Kurven-Modus: glatte Catmull-Rom-Kurve durch alle Routen-Positionen
//! - Segment-Modus: gerichtete Einzelsegmente für Per-Segment-Effekte

use glam::Vec3;

/// Standard-Abtastung der Routen-Kurve (Zwischenpunkte pro Segment).
pub const DEFAULT_CURVE_SAMPLES: usize = 50;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Berechnet eine dichte Punktliste entlang einer Catmull-Rom-Kurve durch `points`.
///
/// Für Rand-Segmente werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch die erste und letzte Routen-Position läuft.
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn catmull_rom_route(points: &[Vec3], samples_per_segment: usize) -> Vec<Vec3> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }
    if points.len() == 2 {
        // Gerade Linie — keine Kurve nötig
        let mut result = Vec::with_capacity(samples_per_segment + 1);
        for i in 0..=samples_per_segment {
            let t = i as f32 / samples_per_segment as f32;
            result.push(points[0].lerp(points[1], t));
        }
        return result;
    }

    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        // Phantom-Punkte an den Rändern der Route
        let p0 = if seg == 0 {
            2.0 * points[0] - points[1]
        } else {
            points[seg - 1]
        };
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = if seg + 2 < n {
            points[seg + 2]
        } else {
            2.0 * points[n - 1] - points[n - 2]
        };

        let steps = if seg == n - 2 {
            samples_per_segment + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples_per_segment
        };

        for i in 0..steps {
            let t = i as f32 / samples_per_segment as f32;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    result
}

/// Zerlegt die Route in gerichtete Einzelsegmente (Start, Ziel).
///
/// Für Konsumenten, die jedes Segment eigenständig animieren.
pub fn route_segments(points: &[Vec3]) -> Vec<(Vec3, Vec3)> {
    points.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}
