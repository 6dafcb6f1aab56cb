//! Reine Geometrie-Funktionen für Kantenlängen.
//!
//! Alle Funktionen sind total und deterministisch: gleiche Eingaben liefern
//! bitgleiche Ergebnisse (feste Auswertungsreihenfolge, kein FMA).
//! `scale` rechnet Pixel in reale Einheiten um; die Wegfindung nutzt immer 1.0.

use glam::DVec2;

/// Anzahl der Abtastschritte für die Bogenlängen-Näherung einer Kurve.
pub const CURVE_LENGTH_STEPS: usize = 20;

/// Euklidische Distanz zwischen zwei Punkten, multipliziert mit `scale`.
pub fn distance(a: DVec2, b: DVec2, scale: f64) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt() * scale
}

/// Punkt auf der quadratischen Bézier-Kurve p0 → p2 mit Kontrollpunkt (t ∈ [0, 1]).
pub fn quadratic_bezier_point(p0: DVec2, control: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    let w0 = u * u;
    let w1 = 2.0 * u * t;
    let w2 = t * t;
    DVec2::new(
        w0 * p0.x + w1 * control.x + w2 * p2.x,
        w0 * p0.y + w1 * control.y + w2 * p2.y,
    )
}

/// Approximierte Bogenlänge der quadratischen Bézier-Kurve, multipliziert mit `scale`.
///
/// Die Kurve wird in [`CURVE_LENGTH_STEPS`] gleichen t-Schritten abgetastet,
/// die Längen der Sehnen werden aufsummiert.
pub fn curve_length(p0: DVec2, control: DVec2, p2: DVec2, scale: f64) -> f64 {
    let mut length = 0.0;
    let mut prev = p0;
    for i in 1..=CURVE_LENGTH_STEPS {
        let t = i as f64 / CURVE_LENGTH_STEPS as f64;
        let point = quadratic_bezier_point(p0, control, p2, t);
        length += distance(prev, point, 1.0);
        prev = point;
    }
    length * scale
}

/// Tastet die Kurve in `steps` Schritten ab (inklusive Start- und Endpunkt).
///
/// Für Editoren, die Kurven als Polyline zeichnen.
pub fn sample_quadratic_bezier(p0: DVec2, control: DVec2, p2: DVec2, steps: usize) -> Vec<DVec2> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| quadratic_bezier_point(p0, control, p2, i as f64 / steps as f64))
        .collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1], 1.0)).sum()
}

/// Mittelpunkt zweier Punkte.
///
/// Standard-Kontrollpunkt, wenn beim Anlegen einer gekrümmten Kante keiner gezogen wurde.
pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    DVec2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
