//! RegSweep application icon generator.
//!
//! Produces a procedural icon: an amber folder with a small spreadsheet
//! sheet in front of it (the register the sweep leaves behind). Rendered at
//! an arbitrary resolution as RGBA pixel data for the window icon.

/// Generate a RegSweep icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Folder body, with the tab sitting on its upper-left edge.
    let body = Rect::new(s * 0.06, s * 0.24, s * 0.94, s * 0.84);
    let tab = Rect::new(s * 0.06, s * 0.14, s * 0.44, s * 0.30);
    let folder_radius = s * 0.06;

    // Sheet overlapping the lower-right of the folder.
    let sheet = Rect::new(s * 0.46, s * 0.44, s * 0.92, s * 0.94);
    let sheet_radius = s * 0.035;
    let rows = 4;
    let cols = 3;
    let line_half = (s * 0.012).max(0.5);

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Folder tab, drawn slightly darker than the body. ──
            let tab_aa = smooth_edge(tab.rounded_dist(px, py, folder_radius), 0.0);
            if tab_aa > 0.0 {
                cr = lerp_c(cr, 0xe0, tab_aa);
                cg = lerp_c(cg, 0xb0, tab_aa);
                cb = lerp_c(cb, 0x58, tab_aa);
                ca = ca + (1.0 - ca) * tab_aa;
            }

            // 2. Folder body with a vertical gradient. ───────────
            let body_aa = smooth_edge(body.rounded_dist(px, py, folder_radius), 0.0);
            if body_aa > 0.0 {
                let t = ((py - body.top) / body.height()).clamp(0.0, 1.0);
                let br = lerp_c(0xf9, 0xe0, t);
                let bg = lerp_c(0xe2, 0xb8, t);
                let bb = lerp_c(0xaf, 0x70, t);
                cr = lerp_c(cr, br, body_aa);
                cg = lerp_c(cg, bg, body_aa);
                cb = lerp_c(cb, bb, body_aa);
                ca = ca + (1.0 - ca) * body_aa;
            }

            // 3. Sheet: white card with a green grid. ────────────
            let sheet_dist = sheet.rounded_dist(px, py, sheet_radius);
            // Dark outline one pixel wider than the card.
            let outline_aa = smooth_edge(sheet_dist, s * 0.02);
            if outline_aa > 0.0 {
                cr = lerp_c(cr, 0x3a, outline_aa);
                cg = lerp_c(cg, 0x3f, outline_aa);
                cb = lerp_c(cb, 0x4b, outline_aa);
                ca = ca + (1.0 - ca) * outline_aa;
            }
            let sheet_aa = smooth_edge(sheet_dist, 0.0);
            if sheet_aa > 0.0 {
                let mut sr = 0xf4;
                let mut sg = 0xf6;
                let mut sb = 0xf8;

                let gx = grid_factor(px, sheet.left, sheet.width(), cols, line_half);
                let gy = grid_factor(py, sheet.top, sheet.height(), rows, line_half);
                let grid = gx.max(gy);
                sr = lerp_c(sr, 0x2e, grid);
                sg = lerp_c(sg, 0x9e, grid);
                sb = lerp_c(sb, 0x5b, grid);

                // Header row band.
                let header_bottom = sheet.top + sheet.height() / rows as f32;
                if py < header_bottom {
                    sr = lerp_c(sr, 0x2e, 0.55);
                    sg = lerp_c(sg, 0x9e, 0.55);
                    sb = lerp_c(sb, 0x5b, 0.55);
                }

                cr = lerp_c(cr, sr, sheet_aa);
                cg = lerp_c(cg, sg, sheet_aa);
                cb = lerp_c(cb, sb, sheet_aa);
                ca = ca + (1.0 - ca) * sheet_aa;
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Rect {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Rect {
    fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    fn width(&self) -> f32 {
        self.right - self.left
    }

    fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Signed distance from a point to the rounded rectangle
    /// (negative inside).
    fn rounded_dist(&self, px: f32, py: f32, radius: f32) -> f32 {
        let cx = (self.left + self.right) * 0.5;
        let cy = (self.top + self.bottom) * 0.5;
        let hw = self.width() * 0.5 - radius;
        let hh = self.height() * 0.5 - radius;
        let qx = (px - cx).abs() - hw;
        let qy = (py - cy).abs() - hh;
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        outside + inside - radius
    }
}

/// Coverage of the nearest interior grid line along one axis.
fn grid_factor(pos: f32, start: f32, extent: f32, cells: u32, half_width: f32) -> f32 {
    let step = extent / cells as f32;
    let mut factor = 0.0f32;
    for i in 1..cells {
        let line = start + step * i as f32;
        factor = factor.max(smooth_edge((pos - line).abs(), half_width));
    }
    factor
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
