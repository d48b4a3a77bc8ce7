// File: crates/tidy-core/src/theme.rs
// Summary: Light/Dark theming and categorical line palettes for chart rendering.

use skia_safe as skia;

/// Number of distinct line colors before the palette wraps.
pub const PALETTE_LEN: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub legend_background: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    /// Color of the `i`-th series; wraps around the palette.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % PALETTE_LEN]
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(200, 28, 28, 32),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 140, 64),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 170, 120, 255),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 80, 220, 220),
                skia::Color::from_argb(255, 240, 120, 200),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            palette: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 230, 110, 20),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 120, 80, 200),
                skia::Color::from_argb(255, 170, 140, 0),
                skia::Color::from_argb(255, 0, 140, 150),
                skia::Color::from_argb(255, 200, 70, 150),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            legend_background: skia::Color::from_argb(200, 0x07, 0x36, 0x42),
            palette: solarized_accents(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            legend_background: skia::Color::from_argb(220, 0xee, 0xe8, 0xd5),
            palette: solarized_accents(),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_background: skia::Color::from_argb(255, 0x11, 0x11, 0x11),
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0xff, 0x80, 0x00),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
                skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
                skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            ],
        }
    }
}

// blue, orange, green, red, violet, yellow, cyan, magenta
fn solarized_accents() -> [skia::Color; PALETTE_LEN] {
    [
        skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
        skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),
        skia::Color::from_argb(255, 0x85, 0x99, 0x00),
        skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),
        skia::Color::from_argb(255, 0x6c, 0x71, 0xc4),
        skia::Color::from_argb(255, 0xb5, 0x89, 0x00),
        skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),
        skia::Color::from_argb(255, 0xd3, 0x36, 0x82),
    ]
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
