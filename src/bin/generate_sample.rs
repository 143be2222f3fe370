use image::{Rgba, RgbaImage};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// SplitMix64: one word of state, enough for reproducible pixel noise.
struct NoiseSource(u64);

impl NoiseSource {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `-spread..=spread`.
    fn jitter(&mut self, spread: u32) -> i32 {
        (self.next() % (2 * spread as u64 + 1)) as i32 - spread as i32
    }
}

fn add_noise(v: f64, rng: &mut NoiseSource) -> u8 {
    (v as i32 + rng.jitter(6)).clamp(0, 255) as u8
}

/// Horizontal red ramp, vertical green ramp, a blue disc, and a band of
/// pure black / pure white along the bottom to show clamping.
fn main() -> anyhow::Result<()> {
    let mut rng = NoiseSource(42);
    let (cx, cy, radius) = (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0, HEIGHT as f64 / 4.0);

    let img = RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        if y >= HEIGHT - 40 {
            let v = if x < WIDTH / 2 { 0 } else { 255 };
            return Rgba([v, v, v, 255]);
        }
        let r = 255.0 * x as f64 / (WIDTH - 1) as f64;
        let g = 255.0 * y as f64 / (HEIGHT - 1) as f64;
        let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
        let b = if d < radius { 230.0 } else { 40.0 };
        Rgba([
            add_noise(r, &mut rng),
            add_noise(g, &mut rng),
            add_noise(b, &mut rng),
            255,
        ])
    });

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_image.png".to_string());
    img.save(&output_path)?;

    println!("Wrote {WIDTH}x{HEIGHT} sample image to {output_path}");
    Ok(())
}
