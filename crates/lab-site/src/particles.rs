//! Animated background particles for the hero section.

use uuid::Uuid;

/// Particles drawn on first paint.
pub const INITIAL_PARTICLES: usize = 20;

/// One floating dot. Rendered as absolutely positioned CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Diameter, 2–6 px.
    pub size_px: f32,
    /// Horizontal position, 0–100 %.
    pub left_pct: f32,
    /// Vertical position, 0–100 %.
    pub top_pct: f32,
    /// Float animation length, 4–8 s.
    pub duration_s: f32,
    /// Animation start delay, 0–2 s.
    pub delay_s: f32,
}

impl Particle {
    /// Derive a particle from 16 random bytes.
    ///
    /// Bytes 6 and 8 carry the UUID version/variant bits and are skipped.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let unit = |hi: u8, lo: u8| f32::from(u16::from_be_bytes([hi, lo])) / 65_536.0;
        Self {
            size_px: 2.0 + 4.0 * unit(bytes[0], bytes[1]),
            left_pct: 100.0 * unit(bytes[2], bytes[3]),
            top_pct: 100.0 * unit(bytes[4], bytes[5]),
            duration_s: 4.0 + 4.0 * unit(bytes[9], bytes[10]),
            delay_s: 2.0 * unit(bytes[11], bytes[12]),
        }
    }

    /// A particle seeded from a fresh v4 UUID.
    ///
    /// The 122 random bits of a v4 UUID come from the OS random source.
    #[must_use]
    pub fn random() -> Self {
        Self::from_bytes(Uuid::new_v4().as_bytes())
    }

    /// Inline style for the particle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width:{size:.1}px;height:{size:.1}px;left:{:.1}%;top:{:.1}%;animation-duration:{:.2}s;animation-delay:{:.2}s",
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn generate(count: usize) -> Self {
        Self { particles: (0..count).map(|_| Particle::random()).collect() }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
