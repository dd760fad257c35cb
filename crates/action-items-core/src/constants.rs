// Tuning constants for the decorative effects. Times are milliseconds,
// distances are CSS pixels.

// Sparkle trail
pub const SPARKLE_THROTTLE_MS: f64 = 20.0; // min gap between accepted pointer samples
pub const SPARKLE_LIFETIME_MS: f64 = 800.0;
pub const SPARKLE_SPREAD_PX: f32 = 30.0; // dx, dy drawn from [-spread, spread)
pub const SPARKLE_TRAIL_OFFSET: [f32; 2] = [6.0, -4.0]; // second sparkle, for trail thickness

// Heart burst
pub const HEART_LIFETIME_MS: f64 = 1200.0;
pub const HEART_COUNT: usize = 14;
pub const HEART_COUNT_REDUCED: usize = 6;
pub const HEART_DX_SPAN_PX: f32 = 120.0; // dx drawn from [-span, span)
pub const HEART_DY_MIN_PX: f32 = -234.0; // biased upward so the burst reads as rising
pub const HEART_DY_MAX_PX: f32 = 26.0;
pub const HEART_ROTATION_MAX_DEG: f32 = 360.0;
pub const HEART_DELAY_MAX_MS: f32 = 50.0;

// Scroll effects
pub const RIBBON_SHIFTS_PX: [f32; 2] = [-80.0, -140.0]; // translateY at full hero progress
pub const CARD_REVEAL_AMOUNT: f32 = 0.3; // fraction of a card that must be visible
