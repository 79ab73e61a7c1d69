/// Visual weight of `slot` given a continuous highlight position:
/// `1 - (|slot - highlight| / spread)^exponent`, clamped to `[0, 1]`.
///
/// Larger exponents keep near neighbours bright and drop off sharply at the
/// spread boundary.
pub fn slot_weight(slot: usize, highlight: f32, spread: f32, exponent: f32) -> f32 {
    if spread <= 0.0 {
        return if (slot as f32 - highlight).abs() < 0.5 { 1.0 } else { 0.0 };
    }
    let normalized = (slot as f32 - highlight).abs() / spread;
    (1.0 - normalized.powf(exponent)).clamp(0.0, 1.0)
}
