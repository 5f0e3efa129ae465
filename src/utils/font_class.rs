use crate::constants::{FONT_CLASS_BASE, FONT_CLASS_STEPS, MAX_FONT_CLASS, MIN_FONT_CLASS};
use crate::types::{FontClass, WordFrequency};

/// Maps a word's count to one of the 38 discrete font classes (11 through 48).
///
/// The ratio `count / max_count` is split into 37 equal steps; the class is
/// `10 + floor(count * 37 / max_count) + 1`. Integer arithmetic keeps the bucket boundaries
/// identical on every platform.
///
/// The result never decreases as `count` grows, and `count == max_count` always maps to 48.
/// A zero `max_count` maps to the smallest class.
pub fn font_class(count: WordFrequency, max_count: WordFrequency) -> FontClass {
    if max_count == 0 {
        return MIN_FONT_CLASS;
    }

    let steps = (count as u64 * FONT_CLASS_STEPS) / max_count as u64 + 1;
    let class = (FONT_CLASS_BASE as u64 + steps).clamp(MIN_FONT_CLASS as u64, MAX_FONT_CLASS as u64);

    class as FontClass
}

/// Stylesheet class name for a font class, e.g. `f48`.
pub fn css_class(font_class: FontClass) -> String {
    format!("f{}", font_class)
}
