use crate::constants::{DELAY_PROPERTY, ENTRANCE_BASE_MS, ENTRANCE_STEP_MS, LOADED_CLASS};
use crate::region::{Scheduler, UiRegion};

/// Reveal delay for the card at `index`, in ms.
#[inline]
pub fn delay_ms(index: usize) -> u32 {
    ENTRANCE_STEP_MS.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Time after startup at which the card at `index` is marked loaded.
/// The base offset lets the initial (unloaded) styles paint first.
#[inline]
pub fn reveal_after_ms(index: usize) -> u32 {
    ENTRANCE_BASE_MS.saturating_add(delay_ms(index))
}

/// Assign each card its `--delay` and schedule its `loaded` marker.
/// Returns the number of cards staggered.
pub fn stagger<R, S>(cards: &[R], scheduler: &S) -> usize
where
    R: UiRegion + Clone + 'static,
    S: Scheduler + ?Sized,
{
    for (i, card) in cards.iter().enumerate() {
        card.set_style(DELAY_PROPERTY, &format!("{}ms", delay_ms(i)));
        let card = card.clone();
        scheduler.schedule(
            reveal_after_ms(i),
            Box::new(move || card.add_class(LOADED_CLASS)),
        );
    }
    log::debug!("[entrance] staggered {} cards", cards.len());
    cards.len()
}
