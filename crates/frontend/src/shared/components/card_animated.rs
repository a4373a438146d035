//! CardAnimated: thaw `Card` that fades in with a staggered delay.
//!
//! The `card-appear` keyframes live in `styles/main.css`.

use leptos::prelude::*;
use thaw::Card;

/// Per-card delay step for a grid, capped so long catalogs do not lag.
pub fn stagger_delay(index: usize) -> u32 {
    const STEP_MS: u32 = 40;
    const MAX_MS: u32 = 400;
    (index as u32).saturating_mul(STEP_MS).min(MAX_MS)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 120);
        assert_eq!(stagger_delay(50), 400);
    }
}
