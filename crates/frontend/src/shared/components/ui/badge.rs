use leptos::prelude::*;

/// Small numeric bubble on a navbar icon. Hidden while the count is zero.
#[component]
pub fn CountBadge(
    #[prop(into)]
    count: Signal<usize>,
    /// Badge variant: "accent" (default) or "muted"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("accent") {
        "muted" => "badge badge--muted",
        _ => "badge badge--accent",
    };

    view! {
        <Show when=move || { count.get() > 0 }>
            <span class=variant_class>{move || badge_label(count.get())}</span>
        </Show>
    }
}

/// Counts above 99 collapse to "99+"
pub fn badge_label(count: usize) -> String {
    if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(1), "1");
        assert_eq!(badge_label(99), "99");
        assert_eq!(badge_label(100), "99+");
    }
}
