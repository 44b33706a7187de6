use dioxus::prelude::*;
use shared_types::{StatusBadge, StatusTone};
use shared_ui::{Badge, BadgeTone};

fn badge_tone(tone: StatusTone) -> BadgeTone {
    match tone {
        StatusTone::Green => BadgeTone::Green,
        StatusTone::Yellow => BadgeTone::Yellow,
        StatusTone::Gray => BadgeTone::Gray,
        StatusTone::Blue => BadgeTone::Blue,
    }
}

/// Case status pill.
#[component]
pub fn CaseStatusBadge(badge: StatusBadge) -> Element {
    rsx! {
        Badge { tone: badge_tone(badge.tone), "{badge.label}" }
    }
}
