//! KYC verification badge

use leptos::prelude::*;
use shared::dto::{BadgeSize, KycStatus};

#[component]
pub fn KycBadge(
    status: KycStatus,
    #[prop(optional)] size: BadgeSize,
) -> impl IntoView {
    let class = format!("badge badge-{} badge-{}", status.tone(), size_class(size));

    view! {
        <span class=class title=status.label()>
            <span class="badge-icon">{status.icon()}</span>
            {status.badge_text(size)}
        </span>
    }
}

fn size_class(size: BadgeSize) -> &'static str {
    match size {
        BadgeSize::Sm => "sm",
        BadgeSize::Md => "md",
    }
}
