use contracts::domain::a001_inventory::aggregate::StockLevel;
use leptos::prelude::*;
use thaw::*;

/// Quantity with a colour for its stock level
#[component]
pub fn StockBadge(quantity: i32, level: StockLevel) -> impl IntoView {
    let (color, hint) = match level {
        StockLevel::Healthy => (BadgeColor::Success, "Disponible"),
        StockLevel::Low => (BadgeColor::Warning, "Stock bajo"),
        StockLevel::Empty => (BadgeColor::Danger, "Agotado"),
    };

    view! {
        <span title=hint>
            <Badge appearance=BadgeAppearance::Tint color=color>
                {quantity.to_string()}
            </Badge>
        </span>
    }
}
