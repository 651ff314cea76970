use contracts::domain::a001_material::MaterialStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_material::api;
use crate::shared::components::stat_card::format_thousands;
use crate::shared::components::{StatCard, StatTone};

fn units_label(total_units: f64) -> String {
    if total_units.fract() == 0.0 {
        format_thousands(total_units as i64)
    } else {
        format!("{:.2}", total_units).replace('.', ",")
    }
}

/// Statistic cards for the material inventory.
///
/// `reload` is bumped by the list after every create, edit or delete.
#[component]
pub fn MaterialSummary(#[prop(into, optional)] reload: Signal<u32>) -> impl IntoView {
    let stats = RwSignal::new(Option::<MaterialStats>::None);
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(s) => {
                    stats.set(Some(s));
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("material stats unavailable: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let total = Signal::derive(move || stats.with(|s| s.as_ref().map(|s| format_thousands(s.total as i64))));
    let low_stock = Signal::derive(move || stats.with(|s| s.as_ref().map(|s| format_thousands(s.low_stock as i64))));
    let units = Signal::derive(move || stats.with(|s| s.as_ref().map(|s| units_label(s.total_units))));
    let low_tone = Signal::derive(move || match stats.with(|s| s.as_ref().map(|s| s.low_stock)) {
        Some(0) => StatTone::Good,
        Some(_) => StatTone::Warning,
        None => StatTone::Neutral,
    });

    view! {
        <div class="stat-cards">
            <StatCard label="Materiales" icon_name="box" value=total />
            <StatCard
                label="Stock bajo"
                icon_name="alert"
                value=low_stock
                tone=low_tone
                subtitle="En o bajo el mínimo"
            />
            <StatCard label="Unidades en stock" icon_name="package" value=units />
        </div>
        {move || error.get().map(|e| view! { <div class="stat-cards__error">{e}</div> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_label() {
        assert_eq!(units_label(1500.0), "1\u{00a0}500");
        assert_eq!(units_label(12.5), "12,50");
    }
}
