//! Alerts list plus the three filter dimensions as checkbox groups.

use eframe::egui::{CollapsingHeader, RichText, ScrollArea, Ui};

use crate::analysis::{AlertFilters, FilterState, FilterUniverses};
use crate::domain::ClassifiedAlert;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::section_heading;

pub fn show(
    ui: &mut Ui,
    filters: &mut AlertFilters,
    universes: &FilterUniverses,
    visible: &[ClassifiedAlert],
) {
    section_heading(ui, "Market Alerts");

    filter_group(ui, "Asset class", &mut filters.asset_class, &universes.asset_classes);
    filter_group(ui, "Market", &mut filters.market, &universes.markets);
    filter_group(ui, "Alert type", &mut filters.alert_type, &universes.alert_types);

    ui.add_space(8.0);
    ui.separator();

    if visible.is_empty() {
        ui.label("No alerts for current selection.");
        return;
    }

    ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
        for alert in visible {
            let market = alert.resolved_market.as_deref().unwrap_or("—");
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(market).strong());
                ui.label(
                    RichText::new(date_part(&alert.alert.timestamp))
                        .color(UI_CONFIG.colors.alert_timestamp)
                        .small(),
                );
            });
            ui.label(&alert.alert.message);
            ui.add_space(6.0);
        }
    });
}

/// One checkbox per universe value. All-checked collapses back to the
/// `Unrestricted` sentinel; the distinction matters once the universe grows.
fn filter_group(ui: &mut Ui, title: &str, state: &mut FilterState, universe: &[String]) {
    if universe.is_empty() {
        return;
    }

    CollapsingHeader::new(title).show(ui, |ui| {
        for value in universe {
            let mut checked = match state {
                FilterState::Unrestricted => true,
                FilterState::Only(values) => values.contains(value),
            };

            if ui.checkbox(&mut checked, value).changed() {
                toggle(state, value, universe, checked);
            }
        }
    });
}

fn toggle(state: &mut FilterState, value: &str, universe: &[String], now_checked: bool) {
    let mut selected: std::collections::BTreeSet<String> = match state {
        FilterState::Unrestricted => universe.iter().cloned().collect(),
        FilterState::Only(values) => values.clone(),
    };

    if now_checked {
        selected.insert(value.to_string());
    } else {
        selected.remove(value);
    }

    // Never hold the full universe (or nothing) explicitly.
    *state = if selected.len() == universe.len() || selected.is_empty() {
        FilterState::Unrestricted
    } else {
        FilterState::Only(selected)
    };
}

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
