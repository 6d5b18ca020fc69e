use eframe::egui;

use crate::domain::ClassifiedAlert;
use crate::engine::DashboardEngine;
use crate::ui::chart_view::ChartView;
use crate::ui::utils::{colored_subsection_heading, market_color, section_heading, setup_custom_visuals};
use crate::ui::alerts_panel;

pub struct CotScopeApp {
    engine: DashboardEngine,
    chart_view: ChartView,
}

impl CotScopeApp {
    pub fn new(cc: &eframe::CreationContext, engine: DashboardEngine) -> Self {
        // One-time visual registration; recomputes never touch this.
        setup_custom_visuals(&cc.egui_ctx);

        Self {
            engine,
            chart_view: ChartView,
        }
    }

    fn show_market_selection(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Markets");

        let groups = self.engine.markets_by_asset_class();
        let mut market_index = 0usize;
        for (asset_class, members) in groups {
            ui.label(colored_subsection_heading(asset_class));
            for market in members {
                let mut selected = self.engine.is_selected(&market.name);
                let label = egui::RichText::new(&market.name).color(market_color(market_index));
                if ui.checkbox(&mut selected, label).changed() {
                    self.engine.toggle_market(&market.name);
                }
                let error = self.engine.fetch_error(&market.name).map(str::to_string);
                if let Some(error) = error {
                    ui.label(egui::RichText::new(&error).small().color(egui::Color32::RED));
                    if ui.small_button("Retry").clicked() {
                        self.engine.retry_market(&market.name);
                    }
                }
                market_index += 1;
            }
            ui.add_space(6.0);
        }
    }
}

impl eframe::App for CotScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let busy = self.engine.update();
        if busy {
            ctx.request_repaint();
        }

        if let Some(status) = self.engine.status_msg() {
            egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
                ui.label(status);
            });
        }

        egui::SidePanel::left("market_panel")
            .resizable(true)
            .show(ctx, |ui| {
                self.show_market_selection(ui);
            });

        egui::SidePanel::right("alerts_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                let universes = self.engine.filter_universes();
                let visible: Vec<ClassifiedAlert> = self
                    .engine
                    .visible_alerts()
                    .into_iter()
                    .cloned()
                    .collect();
                alerts_panel::show(ui, &mut self.engine.filters, &universes, &visible);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (records, axes) = self.engine.chart_model();
            let selected: Vec<String> = self.engine.selected_markets().to_vec();
            let catalog = &self.engine.catalog;
            self.chart_view.show(ui, &records, &axes, &selected, |name| {
                catalog.iter().position(|m| m.name == name).unwrap_or(0)
            });
        });
    }
}
