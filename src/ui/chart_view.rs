//! The combined positioning/price chart.
//!
//! Net-position bars are drawn in net-axis space; price lines are mapped
//! affinely into the same space and labelled by a second y axis on the
//! right. The axis plans come from `analysis::scale`, which already
//! reserved the vertical separation between the two bands.

use eframe::egui;
use egui_plot::{AxisHints, Bar, BarChart, Corner, GridMark, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::analysis::{AlignedRecord, AxisConfig, ChartAxes};
use crate::config::CHART;
use crate::domain::TraderClass;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{format_price, market_color};

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        records: &[AlignedRecord],
        axes: &ChartAxes,
        selected: &[String],
        catalog_index_of: impl Fn(&str) -> usize,
    ) {
        if records.is_empty() {
            ui.label("Loading chart...");
            return;
        }

        let net = axes.net;
        let price = axes.price;
        let dates: Vec<String> = records.iter().map(|r| r.date.clone()).collect();

        let x_axis = build_x_axis(dates.clone());
        let y_axes = vec![build_net_axis(net), build_price_axis(net, price)];

        let legend = Legend::default().position(Corner::LeftBottom);

        Plot::new("combined_chart")
            .legend(legend)
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(y_axes)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                if net.span() > 0.0 {
                    plot_ui.set_plot_bounds_y(net.min..=net.max);
                }
                plot_ui.set_plot_bounds_x(-1.0..=records.len() as f64);

                // Bars first, price lines on top (the original draw order)
                let bar_width = CHART.net_bar_width_days / 7.0;
                let bar_series = [
                    (TraderClass::LargeSpec, UI_CONFIG.colors.large_spec_bar, -0.5),
                    (TraderClass::Commercial, UI_CONFIG.colors.commercials_bar, 0.5),
                ];

                for (class, color, side) in bar_series {
                    let bars: Vec<Bar> = records
                        .iter()
                        .enumerate()
                        .map(|(i, r)| {
                            Bar::new(i as f64 + side * bar_width, r.sums.net(class))
                                .width(bar_width)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(class.to_string(), bars).color(color));
                }

                for market in selected {
                    // Only dates where this market priced; skipping nulls
                    // lets the line span gaps instead of dropping to zero.
                    let points: Vec<[f64; 2]> = records
                        .iter()
                        .enumerate()
                        .filter_map(|(i, r)| {
                            let p = r.prices_by_market.get(market).copied().flatten()?;
                            Some([i as f64, price_to_net_space(p, net, price)])
                        })
                        .collect();

                    if points.is_empty() {
                        continue;
                    }

                    plot_ui.line(
                        Line::new(format!("{} Price", market), PlotPoints::new(points))
                            .color(market_color(catalog_index_of(market)))
                            .width(1.5),
                    );
                }
            });
    }
}

/// Map a price value into net-axis plot space.
fn price_to_net_space(value: f64, net: AxisConfig, price: AxisConfig) -> f64 {
    if price.span() <= 0.0 || net.span() <= 0.0 {
        return net.min;
    }
    net.min + (value - price.min) / price.span() * net.span()
}

/// The inverse mapping, for labelling the right-hand axis.
fn net_space_to_price(y: f64, net: AxisConfig, price: AxisConfig) -> f64 {
    if net.span() <= 0.0 {
        return price.min;
    }
    price.min + (y - net.min) / net.span() * price.span()
}

fn build_x_axis(dates: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark: GridMark, _range| {
        let idx = grid_mark.value.round();
        if idx < 0.0 || (grid_mark.value - idx).abs() > 0.01 {
            return String::new();
        }
        dates.get(idx as usize).cloned().unwrap_or_default()
    })
}

fn build_net_axis(net: AxisConfig) -> AxisHints<'static> {
    AxisHints::new_y()
        .label("COT net")
        .placement(HPlacement::Left)
        .formatter(move |grid_mark: GridMark, _range| {
            // Ticks above the data band are headroom for the price lines;
            // leave them unlabelled like the original chart.
            if net.step > 0.0 && grid_mark.value > net.max - net.span() / 2.0 {
                return String::new();
            }
            format!("{:.0}", grid_mark.value)
        })
}

fn build_price_axis(net: AxisConfig, price: AxisConfig) -> AxisHints<'static> {
    AxisHints::new_y()
        .label("Price")
        .placement(HPlacement::Right)
        .formatter(move |grid_mark: GridMark, _range| {
            let p = net_space_to_price(grid_mark.value, net, price);
            if p < 0.0 {
                return String::new();
            }
            format_price(p)
        })
}
