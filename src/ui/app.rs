use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Result;
use eframe::egui::{CentralPanel, Context, RichText, SidePanel};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};

use crate::Cli;
use crate::config::plot::PLOT_CONFIG;
use crate::data;
use crate::domain::Metric;
use crate::models::CoinDataset;
use crate::ui::chart_view::ChartView;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_panels;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;

pub(crate) enum AppState {
    /// Waiting on the dataset loader; gates the first render
    Loading,
    Ready {
        dataset: CoinDataset,
        chart: ChartView,
    },
    Failed(String),
}

impl Default for AppState {
    fn default() -> Self {
        Self::Loading
    }
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Persisted user intent (thin, serializable)
    pub(crate) selected_coin: String,
    pub(crate) selected_metric: Metric,

    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    data_rx: Option<Receiver<Result<CoinDataset>>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_coin: String::new(),
            selected_metric: Metric::default(),
            state: AppState::Loading,
            data_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.state = AppState::Loading;

        let (data_tx, data_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);
        data::spawn_dataset_loader(args.data, data_tx);

        app
    }

    fn poll_loader(&mut self) {
        let Some(rx) = &self.data_rx else { return };

        match rx.try_recv() {
            Ok(Ok(dataset)) => {
                self.data_rx = None;

                // Restore the persisted coin only if it is still in the file
                if !dataset.contains_coin(&self.selected_coin) {
                    match dataset.coin_names().next() {
                        Some(first) => self.selected_coin = first.to_string(),
                        None => {
                            self.state =
                                AppState::Failed("The dataset contains no coins".to_string());
                            return;
                        }
                    }
                }

                let series = dataset.metric_series(&self.selected_coin, self.selected_metric);
                self.state = AppState::Ready {
                    chart: ChartView::new(series),
                    dataset,
                };
            }
            Ok(Err(err)) => {
                self.data_rx = None;
                log::error!("Dataset load failed: {:#}", err);
                self.state = AppState::Failed(format!("{:#}", err));
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.data_rx = None;
                self.state = AppState::Failed("The dataset loader stopped unexpectedly".to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        if self.data_rx.is_some() {
            self.poll_loader();
        }

        match &mut self.state {
            AppState::Loading => {
                render_loading(ctx);
                // keep polling the loader channel while we wait
                ctx.request_repaint_after(Duration::from_millis(50));
            }
            AppState::Failed(message) => render_failed(ctx, message),
            AppState::Ready { dataset, chart } => {
                let mut changed = false;

                SidePanel::left("control_panel")
                    .frame(UI_CONFIG.side_panel_frame())
                    .default_width(220.0)
                    .resizable(false)
                    .show(ctx, |ui| {
                        changed = ui_panels::render_controls(
                            ui,
                            dataset,
                            &mut self.selected_coin,
                            &mut self.selected_metric,
                        );
                        ui_panels::render_summary(ui, dataset, chart.series());
                    });

                if changed {
                    let now = ctx.input(|i| i.time);
                    let series = dataset.metric_series(&self.selected_coin, self.selected_metric);
                    chart.retarget(series, now);
                }

                CentralPanel::default()
                    .frame(UI_CONFIG.central_panel_frame())
                    .show(ctx, |ui| chart.show(ui));
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn render_loading(ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading(
                RichText::new(UI_TEXT.loading_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(20.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label(
                RichText::new(UI_TEXT.loading_hint)
                    .italics()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
        });
    });
}

fn render_failed(ctx: &Context, message: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading(
                RichText::new(UI_TEXT.failed_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_loss),
            );
            ui.add_space(20.0);
            ui.label(RichText::new(message).color(PLOT_CONFIG.color_text_primary));
            ui.add_space(10.0);
            ui.label(RichText::new(UI_TEXT.failed_hint).color(PLOT_CONFIG.color_text_subdued));
        });
    });
}
