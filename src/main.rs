//! shape-morph - Shape Area Calculator
//!
//! Pick a shape from the carousel, fill in its dimensions and compute its
//! area. The preview above the form is a field of particles that morphs
//! between shape outlines whenever the selection changes.
//!
//! ## Screen layout
//! - Top: shape carousel (tap or swipe, snaps to the nearest shape)
//! - Middle: particle field preview
//! - Bottom: formula, input fields and result

use eframe::egui;

mod formulas;
mod morph;
mod render;
mod settings;
mod shapes;

use formulas::{evaluate, format_area, formula, CalcError};
use morph::MorphDriver;
use render::{Carousel, ParticleField};
use settings::AppSettings;
use shapes::ShapeKind;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting shape-morph");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_title("Shape Area Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "shape-morph",
        options,
        Box::new(|cc| Ok(Box::new(ShapeMorphApp::new(cc)))),
    )
}

/// Main application state
struct ShapeMorphApp {
    driver: MorphDriver,
    field: ParticleField,
    carousel: Carousel,

    // Calculator
    selected: ShapeKind,
    inputs: Vec<String>,
    result: Option<Result<f64, CalcError>>,
}

impl ShapeMorphApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();
        let now = cc.egui_ctx.input(|i| i.time);
        let selected = ShapeKind::ALL[0];

        let driver = MorphDriver::new(settings.timing(), now).with_standard_intro(selected);

        Self {
            driver,
            field: ParticleField::with_settings(settings.field()),
            carousel: Carousel::new(selected),
            selected,
            inputs: vec![String::new(); formula(selected).input_labels.len()],
            result: None,
        }
    }

    /// Switch the calculator and the preview to `kind`
    fn select_shape(&mut self, kind: ShapeKind, now: f64) {
        log::debug!("Selected {:?}", kind);
        self.selected = kind;
        self.inputs = vec![String::new(); formula(kind).input_labels.len()];
        self.result = None;
        self.driver.select_shape(kind, now);
    }

    fn compute(&mut self) {
        let result = evaluate(self.selected, self.inputs.as_slice());
        if let Ok(area) = result {
            log::debug!("{:?} area = {}", self.selected, area);
        }
        self.result = Some(result);
    }

    fn result_text(&self) -> Option<String> {
        self.result.as_ref().map(|result| match result {
            Ok(area) => format!("Area = {}", format_area(*area)),
            Err(e) => e.to_string(),
        })
    }
}

impl eframe::App for ShapeMorphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Shape carousel
        egui::TopBottomPanel::top("carousel_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading("Shape Area Calculator");
            });
            ui.add_space(4.0);
            if let Some(kind) = self.carousel.show(ui, self.selected) {
                self.select_shape(kind, now);
            }
            ui.add_space(6.0);
        });

        // Input form
        egui::TopBottomPanel::bottom("form_panel").show(ctx, |ui| {
            let shape = formula(self.selected);
            ui.add_space(6.0);
            ui.heading(shape.display_name);
            ui.label(shape.expression);
            ui.separator();

            egui::Grid::new("inputs").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                for (label, value) in shape.input_labels.iter().zip(self.inputs.iter_mut()) {
                    ui.label(*label);
                    ui.add(egui::TextEdit::singleline(value).hint_text("0"));
                    ui.end_row();
                }
            });

            ui.add_space(6.0);
            if ui.button("Compute").clicked() {
                self.compute();
            }
            if let Some(text) = self.result_text() {
                ui.label(egui::RichText::new(text).size(18.0).strong());
            }
            ui.add_space(6.0);
        });

        // Particle preview
        let state = self.driver.advance_frame(now);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.field.show(ui, &self.driver, None);
        });

        if self.field.frame_changed(&state) {
            ctx.request_repaint();
        }
    }
}
