use std::path::PathBuf;

use clap::Parser as _;
use eframe::{egui, App, CreationContext, Frame};
use egui::{Align2, Color32, ProgressBar, RichText, ScrollArea, Ui};
use tracing_subscriber::EnvFilter;

use weekly_routine::models::{Category, Day};
use weekly_routine::progress::{day_progress, is_day_complete, week_progress};
use weekly_routine::schedule::today_id;
use weekly_routine::state::RoutineState;
use weekly_routine::storage::Storage;

#[derive(Debug, Clone, clap::Parser)]
struct Cli {
    /// File the schedule state is kept in between sessions.
    #[clap(long, default_value = "schedule.json")]
    data_file: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460 as f32, 820 as f32]),
        ..Default::default()
    };

    eframe::run_native(
        "Weekly Routine",
        options,
        Box::new(move |cc| Ok(Box::new(RoutineApp::new(cc, Storage::new(cli.data_file))))),
    )
}

/// A user interaction collected while the card list is being drawn and
/// applied to the state afterwards, one per frame at most.
enum Action {
    ToggleExercise { day_id: String, index: usize },
    ToggleExpand { day_id: String },
}

struct RoutineApp {
    state: RoutineState,
    confirm_reset: bool,
}

impl RoutineApp {
    fn new(cc: &CreationContext, storage: Storage) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        cc.egui_ctx.set_style(style);

        RoutineApp {
            state: RoutineState::load(storage),
            confirm_reset: false,
        }
    }
}

impl App for RoutineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut action: Option<Action> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                for day in self.state.schedule() {
                    self.show_day_card(ui, day, &mut action);
                    ui.add_space(6.0);
                }
            });
        });

        match action {
            Some(Action::ToggleExercise { day_id, index }) => {
                self.state.toggle_exercise(&day_id, index);
            }
            Some(Action::ToggleExpand { day_id }) => {
                self.state.toggle_day_expand(&day_id);
            }
            None => {}
        }

        if self.confirm_reset {
            self.show_reset_confirm(ctx);
        }
    }
}

impl RoutineApp {
    fn show_header(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Weekly Routine").heading().strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("⟲").size(20.0))
                    .on_hover_text("Reset Week")
                    .clicked()
                {
                    self.confirm_reset = true;
                }
            });
        });
        ui.label(RichText::new("Stay consistent, stay strong.").weak());
        ui.add_space(6.0);

        let week = week_progress(self.state.schedule());
        ui.add(
            ProgressBar::new(week as f32 / 100.0)
                .fill(Color32::from_rgb(99, 102, 241))
                .text(format!("{week}% Complete")),
        );
        ui.add_space(8.0);
    }

    fn show_day_card(&self, ui: &mut Ui, day: &Day, action: &mut Option<Action>) {
        let expanded = self.state.expanded() == Some(day.id.as_str());
        let progress = day_progress(day);
        let complete = is_day_complete(day);

        ui.group(|ui| {
            ui.set_width(ui.available_width());

            let title = RichText::new(format!("{}  {}", category_icon(day.category), day.label))
                .size(18.0)
                .strong()
                .color(category_color(day.category));
            let header = ui.selectable_label(expanded, title);
            if header.clicked() {
                *action = Some(Action::ToggleExpand {
                    day_id: day.id.clone(),
                });
            }

            ui.horizontal(|ui| {
                ui.label(RichText::new(&day.focus).weak());
                if day.id == today_id() {
                    ui.label(
                        RichText::new("Today")
                            .small()
                            .color(Color32::from_rgb(99, 102, 241))
                            .strong(),
                    );
                }
                if complete {
                    ui.label(
                        RichText::new("🏆 Done")
                            .small()
                            .color(Color32::from_rgb(16, 185, 129))
                            .strong(),
                    );
                }
            });

            if !expanded {
                ui.add(
                    ProgressBar::new(progress as f32 / 100.0)
                        .desired_height(4.0)
                        .fill(if complete {
                            Color32::from_rgb(16, 185, 129)
                        } else {
                            Color32::from_rgb(99, 102, 241)
                        }),
                );
            } else {
                ui.separator();
                for (index, exercise) in day.exercises.iter().enumerate() {
                    let mark = if exercise.completed { "✔" } else { "○" };
                    let mut text = RichText::new(format!(
                        "{mark}  {}   {} · {}",
                        exercise.name, exercise.sets, exercise.reps
                    ));
                    if exercise.completed {
                        text = text.strikethrough().weak();
                    }
                    if ui.selectable_label(exercise.completed, text).clicked() {
                        *action = Some(Action::ToggleExercise {
                            day_id: day.id.clone(),
                            index,
                        });
                    }
                }
                if complete {
                    ui.label(
                        RichText::new("🎉 Workout Complete! Great job!")
                            .color(Color32::from_rgb(16, 185, 129)),
                    );
                } else if !day.exercises.is_empty() {
                    ui.label(RichText::new("Tap items to check them off").weak().italics());
                }
            }
        });
    }

    fn show_reset_confirm(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset Week?")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to reset all progress for the week?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        self.state.reset_week(|| true);
                        self.confirm_reset = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Strength => "🏋",
        Category::Legs => "🔥",
        Category::Cardio => "🏃",
        Category::Rest => "🌙",
    }
}

fn category_color(category: Category) -> Color32 {
    match category {
        Category::Strength => Color32::from_rgb(59, 130, 246),
        Category::Legs => Color32::from_rgb(16, 185, 129),
        Category::Cardio => Color32::from_rgb(251, 146, 60),
        Category::Rest => Color32::from_rgb(148, 163, 184),
    }
}
