//! Interactive window for the simulation
//!
//! Polls the keyboard once per frame, runs as many core ticks as the
//! 60 Hz clock says are due and paints the bodies and the status text.

use eframe::egui;
use gravlab_core::{
    check_state, draw_list, status_text, tick, Action, ActionSet, Direction, Params,
    SimulationState, TickClock,
};

const WINDOW_TITLE: &str = "Interactive 3-Body Problem";

const SELECT_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

const KEY_BINDINGS: [(egui::Key, Action); 11] = [
    (egui::Key::P, Action::Pause),
    (egui::Key::O, Action::Resume),
    (egui::Key::R, Action::Reset),
    (egui::Key::ArrowUp, Action::Nudge(Direction::Up)),
    (egui::Key::ArrowDown, Action::Nudge(Direction::Down)),
    (egui::Key::ArrowLeft, Action::Nudge(Direction::Left)),
    (egui::Key::ArrowRight, Action::Nudge(Direction::Right)),
    (egui::Key::W, Action::Move(Direction::Up)),
    (egui::Key::S, Action::Move(Direction::Down)),
    (egui::Key::A, Action::Move(Direction::Left)),
    (egui::Key::D, Action::Move(Direction::Right)),
];

/// Open the window and block until it is closed
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = Params::default();
    let (width, height) = params.viewport;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([width as f32, height as f32])
            .with_resizable(true),
        ..Default::default()
    };

    log::info!("opening {}x{} window", width, height);

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ViewApp::new(params, cc)))),
    )
    .map_err(|e| format!("window initialization failed: {}", e))?;

    Ok(())
}

/// Snapshot of the held keys as core actions
fn poll_actions(ctx: &egui::Context, body_count: usize) -> ActionSet {
    ctx.input(|input| {
        let mut actions = ActionSet::new();
        for (key, action) in KEY_BINDINGS {
            if input.key_down(key) {
                actions.insert(action);
            }
        }
        for (index, key) in SELECT_KEYS.iter().enumerate().take(body_count) {
            if input.key_down(*key) {
                actions.insert(Action::Select(index));
            }
        }
        actions
    })
}

fn to_color32(color: gravlab_core::Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub struct ViewApp {
    state: SimulationState,
    params: Params,
    clock: TickClock,
    reported_invalid: bool,
}

impl ViewApp {
    pub fn new(params: Params, _cc: &eframe::CreationContext<'_>) -> Self {
        let state = SimulationState::reference();
        log::info!("simulation started with {} bodies", state.len());
        Self {
            state,
            params,
            clock: TickClock::default(),
            reported_invalid: false,
        }
    }

    fn advance(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|i| i.stable_dt) as f64;
        let due = self.clock.advance(dt);
        if due == 0 {
            return;
        }

        // One keyboard snapshot serves every tick due this frame
        let actions = poll_actions(ctx, self.state.len());
        let was_paused = self.state.paused;
        let was_selected = self.state.selected();

        for _ in 0..due {
            tick(&mut self.state, &actions, &self.params);
        }

        if self.state.paused != was_paused {
            log::debug!("simulation {}", if self.state.paused { "paused" } else { "resumed" });
        }
        if self.state.selected() != was_selected {
            log::debug!("selected body {}", self.state.selected() + 1);
        }

        // Report each invalid episode once; a reset clears it
        let errors: Vec<_> = check_state(&self.state, &self.params)
            .into_iter()
            .filter(|d| d.is_error())
            .collect();
        if errors.is_empty() {
            self.reported_invalid = false;
        } else if !self.reported_invalid {
            for e in &errors {
                log::warn!("{}", e);
            }
            self.reported_invalid = true;
        }
    }
}

impl eframe::App for ViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                // Map the logical viewport onto the panel, keeping its aspect ratio
                let (width, height) = self.params.viewport;
                let scale = (rect.width() / width as f32).min(rect.height() / height as f32);
                let origin = rect.min;

                for draw in draw_list(&self.state, &self.params) {
                    let min = origin + egui::vec2(draw.x as f32 * scale, draw.y as f32 * scale);
                    let size = draw.size as f32 * scale;
                    painter.rect_filled(
                        egui::Rect::from_min_size(min, egui::vec2(size, size)),
                        0.0,
                        to_color32(draw.color),
                    );
                }

                painter.text(
                    origin + egui::vec2(4.0, 4.0),
                    egui::Align2::LEFT_TOP,
                    status_text(&self.state),
                    egui::FontId::monospace(12.0),
                    egui::Color32::WHITE,
                );
            });

        // The clock only advances while frames keep coming
        ctx.request_repaint();
    }
}
