//! The editor session: input handlers, commands, and persistence hooks.
//!
//! [`Editor`] owns every piece of session state (scene, viewport, gesture,
//! form, and line stroke). The host forwards raw events to the `on_*`
//! handlers and button/menu commands to the named methods; each returns the
//! [`Action`]s the host should carry out, in order. Nothing here touches a
//! DOM or a file system, so the whole session is testable headless.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::io;
use std::time::Instant;

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::autosave::{AutoSaver, SlotStore};
use crate::codec::{self, Case, CodecError, SavedFile};
use crate::config::EditorConfig;
use crate::consts::{
    EVIDENCE_SCATTER_MAX, EVIDENCE_SCATTER_MIN, STEP_ZOOM_IN, STEP_ZOOM_OUT, UNTITLED_CASE_NAME, WHEEL_ZOOM_IN,
    WHEEL_ZOOM_OUT,
};
use crate::evidence::{EvidenceForm, EvidenceId, EvidenceKind};
use crate::hit::{self, Hit};
use crate::image;
use crate::input::{Button, InputState, Key, Mode, Modifiers, UiState, WheelDelta};
use crate::render::{self, Frame, Preview};
use crate::scene::{LineStyle, PinId, Scene, Stroke};
use crate::viewport::{Point, Viewport};

const CURSOR_CROSSHAIR: &str = "crosshair";
const CURSOR_POINTER: &str = "pointer";
const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Pins, lines, or the view changed; redraw the board.
    RenderNeeded,
    StatusChanged(Status),
    /// Cards were added, removed, or retitled; rebuild the evidence list.
    EvidenceListChanged,
    EvidenceCreated(EvidenceId),
    EvidenceUpdated(EvidenceId),
    EvidenceMoved(EvidenceId),
    EvidenceRemoved(EvidenceId),
    /// The highlighted card changed.
    EvidenceSelected(Option<EvidenceId>),
    /// Read the image file chosen in the form and pass the result to
    /// [`Editor::complete_image_read`].
    ReadImage { id: EvidenceId },
    SaveRequested,
    LoadRequested,
    /// Ask the user to confirm discarding the case, then call
    /// `new_case(true)`.
    ConfirmNewCase,
    FormOpened,
    FormClosed,
    /// Show the context menu at this screen position.
    ContextMenuOpened { screen: Point },
    ContextMenuClosed,
    /// A message for the user.
    Notice(String),
    SetCursor(&'static str),
}

/// Values shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub mode: Mode,
    pub zoom_percent: i64,
    pub evidence_count: usize,
    /// World position under the cursor, once the pointer has moved.
    pub position: Option<Point>,
}

impl Status {
    #[must_use]
    pub fn mode_text(&self) -> String {
        format!("Mode: {}", self.mode.label())
    }

    #[must_use]
    pub fn zoom_text(&self) -> String {
        format!("Zoom: {}%", self.zoom_percent)
    }

    #[must_use]
    pub fn evidence_text(&self) -> String {
        format!("Evidence: {}", self.evidence_count)
    }

    #[must_use]
    pub fn position_text(&self) -> Option<String> {
        self.position.map(|p| format!("Position: ({}, {})", p.x.round(), p.y.round()))
    }
}

/// One row of the evidence list.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceListEntry {
    pub id: EvidenceId,
    pub title: String,
    /// e.g. `"photo - high priority"`.
    pub caption: String,
}

/// Editor session state.
#[derive(Debug, Clone)]
pub struct Editor {
    pub scene: Scene,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    pub form: EvidenceForm,
    /// Color and style captured by new lines.
    pub stroke: Stroke,
    pub case_name: String,
    pub case_notes: String,
    pub config: EditorConfig,
    cursor: &'static str,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            input: InputState::default(),
            form: EvidenceForm::default(),
            stroke: Stroke::default(),
            case_name: String::new(),
            case_notes: String::new(),
            config,
            cursor: CURSOR_CROSSHAIR,
        }
    }

    // =============================================================
    // Queries
    // =============================================================

    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            mode: self.ui.mode,
            zoom_percent: self.viewport.zoom_percent(),
            evidence_count: self.scene.evidence().len(),
            position: self.ui.hover_world,
        }
    }

    /// Rows for the evidence side panel, in card order.
    #[must_use]
    pub fn evidence_list(&self) -> Vec<EvidenceListEntry> {
        self.scene
            .evidence()
            .iter()
            .map(|e| EvidenceListEntry { id: e.id, title: e.title.clone(), caption: e.list_caption() })
            .collect()
    }

    /// The pin armed as the start of a line, if any.
    #[must_use]
    pub fn armed_pin(&self) -> Option<PinId> {
        self.input.armed_pin()
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    /// Display list for the current state, including the preview of an
    /// armed line following the cursor.
    #[must_use]
    pub fn render_plan(&self) -> Frame {
        let preview = match (&self.input, self.ui.hover_world) {
            (InputState::DrawingLine { start, pressed_at: None }, Some(to)) => {
                Some(Preview { from: *start, to, stroke: self.stroke.clone() })
            }
            _ => None,
        };
        render::plan(&self.scene, &self.viewport, &self.ui, preview.as_ref())
    }

    // =============================================================
    // Pointer input
    // =============================================================

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        let pans = match button {
            Button::Middle | Button::Secondary => true,
            Button::Primary => modifiers.shift,
        };
        if pans {
            self.input = InputState::Panning { last_screen: screen, resume: self.input.armed_pin() };
            self.set_cursor(CURSOR_GRABBING, &mut actions);
            return actions;
        }

        let world = self.viewport.world_from_screen(screen);
        match self.ui.mode {
            Mode::Delete => self.delete_at(world, &mut actions),
            Mode::Drawing => self.draw_at(screen, world, &mut actions),
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen: Point, _modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        let world = self.viewport.world_from_screen(screen);
        self.ui.hover_world = Some(world);

        match self.input.clone() {
            InputState::Panning { last_screen, resume } => {
                self.viewport.pan(screen.x - last_screen.x, screen.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen, resume };
                actions.push(Action::RenderNeeded);
                actions.push(Action::StatusChanged(self.status()));
                return actions;
            }
            InputState::DrawingLine { start, pressed_at: Some(pressed) } => {
                if screen.distance(pressed) > self.config.drag_threshold_px {
                    debug!(pin = %start, "press became a drag");
                    self.input = InputState::DraggingPin { id: start };
                    self.scene.move_pin(start, world);
                }
                actions.push(Action::RenderNeeded);
            }
            InputState::DrawingLine { pressed_at: None, .. } => {
                // Preview line follows the cursor.
                actions.push(Action::RenderNeeded);
            }
            InputState::DraggingPin { id } => {
                self.scene.move_pin(id, world);
                actions.push(Action::RenderNeeded);
            }
            InputState::DraggingEvidence { id, start_screen, orig_x, orig_y } => {
                let zoom = self.viewport.zoom;
                let to = Point::new(
                    orig_x + (screen.x - start_screen.x) / zoom,
                    orig_y + (screen.y - start_screen.y) / zoom,
                );
                if self.scene.move_evidence(id, to) {
                    actions.push(Action::EvidenceMoved(id));
                }
            }
            InputState::Idle => {}
        }

        let over_pin = hit::find_pin_near(&self.scene, &self.viewport, world, &self.config.hit).is_some();
        self.set_cursor(if over_pin { CURSOR_POINTER } else { CURSOR_CROSSHAIR }, &mut actions);
        actions.push(Action::StatusChanged(self.status()));
        actions
    }

    pub fn on_pointer_up(&mut self, _screen: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.input {
            InputState::Panning { resume, .. } => {
                self.input = match resume {
                    Some(start) if self.scene.pin(start).is_some() => {
                        InputState::DrawingLine { start, pressed_at: None }
                    }
                    _ => InputState::Idle,
                };
                self.set_cursor(CURSOR_CROSSHAIR, &mut actions);
            }
            InputState::DrawingLine { start, pressed_at: Some(_) } => {
                self.input = InputState::DrawingLine { start, pressed_at: None };
            }
            InputState::DraggingPin { .. } => {
                self.input = InputState::Idle;
                actions.push(Action::RenderNeeded);
            }
            InputState::DraggingEvidence { .. } => {
                self.input = InputState::Idle;
            }
            InputState::DrawingLine { pressed_at: None, .. } | InputState::Idle => {}
        }
        actions
    }

    /// Scroll up zooms in, scroll down zooms out, whatever gesture is active.
    pub fn on_wheel(&mut self, _screen: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if delta.dy < 0.0 {
            self.viewport.zoom_by(WHEEL_ZOOM_IN);
        } else if delta.dy > 0.0 {
            self.viewport.zoom_by(WHEEL_ZOOM_OUT);
        } else {
            return Vec::new();
        }
        self.view_changed()
    }

    fn delete_at(&mut self, world: Point, actions: &mut Vec<Action>) {
        match hit::hit_test(&self.scene, &self.viewport, world, &self.config.hit) {
            Some(Hit::Pin(id)) => {
                if let Some(removed) = self.scene.remove_pin(id) {
                    info!(pin = %id, lines = removed.lines.len(), "deleted pin");
                    self.forget_pin(id);
                    actions.extend(self.view_changed());
                }
            }
            Some(Hit::Line(id)) => {
                if self.scene.remove_line(id).is_some() {
                    info!(line = %id, "deleted line");
                    actions.extend(self.view_changed());
                }
            }
            None => {}
        }
    }

    fn draw_at(&mut self, screen: Point, world: Point, actions: &mut Vec<Action>) {
        let armed = self.input.armed_pin();
        match hit::find_pin_near(&self.scene, &self.viewport, world, &self.config.hit) {
            Some(target) => match armed {
                Some(start) if start != target => {
                    match self.scene.add_line(start, target, &self.stroke) {
                        Ok(id) => debug!(line = %id, %start, end = %target, "line created"),
                        Err(e) => warn!(error = %e, "could not complete line"),
                    }
                    self.input = InputState::Idle;
                    self.ui.selected_pin = None;
                }
                _ => {
                    self.ui.selected_pin = Some(target);
                    self.input = InputState::DrawingLine { start: target, pressed_at: Some(screen) };
                }
            },
            None => {
                let id = self.scene.add_pin(world);
                self.ui.selected_pin = Some(id);
                self.input = InputState::DrawingLine { start: id, pressed_at: Some(screen) };
            }
        }
        actions.extend(self.view_changed());
    }

    // =============================================================
    // Evidence cards
    // =============================================================

    /// A press on a card selects it and starts dragging it.
    pub fn on_evidence_pointer_down(&mut self, id: EvidenceId, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(card) = self.scene.card(id) else {
            return Vec::new();
        };
        self.input = InputState::DraggingEvidence { id, start_screen: screen, orig_x: card.x, orig_y: card.y };
        self.ui.selected_evidence = Some(id);
        vec![Action::EvidenceSelected(Some(id))]
    }

    pub fn on_evidence_double_click(&mut self, id: EvidenceId) -> Vec<Action> {
        self.open_edit_form(id)
    }

    /// Highlight a card picked from the evidence list.
    pub fn select_evidence(&mut self, id: EvidenceId) -> Vec<Action> {
        if self.scene.card(id).is_none() {
            return Vec::new();
        }
        self.ui.selected_evidence = Some(id);
        vec![Action::EvidenceSelected(Some(id))]
    }

    /// Open the form for a new card. `position` comes from the context menu;
    /// without it the card lands at a random spot when submitted.
    pub fn open_evidence_form(&mut self, kind: EvidenceKind, position: Option<Point>) -> Vec<Action> {
        self.form.open_new(kind, position);
        vec![Action::FormOpened]
    }

    /// Open the form pre-filled from an existing card.
    pub fn open_edit_form(&mut self, id: EvidenceId) -> Vec<Action> {
        let Some(card) = self.scene.card(id) else {
            return Vec::new();
        };
        self.form.open_edit(card);
        vec![Action::FormOpened]
    }

    pub fn cancel_evidence_form(&mut self) -> Vec<Action> {
        if !self.form.open {
            return Vec::new();
        }
        self.form.close();
        vec![Action::FormClosed]
    }

    /// Apply the form as a new card or an update.
    ///
    /// A blank title leaves everything (including the open form) as it was and
    /// returns a notice. When an image was chosen the text fields are applied
    /// now and a [`Action::ReadImage`] request follows.
    pub fn submit_evidence_form(&mut self) -> Vec<Action> {
        if !self.form.open {
            return Vec::new();
        }
        if let Err(e) = self.form.draft.validate() {
            return vec![Action::Notice(e.to_string())];
        }

        let draft = self.form.draft.clone();
        let wants_image = self.form.wants_image;
        let mut actions = Vec::new();
        let result = match self.form.editing {
            Some(id) => self.scene.update_evidence(id, draft).map(|()| {
                actions.push(Action::EvidenceUpdated(id));
                id
            }),
            None => {
                let at = self.form.position.unwrap_or_else(scatter_position);
                self.scene.add_evidence(draft, at).map(|id| {
                    actions.push(Action::EvidenceCreated(id));
                    id
                })
            }
        };

        match result {
            Ok(id) => {
                actions.push(Action::EvidenceListChanged);
                actions.push(Action::StatusChanged(self.status()));
                if wants_image {
                    actions.push(Action::ReadImage { id });
                }
            }
            Err(e) => {
                warn!(error = %e, "evidence form could not be applied");
                actions.push(Action::Notice(e.to_string()));
            }
        }
        self.form.close();
        actions.push(Action::FormClosed);
        actions
    }

    /// Finish an image read requested by [`Action::ReadImage`].
    ///
    /// The card may have been deleted while the read was in flight; that is
    /// a no-op. A failed read leaves the card without an image.
    pub fn complete_image_read(&mut self, id: EvidenceId, result: Result<Vec<u8>, io::Error>) -> Vec<Action> {
        if self.scene.card(id).is_none() {
            debug!(evidence = %id, "image read finished for a card that no longer exists");
            return Vec::new();
        }
        match result {
            Ok(bytes) => {
                self.scene.set_evidence_image(id, Some(image::data_url(&bytes, None)));
                vec![Action::EvidenceUpdated(id)]
            }
            Err(e) => {
                warn!(error = %e, evidence = %id, "failed to read evidence image");
                vec![Action::Notice(format!("Could not read the image file: {e}"))]
            }
        }
    }

    // =============================================================
    // Context menu
    // =============================================================

    pub fn on_context_menu(&mut self, screen: Point) -> Vec<Action> {
        self.ui.context_world = Some(self.viewport.world_from_screen(screen));
        vec![Action::ContextMenuOpened { screen }]
    }

    pub fn close_context_menu(&mut self) -> Vec<Action> {
        if self.ui.context_world.take().is_none() {
            return Vec::new();
        }
        vec![Action::ContextMenuClosed]
    }

    /// "Add point here": a pin at the menu position, not armed.
    pub fn context_add_pin(&mut self) -> Vec<Action> {
        let Some(world) = self.ui.context_world.take() else {
            return Vec::new();
        };
        self.scene.add_pin(world);
        let mut actions = vec![Action::ContextMenuClosed];
        actions.extend(self.view_changed());
        actions
    }

    /// "Add evidence here" / "Add note here".
    pub fn context_add_evidence(&mut self, kind: EvidenceKind) -> Vec<Action> {
        let Some(world) = self.ui.context_world.take() else {
            return Vec::new();
        };
        let mut actions = vec![Action::ContextMenuClosed];
        actions.extend(self.open_evidence_form(kind, Some(world)));
        actions
    }

    // =============================================================
    // Keyboard
    // =============================================================

    /// Dispatch a shortcut. Keys typed into a text field are ignored.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, text_input_focused: bool) -> Vec<Action> {
        if text_input_focused {
            return Vec::new();
        }
        match key.0.to_lowercase().as_str() {
            "n" if modifiers.ctrl => self.new_case(false),
            "s" if modifiers.ctrl => vec![Action::SaveRequested],
            "o" if modifiers.ctrl => vec![Action::LoadRequested],
            "n" | "s" | "o" => Vec::new(),
            "e" => self.open_evidence_form(EvidenceKind::Document, None),
            "p" => self.open_evidence_form(EvidenceKind::Photo, None),
            "t" => self.open_evidence_form(EvidenceKind::Note, None),
            "d" => self.toggle_delete_mode(),
            "delete" | "backspace" => self.delete_selected(),
            "escape" => self.cancel(),
            "+" | "=" => self.zoom_in(),
            "-" => self.zoom_out(),
            "0" => self.reset_view(),
            _ => Vec::new(),
        }
    }

    // =============================================================
    // Commands
    // =============================================================

    pub fn toggle_delete_mode(&mut self) -> Vec<Action> {
        self.ui.mode = self.ui.mode.toggled();
        vec![Action::StatusChanged(self.status())]
    }

    /// Drop the selection and any armed line or drag, and close the form and
    /// context menu.
    pub fn cancel(&mut self) -> Vec<Action> {
        self.ui.selected_pin = None;
        self.ui.selected_evidence = None;
        self.input = InputState::Idle;
        let mut actions = vec![Action::EvidenceSelected(None)];
        self.set_cursor(CURSOR_CROSSHAIR, &mut actions);
        actions.extend(self.close_context_menu());
        actions.extend(self.cancel_evidence_form());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Delete the selected pin (with its lines) and the selected card.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(id) = self.ui.selected_pin.take() {
            if self.scene.remove_pin(id).is_some() {
                self.forget_pin(id);
                actions.push(Action::RenderNeeded);
            }
        }
        if let Some(id) = self.ui.selected_evidence.take() {
            if self.scene.remove_evidence(id).is_some() {
                actions.push(Action::EvidenceRemoved(id));
                actions.push(Action::EvidenceListChanged);
            }
        }
        if !actions.is_empty() {
            actions.push(Action::StatusChanged(self.status()));
        }
        actions
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.viewport.zoom_by(STEP_ZOOM_IN);
        self.view_changed()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.viewport.zoom_by(STEP_ZOOM_OUT);
        self.view_changed()
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.viewport.reset();
        self.view_changed()
    }

    pub fn set_line_color(&mut self, color: &str) {
        self.stroke.color = color.to_string();
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.stroke.style = style;
    }

    pub fn set_pin_label(&mut self, id: PinId, label: &str) -> Vec<Action> {
        if !self.scene.set_pin_label(id, label) {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }

    /// Start over. Without `force` this only asks the host for confirmation.
    pub fn new_case(&mut self, force: bool) -> Vec<Action> {
        if !force {
            return vec![Action::ConfirmNewCase];
        }
        let mut actions = Vec::new();
        actions.extend(self.close_context_menu());
        actions.extend(self.cancel_evidence_form());
        self.reset_session();
        actions.push(Action::EvidenceListChanged);
        actions.extend(self.view_changed());
        actions
    }

    fn reset_session(&mut self) {
        self.scene.clear();
        self.viewport.reset();
        self.input = InputState::Idle;
        self.form = EvidenceForm::default();
        self.ui = UiState { hover_world: self.ui.hover_world, ..UiState::default() };
        self.case_name.clear();
        self.case_notes.clear();
    }

    // =============================================================
    // Persistence
    // =============================================================

    /// The session as a case, stamped with `timestamp`.
    #[must_use]
    pub fn snapshot_case(&self, timestamp: String) -> Case {
        Case {
            name: self.case_name.clone(),
            notes: self.case_notes.clone(),
            pins: self.scene.pins().to_vec(),
            lines: self.scene.lines().to_vec(),
            evidence: self.scene.evidence().to_vec(),
            viewport: self.viewport,
            timestamp,
        }
    }

    /// Build the obfuscated download for the session, saved at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Serialize`] if the case cannot be serialized.
    pub fn save_file(&self, now: OffsetDateTime) -> Result<SavedFile, CodecError> {
        let mut case = self.snapshot_case(codec::iso_timestamp(now));
        if case.name.is_empty() {
            case.name = UNTITLED_CASE_NAME.to_string();
        }
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let saved = codec::save_file(&case, millis)?;
        info!(file = %saved.file_name, pins = case.pins.len(), evidence = case.evidence.len(), "case saved");
        Ok(saved)
    }

    /// Replace the session with the case in `raw`. On error the session is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] from decoding.
    pub fn load_file(&mut self, raw: &str) -> Result<Vec<Action>, CodecError> {
        let case = codec::decode_case(raw).inspect_err(|e| warn!(error = %e, "failed to load case file"))?;
        Ok(self.apply_case(case))
    }

    /// Replace the session with `case` (a loaded file or a restored snapshot).
    pub fn apply_case(&mut self, case: Case) -> Vec<Action> {
        let mut actions = Vec::new();
        actions.extend(self.close_context_menu());
        actions.extend(self.cancel_evidence_form());
        self.reset_session();
        let dropped = self.scene.replace(case.pins, case.lines, case.evidence);
        self.viewport = case.viewport;
        self.case_name = case.name;
        self.case_notes = case.notes;
        info!(
            pins = self.scene.pins().len(),
            lines = self.scene.lines().len(),
            evidence = self.scene.evidence().len(),
            dropped,
            "case loaded"
        );
        actions.push(Action::EvidenceListChanged);
        actions.extend(self.view_changed());
        actions
    }

    /// Run one auto-save tick at `now`. Returns whether a snapshot was written.
    pub fn autosave(&self, saver: &mut AutoSaver, now: Instant, store: &mut dyn SlotStore) -> bool {
        if !saver.due(now) {
            return false;
        }
        let case = self.snapshot_case(codec::iso_timestamp(OffsetDateTime::now_utc()));
        saver.save_logged(store, &case)
    }

    // =============================================================
    // Helpers
    // =============================================================

    fn view_changed(&self) -> Vec<Action> {
        vec![Action::RenderNeeded, Action::StatusChanged(self.status())]
    }

    /// Clear references to a pin that no longer exists.
    fn forget_pin(&mut self, id: PinId) {
        if self.ui.selected_pin == Some(id) {
            self.ui.selected_pin = None;
        }
        match self.input {
            InputState::DrawingLine { start, .. } | InputState::DraggingPin { id: start } if start == id => {
                self.input = InputState::Idle;
            }
            InputState::Panning { last_screen, resume: Some(start) } if start == id => {
                self.input = InputState::Panning { last_screen, resume: None };
            }
            _ => {}
        }
    }

    fn set_cursor(&mut self, cursor: &'static str, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
    }
}

/// Random spot for a card created without a position.
fn scatter_position() -> Point {
    let mut rng = rand::rng();
    Point::new(
        rng.random_range(EVIDENCE_SCATTER_MIN..EVIDENCE_SCATTER_MAX),
        rng.random_range(EVIDENCE_SCATTER_MIN..EVIDENCE_SCATTER_MAX),
    )
}
