//! Application state and per-frame effect advancement.
//!
//! `App` owns the list, the draft input, and all in-flight animation state.
//! Animations are advanced by wall-clock frame deltas in [`App::tick`];
//! tests drive [`App::advance_effects`] directly with explicit durations.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::debug;

use questlog_types::ui::{DraftInput, EffectTimer, InputMode, MeterAnim, Transition, TransitionKind, UiOptions};
use questlog_types::{
    ItemId, SubmitOutcome, TodoList, ToggleOutcome, Variant, XpGain, XpMeter,
};

use crate::theme::Theme;

const XP_FILL_DURATION: Duration = Duration::from_millis(800);
const LEVEL_UP_BANNER_DURATION: Duration = Duration::from_millis(1500);

/// Random decoration picked once when a playful item is created.
#[derive(Debug, Clone, Copy)]
pub struct Decor {
    pub accent: usize,
    pub emblem: usize,
}

pub struct App {
    list: TodoList,
    theme: Theme,
    options: UiOptions,

    draft: DraftInput,
    mode: InputMode,
    selected: usize,
    scroll_offset: usize,

    /// In-flight item transitions, keyed by item id. At most one per item.
    transitions: HashMap<ItemId, Transition>,
    /// Playful per-item decoration. Lives and dies with the item.
    decor: HashMap<ItemId, Decor>,
    /// Shake applied to the input box on a rejected submission.
    input_effect: Option<Transition>,

    xp: XpMeter,
    xp_anim: Option<MeterAnim>,
    xp_display: f32,
    level_up: Option<EffectTimer>,

    status: Option<String>,
    tick: usize,
    last_frame: Instant,
    list_viewport: Rect,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(variant: Variant, options: UiOptions) -> Self {
        let theme = Theme::resolve(variant, options);
        Self {
            list: TodoList::new(variant.policy()),
            theme,
            options,
            draft: DraftInput::default(),
            mode: InputMode::default(),
            selected: 0,
            scroll_offset: 0,
            transitions: HashMap::new(),
            decor: HashMap::new(),
            input_effect: None,
            xp: XpMeter::new(),
            xp_anim: None,
            xp_display: 0.0,
            level_up: None,
            status: None,
            tick: 0,
            last_frame: Instant::now(),
            list_viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Submit the current draft text as a new item.
    ///
    /// The draft is cleared only when the list accepts it; a rejected
    /// submission leaves the typed text in place.
    pub fn submit_draft(&mut self) {
        match self.list.submit(self.draft.text()) {
            SubmitOutcome::Added(id) => {
                debug!(%id, "item added");
                self.draft.clear();
                self.transitions.insert(id, Transition::appear());
                if self.theme.random_accents {
                    self.decor.insert(
                        id,
                        Decor {
                            accent: rand::random_range(0..self.theme.accent_count()),
                            emblem: rand::random_range(0..self.theme.emblem_count()),
                        },
                    );
                }
                if self.theme.show_status_strip {
                    let gain = self.xp.note_submit();
                    self.apply_xp_gain(gain);
                }
                self.selected = self.list.len() - 1;
                self.update_scroll();
                self.status = None;
            }
            SubmitOutcome::Rejected => {
                debug!("empty submission rejected");
                if self.theme.shake_input_on_reject {
                    self.input_effect = Some(Transition::reject());
                }
                self.status = Some(String::from("Cannot add an empty entry"));
            }
        }
    }

    /// Toggle the item under the selection cursor.
    pub fn toggle_selected(&mut self) {
        let Some(item) = self.list.items().get(self.selected) else {
            return;
        };
        self.toggle_id(item.id());
    }

    /// Toggle by id, applying the variant's completion policy.
    pub fn toggle_id(&mut self, id: ItemId) {
        match self.list.toggle(id) {
            ToggleOutcome::Toggled { completed, .. } => {
                debug!(%id, completed, "item toggled");
                self.status = None;
            }
            ToggleOutcome::Completing(id) => {
                debug!(%id, "item completing");
                self.transitions.insert(id, Transition::complete());
                if self.theme.show_status_strip {
                    let gain = self.xp.note_completion();
                    self.apply_xp_gain(gain);
                }
            }
            // Already animating out; a second tap must not schedule a
            // second removal.
            ToggleOutcome::AlreadyCompleting(_) | ToggleOutcome::NotFound => {}
        }
    }

    fn apply_xp_gain(&mut self, gain: XpGain) {
        match gain {
            XpGain::Gained => {
                self.xp_anim = Some(MeterAnim::new(
                    self.xp_display,
                    self.xp.progress(),
                    XP_FILL_DURATION,
                ));
            }
            XpGain::LeveledUp { new_level } => {
                debug!(new_level, "level up");
                self.xp_display = 0.0;
                self.xp_anim = None;
                self.level_up = Some(EffectTimer::new(LEVEL_UP_BANNER_DURATION));
                self.status = Some(format!("LEVEL UP! You reached level {new_level}"));
            }
        }
    }

    /// Interpret a mouse press as a tap on a list row.
    pub fn click(&mut self, column: u16, row: u16) {
        let area = self.list_viewport;
        if area.width == 0 || !area.contains(ratatui::layout::Position { x: column, y: row }) {
            return;
        }
        let index = self.scroll_offset + usize::from(row - area.y);
        if let Some(item) = self.list.items().get(index) {
            self.selected = index;
            self.toggle_id(item.id());
        }
    }

    /// Advance one frame using wall-clock time.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.tick = self.tick.wrapping_add(1);
        self.advance_effects(delta);
    }

    /// Advance every in-flight effect by `delta`.
    ///
    /// Finished `Complete` transitions remove their item here; this is the
    /// only path that removes items, with or without reduced motion.
    pub fn advance_effects(&mut self, delta: Duration) {
        let mut finished: Vec<(ItemId, TransitionKind)> = Vec::new();
        for (id, transition) in &mut self.transitions {
            transition.advance(delta);
            if transition.is_finished() {
                finished.push((*id, transition.kind()));
            }
        }
        for (id, kind) in finished {
            self.transitions.remove(&id);
            if kind == TransitionKind::Complete {
                self.list.remove(id);
                self.decor.remove(&id);
            }
        }

        if let Some(effect) = &mut self.input_effect {
            effect.advance(delta);
            if effect.is_finished() {
                self.input_effect = None;
            }
        }

        if let Some(anim) = &mut self.xp_anim {
            anim.advance(delta);
            self.xp_display = anim.value();
            if anim.is_finished() {
                self.xp_anim = None;
            }
        }

        if let Some(timer) = &mut self.level_up {
            timer.advance(delta);
            if timer.is_finished() {
                self.level_up = None;
            }
        }

        if self.selected >= self.list.len() {
            self.selected = self.list.len().saturating_sub(1);
        }
        self.update_scroll();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
            self.update_scroll();
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.update_scroll();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.update_scroll();
    }

    pub fn select_last(&mut self) {
        self.selected = self.list.len().saturating_sub(1);
        self.update_scroll();
    }

    fn update_scroll(&mut self) {
        let height = usize::from(self.list_viewport.height);
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
        let max_offset = self.list.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Stores where the list rows were drawn, for mouse hit-testing.
    pub(crate) fn set_list_viewport(&mut self, area: Rect) {
        self.list_viewport = area;
        self.update_scroll();
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftInput {
        &mut self.draft
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[must_use]
    pub fn transition(&self, id: ItemId) -> Option<&Transition> {
        self.transitions.get(&id)
    }

    #[must_use]
    pub fn decor(&self, id: ItemId) -> Option<Decor> {
        self.decor.get(&id).copied()
    }

    #[must_use]
    pub fn input_effect(&self) -> Option<&Transition> {
        self.input_effect.as_ref()
    }

    #[must_use]
    pub fn xp(&self) -> &XpMeter {
        &self.xp
    }

    /// Eased XP bar fill currently on screen.
    #[must_use]
    pub fn xp_display(&self) -> f32 {
        self.xp_display
    }

    #[must_use]
    pub fn level_up_active(&self) -> bool {
        self.level_up.is_some()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn frame_tick(&self) -> usize {
        self.tick
    }
}
