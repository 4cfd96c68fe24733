//! Application state (Model in TEA pattern)

use passgen_core::{score, GeneratorConfig, IndexPolicy, StrengthInfo};

use crate::config::{Settings, TimingSettings};

/// Shown in the password field while a generation is pending
pub const MASKED_PLACEHOLDER: &str = "••••••••••";

/// Frames for the generate button spinner
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Generation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// No generation pending; the password (if any) is displayed
    #[default]
    Idle,
    /// A generation is pending; only a completion carrying `token` lands
    Generating { token: u64 },
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Length,
    Numbers,
    Symbols,
    Generate,
    Copy,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Length,
        Focus::Numbers,
        Focus::Symbols,
        Focus::Generate,
        Focus::Copy,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Lifecycle phase
    pub phase: AppPhase,

    /// Current generation constraints
    pub config: GeneratorConfig,

    /// Index policy handed to every generation
    pub index_policy: IndexPolicy,

    /// Last completed password (empty until the first generation lands)
    pub password: String,

    /// Idle / Generating
    pub generation: GenerationState,

    /// True while the "Copied!" acknowledgement is showing
    pub copied: bool,

    /// Non-fatal clipboard problem to show in the footer
    pub clipboard_notice: Option<String>,

    /// Focused control
    pub focus: Focus,

    /// Generation delay and acknowledgement window
    pub timing: TimingSettings,

    /// Spinner animation frame while generating
    pub spinner_frame: usize,

    last_generation_token: u64,
    last_acknowledgement_token: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            config: settings.initial_config(),
            index_policy: settings.generator.index_policy,
            password: String::new(),
            generation: GenerationState::Idle,
            copied: false,
            clipboard_notice: None,
            focus: Focus::default(),
            timing: settings.timing,
            spinner_frame: 0,
            last_generation_token: 0,
            last_acknowledgement_token: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.generation, GenerationState::Generating { .. })
    }

    /// Text the password field shows: the mask while generating, never the
    /// previous password
    pub fn displayed_password(&self) -> &str {
        if self.is_generating() {
            MASKED_PLACEHOLDER
        } else {
            &self.password
        }
    }

    /// Strength derived from the current config
    pub fn strength(&self) -> StrengthInfo {
        score(&self.config)
    }

    /// The generate button is enabled only while idle
    pub fn can_generate(&self) -> bool {
        !self.is_generating()
    }

    /// The copy button is enabled while idle with something to copy
    pub fn can_copy(&self) -> bool {
        !self.is_generating() && !self.password.is_empty()
    }

    /// Enter `Generating` with a fresh token, superseding any pending one
    pub fn begin_generation(&mut self) -> u64 {
        self.last_generation_token += 1;
        let token = self.last_generation_token;
        self.generation = GenerationState::Generating { token };
        token
    }

    /// Land a generation result. Returns false (and changes nothing) when
    /// `token` is not the pending one.
    pub fn complete_generation(&mut self, token: u64, password: String) -> bool {
        match self.generation {
            GenerationState::Generating { token: pending } if pending == token => {
                self.password = password;
                self.generation = GenerationState::Idle;
                self.spinner_frame = 0;
                true
            }
            _ => false,
        }
    }

    /// Start a new acknowledgement window, superseding any earlier one
    pub fn begin_acknowledgement(&mut self) -> u64 {
        self.last_acknowledgement_token += 1;
        self.last_acknowledgement_token
    }

    /// Clear the acknowledgement and notice if `token` is the latest window
    pub fn expire_acknowledgement(&mut self, token: u64) -> bool {
        if token != self.last_acknowledgement_token {
            return false;
        }
        self.copied = false;
        self.clipboard_notice = None;
        true
    }

    pub fn tick_spinner(&mut self) {
        if self.is_generating() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = AppState::new();
        assert_eq!(state.generation, GenerationState::Idle);
        assert!(state.password.is_empty());
        assert!(!state.copied);
        assert_eq!(state.config.length(), 8);
        assert!(!state.can_copy());
        assert!(state.can_generate());
    }

    #[test]
    fn test_with_settings_applies_generator_defaults() {
        let mut settings = Settings::default();
        settings.generator.length = 30;
        settings.generator.symbols = true;
        settings.generator.index_policy = IndexPolicy::Legacy;

        let state = AppState::with_settings(&settings);

        assert_eq!(state.config.length(), 30);
        assert!(state.config.symbols);
        assert_eq!(state.index_policy, IndexPolicy::Legacy);
    }

    #[test]
    fn test_masked_while_generating_hides_previous_password() {
        let mut state = AppState::new();
        state.password = "previous".to_string();

        state.begin_generation();

        assert_eq!(state.displayed_password(), MASKED_PLACEHOLDER);
        assert!(!state.displayed_password().contains("previous"));
        assert!(!state.can_copy());
        assert!(!state.can_generate());
    }

    #[test]
    fn test_complete_generation_with_current_token() {
        let mut state = AppState::new();
        let token = state.begin_generation();

        assert!(state.complete_generation(token, "abcdefgh".to_string()));
        assert_eq!(state.generation, GenerationState::Idle);
        assert_eq!(state.displayed_password(), "abcdefgh");
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut state = AppState::new();
        let stale = state.begin_generation();
        let fresh = state.begin_generation();

        assert!(!state.complete_generation(stale, "stale---".to_string()));
        assert!(state.is_generating());
        assert!(state.password.is_empty());

        assert!(state.complete_generation(fresh, "fresh---".to_string()));
        assert_eq!(state.password, "fresh---");
    }

    #[test]
    fn test_completion_while_idle_is_ignored() {
        let mut state = AppState::new();
        let token = state.begin_generation();
        state.complete_generation(token, "first---".to_string());

        assert!(!state.complete_generation(token, "second--".to_string()));
        assert_eq!(state.password, "first---");
    }

    #[test]
    fn test_newer_acknowledgement_supersedes_older() {
        let mut state = AppState::new();
        let first = state.begin_acknowledgement();
        state.copied = true;
        let second = state.begin_acknowledgement();

        assert!(!state.expire_acknowledgement(first));
        assert!(state.copied);

        assert!(state.expire_acknowledgement(second));
        assert!(!state.copied);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(Focus::Length.next(), Focus::Numbers);
        assert_eq!(Focus::Copy.next(), Focus::Length);
        assert_eq!(Focus::Length.previous(), Focus::Copy);
        assert_eq!(Focus::Generate.previous(), Focus::Symbols);
    }

    #[test]
    fn test_spinner_only_advances_while_generating() {
        let mut state = AppState::new();
        state.tick_spinner();
        assert_eq!(state.spinner_frame, 0);

        state.begin_generation();
        state.tick_spinner();
        state.tick_spinner();
        assert_eq!(state.spinner_frame, 2);
    }

    #[test]
    fn test_strength_follows_config() {
        let mut state = AppState::new();
        state.config = GeneratorConfig::new(16, true, true);
        assert_eq!(state.strength().label, "Very Strong");
    }
}
