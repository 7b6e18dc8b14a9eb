mod config;
mod link;
mod schedule;

use std::sync::Arc;

use druid::{im::Vector, Data, Lens};

pub use crate::data::{
    config::Config,
    link::{move_link, share_link, AppLink},
    schedule::{AttendanceChange, Day, Schedule, ScheduleResponse, Slot, Stage},
};

/// Placeholder title of a schedule that was never named.  Sharing is blocked
/// while the title still has this value.
pub const DEFAULT_TITLE: &str = "Unnamed";

/// Hard cap on the schedule title length, enforced by the title editor.
pub const MAX_TITLE_LEN: usize = 32;

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub config: Config,
    pub schedule: Vector<Schedule>,
    pub selected: Selection,
    pub title: String,
    pub secret: Arc<str>,
    pub flags: Flags,
}

/// Zero-based indices into the nested schedule document.  They are not
/// re-validated when the document changes underneath them; the projection in
/// `current_slots` degrades to an empty list instead.
#[derive(Clone, Copy, Debug, Default, Data, Lens)]
pub struct Selection {
    pub week: usize,
    pub day: usize,
    pub stage: usize,
}

/// Transient UI notices.  The two copied flags auto-clear after a short
/// delay, the missing-title warning clears on the next title edit.
#[derive(Clone, Copy, Debug, Default, Data, Lens)]
pub struct Flags {
    pub move_copied: bool,
    pub share_copied: bool,
    pub missing_title: bool,
}

impl AppState {
    pub fn default_with_config(config: Config) -> Self {
        Self {
            config,
            schedule: Vector::new(),
            selected: Selection::default(),
            title: DEFAULT_TITLE.to_string(),
            secret: "".into(),
            flags: Flags::default(),
        }
    }

    /// Replace the whole schedule document with a freshly fetched one.  The
    /// selection is deliberately left alone, even when it now points past
    /// the end of the new document.
    pub fn set_schedule(&mut self, schedule: Vector<Schedule>) {
        self.schedule = schedule;
    }

    pub fn change_week(&mut self, week: usize) {
        self.selected.week = week;
    }

    pub fn change_day(&mut self, day: usize) {
        self.selected.day = day;
    }

    /// Wrap-around stage selection.  Callers step by exactly ±1 from the
    /// current stage; a jump further past the end still snaps to the first
    /// stage instead of wrapping proportionally.
    pub fn change_stage(&mut self, stage: isize) {
        let count = match self.current_day() {
            Some(day) if !day.stages.is_empty() => day.stages.len(),
            _ => return,
        };
        self.selected.stage = if stage == -1 {
            count - 1
        } else if stage >= count as isize {
            0
        } else {
            stage as usize
        };
    }

    pub fn current_day(&self) -> Option<&Day> {
        self.schedule
            .get(self.selected.week)
            .and_then(|week| week.days.get(self.selected.day))
    }

    pub fn current_stage(&self) -> Option<&Stage> {
        self.current_day()
            .and_then(|day| day.stages.get(self.selected.stage))
    }

    /// Slot list of the currently selected week/day/stage, empty whenever
    /// any of the three indices is out of bounds.
    pub fn current_slots(&self) -> Vector<Slot> {
        self.current_stage()
            .map(|stage| stage.artists.clone())
            .unwrap_or_default()
    }

    /// Start the move flow: raise the copied notice and hand back the link
    /// that goes to the clipboard.
    pub fn begin_move(&mut self) -> String {
        self.flags.move_copied = true;
        move_link(&self.config.origin(), &self.secret)
    }

    /// Start the share flow.  With the title still at its placeholder the
    /// warning is raised instead and nothing is copied.
    pub fn begin_share(&mut self) -> Option<String> {
        if self.title == DEFAULT_TITLE {
            self.flags.missing_title = true;
            return None;
        }
        self.flags.share_copied = true;
        Some(share_link(&self.config.origin(), &self.secret))
    }

    pub fn change_title(&mut self, title: impl Into<String>) {
        self.flags.missing_title = false;
        self.title = title.into();
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn slot(id: &str) -> Slot {
        Slot {
            id: id.into(),
            artist: format!("artist-{id}").into(),
            attendees: Vector::new(),
            attending: false,
            time_start: datetime!(2024-07-05 09:05 UTC),
            time_end: datetime!(2024-07-05 10:00 UTC),
        }
    }

    fn stage(name: &str, slots: &[&str]) -> Stage {
        Stage {
            name: name.into(),
            artists: slots.iter().map(|id| slot(id)).collect(),
        }
    }

    fn day(week_day: &str, stages: Vec<Stage>) -> Day {
        Day {
            date: "2024-07-05".into(),
            week_day: week_day.into(),
            stages: stages.into(),
        }
    }

    fn week(name: &str, days: Vec<Day>) -> Schedule {
        Schedule {
            name: name.into(),
            week_number: 27,
            days: days.into(),
        }
    }

    fn state_with(schedule: Vec<Schedule>) -> AppState {
        let mut state = AppState::default_with_config(Config::default());
        state.set_schedule(schedule.into());
        state
    }

    fn three_stage_state() -> AppState {
        state_with(vec![week(
            "Week 1",
            vec![day(
                "Friday",
                vec![
                    stage("North", &["a"]),
                    stage("Main", &["b"]),
                    stage("South", &["c"]),
                ],
            )],
        )])
    }

    #[test]
    fn week_and_day_are_set_verbatim() {
        let mut state = three_stage_state();
        state.change_week(7);
        state.change_day(3);
        assert_eq!(state.selected.week, 7);
        assert_eq!(state.selected.day, 3);
    }

    #[test]
    fn stage_wraps_backward_from_first() {
        let mut state = three_stage_state();
        state.change_stage(-1);
        assert_eq!(state.selected.stage, 2);
    }

    #[test]
    fn stage_wraps_forward_from_last() {
        let mut state = three_stage_state();
        state.selected.stage = 2;
        state.change_stage(3);
        assert_eq!(state.selected.stage, 0);
    }

    #[test]
    fn stage_steps_within_bounds() {
        let mut state = three_stage_state();
        state.change_stage(1);
        assert_eq!(state.selected.stage, 1);
        state.change_stage(2);
        assert_eq!(state.selected.stage, 2);
    }

    #[test]
    fn stage_jump_past_end_snaps_to_first() {
        // A jump of more than one step does not wrap proportionally.
        let mut state = three_stage_state();
        state.selected.stage = 1;
        state.change_stage(5);
        assert_eq!(state.selected.stage, 0);
    }

    #[test]
    fn stage_change_without_day_is_a_noop() {
        let mut state = state_with(vec![]);
        state.change_stage(-1);
        assert_eq!(state.selected.stage, 0);
    }

    #[test]
    fn projection_follows_selection() {
        let state = three_stage_state();
        assert_eq!(state.current_slots(), state.schedule[0].days[0].stages[0].artists);

        let mut state = three_stage_state();
        state.change_stage(1);
        assert_eq!(&*state.current_slots()[0].id, "b");
    }

    #[test]
    fn projection_is_empty_out_of_bounds() {
        let mut state = three_stage_state();
        state.change_day(9);
        assert!(state.current_slots().is_empty());

        // A refetched document smaller than the selection degrades the same
        // way instead of clamping.
        let mut state = three_stage_state();
        state.selected.stage = 2;
        state.set_schedule(
            vec![week("Week 1", vec![day("Friday", vec![stage("North", &["a"])])])].into(),
        );
        assert!(state.current_slots().is_empty());
    }

    #[test]
    fn share_is_blocked_without_a_title() {
        let mut state = three_stage_state();
        state.secret = "s3cret".into();
        assert_eq!(state.begin_share(), None);
        assert!(state.flags.missing_title);
        assert!(!state.flags.share_copied);
    }

    #[test]
    fn share_copies_link_once_titled() {
        let mut state = three_stage_state();
        state.secret = "s3cret".into();
        state.change_title("Roskilde 2024");
        assert_eq!(
            state.begin_share().as_deref(),
            Some("https://planevent.me/share/s3cret")
        );
        assert!(state.flags.share_copied);
        assert!(!state.flags.missing_title);
    }

    #[test]
    fn move_copies_link_regardless_of_title() {
        let mut state = three_stage_state();
        state.secret = "s3cret".into();
        assert_eq!(state.begin_move(), "https://planevent.me/move/s3cret");
        assert!(state.flags.move_copied);
    }

    #[test]
    fn title_edit_clears_the_warning() {
        let mut state = three_stage_state();
        state.flags.missing_title = true;
        state.change_title("Glasto");
        assert!(!state.flags.missing_title);
        assert_eq!(state.title, "Glasto");
    }

    #[test]
    fn day_selection_round_trip_restores_slots() {
        let mut state = state_with(vec![week(
            "Week 1",
            vec![
                day("Friday", vec![stage("Main", &["a", "b"])]),
                day("Saturday", vec![stage("Main", &["c"])]),
            ],
        )]);

        let original = state.current_slots();
        assert_eq!(original.len(), 2);

        state.change_day(1);
        assert_eq!(&*state.current_slots()[0].id, "c");

        state.change_day(0);
        assert_eq!(state.current_slots(), original);
        assert_eq!(state.current_slots()[0].time_range(), "09:05-10:00");
    }
}
