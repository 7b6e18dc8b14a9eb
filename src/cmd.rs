use std::sync::Arc;

use druid::{im::Vector, Selector};

use crate::{
    data::{AttendanceChange, Schedule},
    error::Error,
};

// Common

pub const COPY: Selector<String> = Selector::new("app.copy-to-clipboard");
pub const OPEN_EXTERNAL_LINK: Selector<String> = Selector::new("app.open-external-link");

// Schedule document

pub const LOAD_SCHEDULE: Selector = Selector::new("app.load-schedule");
pub const UPDATE_SCHEDULE: Selector<Result<Vector<Schedule>, Error>> =
    Selector::new("app.update-schedule");

// Identity token

pub const LOAD_SECRET: Selector = Selector::new("app.load-secret");
pub const UPDATE_SECRET: Selector<Result<Arc<str>, Error>> = Selector::new("app.update-secret");

// Selection

pub const CHANGE_WEEK: Selector<usize> = Selector::new("app.change-week");
pub const CHANGE_DAY: Selector<usize> = Selector::new("app.change-day");
pub const CHANGE_STAGE: Selector<isize> = Selector::new("app.change-stage");

// Attendance

pub const TOGGLE_ATTENDANCE: Selector<AttendanceChange> = Selector::new("app.toggle-attendance");

// Link sharing

pub const COPY_MOVE_LINK: Selector = Selector::new("app.copy-move-link");
pub const COPY_SHARE_LINK: Selector = Selector::new("app.copy-share-link");
