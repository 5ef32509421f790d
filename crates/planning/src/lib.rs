//! Event planning domain module.
//!
//! Event plans own their checklist and staff roster. Everything here is pure
//! record manipulation; persistence lives in `barmaster-infra` and the
//! cross-event reconciliation lives in `barmaster-logistics`.

pub mod checklist;
pub mod event;
pub mod staff;

pub use checklist::{
    ChecklistCategory, ChecklistItem, PROGRESS_CATEGORIES, PackingProgress, SuggestedItem,
};
pub use event::{DEFAULT_EVENT_TIME, EventDraft, EventPlan, EventStatus, EventType};
pub use staff::{DEFAULT_SHIFT_END, DEFAULT_SHIFT_START, ShiftDraft, StaffRole, StaffShift};
