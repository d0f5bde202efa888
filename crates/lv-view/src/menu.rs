//! Interactive-entity menus and the capability traits the host binds
//! tooltips and click menus through.
//!
//! Each entity kind exposes a fixed menu of named rules.  Selecting one
//! forwards `(rule name, entity id)` to the model's rule-firing mechanism;
//! the view performs no validation and no rollback — an inapplicable rule is
//! the model's to reject or ignore.

use lv_core::{ElevatorId, PersonId};
use lv_model::{elevator::elevator_anchor, person::person_anchor};

// ── Actions ───────────────────────────────────────────────────────────────────

/// The fixed menu for an elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElevatorAction {
    Move,
    MoveDoors,
    ChangeDirection,
    ClearControl,
}

impl ElevatorAction {
    pub const ALL: [ElevatorAction; 4] = [
        ElevatorAction::Move,
        ElevatorAction::MoveDoors,
        ElevatorAction::ChangeDirection,
        ElevatorAction::ClearControl,
    ];

    /// The model-side rule name this menu entry fires.
    pub fn rule_name(self) -> &'static str {
        match self {
            ElevatorAction::Move            => "move",
            ElevatorAction::MoveDoors       => "moveDoors",
            ElevatorAction::ChangeDirection => "changeDirection",
            ElevatorAction::ClearControl    => "clearControl",
        }
    }
}

/// The fixed menu for a person.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PersonAction {
    Wake,
    BoardOrLeave,
    Leave,
}

impl PersonAction {
    pub const ALL: [PersonAction; 3] = [
        PersonAction::Wake,
        PersonAction::BoardOrLeave,
        PersonAction::Leave,
    ];

    pub fn rule_name(self) -> &'static str {
        match self {
            PersonAction::Wake         => "wake",
            PersonAction::BoardOrLeave => "boardOrLeave",
            PersonAction::Leave        => "leave",
        }
    }
}

/// A selected menu entry, ready to forward to the model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Elevator(ElevatorId, ElevatorAction),
    Person(PersonId, PersonAction),
}

impl MenuAction {
    pub fn rule_name(&self) -> &'static str {
        match self {
            MenuAction::Elevator(_, a) => a.rule_name(),
            MenuAction::Person(_, a)   => a.rule_name(),
        }
    }

    /// The entity id the rule is fired against.
    pub fn target(&self) -> u32 {
        match *self {
            MenuAction::Elevator(id, _) => id.0,
            MenuAction::Person(id, _)   => id.0,
        }
    }
}

// ── Capability traits ─────────────────────────────────────────────────────────

/// An entity the host can attach hover behavior (tooltips) to.
pub trait Hoverable {
    /// The stable scene anchor (`elevator-<id>` / `person-<id>`) the hover
    /// target binds to.
    fn anchor_id(&self) -> String;
}

/// A hoverable entity that also carries a click menu.
pub trait MenuBound: Hoverable {
    /// The full, fixed menu for this entity, in display order.
    fn actions(&self) -> Vec<MenuAction>;
}

/// Presentation wrapper for one elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElevatorHandle {
    pub id: ElevatorId,
}

impl Hoverable for ElevatorHandle {
    fn anchor_id(&self) -> String {
        elevator_anchor(self.id)
    }
}

impl MenuBound for ElevatorHandle {
    fn actions(&self) -> Vec<MenuAction> {
        ElevatorAction::ALL
            .iter()
            .map(|&a| MenuAction::Elevator(self.id, a))
            .collect()
    }
}

/// Presentation wrapper for one person.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PersonHandle {
    pub id: PersonId,
}

impl Hoverable for PersonHandle {
    fn anchor_id(&self) -> String {
        person_anchor(self.id)
    }
}

impl MenuBound for PersonHandle {
    fn actions(&self) -> Vec<MenuAction> {
        PersonAction::ALL
            .iter()
            .map(|&a| MenuAction::Person(self.id, a))
            .collect()
    }
}
