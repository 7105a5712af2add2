//! Gadgets domain: the use/cancel/done protocol between a gadget and its owner.

use bevy::prelude::*;

use crate::movement::Facing;

/// A tool that can temporarily take over its owner's movement.
pub trait Gadget {
    /// Start the gadget. Fails without any change unless the gadget is idle.
    fn try_use(&mut self, owner: Entity, origin: Vec2, facing: Facing) -> bool;

    /// Abort the current action. May be refused, in which case nothing changes.
    fn cancel(&mut self) -> bool;

    fn is_idle(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Instructions a gadget sends to its owner, applied in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GadgetSignal {
    /// The gadget is now the only writer of the owner's position.
    SeizeControl,
    MoveOwner(Vec2),
    /// The owner came to rest on dangerous ground.
    HazardLanding { penalty: i32 },
    ReleaseControl,
    /// The action finished on its own. Sent exactly once per use.
    Done,
}
