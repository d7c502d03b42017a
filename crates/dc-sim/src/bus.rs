//! Movement-resolved event wiring.
//!
//! Animation, audio, AI reaction, and scripting all want to know when a
//! movement resolves, completes, or is cut short.  [`MovementBus`] carries
//! those notifications to explicitly registered listeners: each event fires
//! once, listeners in registration order.

use dc_core::{EntityId, Tick};
use dc_move::MovementInterpretation;

/// Easing applied to in-flight animation progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Hermite ease-in-out (`3t² − 2t³`).
    SmoothStep,
    /// Quadratic ease-out; fast start, soft stop.
    EaseOut,
}

impl Easing {
    /// Map raw progress onto eased progress; both ends stay fixed.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// One resolved movement, published as its transit begins.
#[derive(Clone, Debug)]
pub struct MovementResolved {
    pub entity: EntityId,

    pub interpretation: MovementInterpretation,

    /// Tick the transit starts on.
    pub tick: Tick,

    /// Whole-path animation length, in ticks.
    pub duration_ticks: u64,

    pub forced: bool,

    /// `None` animates linearly.
    pub easing: Option<Easing>,
}

/// Callbacks invoked by [`MovementBus::publish`] and the transit driver.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait MovementListener {
    /// A movement resolved and its transit is starting.
    fn on_movement_resolved(&mut self, _event: &MovementResolved) {}

    /// A transit ran to its final checkpoint.
    fn on_movement_completed(&mut self, _entity: EntityId, _tick: Tick) {}

    /// A transit was cut short mid-flight.
    fn on_movement_abandoned(&mut self, _entity: EntityId, _tick: Tick) {}
}

/// Listener registration and fan-out.
#[derive(Default)]
pub struct MovementBus {
    listeners: Vec<Box<dyn MovementListener>>,
}

impl MovementBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.  Listeners fire in registration order.
    pub fn register(&mut self, listener: Box<dyn MovementListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fire `on_movement_resolved` once on every listener.
    pub fn publish(&mut self, event: &MovementResolved) {
        for listener in &mut self.listeners {
            listener.on_movement_resolved(event);
        }
    }

    pub fn publish_completed(&mut self, entity: EntityId, tick: Tick) {
        for listener in &mut self.listeners {
            listener.on_movement_completed(entity, tick);
        }
    }

    pub fn publish_abandoned(&mut self, entity: EntityId, tick: Tick) {
        for listener in &mut self.listeners {
            listener.on_movement_abandoned(entity, tick);
        }
    }
}
