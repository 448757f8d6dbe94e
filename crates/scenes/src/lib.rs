//! Animated 2D scenes rendered by the `ilocos` binary.
//!
//! Every scene implements [`Scene`]: it owns its animation state, reacts to
//! [`SceneInput`] events, advances on timer ticks and describes what to draw
//! as a backend-agnostic [`Frame`] display list.
//!
//! ```text
//!   SceneInput ──▶ handle_input ─┐
//!                                ├─▶ scene state ──▶ frame() ──▶ Frame
//!   timer tick ──▶ tick ─────────┘        ▲
//!                                         │
//!                              CycleState (daynight only)
//! ```
//!
//! The `coast` and `daynight` scenes share the windmill landscape; the latter
//! lights it with a [`daycycle::CycleState`].

mod coast;
mod draw;
mod face;
mod fan;
mod geometry;
mod input;
mod landscape;
mod scene;

use thiserror::Error;

pub use coast::CoastScene;
pub use draw::{Frame, Node, Primitive, Shape, Viewport};
pub use face::FaceScene;
pub use fan::{FanScene, FanVertex};
pub use geometry::{arc, disk_outline, octagon, regular_polygon, samples};
pub use input::{Arrow, Control, MouseButton, ScheduledInput, SceneInput, ScrollDirection};
pub use landscape::{Lighting, Motion};
pub use scene::{Scene, SceneKind};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unknown scene '{0}' (expected one of: fan, face, coast, daynight)")]
    UnknownScene(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Cycle(#[from] daycycle::CycleError),
}
