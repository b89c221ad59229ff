//! The element tree: drawable, hit-testable, event-receiving nodes.
//!
//! Elements are driven top-down by a [`View`]: the host translates raw OS
//! input into the `host` crate's event vocabulary and hands it to the view,
//! which hit-tests and routes. Elements own their state exclusively and hold
//! no parent back-references.
//!
//! The interesting machinery lives in three places:
//! - [`Button`]: one state struct, three release policies
//!   (momentary/toggle/latching) over a two-face [`Deck`]
//! - [`TextBox`]: the editable text box: selection, caret hit-testing,
//!   clipboard, focus, and scroll-into-view over `edit_core` + `layout`
//! - [`View`]: the synchronous dispatcher and focus owner
//!
//! Everything in [`gallery`] is stateless drawing.

mod button;
mod composite;
mod context;
mod element;
pub mod gallery;
mod input;
mod text;
mod view;

pub use button::{Button, ButtonMode};
pub use composite::Deck;
pub use context::{Context, LimitsCtx, Requests};
pub use element::{Element, Value};
pub use input::InputBox;
pub use text::{StaticTextBox, TextBox};
pub use view::View;
