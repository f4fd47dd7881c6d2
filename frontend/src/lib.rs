//! chipin frontend library: the six-widget page, its theme, and the mapping
//! from DOM values to page events.

pub mod intents;
pub mod theme;
pub mod tick_loop;

#[cfg(any(feature = "web", feature = "desktop"))]
pub mod app;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod dispatch;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod sections;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod ticker;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod widgets;
