//! Conference content, page tree, and reveal/stagger logic

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
mod error;
pub mod motion;
pub mod page;
pub mod reveal;
#[cfg(feature = "ssr")]
pub mod site;

pub use catalog::EditionCatalog;
pub use content::*;
pub use error::ContentError;
pub use motion::{Easing, Keyframe, Phase, SectionMotion, StaggerPlan, StaggerSequencer, Transition};
pub use page::*;
pub use reveal::{RevealCoordinator, RevealEvent, RevealState, RootMargin, TriggerOptions};
