pub mod icon;
pub mod pages;
pub mod reveal;
pub mod sections;
pub mod styles;

pub use icon::{Icon, SocialIcon, icons};
pub use pages::{EditionPage, NotFoundPage};
pub use reveal::{RevealScope, use_mount_reveal, use_reveal};
