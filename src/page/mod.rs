//! Content Page Module
//!
//! Builds the landing page document tree from a `PageContent` model and
//! manages its mount lifecycle.
//!
//! ## Regions
//! 1. Navigation - fixed bar with in-page anchor links
//! 2. Hero - heading, subheading, two calls to action
//! 3. About - paragraphs and the key stats strip (`#about`)
//! 4. Expertise - skill groups in a 2-column grid (`#expertise`)
//! 5. Process - numbered steps with thin dividers (`#process`)
//! 6. Philosophy - four statement blocks
//! 7. Contact - contact rows and the primary call to action (`#contact`)
//! 8. Footer - attribution

pub mod node;
pub mod sections;
pub mod generator;
pub mod lifecycle;

pub use node::{Element, Node};
pub use generator::PageGenerator;
pub use lifecycle::{ContentPage, Lifecycle, MemoryViewport, ScrollCallback, SubscriptionId, Viewport};
