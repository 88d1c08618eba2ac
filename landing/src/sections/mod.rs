// Landing page sections
// Developed with 💀 by the NovaGrid web team (c)2026

mod about;
mod footer;
mod layout;
mod nav;
mod section;
mod services;
mod welcome;

pub use about::AboutSection;
pub use footer::Footer;
pub use layout::DefaultLayout;
pub use nav::Nav;
pub use section::{PageSection, SectionTitle};
pub use services::Services;
pub use welcome::Welcome;
