mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod nav_bar;
mod projects;
mod reveal;
mod scene;
mod stack;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use icons::{
    feature_glyph, IconClose, IconGithub, IconLinkedin, IconMail, IconMenu, IconRocket,
    IconSparkles,
};
pub use nav_bar::{MenuState, NavBar};
pub use projects::ProjectsSection;
pub use reveal::Reveal;
pub use scene::SceneEmbed;
pub use stack::StackSection;
