//! UI Components

mod contact;
mod footer;
mod hero;
mod insights;
mod navbar;
mod predict_form;
mod research;
mod results_panel;

pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use insights::InsightsGrid;
pub use navbar::Navbar;
pub use predict_form::PredictForm;
pub use research::ResearchSection;
pub use results_panel::ResultsPanel;
