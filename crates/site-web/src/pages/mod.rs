//! Page Components

mod about;
mod ai_agent;
mod contact;
mod home;
mod industries;
mod not_found;
mod regulations;
mod solutions;

pub use about::AboutPage;
pub use ai_agent::AiAgentPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use industries::IndustriesPage;
pub use not_found::NotFoundPage;
pub use regulations::RegulationsPage;
pub use solutions::SolutionsPage;
