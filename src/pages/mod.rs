mod not_found;
mod portfolio;

pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
