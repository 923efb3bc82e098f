pub mod commands;
pub mod config;
pub mod error;
pub mod finder;
pub mod http;
pub mod source;

pub use error::{FindError, FindErrorKind};
pub use finder::{AssetFinder, DirectAssetFinder, Finder, GitHubAssetFinder};
