pub mod fixtures;

pub use fixtures::{MockUpstream, github_releases, spigot_page};
