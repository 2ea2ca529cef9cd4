//! Best-first path search over the road network

mod astar;
mod path;
mod state;

pub use astar::{find_path, find_paths_one_to_many};
pub use path::RoutePath;
