pub mod booking;
pub mod canteen;
pub mod dishes;
pub mod paths;
pub mod rooms;
pub mod snacks;
pub mod tasks;

pub use booking::SlotBoard;
pub use canteen::{best_entry, window_counts, WindowReport};
pub use dishes::top_rated;
pub use paths::CampusMap;
pub use rooms::{assign_rooms, RoomAssignment};
pub use snacks::{Sale, SnackCart};
pub use tasks::{Task, TaskBoard};
