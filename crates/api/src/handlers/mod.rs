pub mod common;
pub mod health;
pub mod insights;
pub mod users;
pub mod vitals;

pub use health::{health, ready};
pub use insights::{post_aggregate, post_population_insight};
pub use users::{delete_user, get_user, post_users, put_user};
pub use vitals::{delete_vital, get_vitals, post_vitals, put_vital};
