pub mod report;
pub mod technician;
pub mod user;

pub use report::Entity as Report;
pub use technician::Entity as Technician;
pub use user::Entity as User;
