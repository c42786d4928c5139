//! Domain models
//!
//! Value-shaped entities plus their create/modify payloads. Entities hold
//! no reference back to any repository; the persistence layer owns the
//! mapping to and from storage records.

mod department;
mod permission;
mod position;
mod role;
mod user;

pub use department::Department;
pub use permission::{Permission, PERMISSION_CATALOG};
pub use position::{CreatePosition, ModifyPosition, Position, PositionStatus, WorkType};
pub use role::{CreateRole, Role, RoleItem};
pub use user::{CreateUser, LoginUser, ModifyUser, User, UserData, UserType};
