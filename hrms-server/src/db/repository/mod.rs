//! Repository Module
//!
//! Per-entity repositories over the generic CRUD adapter. Each one wires
//! the entity's mapping functions into [`CrudRepository`] and implements
//! the narrow contract the use cases consume; the role repository
//! overrides the paths that touch its owned permission rows.

pub mod generic;

mod department;
mod permission;
mod position;
mod role;
mod user;

pub use department::DepartmentRepository;
pub use generic::CrudRepository;
pub use permission::PermissionRepository;
pub use position::PositionRepository;
pub use role::RoleRepository;
pub use user::UserRepository;

#[cfg(test)]
mod tests;
