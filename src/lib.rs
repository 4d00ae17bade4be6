
//! Jointspace augments a robot model with tabulated joint-space self-collision
//! checking.  For joint pairs whose mutual self-collision behavior is expensive
//! or hard to model geometrically (e.g., cable-constrained or coupled
//! mechanisms), a precomputed lookup table records which combinations of joint
//! angles are free versus colliding.  Tables are supplied externally as a
//! `<collisionmap>` XML description, bound to a robot model built from URDF,
//! and consulted as a fallback after a general self-collision check reports no
//! collision.

pub mod robot_modules;
pub mod utils;
