pub mod robot;
pub mod robot_collision_map_module;
pub mod robot_controller_module;
pub mod robot_joint_state_module;
pub mod robot_model_module;
