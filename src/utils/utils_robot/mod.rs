pub mod joint;
pub mod link;
