pub mod echo;
pub mod machine;
pub mod registry;
