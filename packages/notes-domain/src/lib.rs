pub mod body;
pub mod id;
pub mod search;
