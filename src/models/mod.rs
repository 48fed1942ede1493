pub mod attraction;
pub mod flag;
pub mod message;
pub mod review;
pub mod text;
