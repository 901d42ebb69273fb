pub mod company;
pub mod score;
