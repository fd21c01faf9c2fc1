pub mod answer;
pub mod category;
pub mod demographics;
pub mod diagnosis;
pub mod report;
pub mod score;
