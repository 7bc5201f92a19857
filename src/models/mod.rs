pub mod irradiation;
pub mod month;
pub mod report;
pub mod site;
pub mod sizing;
pub mod wire;
