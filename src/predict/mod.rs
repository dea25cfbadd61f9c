pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod service;

pub use dtos::{InputSource, PredictRequest, PredictResponse};
pub use errors::{InvalidInput, PredictError};
pub use service::{Prediction, PredictionService};
