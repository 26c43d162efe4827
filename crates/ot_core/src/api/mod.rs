pub mod json_api;

pub use json_api::{
    run_experiment_json, ExperimentRequest, ExperimentResponse, PlayerData, SweepRequest,
};
